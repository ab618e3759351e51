use bridge_models::constants::chains::ChainId;
use bridge_models::constants::tokens::{
    is_arbitrum_one_native_usdc, is_arbitrum_sepolia_native_usdc, native_usdc_address,
};
use bridge_models::models::balances::{BalanceSnapshot, Balances};
use bridge_models::models::native_currency::NativeCurrency;
use bridge_models::models::token::SelectedToken;

use crate::networks::NetworksRelationship;

/// Resolves the balance pair for the current selection: the token path when
/// a token is selected, the native-currency path otherwise.
pub fn resolve_balances(
    selected_token: Option<&SelectedToken>,
    snapshot: &BalanceSnapshot,
    native_currency: &NativeCurrency,
    relationship: &NetworksRelationship,
) -> Balances {
    match selected_token {
        Some(_) => resolve_selected_token_balances(selected_token, snapshot, relationship),
        None => resolve_native_currency_balances(
            snapshot,
            native_currency,
            relationship.is_deposit_mode,
        ),
    }
}

pub fn resolve_selected_token_balances(
    selected_token: Option<&SelectedToken>,
    snapshot: &BalanceSnapshot,
    relationship: &NetworksRelationship,
) -> Balances {
    let Some(token) = selected_token else {
        return Balances::default();
    };
    let Some(parent_balances) = &snapshot.erc20_parent_balances else {
        return Balances::default();
    };
    let Some(child_balances) = &snapshot.erc20_child_balances else {
        return Balances::default();
    };

    let mut parent_balance = parent_balances.get(&token.address.to_lowercase()).copied();

    // A bridged token with no snapshot entry yet reads as zero, and an
    // unbridged token cannot have a child balance by construction.
    let mut child_balance = match &token.l2_address {
        Some(l2_address) => Some(
            child_balances
                .get(&l2_address.to_lowercase())
                .copied()
                .unwrap_or(0),
        ),
        None => Some(0),
    };

    // Native USDC and its bridged representation live at different contract
    // addresses. On the two CCTP-enabled pairs the parent side must be read
    // from the canonical parent-chain USDC and the child side from the
    // native USDC contract itself.
    if is_arbitrum_one_native_usdc(&token.address) && relationship.is_ethereum_arbitrum_one_pair()
    {
        parent_balance = native_usdc_address(ChainId::Ethereum)
            .and_then(|address| parent_balances.get(address).copied());
        child_balance = child_balances.get(&token.address.to_lowercase()).copied();
    }
    if is_arbitrum_sepolia_native_usdc(&token.address)
        && relationship.is_sepolia_arbitrum_sepolia_pair()
    {
        parent_balance = native_usdc_address(ChainId::Sepolia)
            .and_then(|address| parent_balances.get(address).copied());
        child_balance = child_balances.get(&token.address.to_lowercase()).copied();
    }

    map_by_direction(parent_balance, child_balance, relationship.is_deposit_mode)
}

pub fn resolve_native_currency_balances(
    snapshot: &BalanceSnapshot,
    native_currency: &NativeCurrency,
    is_deposit_mode: bool,
) -> Balances {
    if !native_currency.is_custom {
        return map_by_direction(
            snapshot.eth_parent_balance,
            snapshot.eth_child_balance,
            is_deposit_mode,
        );
    }

    let fee_token_parent_balance = native_currency.address.as_deref().and_then(|address| {
        snapshot
            .erc20_parent_balances
            .as_ref()?
            .get(&address.to_lowercase())
            .copied()
    });

    // The child chain reports the fee token through its native balance slot
    map_by_direction(
        fee_token_parent_balance,
        snapshot.eth_child_balance,
        is_deposit_mode,
    )
}

fn map_by_direction(
    parent_balance: Option<u128>,
    child_balance: Option<u128>,
    is_deposit_mode: bool,
) -> Balances {
    if is_deposit_mode {
        Balances {
            source_balance: parent_balance,
            destination_balance: child_balance,
        }
    } else {
        Balances {
            source_balance: child_balance,
            destination_balance: parent_balance,
        }
    }
}
