use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::chains::ChainId;

pub const DEFAULT_NATIVE_CURRENCY_SYMBOL: &str = "ETH";
pub const DEFAULT_NATIVE_CURRENCY_DECIMALS: u8 = 18;

/// XAI fee token contract on Arbitrum One, lowercased.
pub const XAI_FEE_TOKEN_ADDRESS: &str = "0x4cb9a7ae498cedcbb5eae9f25736ae7d428c9d66";

/// Gas-paying asset of a chain.
///
/// `is_custom` means gas is paid in an ERC-20 token rather than the chain's
/// base asset; `address` is then the fee token's contract on the parent
/// chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub is_custom: bool,
    pub symbol: String,
    pub decimals: u8,
    pub address: Option<String>,
}

struct CustomFeeTokenConfig {
    symbol: &'static str,
    decimals: u8,
    address: &'static str,
}

static CUSTOM_FEE_TOKENS: Lazy<HashMap<ChainId, CustomFeeTokenConfig>> = Lazy::new(|| {
    HashMap::from([(
        ChainId::Xai,
        CustomFeeTokenConfig {
            symbol: "XAI",
            decimals: 18,
            address: XAI_FEE_TOKEN_ADDRESS,
        },
    )])
});

impl NativeCurrency {
    /// Classifies the gas currency of `chain_id`. Chains with no registered
    /// custom-fee-token entry fall back to the base-asset default, this
    /// never fails.
    pub fn for_chain(chain_id: ChainId) -> NativeCurrency {
        match CUSTOM_FEE_TOKENS.get(&chain_id) {
            Some(config) => NativeCurrency {
                is_custom: true,
                symbol: config.symbol.to_string(),
                decimals: config.decimals,
                address: Some(config.address.to_string()),
            },
            None => NativeCurrency::ether(),
        }
    }

    pub fn ether() -> NativeCurrency {
        NativeCurrency {
            is_custom: false,
            symbol: DEFAULT_NATIVE_CURRENCY_SYMBOL.to_string(),
            decimals: DEFAULT_NATIVE_CURRENCY_DECIMALS,
            address: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_chains_use_ether() {
        for chain_id in [
            ChainId::Ethereum,
            ChainId::Sepolia,
            ChainId::ArbitrumOne,
            ChainId::ArbitrumNova,
            ChainId::ArbitrumSepolia,
        ] {
            let native_currency = NativeCurrency::for_chain(chain_id);
            assert!(!native_currency.is_custom, "{chain_id} should not be custom");
            assert_eq!(native_currency.symbol, "ETH");
            assert_eq!(native_currency.decimals, 18);
            assert_eq!(native_currency.address, None);
        }
    }

    #[test]
    fn test_custom_fee_token_chain() {
        let native_currency = NativeCurrency::for_chain(ChainId::Xai);

        assert!(native_currency.is_custom);
        assert_eq!(native_currency.symbol, "XAI");
        assert_eq!(native_currency.decimals, 18);
        assert_eq!(
            native_currency.address.as_deref(),
            Some(XAI_FEE_TOKEN_ADDRESS)
        );
    }
}
