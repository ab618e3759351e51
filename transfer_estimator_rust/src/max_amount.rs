use bridge_models::models::balances::Balances;
use bridge_models::models::gas::GasSummary;
use bridge_models::models::native_currency::NativeCurrency;
use bridge_models::models::token::{DEFAULT_ERC20_DECIMALS, SelectedToken};
use serde::{Deserialize, Serialize};

use crate::utils::number_conversion::format_units;

/// Margin absorbing gas-price movement between estimation and submission.
pub const GAS_FEES_SAFETY_MULTIPLIER: f64 = 1.4;

#[derive(Clone, Copy, Debug)]
pub struct MaxAmountRequest<'a> {
    pub selected_token: Option<&'a SelectedToken>,
    pub selected_token_balances: &'a Balances,
    pub native_currency_balances: &'a Balances,
    pub native_currency: &'a NativeCurrency,
    pub gas_summary: &'a GasSummary,
    pub is_deposit_mode: bool,
}

/// `max_amount` is the largest safely transferable amount as a decimal
/// string, `None` while any required input is unknown. `max_amount2` backs
/// the deposit-only shortcut and is populated only for non-custom
/// native-currency deposits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxAmounts {
    pub max_amount: Option<String>,
    pub max_amount2: Option<String>,
}

pub fn compute_max_amount(request: &MaxAmountRequest) -> MaxAmounts {
    let native_currency_max = native_currency_max_amount(request);

    let max_amount = match request.selected_token {
        // Token transfers pay gas in the native asset, the full token
        // balance is transferable.
        Some(token) => request
            .selected_token_balances
            .source_balance
            .map(|balance| {
                format_units(balance, token.decimals.unwrap_or(DEFAULT_ERC20_DECIMALS))
            }),
        None => native_currency_max.clone(),
    };

    let max_amount2 = if request.is_deposit_mode && !request.native_currency.is_custom {
        native_currency_max
    } else {
        None
    };

    MaxAmounts {
        max_amount,
        max_amount2,
    }
}

fn native_currency_max_amount(request: &MaxAmountRequest) -> Option<String> {
    let source_balance = request.native_currency_balances.source_balance?;

    // Integer-exact down to the decimal string; float arithmetic only enters
    // for the gas margin below.
    let balance_formatted = format_units(source_balance, request.native_currency.decimals);

    // Custom fee token deposits pay gas in the parent chain's base asset
    if request.native_currency.is_custom && request.is_deposit_mode {
        return Some(balance_formatted);
    }

    let total_gas_fees = request.gas_summary.total_gas_fees()?;

    let max_amount =
        balance_formatted.parse::<f64>().ok()? - total_gas_fees * GAS_FEES_SAFETY_MULTIPLIER;

    // A non-positive result means the balance cannot cover gas. Return the
    // full balance so the caller surfaces an insufficient-for-gas error
    // instead of clamping to zero.
    if max_amount > 0.0 {
        return Some(max_amount.to_string());
    }

    Some(balance_formatted)
}
