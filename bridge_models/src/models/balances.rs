use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Externally refreshed balance data, keyed by lowercased token address.
///
/// `None` means "not yet loaded" and must never be read as a zero balance.
/// Amounts are integers scaled by the token's decimal count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub erc20_parent_balances: Option<HashMap<String, u128>>,
    pub erc20_child_balances: Option<HashMap<String, u128>>,
    pub eth_parent_balance: Option<u128>,
    pub eth_child_balance: Option<u128>,
}

/// Resolved balance pair for the current token and direction.
///
/// `None` means unknown/not-yet-fetched, distinct from a confirmed zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balances {
    pub source_balance: Option<u128>,
    pub destination_balance: Option<u128>,
}
