use serde::{Deserialize, Serialize};

/// Fallback when a token listing omits its decimal count.
pub const DEFAULT_ERC20_DECIMALS: u8 = 18;

/// Asset the user intends to transfer. Callers pass `None` instead of a
/// token to transfer the native currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedToken {
    /// Parent-chain contract address
    pub address: String,
    /// Bridged representation on the child chain, if the token is bridged
    pub l2_address: Option<String>,
    /// `None` when the listing omits decimals, amounts then fall back to
    /// [`DEFAULT_ERC20_DECIMALS`]
    pub decimals: Option<u8>,
    pub symbol: String,
}

impl SelectedToken {
    pub fn new(
        address: impl Into<String>,
        l2_address: Option<String>,
        decimals: Option<u8>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            l2_address,
            decimals,
            symbol: symbol.into(),
        }
    }
}
