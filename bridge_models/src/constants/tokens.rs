use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::constants::chains::ChainId;

// Canonical USDC contracts, stored lowercased to match snapshot keys.
pub const ETHEREUM_USDC_ADDRESS: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const ARBITRUM_ONE_NATIVE_USDC_ADDRESS: &str = "0xaf88d065e77c8cc2239327c5edb3a432268e5831";
pub const ARBITRUM_ONE_BRIDGED_USDC_ADDRESS: &str = "0xff970a61a04b1ca14834a43f5de4533ebddb5cc8";
pub const SEPOLIA_USDC_ADDRESS: &str = "0x1c7d4b196cb0c7b01d743fbc6116a902379c7238";
pub const ARBITRUM_SEPOLIA_NATIVE_USDC_ADDRESS: &str =
    "0x75faf114eafb1bdbe2f0316df893fd58ce46aa4d";

static NATIVE_USDC_ADDRESSES: Lazy<HashMap<ChainId, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (ChainId::Ethereum, ETHEREUM_USDC_ADDRESS),
        (ChainId::ArbitrumOne, ARBITRUM_ONE_NATIVE_USDC_ADDRESS),
        (ChainId::Sepolia, SEPOLIA_USDC_ADDRESS),
        (ChainId::ArbitrumSepolia, ARBITRUM_SEPOLIA_NATIVE_USDC_ADDRESS),
    ])
});

/// Canonical (non-bridged) USDC contract on the given chain, if USDC is
/// issued there.
pub fn native_usdc_address(chain_id: ChainId) -> Option<&'static str> {
    NATIVE_USDC_ADDRESSES.get(&chain_id).copied()
}

pub fn is_arbitrum_one_native_usdc(address: &str) -> bool {
    address.to_lowercase() == ARBITRUM_ONE_NATIVE_USDC_ADDRESS
}

pub fn is_arbitrum_sepolia_native_usdc(address: &str) -> bool {
    address.to_lowercase() == ARBITRUM_SEPOLIA_NATIVE_USDC_ADDRESS
}
