use error_stack::{Report, report};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr, EnumIter, Hash)]
#[repr(u64)]
pub enum ChainId {
    Ethereum = 1,
    Sepolia = 11155111,

    ArbitrumOne = 42161,
    ArbitrumNova = 42170,
    ArbitrumSepolia = 421614,

    Xai = 660279,
}

impl ChainId {
    pub fn supported_chains() -> Vec<ChainId> {
        let supported_chains: Vec<_> = ChainId::iter().collect();

        supported_chains
    }

    /// Chain the given chain settles to, `None` for base-layer chains.
    pub fn parent_chain_id(self) -> Option<ChainId> {
        match self {
            Self::Ethereum | Self::Sepolia => None,
            Self::ArbitrumOne | Self::ArbitrumNova => Some(Self::Ethereum),
            Self::ArbitrumSepolia => Some(Self::Sepolia),
            Self::Xai => Some(Self::ArbitrumOne),
        }
    }

    pub fn is_parent_of(self, child: ChainId) -> bool {
        child.parent_chain_id() == Some(self)
    }

    pub fn is_testnet(self) -> bool {
        matches!(self, Self::Sepolia | Self::ArbitrumSepolia)
    }
}

impl TryFrom<u64> for ChainId {
    type Error = Report<Error>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        serde_json::from_str(&value.to_string()).map_err(|e| {
            Report::new(Error::ParseError)
                .attach_printable(format!("Failed to parse chain ID: {e}"))
        })
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ethereum => write!(f, "Ethereum"),
            Self::Sepolia => write!(f, "Sepolia"),
            Self::ArbitrumOne => write!(f, "Arbitrum One"),
            Self::ArbitrumNova => write!(f, "Arbitrum Nova"),
            Self::ArbitrumSepolia => write!(f, "Arbitrum Sepolia"),
            Self::Xai => write!(f, "Xai"),
        }
    }
}

impl TryFrom<&str> for ChainId {
    type Error = Report<Error>;

    /// Accepts both the UI slug form and the numeric chain id.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "ethereum" | "Ethereum" | "1" => Ok(Self::Ethereum),
            "sepolia" | "Sepolia" | "11155111" => Ok(Self::Sepolia),
            "arbitrum-one" | "ArbitrumOne" | "Arbitrum One" | "42161" => Ok(Self::ArbitrumOne),
            "arbitrum-nova" | "ArbitrumNova" | "Arbitrum Nova" | "42170" => Ok(Self::ArbitrumNova),
            "arbitrum-sepolia" | "ArbitrumSepolia" | "Arbitrum Sepolia" | "421614" => {
                Ok(Self::ArbitrumSepolia)
            }
            "xai" | "Xai" | "660279" => Ok(Self::Xai),
            _ => Err(report!(Error::ChainError(format!(
                "Invalid chain name: {value}"
            )))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_display() {
        assert_eq!(ChainId::Ethereum.to_string(), "Ethereum");
        assert_eq!(ChainId::Sepolia.to_string(), "Sepolia");
        assert_eq!(ChainId::ArbitrumOne.to_string(), "Arbitrum One");
        assert_eq!(ChainId::ArbitrumNova.to_string(), "Arbitrum Nova");
        assert_eq!(ChainId::ArbitrumSepolia.to_string(), "Arbitrum Sepolia");
        assert_eq!(ChainId::Xai.to_string(), "Xai");
    }

    #[test]
    fn test_supported_chains() {
        let chains = ChainId::supported_chains();

        assert!(chains.len() >= 6, "Should have at least 6 supported chains");

        assert!(chains.contains(&ChainId::Ethereum));
        assert!(chains.contains(&ChainId::Sepolia));
        assert!(chains.contains(&ChainId::ArbitrumOne));
        assert!(chains.contains(&ChainId::ArbitrumNova));
        assert!(chains.contains(&ChainId::ArbitrumSepolia));
        assert!(chains.contains(&ChainId::Xai));
    }

    #[test]
    fn test_parent_chain_id() {
        assert_eq!(ChainId::Ethereum.parent_chain_id(), None);
        assert_eq!(ChainId::Sepolia.parent_chain_id(), None);
        assert_eq!(
            ChainId::ArbitrumOne.parent_chain_id(),
            Some(ChainId::Ethereum)
        );
        assert_eq!(
            ChainId::ArbitrumNova.parent_chain_id(),
            Some(ChainId::Ethereum)
        );
        assert_eq!(
            ChainId::ArbitrumSepolia.parent_chain_id(),
            Some(ChainId::Sepolia)
        );
        assert_eq!(ChainId::Xai.parent_chain_id(), Some(ChainId::ArbitrumOne));
    }

    #[test]
    fn test_is_parent_of() {
        assert!(ChainId::Ethereum.is_parent_of(ChainId::ArbitrumOne));
        assert!(ChainId::Ethereum.is_parent_of(ChainId::ArbitrumNova));
        assert!(ChainId::Sepolia.is_parent_of(ChainId::ArbitrumSepolia));
        assert!(ChainId::ArbitrumOne.is_parent_of(ChainId::Xai));

        assert!(!ChainId::ArbitrumOne.is_parent_of(ChainId::Ethereum));
        assert!(!ChainId::Ethereum.is_parent_of(ChainId::ArbitrumSepolia));
        assert!(!ChainId::Ethereum.is_parent_of(ChainId::Ethereum));
    }

    #[test]
    fn test_from_u64() {
        assert_eq!(
            ChainId::try_from(1u64).expect("Should work"),
            ChainId::Ethereum
        );
        assert_eq!(
            ChainId::try_from(11155111u64).expect("Should work"),
            ChainId::Sepolia
        );
        assert_eq!(
            ChainId::try_from(42161u64).expect("Should work"),
            ChainId::ArbitrumOne
        );
        assert_eq!(
            ChainId::try_from(421614u64).expect("Should work"),
            ChainId::ArbitrumSepolia
        );
        assert_eq!(
            ChainId::try_from(660279u64).expect("Should work"),
            ChainId::Xai
        );

        assert!(ChainId::try_from(9999u64).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            ChainId::try_from("arbitrum-one").expect("Should work"),
            ChainId::ArbitrumOne
        );
        assert_eq!(
            ChainId::try_from("42161").expect("Should work"),
            ChainId::ArbitrumOne
        );
        assert_eq!(
            ChainId::try_from("ethereum").expect("Should work"),
            ChainId::Ethereum
        );
        assert_eq!(
            ChainId::try_from("arbitrum-sepolia").expect("Should work"),
            ChainId::ArbitrumSepolia
        );

        assert!(ChainId::try_from("arbitrum-goerli").is_err());
        assert!(ChainId::try_from("").is_err());
    }
}
