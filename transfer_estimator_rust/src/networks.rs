use bridge_models::constants::chains::ChainId;
use error_stack::report;
use serde::{Deserialize, Serialize};

use crate::error::{Error, EstimatorResult};

/// Resolved parent/child relationship for a source/destination chain pair.
///
/// Deposit means transferring from the parent chain to the child chain,
/// withdrawal the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworksRelationship {
    pub source_chain_id: ChainId,
    pub destination_chain_id: ChainId,
    pub parent_chain_id: ChainId,
    pub child_chain_id: ChainId,
    pub is_deposit_mode: bool,
}

/// Fails when neither chain is the other's parent. Deterministic, the same
/// pair always resolves to the same value.
pub fn resolve_networks_relationship(
    source_chain_id: ChainId,
    destination_chain_id: ChainId,
) -> EstimatorResult<NetworksRelationship> {
    if source_chain_id == destination_chain_id {
        return Err(report!(Error::InvalidChainPair(format!(
            "source and destination are both {source_chain_id}"
        )))
        .attach_printable(format!("{source_chain_id} cannot bridge to itself")));
    }

    if source_chain_id.is_parent_of(destination_chain_id) {
        return Ok(NetworksRelationship {
            source_chain_id,
            destination_chain_id,
            parent_chain_id: source_chain_id,
            child_chain_id: destination_chain_id,
            is_deposit_mode: true,
        });
    }

    if destination_chain_id.is_parent_of(source_chain_id) {
        return Ok(NetworksRelationship {
            source_chain_id,
            destination_chain_id,
            parent_chain_id: destination_chain_id,
            child_chain_id: source_chain_id,
            is_deposit_mode: false,
        });
    }

    Err(report!(Error::InvalidChainPair(format!(
        "no parent/child relationship between {source_chain_id} and {destination_chain_id}"
    )))
    .attach_printable(format!(
        "{source_chain_id} settles to {:?}, {destination_chain_id} settles to {:?}",
        source_chain_id.parent_chain_id(),
        destination_chain_id.parent_chain_id()
    )))
}

impl NetworksRelationship {
    fn is_pair(&self, a: ChainId, b: ChainId) -> bool {
        (self.source_chain_id == a && self.destination_chain_id == b)
            || (self.source_chain_id == b && self.destination_chain_id == a)
    }

    pub fn is_ethereum_arbitrum_one_pair(&self) -> bool {
        self.is_pair(ChainId::Ethereum, ChainId::ArbitrumOne)
    }

    pub fn is_sepolia_arbitrum_sepolia_pair(&self) -> bool {
        self.is_pair(ChainId::Sepolia, ChainId::ArbitrumSepolia)
    }
}
