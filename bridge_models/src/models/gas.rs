use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GasEstimateStatus {
    Success,
    Unavailable,
}

/// Externally computed fee estimates, in human-decimal units of the asset
/// paying gas on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasSummary {
    pub status: GasEstimateStatus,
    pub estimated_parent_chain_gas_fees: Option<f64>,
    pub estimated_child_chain_gas_fees: Option<f64>,
}

impl GasSummary {
    pub fn unavailable() -> Self {
        Self {
            status: GasEstimateStatus::Unavailable,
            estimated_parent_chain_gas_fees: None,
            estimated_child_chain_gas_fees: None,
        }
    }

    pub fn success(parent_chain_gas_fees: f64, child_chain_gas_fees: f64) -> Self {
        Self {
            status: GasEstimateStatus::Success,
            estimated_parent_chain_gas_fees: Some(parent_chain_gas_fees),
            estimated_child_chain_gas_fees: Some(child_chain_gas_fees),
        }
    }

    /// Combined fee estimate. `None` whenever the summary cannot be relied
    /// on, either side missing counts as unavailable.
    pub fn total_gas_fees(&self) -> Option<f64> {
        if self.status != GasEstimateStatus::Success {
            return None;
        }

        Some(self.estimated_parent_chain_gas_fees? + self.estimated_child_chain_gas_fees?)
    }
}
