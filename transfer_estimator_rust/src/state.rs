use bridge_models::constants::chains::ChainId;
use bridge_models::models::balances::{BalanceSnapshot, Balances};
use bridge_models::models::gas::GasSummary;
use bridge_models::models::native_currency::NativeCurrency;
use bridge_models::models::token::SelectedToken;
use tracing::{debug, warn};

use crate::balances::{resolve_native_currency_balances, resolve_selected_token_balances};
use crate::error::{EstimatorResult, ReportDisplayExt};
use crate::max_amount::{MaxAmountRequest, MaxAmounts, compute_max_amount};
use crate::networks::{NetworksRelationship, resolve_networks_relationship};

/// Holds the four inputs of the transfer pipeline and keeps every derivation
/// in sync with them. Each setter replaces one input and synchronously
/// recomputes the downstream values, replacing the framework-managed
/// reactivity of a UI runtime with explicit recomputation.
///
/// Inputs may be partially populated at any point; derivations then resolve
/// to `None` rather than failing.
#[derive(Debug, Clone)]
pub struct TransferState {
    relationship: NetworksRelationship,
    native_currency: NativeCurrency,
    selected_token: Option<SelectedToken>,
    snapshot: BalanceSnapshot,
    gas_summary: GasSummary,

    selected_token_balances: Balances,
    native_currency_balances: Balances,
    max_amounts: MaxAmounts,
}

impl TransferState {
    pub fn new(
        source_chain_id: ChainId,
        destination_chain_id: ChainId,
    ) -> EstimatorResult<Self> {
        let relationship = resolve_networks_relationship(source_chain_id, destination_chain_id)?;

        let mut state = Self {
            relationship,
            native_currency: NativeCurrency::for_chain(relationship.child_chain_id),
            selected_token: None,
            snapshot: BalanceSnapshot::default(),
            gas_summary: GasSummary::unavailable(),
            selected_token_balances: Balances::default(),
            native_currency_balances: Balances::default(),
            max_amounts: MaxAmounts::default(),
        };
        state.recompute();

        Ok(state)
    }

    /// The one fallible setter: an unrelated pair leaves the state untouched
    /// and propagates the error.
    pub fn set_chain_pair(
        &mut self,
        source_chain_id: ChainId,
        destination_chain_id: ChainId,
    ) -> EstimatorResult<()> {
        let relationship = resolve_networks_relationship(source_chain_id, destination_chain_id)
            .inspect_err(|report| {
                warn!(error = %report.format(), "Rejected chain pair update");
            })?;

        self.relationship = relationship;
        self.native_currency = NativeCurrency::for_chain(relationship.child_chain_id);
        self.recompute();

        Ok(())
    }

    pub fn set_selected_token(&mut self, selected_token: Option<SelectedToken>) {
        self.selected_token = selected_token;
        self.recompute();
    }

    pub fn set_balance_snapshot(&mut self, snapshot: BalanceSnapshot) {
        self.snapshot = snapshot;
        self.recompute();
    }

    pub fn set_gas_summary(&mut self, gas_summary: GasSummary) {
        self.gas_summary = gas_summary;
        self.recompute();
    }

    pub fn relationship(&self) -> &NetworksRelationship {
        &self.relationship
    }

    pub fn native_currency(&self) -> &NativeCurrency {
        &self.native_currency
    }

    pub fn selected_token(&self) -> Option<&SelectedToken> {
        self.selected_token.as_ref()
    }

    pub fn selected_token_balances(&self) -> &Balances {
        &self.selected_token_balances
    }

    pub fn native_currency_balances(&self) -> &Balances {
        &self.native_currency_balances
    }

    /// Balance pair for the current selection: token balances when a token
    /// is selected, native-currency balances otherwise.
    pub fn balances(&self) -> &Balances {
        if self.selected_token.is_some() {
            &self.selected_token_balances
        } else {
            &self.native_currency_balances
        }
    }

    pub fn max_amounts(&self) -> &MaxAmounts {
        &self.max_amounts
    }

    fn recompute(&mut self) {
        self.selected_token_balances = resolve_selected_token_balances(
            self.selected_token.as_ref(),
            &self.snapshot,
            &self.relationship,
        );
        self.native_currency_balances = resolve_native_currency_balances(
            &self.snapshot,
            &self.native_currency,
            self.relationship.is_deposit_mode,
        );
        self.max_amounts = compute_max_amount(&MaxAmountRequest {
            selected_token: self.selected_token.as_ref(),
            selected_token_balances: &self.selected_token_balances,
            native_currency_balances: &self.native_currency_balances,
            native_currency: &self.native_currency,
            gas_summary: &self.gas_summary,
            is_deposit_mode: self.relationship.is_deposit_mode,
        });

        debug!(
            is_deposit_mode = self.relationship.is_deposit_mode,
            max_amount = ?self.max_amounts.max_amount,
            "Recomputed transfer derivations"
        );
    }
}
