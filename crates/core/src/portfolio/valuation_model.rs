//! Portfolio valuation view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time valuation of an account: cash, holdings at market price,
/// and profit/loss against the initial deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub cash_balance: Decimal,
    /// Market value of all holdings, excluding cash.
    pub holdings_value: Decimal,
    /// `cash_balance + holdings_value`.
    pub total_value: Decimal,
    /// `total_value - initial_deposit`. Positive means profit.
    pub profit_loss: Decimal,
}

impl PortfolioSummary {
    /// Whether the account is at or above its funding baseline.
    ///
    /// A profit/loss of exactly zero reports as profit.
    pub fn is_profit(&self) -> bool {
        self.profit_loss >= Decimal::ZERO
    }
}
