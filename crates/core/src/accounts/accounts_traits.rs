//! Account service trait.
//!
//! Defines the contract for ledger operations without tying callers to the
//! concrete service, so front ends and tests can share one interface.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::accounts_model::{Account, TransactionRecord};
use crate::errors::Result;
use crate::portfolio::PortfolioSummary;

/// Trait defining the contract for single-account ledger operations.
///
/// Mutating operations either fail with a validation error (contract
/// violation, nothing touched) or report a business outcome: `Ok(true)`
/// when applied, `Ok(false)` when rejected with zero side effects.
pub trait AccountServiceTrait: Send + Sync {
    /// Adds funds to the account. Always succeeds once validated.
    fn deposit(&self, amount: Decimal) -> Result<()>;

    /// Removes funds from the account.
    ///
    /// Returns `Ok(false)` without mutating when the balance is
    /// insufficient.
    fn withdraw(&self, amount: Decimal) -> Result<bool>;

    /// Buys shares of `symbol` at the provider's current price.
    ///
    /// Returns `Ok(false)` without mutating when the cost exceeds the cash
    /// balance.
    fn buy(&self, symbol: &str, quantity: u64) -> Result<bool>;

    /// Sells shares of `symbol` at the provider's current price.
    ///
    /// Returns `Ok(false)` without mutating when fewer than `quantity`
    /// shares are held.
    fn sell(&self, symbol: &str, quantity: u64) -> Result<bool>;

    /// Current cash balance.
    fn cash_balance(&self) -> Decimal;

    /// Cash balance plus the market value of all holdings.
    fn portfolio_value(&self) -> Decimal;

    /// Portfolio value minus the initial deposit.
    fn profit_loss(&self) -> Decimal;

    /// Snapshot of current holdings. Mutating the returned map never
    /// affects the account.
    fn holdings(&self) -> HashMap<String, u64>;

    /// Snapshot of the transaction log in chronological order.
    fn transaction_history(&self) -> Vec<TransactionRecord>;

    /// Combined valuation view of the account.
    fn portfolio_summary(&self) -> PortfolioSummary;

    /// Snapshot of the full account state.
    fn account(&self) -> Account;
}
