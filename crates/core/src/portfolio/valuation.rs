//! Pure valuation functions over account state.
//!
//! These never mutate; the account service calls them under its read lock.

use rust_decimal::Decimal;

use tradefolio_market_data::SharePriceProvider;

use crate::accounts::Account;

use super::valuation_model::PortfolioSummary;

/// Market value of all holdings, excluding cash.
///
/// Symbols the provider cannot price contribute zero.
pub fn holdings_value(account: &Account, pricer: &dyn SharePriceProvider) -> Decimal {
    account
        .holdings
        .iter()
        .map(|(symbol, quantity)| pricer.latest_price(symbol) * Decimal::from(*quantity))
        .sum()
}

/// Cash balance plus the market value of all holdings.
pub fn portfolio_value(account: &Account, pricer: &dyn SharePriceProvider) -> Decimal {
    account.cash_balance + holdings_value(account, pricer)
}

/// Portfolio value relative to the initial deposit. Positive means profit.
pub fn profit_loss(account: &Account, pricer: &dyn SharePriceProvider) -> Decimal {
    portfolio_value(account, pricer) - account.initial_deposit
}

/// Builds the combined valuation view of an account.
pub fn summarize(account: &Account, pricer: &dyn SharePriceProvider) -> PortfolioSummary {
    let holdings_value = holdings_value(account, pricer);
    let total_value = account.cash_balance + holdings_value;
    PortfolioSummary {
        cash_balance: account.cash_balance,
        holdings_value,
        total_value,
        profit_loss: total_value - account.initial_deposit,
    }
}
