//! Share price provider trait definition.

use rust_decimal::Decimal;

/// Trait for share price sources.
///
/// Implement this trait to plug a new price source into the ledger. The
/// ledger queries it inside buy/sell and during valuation; it never caches
/// prices itself.
///
/// # Contract
///
/// - `latest_price` never fails. A symbol the provider does not recognize
///   is quoted at `Decimal::ZERO`, and callers value the holding as
///   worthless.
/// - Lookups are case-insensitive; `"aapl"` and `"AAPL"` quote the same.
/// - Prices are per share and non-negative.
pub trait SharePriceProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "FIXED". Used for logging.
    fn id(&self) -> &'static str;

    /// Returns the current per-share price for `symbol`.
    ///
    /// Returns `Decimal::ZERO` when the symbol is unknown.
    fn latest_price(&self, symbol: &str) -> Decimal;

    /// Symbols this provider can quote.
    fn supported_symbols(&self) -> Vec<String>;
}
