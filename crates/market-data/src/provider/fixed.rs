//! Table-backed share price provider.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use super::traits::SharePriceProvider;

/// Provider id reported by [`FixedPriceProvider`].
pub const FIXED_PROVIDER_ID: &str = "FIXED";

/// Share price provider backed by an in-memory table.
///
/// The default table quotes AAPL, TSLA, and GOOGL at fixed prices, which is
/// enough to exercise the ledger without a network source. Custom tables
/// can be supplied with [`FixedPriceProvider::with_prices`].
pub struct FixedPriceProvider {
    prices: HashMap<String, Decimal>,
}

impl FixedPriceProvider {
    /// Creates a provider with the default price table.
    pub fn new() -> Self {
        let mut prices = HashMap::new();
        prices.insert("AAPL".to_string(), Decimal::from(150));
        prices.insert("TSLA".to_string(), Decimal::from(650));
        prices.insert("GOOGL".to_string(), Decimal::from(2800));
        Self { prices }
    }

    /// Creates a provider from a custom price table.
    ///
    /// Symbols are normalized to uppercase on insertion.
    pub fn with_prices(prices: HashMap<String, Decimal>) -> Self {
        let prices = prices
            .into_iter()
            .map(|(symbol, price)| (symbol.to_uppercase(), price))
            .collect();
        Self { prices }
    }
}

impl Default for FixedPriceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SharePriceProvider for FixedPriceProvider {
    fn id(&self) -> &'static str {
        FIXED_PROVIDER_ID
    }

    fn latest_price(&self, symbol: &str) -> Decimal {
        let normalized = symbol.to_uppercase();
        match self.prices.get(&normalized) {
            Some(price) => *price,
            None => {
                debug!(
                    "{}: no price for symbol {}, quoting zero",
                    self.id(),
                    normalized
                );
                Decimal::ZERO
            }
        }
    }

    fn supported_symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.prices.keys().cloned().collect();
        symbols.sort();
        symbols
    }
}
