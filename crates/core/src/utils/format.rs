//! Display formatting for ledger values.
//!
//! The ledger itself works in `Decimal`; these helpers produce the strings
//! front ends render.

use rust_decimal::Decimal;

use crate::accounts::TransactionRecord;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, TRANSACTION_TIMESTAMP_FORMAT};
use crate::errors::Result;

/// Formats a cash amount as a dollar string with two fractional digits.
pub fn format_money(value: Decimal) -> String {
    format!(
        "${:.prec$}",
        value,
        prec = DISPLAY_DECIMAL_PRECISION as usize
    )
}

/// Label for a profit/loss figure. Zero reports as profit.
pub fn performance_label(profit_loss: Decimal) -> &'static str {
    if profit_loss >= Decimal::ZERO {
        "Profit"
    } else {
        "Loss"
    }
}

/// Renders one transaction log line: timestamp, description, and the
/// balance snapshot taken after the operation.
pub fn format_transaction(record: &TransactionRecord) -> String {
    format!(
        "{} - {} - Balance: {}",
        record.timestamp.format(TRANSACTION_TIMESTAMP_FORMAT),
        record.description,
        format_money(record.balance_after)
    )
}

/// Parses a user-entered amount into a `Decimal`.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let value = input.trim().parse::<Decimal>()?;
    Ok(value)
}
