/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Timestamp format for rendered transaction lines
pub const TRANSACTION_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
