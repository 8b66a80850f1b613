/// Description recorded on the synthetic transaction that funds a new
/// account. The transaction log always starts with this entry.
pub const INITIAL_DEPOSIT_DESCRIPTION: &str = "Initial deposit";
