//! Share price provider abstractions and implementations.
//!
//! This module contains:
//! - The `SharePriceProvider` trait that all price sources implement
//! - Concrete implementations (currently the table-backed fixed provider)
//!
//! Providers are deliberately infallible: the ledger treats "no price" as a
//! zero quote, so the trait has no error channel.

mod traits;

pub mod fixed;

pub use fixed::FixedPriceProvider;
pub use traits::SharePriceProvider;
