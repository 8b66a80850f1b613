//! Tradefolio Market Data Crate
//!
//! This crate provides share price lookups for the tradefolio ledger.
//!
//! # Overview
//!
//! The ledger core never talks to a concrete price source. It consumes the
//! [`SharePriceProvider`] trait, and implementations supply the prices:
//!
//! ```text
//! +------------------+     +---------------------+
//! |   Ledger core    | --> | SharePriceProvider  |  (trait)
//! +------------------+     +---------------------+
//!                                    |
//!                                    v
//!                          +---------------------+
//!                          | FixedPriceProvider  |  (table-backed)
//!                          +---------------------+
//! ```
//!
//! # Price contract
//!
//! Lookups are infallible: a provider returns a zero price for symbols it
//! does not know, and callers value the holding as worthless rather than
//! failing. Lookups are case-insensitive.

pub mod provider;

pub use provider::{FixedPriceProvider, SharePriceProvider};
