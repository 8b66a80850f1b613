//! Account domain models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::ValidationError, Error, Result};

use super::accounts_constants::INITIAL_DEPOSIT_DESCRIPTION;

/// Kind of a ledger transaction.
///
/// The direction of the cash movement is implied by the kind; the recorded
/// amount is always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Buy,
    Sell,
}

/// Immutable audit entry describing one completed mutating operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub kind: TransactionKind,
    /// Cash amount moved by this operation, always non-negative.
    pub amount: Decimal,
    pub description: String,
    /// Cash balance immediately after this operation.
    pub balance_after: Decimal,
}

/// Input model for opening a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub id: String,
    pub initial_deposit: Decimal,
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account ID cannot be empty".to_string(),
            )));
        }
        if self.initial_deposit <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Initial deposit must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Domain model for a single trading account: cash balance, holdings, and
/// the append-only transaction log.
///
/// The struct owns its invariants:
/// - `cash_balance` never goes negative through a successful operation
/// - a symbol is present in `holdings` iff its share count is positive
/// - `record_transaction` is the only way the log grows; entries are never
///   reordered or rewritten
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    /// Amount that funded the account at creation; profit/loss baseline.
    pub initial_deposit: Decimal,
    pub cash_balance: Decimal,
    /// Uppercase symbol -> share count. No zero-count entries.
    pub holdings: HashMap<String, u64>,
    pub transactions: Vec<TransactionRecord>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Opens an account funded with the initial deposit and records the
    /// funding transaction, so the log always has at least one entry.
    pub fn open(new_account: NewAccount) -> Result<Self> {
        new_account.validate()?;
        let mut account = Self {
            id: new_account.id,
            initial_deposit: new_account.initial_deposit,
            cash_balance: new_account.initial_deposit,
            holdings: HashMap::new(),
            transactions: Vec::new(),
            created_at: Utc::now(),
        };
        account.record_transaction(
            TransactionKind::Deposit,
            account.initial_deposit,
            INITIAL_DEPOSIT_DESCRIPTION.to_string(),
        );
        Ok(account)
    }

    /// Share count currently held for `symbol`, zero when not held.
    pub fn holding_quantity(&self, symbol: &str) -> u64 {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Adds shares to a holding, creating the entry when absent.
    pub(crate) fn add_shares(&mut self, symbol: &str, quantity: u64) {
        *self.holdings.entry(symbol.to_string()).or_insert(0) += quantity;
    }

    /// Removes shares from a holding, dropping the entry when the count
    /// reaches exactly zero. Availability has been checked by the caller.
    pub(crate) fn remove_shares(&mut self, symbol: &str, quantity: u64) {
        if let Some(count) = self.holdings.get_mut(symbol) {
            *count = count.saturating_sub(quantity);
            if *count == 0 {
                self.holdings.remove(symbol);
            }
        }
    }

    /// Appends one audit record snapshotting the current balance.
    pub(crate) fn record_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        description: String,
    ) {
        let balance_after = self.cash_balance;
        self.transactions.push(TransactionRecord {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            kind,
            amount,
            description,
            balance_after,
        });
    }
}
