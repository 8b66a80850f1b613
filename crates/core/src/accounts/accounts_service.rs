use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::{debug, warn};
use rust_decimal::Decimal;

use tradefolio_market_data::SharePriceProvider;

use super::accounts_model::{Account, NewAccount, TransactionKind, TransactionRecord};
use super::accounts_traits::AccountServiceTrait;
use crate::errors::{Result, ValidationError};
use crate::portfolio::{self, PortfolioSummary};
use crate::utils::format::format_money;
use crate::Error;

/// Service owning one account and the share price provider it is valued
/// against.
///
/// Every mutating operation runs its whole validate / mutate-or-reject /
/// record sequence under the write lock, so balance, holdings, and the log
/// always move together. One account is one mutual-exclusion domain.
pub struct AccountService {
    account: RwLock<Account>,
    pricer: Arc<dyn SharePriceProvider>,
}

impl AccountService {
    /// Opens the account and records the funding deposit.
    pub fn new(new_account: NewAccount, pricer: Arc<dyn SharePriceProvider>) -> Result<Self> {
        let account = Account::open(new_account)?;
        debug!(
            "Opened account {} with initial deposit {}",
            account.id, account.initial_deposit
        );
        Ok(Self {
            account: RwLock::new(account),
            pricer,
        })
    }

    fn validate_amount(amount: Decimal, context: &str) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "{} amount must be positive",
                context
            ))));
        }
        Ok(())
    }

    fn validate_quantity(quantity: u64) -> Result<()> {
        if quantity == 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Quantity must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

impl AccountServiceTrait for AccountService {
    fn deposit(&self, amount: Decimal) -> Result<()> {
        Self::validate_amount(amount, "Deposit")?;
        let mut account = self.account.write().unwrap();
        account.cash_balance += amount;
        let description = format!("Deposit: {}", format_money(amount));
        account.record_transaction(TransactionKind::Deposit, amount, description);
        debug!("Deposited {} into account {}", amount, account.id);
        Ok(())
    }

    fn withdraw(&self, amount: Decimal) -> Result<bool> {
        Self::validate_amount(amount, "Withdrawal")?;
        let mut account = self.account.write().unwrap();
        if account.cash_balance - amount < Decimal::ZERO {
            warn!(
                "Rejected withdrawal of {} from account {}: insufficient funds",
                amount, account.id
            );
            return Ok(false);
        }
        account.cash_balance -= amount;
        let description = format!("Withdrawal: {}", format_money(amount));
        account.record_transaction(TransactionKind::Withdraw, amount, description);
        debug!("Withdrew {} from account {}", amount, account.id);
        Ok(true)
    }

    fn buy(&self, symbol: &str, quantity: u64) -> Result<bool> {
        Self::validate_quantity(quantity)?;
        let symbol = symbol.to_uppercase();
        let mut account = self.account.write().unwrap();
        // An unknown symbol quotes at zero, so the cost is zero and the
        // purchase succeeds.
        let price = self.pricer.latest_price(&symbol);
        let cost = price * Decimal::from(quantity);
        if account.cash_balance < cost {
            warn!(
                "Rejected buy of {} {} for account {}: cost {} exceeds balance {}",
                quantity, symbol, account.id, cost, account.cash_balance
            );
            return Ok(false);
        }
        account.cash_balance -= cost;
        account.add_shares(&symbol, quantity);
        let description = format!(
            "Bought {} shares of {} at {}",
            quantity,
            symbol,
            format_money(price)
        );
        account.record_transaction(TransactionKind::Buy, cost, description);
        debug!("Bought {} {} for account {}", quantity, symbol, account.id);
        Ok(true)
    }

    fn sell(&self, symbol: &str, quantity: u64) -> Result<bool> {
        Self::validate_quantity(quantity)?;
        let symbol = symbol.to_uppercase();
        let mut account = self.account.write().unwrap();
        if account.holding_quantity(&symbol) < quantity {
            warn!(
                "Rejected sell of {} {} for account {}: insufficient shares",
                quantity, symbol, account.id
            );
            return Ok(false);
        }
        let price = self.pricer.latest_price(&symbol);
        let proceeds = price * Decimal::from(quantity);
        account.cash_balance += proceeds;
        account.remove_shares(&symbol, quantity);
        let description = format!(
            "Sold {} shares of {} at {}",
            quantity,
            symbol,
            format_money(price)
        );
        account.record_transaction(TransactionKind::Sell, proceeds, description);
        debug!("Sold {} {} for account {}", quantity, symbol, account.id);
        Ok(true)
    }

    fn cash_balance(&self) -> Decimal {
        self.account.read().unwrap().cash_balance
    }

    fn portfolio_value(&self) -> Decimal {
        let account = self.account.read().unwrap();
        portfolio::portfolio_value(&account, self.pricer.as_ref())
    }

    fn profit_loss(&self) -> Decimal {
        let account = self.account.read().unwrap();
        portfolio::profit_loss(&account, self.pricer.as_ref())
    }

    fn holdings(&self) -> HashMap<String, u64> {
        self.account.read().unwrap().holdings.clone()
    }

    fn transaction_history(&self) -> Vec<TransactionRecord> {
        self.account.read().unwrap().transactions.clone()
    }

    fn portfolio_summary(&self) -> PortfolioSummary {
        let account = self.account.read().unwrap();
        portfolio::summarize(&account, self.pricer.as_ref())
    }

    fn account(&self) -> Account {
        self.account.read().unwrap().clone()
    }
}
