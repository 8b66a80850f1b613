//! Tests for account domain models.

#[cfg(test)]
mod tests {
    use crate::accounts::{
        Account, NewAccount, TransactionKind, INITIAL_DEPOSIT_DESCRIPTION,
    };
    use crate::Error;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn new_account(id: &str, initial_deposit: Decimal) -> NewAccount {
        NewAccount {
            id: id.to_string(),
            initial_deposit,
        }
    }

    // ==================== TransactionKind Serialization Tests ====================

    #[test]
    fn test_transaction_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Deposit).unwrap(),
            "\"DEPOSIT\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Withdraw).unwrap(),
            "\"WITHDRAW\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Buy).unwrap(),
            "\"BUY\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Sell).unwrap(),
            "\"SELL\""
        );
    }

    #[test]
    fn test_transaction_kind_deserialization() {
        assert_eq!(
            serde_json::from_str::<TransactionKind>("\"DEPOSIT\"").unwrap(),
            TransactionKind::Deposit
        );
        assert_eq!(
            serde_json::from_str::<TransactionKind>("\"SELL\"").unwrap(),
            TransactionKind::Sell
        );
    }

    // ==================== NewAccount Validation Tests ====================

    #[test]
    fn test_validate_accepts_positive_deposit() {
        assert!(new_account("test123", dec!(1000)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let err = new_account("", dec!(1000)).validate().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_blank_id() {
        let err = new_account("   ", dec!(1000)).validate().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_zero_deposit() {
        let err = new_account("test123", Decimal::ZERO).validate().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_negative_deposit() {
        let err = new_account("test123", dec!(-100)).validate().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    // ==================== Account::open Tests ====================

    #[test]
    fn test_open_funds_account_and_records_deposit() {
        let account = Account::open(new_account("test123", dec!(1000))).unwrap();

        assert_eq!(account.id, "test123");
        assert_eq!(account.initial_deposit, dec!(1000));
        assert_eq!(account.cash_balance, dec!(1000));
        assert!(account.holdings.is_empty());
        assert_eq!(account.transactions.len(), 1);

        let initial = &account.transactions[0];
        assert_eq!(initial.kind, TransactionKind::Deposit);
        assert_eq!(initial.amount, dec!(1000));
        assert_eq!(initial.description, INITIAL_DEPOSIT_DESCRIPTION);
        assert_eq!(initial.balance_after, dec!(1000));
    }

    #[test]
    fn test_open_rejects_invalid_input() {
        assert!(Account::open(new_account("test123", Decimal::ZERO)).is_err());
        assert!(Account::open(new_account("", dec!(1000))).is_err());
    }

    // ==================== Holdings Helper Tests ====================

    #[test]
    fn test_holding_quantity_defaults_to_zero() {
        let account = Account::open(new_account("test123", dec!(1000))).unwrap();
        assert_eq!(account.holding_quantity("AAPL"), 0);
    }

    #[test]
    fn test_add_shares_creates_and_accumulates() {
        let mut account = Account::open(new_account("test123", dec!(1000))).unwrap();
        account.add_shares("AAPL", 2);
        assert_eq!(account.holding_quantity("AAPL"), 2);
        account.add_shares("AAPL", 3);
        assert_eq!(account.holding_quantity("AAPL"), 5);
    }

    #[test]
    fn test_remove_shares_decrements() {
        let mut account = Account::open(new_account("test123", dec!(1000))).unwrap();
        account.add_shares("AAPL", 5);
        account.remove_shares("AAPL", 2);
        assert_eq!(account.holding_quantity("AAPL"), 3);
        assert!(account.holdings.contains_key("AAPL"));
    }

    #[test]
    fn test_remove_shares_drops_entry_at_zero() {
        let mut account = Account::open(new_account("test123", dec!(1000))).unwrap();
        account.add_shares("AAPL", 2);
        account.remove_shares("AAPL", 2);
        assert!(!account.holdings.contains_key("AAPL"));
    }

    // ==================== Transaction Log Tests ====================

    #[test]
    fn test_record_transaction_snapshots_balance() {
        let mut account = Account::open(new_account("test123", dec!(1000))).unwrap();
        account.cash_balance += dec!(500);
        account.record_transaction(
            TransactionKind::Deposit,
            dec!(500),
            "Deposit: $500.00".to_string(),
        );

        assert_eq!(account.transactions.len(), 2);
        let record = &account.transactions[1];
        assert_eq!(record.kind, TransactionKind::Deposit);
        assert_eq!(record.amount, dec!(500));
        assert_eq!(record.balance_after, dec!(1500));
    }

    #[test]
    fn test_record_ids_are_unique() {
        let mut account = Account::open(new_account("test123", dec!(1000))).unwrap();
        account.record_transaction(TransactionKind::Deposit, dec!(1), "a".to_string());
        account.record_transaction(TransactionKind::Deposit, dec!(1), "b".to_string());
        assert_ne!(account.transactions[1].id, account.transactions[2].id);
    }
}
