//! Error types for account operations and the demo driver.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for driver operations
pub type Result<T> = std::result::Result<T, BankError>;

/// Why an account operation was rejected.
///
/// A rejected operation never changes the account.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Deposit or withdrawal of zero or a negative amount
    #[error("amount must be positive, got {amount}")]
    InvalidAmount { amount: Money },

    /// Savings withdrawal larger than the balance
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// Checking withdrawal larger than balance plus overdraft limit
    #[error("overdraft limit exceeded: requested {requested}, available {available}")]
    OverdraftExceeded { requested: Money, available: Money },
}

/// Errors that can occur while running the driver.
#[derive(Error, Debug)]
pub enum BankError {
    /// Failed to create or write an output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Journal serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
