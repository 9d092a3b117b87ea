//! Account model and balance state transitions.
//!
//! Both account variants embed an [`AccountCore`] holding the number and
//! balance, and share deposit/display behaviour through the [`Account`] trait.
//! Withdrawal rules differ per variant.
//!
//! Every operation here is pure state transition: nothing is logged or
//! reported. See [`crate::teller::Teller`] for the observed entry points.

use crate::error::AccountError;
use crate::money::{Money, Rate};
use serde::Serialize;
use std::fmt;

/// Fields shared by every account variant.
///
/// # Invariants
///
/// - `number` never changes after construction
/// - `balance` never drops below the owning account's floor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCore {
    number: String,
    balance: Money,
}

impl AccountCore {
    /// Creates the shared state. A negative initial balance is clamped to zero.
    pub fn new(number: impl Into<String>, initial_balance: Money) -> Self {
        AccountCore {
            number: number.into(),
            balance: initial_balance.clamp_non_negative(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Credits a positive amount and returns the new balance.
    fn deposit(&mut self, amount: Money) -> Result<Money, AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount { amount });
        }

        self.balance += amount;
        Ok(self.balance)
    }

    /// Debits `amount` when it is positive and no larger than `available`.
    ///
    /// `rejected` builds the error used when the amount exceeds `available`.
    fn debit(
        &mut self,
        amount: Money,
        available: Money,
        rejected: fn(Money, Money) -> AccountError,
    ) -> Result<Money, AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount { amount });
        }

        if available < amount {
            return Err(rejected(amount, available));
        }

        self.balance -= amount;
        Ok(self.balance)
    }
}

/// Account variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Savings,
    Checking,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Savings => write!(f, "savings"),
            AccountKind::Checking => write!(f, "checking"),
        }
    }
}

/// Behaviour common to all account variants.
///
/// Implementors supply access to their [`AccountCore`], their withdrawal
/// rule and their variant-specific detail. Deposits and the display
/// projection are shared.
pub trait Account {
    fn core(&self) -> &AccountCore;

    fn core_mut(&mut self) -> &mut AccountCore;

    fn kind(&self) -> AccountKind;

    /// Lowest balance this account may reach.
    fn floor(&self) -> Money;

    /// Withdraws `amount` under the variant's funds rule and returns the new balance.
    fn withdraw(&mut self, amount: Money) -> Result<Money, AccountError>;

    /// The variant-specific field shown by [`Account::info`].
    fn detail(&self) -> Detail;

    fn number(&self) -> &str {
        self.core().number()
    }

    fn balance(&self) -> Money {
        self.core().balance()
    }

    /// Deposits a positive amount and returns the new balance.
    ///
    /// Zero or negative amounts are rejected with [`AccountError::InvalidAmount`].
    fn deposit(&mut self, amount: Money) -> Result<Money, AccountError> {
        self.core_mut().deposit(amount)
    }

    /// Read-only snapshot of the account for display.
    fn info(&self) -> AccountInfo {
        AccountInfo {
            number: self.number().to_string(),
            balance: self.balance(),
            detail: self.detail(),
        }
    }
}

/// A savings account. Balance never goes below zero; earns interest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsAccount {
    core: AccountCore,
    interest_rate: Rate,
}

impl SavingsAccount {
    /// Creates a savings account.
    ///
    /// Negative `initial_balance` and `interest_rate` are clamped to zero
    /// rather than rejected.
    pub fn new(number: impl Into<String>, initial_balance: Money, interest_rate: Rate) -> Self {
        SavingsAccount {
            core: AccountCore::new(number, initial_balance),
            interest_rate: interest_rate.clamp_non_negative(),
        }
    }

    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
    }

    /// Credits `balance * interest_rate` and returns the interest applied.
    ///
    /// No rounding: the new balance is exactly `balance * (1 + interest_rate)`.
    pub fn apply_interest(&mut self) -> Money {
        let interest = self.core.balance * self.interest_rate;
        self.core.balance += interest;
        interest
    }
}

impl Account for SavingsAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn floor(&self) -> Money {
        Money::ZERO
    }

    /// Succeeds iff `0 < amount <= balance`.
    fn withdraw(&mut self, amount: Money) -> Result<Money, AccountError> {
        let available = self.core.balance;
        self.core
            .debit(amount, available, |requested, available| {
                AccountError::InsufficientFunds {
                    requested,
                    available,
                }
            })
    }

    fn detail(&self) -> Detail {
        Detail::InterestRate(self.interest_rate)
    }
}

/// A checking account that may overdraw down to `-overdraft_limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckingAccount {
    core: AccountCore,
    overdraft_limit: Money,
}

impl CheckingAccount {
    /// Creates a checking account.
    ///
    /// Negative `initial_balance` and `overdraft_limit` are clamped to zero
    /// rather than rejected.
    pub fn new(
        number: impl Into<String>,
        initial_balance: Money,
        overdraft_limit: Money,
    ) -> Self {
        CheckingAccount {
            core: AccountCore::new(number, initial_balance),
            overdraft_limit: overdraft_limit.clamp_non_negative(),
        }
    }

    pub fn overdraft_limit(&self) -> Money {
        self.overdraft_limit
    }

    /// Balance plus remaining overdraft.
    pub fn available(&self) -> Money {
        self.core.balance + self.overdraft_limit
    }
}

impl Account for CheckingAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Checking
    }

    fn floor(&self) -> Money {
        -self.overdraft_limit
    }

    /// Succeeds iff `0 < amount <= balance + overdraft_limit`.
    fn withdraw(&mut self, amount: Money) -> Result<Money, AccountError> {
        let available = self.available();
        self.core
            .debit(amount, available, |requested, available| {
                AccountError::OverdraftExceeded {
                    requested,
                    available,
                }
            })
    }

    fn detail(&self) -> Detail {
        Detail::OverdraftLimit(self.overdraft_limit)
    }
}

/// Variant-specific line of an [`AccountInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    InterestRate(Rate),
    OverdraftLimit(Money),
}

/// Human-readable projection of an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub number: String,
    pub balance: Money,
    pub detail: Detail,
}

impl fmt::Display for AccountInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Number: {}", self.number)?;
        writeln!(f, "Current Balance: {}", self.balance)?;
        match self.detail {
            Detail::InterestRate(rate) => write!(f, "Interest Rate: {}", rate),
            Detail::OverdraftLimit(limit) => write!(f, "Overdraft Limit: {}", limit),
        }
    }
}
