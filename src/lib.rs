//! # Banking System
//!
//! Savings and checking account models with deposit, withdrawal, overdraft
//! and interest rules.
//!
//! ## Design Principles
//!
//! - **Exact decimal arithmetic**: `rust_decimal` values, shown to 4 places
//! - **Pure transitions**: Account operations return `Result` and never log
//! - **Injected observers**: A [`Teller`] reports each operation to an [`EventSink`]
//! - **Lenient construction**: Negative initial values are clamped to zero
//!
//! ## Example
//!
//! ```
//! use banking_system::{Account, CheckingAccount, Money, NoopSink, Teller};
//!
//! let mut checking = CheckingAccount::new("CA1", Money::from(500), Money::from(200));
//! let mut teller = Teller::new(NoopSink);
//! teller.withdraw(&mut checking, Money::from(600)).unwrap();
//! assert_eq!(checking.balance(), Money::from(-100));
//! ```

pub mod account;
pub mod demo;
pub mod error;
pub mod event;
pub mod money;
pub mod teller;

pub use account::{Account, AccountInfo, AccountKind, CheckingAccount, Detail, SavingsAccount};
pub use error::{AccountError, BankError, Result};
pub use event::{
    AccountEvent, CsvJournal, EventSink, LogSink, MetricsSink, NoopSink, Operation, Outcome,
};
pub use money::{Money, Rate};
pub use teller::Teller;
