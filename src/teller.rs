//! Observed entry points for account operations.
//!
//! The teller runs the pure account operation first and then reports exactly
//! one [`AccountEvent`] to its sink. The account's behaviour is identical
//! whatever sink is installed.

use crate::account::{Account, AccountInfo, SavingsAccount};
use crate::error::AccountError;
use crate::event::{AccountEvent, EventSink, Operation, Outcome};
use crate::money::Money;

/// Runs account operations and notifies an [`EventSink`] of each result.
pub struct Teller<S: EventSink> {
    sink: S,
}

impl<S: EventSink> Teller<S> {
    pub fn new(sink: S) -> Self {
        Teller { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Deposits into any account variant.
    pub fn deposit<A: Account + ?Sized>(
        &mut self,
        account: &mut A,
        amount: Money,
    ) -> Result<Money, AccountError> {
        let result = account.deposit(amount);
        self.report(Operation::Deposit, &*account, Some(amount), &result);
        result
    }

    /// Withdraws under the account variant's own funds rule.
    pub fn withdraw<A: Account + ?Sized>(
        &mut self,
        account: &mut A,
        amount: Money,
    ) -> Result<Money, AccountError> {
        let result = account.withdraw(amount);
        self.report(Operation::Withdraw, &*account, Some(amount), &result);
        result
    }

    /// Applies interest to a savings account and returns the interest credited.
    pub fn apply_interest(&mut self, account: &mut SavingsAccount) -> Money {
        let interest = account.apply_interest();
        self.emit(Operation::ApplyInterest, &*account, Some(interest), Outcome::Success);
        interest
    }

    pub fn display<A: Account + ?Sized>(&mut self, account: &A) -> AccountInfo {
        let info = account.info();
        self.emit(Operation::Display, account, None, Outcome::Success);
        info
    }

    fn report<A: Account + ?Sized>(
        &mut self,
        operation: Operation,
        account: &A,
        amount: Option<Money>,
        result: &Result<Money, AccountError>,
    ) {
        let outcome = match result {
            Ok(_) => Outcome::Success,
            Err(e) => Outcome::from(e),
        };
        self.emit(operation, account, amount, outcome);
    }

    fn emit<A: Account + ?Sized>(
        &mut self,
        operation: Operation,
        account: &A,
        amount: Option<Money>,
        outcome: Outcome,
    ) {
        self.sink.record(&AccountEvent {
            operation,
            account: account.number().to_string(),
            kind: account.kind(),
            amount,
            outcome,
            balance: account.balance(),
        });
    }
}
