//! Fixed demonstration sequence run by the CLI.

use crate::account::{Account, CheckingAccount, SavingsAccount};
use crate::error::{AccountError, Result};
use crate::event::EventSink;
use crate::money::{Money, Rate};
use crate::teller::Teller;
use rust_decimal::Decimal;
use std::io::Write;

/// Header printed before each account in the polymorphic pass.
pub const POLYMORPHIC_HEADER: &str = "--- Account Information (Polymorphic) ---";

/// Runs the demonstration against a savings and a checking account,
/// writing a line per operation to `out`.
///
/// Returns both accounts in their final state.
pub fn run_demonstration<S: EventSink, W: Write>(
    teller: &mut Teller<S>,
    out: &mut W,
) -> Result<(SavingsAccount, CheckingAccount)> {
    let mut savings = SavingsAccount::new(
        "SA123",
        Money::from(1000),
        Rate::new(Decimal::new(2, 2)),
    );
    let mut checking = CheckingAccount::new("CA456", Money::from(500), Money::from(200));

    writeln!(out, "{}", teller.display(&savings))?;
    deposit(teller, &mut savings, Money::from(10500), out)?;
    withdraw(teller, &mut savings, Money::from(200), out)?;
    let interest = teller.apply_interest(&mut savings);
    writeln!(
        out,
        "Interest of {} applied. New balance: {}",
        interest,
        savings.balance()
    )?;
    writeln!(out, "{}", teller.display(&savings))?;
    writeln!(out)?;

    writeln!(out, "{}", teller.display(&checking))?;
    deposit(teller, &mut checking, Money::from(22200), out)?;
    withdraw(teller, &mut checking, Money::from(750), out)?;
    writeln!(out, "{}", teller.display(&checking))?;
    withdraw(teller, &mut checking, Money::from(1), out)?;
    writeln!(out)?;

    let accounts: [&dyn Account; 2] = [&savings, &checking];
    for account in accounts {
        writeln!(out, "{}", POLYMORPHIC_HEADER)?;
        writeln!(out, "{}", teller.display(account))?;
        writeln!(out)?;
    }

    Ok((savings, checking))
}

fn deposit<S: EventSink, A: Account, W: Write>(
    teller: &mut Teller<S>,
    account: &mut A,
    amount: Money,
    out: &mut W,
) -> Result<()> {
    match teller.deposit(account, amount) {
        Ok(balance) => writeln!(
            out,
            "Deposit of {} successful. New balance: {}",
            amount, balance
        )?,
        Err(_) => writeln!(out, "Deposit amount must be positive.")?,
    }
    Ok(())
}

fn withdraw<S: EventSink, A: Account, W: Write>(
    teller: &mut Teller<S>,
    account: &mut A,
    amount: Money,
    out: &mut W,
) -> Result<()> {
    match teller.withdraw(account, amount) {
        Ok(balance) => writeln!(
            out,
            "Withdrawal of {} successful. New balance: {}",
            amount, balance
        )?,
        Err(AccountError::InvalidAmount { .. }) => {
            writeln!(out, "Withdrawal amount must be positive.")?
        }
        Err(AccountError::InsufficientFunds { .. }) => {
            writeln!(out, "Insufficient funds for withdrawal.")?
        }
        Err(AccountError::OverdraftExceeded { .. }) => writeln!(
            out,
            "Withdrawal exceeds available balance and overdraft limit."
        )?,
    }
    Ok(())
}
