//! Account events and the sinks that consume them.
//!
//! The account model never depends on a sink: events are produced after a
//! state transition has already happened (or been rejected) and are purely
//! informational.

use crate::account::AccountKind;
use crate::error::{AccountError, Result};
use crate::money::Money;
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

/// The operation an event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Deposit,
    Withdraw,
    ApplyInterest,
    Display,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Deposit => "deposit",
            Operation::Withdraw => "withdraw",
            Operation::ApplyInterest => "apply_interest",
            Operation::Display => "display",
        };
        f.write_str(name)
    }
}

/// Result classification of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    InvalidAmount,
    InsufficientFunds,
    OverdraftExceeded,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl From<&AccountError> for Outcome {
    fn from(err: &AccountError) -> Self {
        match err {
            AccountError::InvalidAmount { .. } => Outcome::InvalidAmount,
            AccountError::InsufficientFunds { .. } => Outcome::InsufficientFunds,
            AccountError::OverdraftExceeded { .. } => Outcome::OverdraftExceeded,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Success => "success",
            Outcome::InvalidAmount => "invalid_amount",
            Outcome::InsufficientFunds => "insufficient_funds",
            Outcome::OverdraftExceeded => "overdraft_exceeded",
        };
        f.write_str(name)
    }
}

/// One observed account operation.
///
/// `amount` is the requested amount for deposits and withdrawals, the
/// credited interest for `ApplyInterest`, and absent for `Display`.
/// `balance` is the balance after the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountEvent {
    pub operation: Operation,
    pub account: String,
    pub kind: AccountKind,
    pub amount: Option<Money>,
    pub outcome: Outcome,
    pub balance: Money,
}

/// Receiver of account events.
pub trait EventSink {
    fn record(&mut self, event: &AccountEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&mut self, _event: &AccountEvent) {}
}

/// In-memory recorder.
impl EventSink for Vec<AccountEvent> {
    fn record(&mut self, event: &AccountEvent) {
        self.push(event.clone());
    }
}

/// Fans each event out to both sinks, left first.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn record(&mut self, event: &AccountEvent) {
        self.0.record(event);
        self.1.record(event);
    }
}

/// Records only when a sink is present.
impl<S: EventSink> EventSink for Option<S> {
    fn record(&mut self, event: &AccountEvent) {
        if let Some(sink) = self {
            sink.record(event);
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: &AccountEvent) {
        (**self).record(event);
    }
}

/// Writes events through the `log` facade.
///
/// Successful mutations are logged at info level, rejections at warn level
/// and displays at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&mut self, event: &AccountEvent) {
        let amount = event
            .amount
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());

        match (event.operation, event.outcome) {
            (Operation::Display, _) => debug!(
                "{} account {}: displayed, balance {}",
                event.kind, event.account, event.balance
            ),
            (op, Outcome::Success) => info!(
                "{} account {}: {} {} succeeded, balance {}",
                event.kind, event.account, op, amount, event.balance
            ),
            (op, outcome) => warn!(
                "{} account {}: {} {} rejected ({}), balance {}",
                event.kind, event.account, op, amount, outcome, event.balance
            ),
        }
    }
}

/// Counters over successful operations, plus rejection counts by outcome.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MetricsSink {
    pub deposit_count: u64,
    pub deposit_amount: Money,
    pub withdraw_count: u64,
    pub withdraw_amount: Money,
    pub interest_count: u64,
    pub interest_amount: Money,
    pub display_count: u64,
    pub rejected: BTreeMap<Outcome, u64>,
}

impl MetricsSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rejected operations.
    pub fn rejected_total(&self) -> u64 {
        self.rejected.values().sum()
    }

    /// Logs the current counters at info level.
    pub fn log_summary(&self) {
        info!(
            "deposits: {} ({}), withdrawals: {} ({}), interest: {} ({}), displays: {}, rejected: {}",
            self.deposit_count,
            self.deposit_amount,
            self.withdraw_count,
            self.withdraw_amount,
            self.interest_count,
            self.interest_amount,
            self.display_count,
            self.rejected_total()
        );
    }
}

impl EventSink for MetricsSink {
    fn record(&mut self, event: &AccountEvent) {
        if !event.outcome.is_success() {
            *self.rejected.entry(event.outcome).or_insert(0) += 1;
            return;
        }

        let amount = event.amount.unwrap_or_default();
        match event.operation {
            Operation::Deposit => {
                self.deposit_count += 1;
                self.deposit_amount += amount;
            }
            Operation::Withdraw => {
                self.withdraw_count += 1;
                self.withdraw_amount += amount;
            }
            Operation::ApplyInterest => {
                self.interest_count += 1;
                self.interest_amount += amount;
            }
            Operation::Display => self.display_count += 1,
        }
    }
}

/// Writes each event as a CSV row.
///
/// Columns: `operation,account,kind,amount,outcome,balance`. The header is
/// written with the first event. Write failures are logged and the event is
/// dropped; call [`CsvJournal::finish`] to flush and surface I/O errors.
pub struct CsvJournal<W: Write> {
    writer: csv::Writer<W>,
    failed: bool,
}

impl<W: Write> CsvJournal<W> {
    pub fn new(writer: W) -> Self {
        CsvJournal {
            writer: csv::Writer::from_writer(writer),
            failed: false,
        }
    }

    /// Flushes the journal and returns the underlying writer.
    pub fn finish(self) -> Result<W> {
        let failed = self.failed;
        let inner = self
            .writer
            .into_inner()
            .map_err(|e| std::io::Error::new(e.error().kind(), e.error().to_string()))?;
        if failed {
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "one or more journal rows could not be written",
            )
            .into());
        }
        Ok(inner)
    }
}

impl<W: Write> EventSink for CsvJournal<W> {
    fn record(&mut self, event: &AccountEvent) {
        if let Err(e) = self.writer.serialize(event) {
            warn!("Failed to journal {} on {}: {}", event.operation, event.account, e);
            self.failed = true;
        }
    }
}
