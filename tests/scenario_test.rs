//! Account behaviour through the public API.
//!
//! Covers construction clamping, deposit/withdraw rules for both variants,
//! interest, and the reference scenarios.

use banking_system::{
    Account, AccountError, AccountEvent, CheckingAccount, Money, Operation, Outcome, Rate,
    SavingsAccount, Teller,
};
use std::str::FromStr;

fn dec(s: &str) -> Money {
    Money::from_str(s).unwrap()
}

fn rate(s: &str) -> Rate {
    Rate::from_str(s).unwrap()
}

fn outcomes(events: &[AccountEvent]) -> Vec<Outcome> {
    events.iter().map(|e| e.outcome).collect()
}

// ==================== CONSTRUCTION ====================

#[test]
fn test_negative_initial_balance_clamps_to_zero() {
    for initial in ["-0.0001", "-1", "-1000000"] {
        let savings = SavingsAccount::new("SA", dec(initial), rate("0.01"));
        let checking = CheckingAccount::new("CA", dec(initial), dec("10"));
        assert_eq!(savings.balance(), Money::ZERO);
        assert_eq!(checking.balance(), Money::ZERO);
    }
}

#[test]
fn test_negative_rate_and_limit_clamp_to_zero() {
    let savings = SavingsAccount::new("SA", dec("10"), rate("-0.05"));
    let checking = CheckingAccount::new("CA", dec("10"), dec("-100"));

    assert_eq!(savings.interest_rate(), Rate::ZERO);
    assert_eq!(checking.overdraft_limit(), Money::ZERO);
}

#[test]
fn test_account_number_is_kept() {
    let savings = SavingsAccount::new("SA-001", Money::ZERO, Rate::ZERO);
    assert_eq!(savings.number(), "SA-001");
    assert_eq!(savings.info().number, "SA-001");
}

// ==================== DEPOSIT ====================

#[test]
fn test_deposit_positive_amounts() {
    let mut account = CheckingAccount::new("CA", dec("1.5"), dec("0"));

    for amount in ["0.0001", "1", "999999.9999"] {
        let before = account.balance();
        assert_eq!(account.deposit(dec(amount)), Ok(before + dec(amount)));
    }
    assert_eq!(account.balance().to_string(), "1000002.5000");
}

#[test]
fn test_deposit_non_positive_amounts_leave_balance() {
    let mut account = SavingsAccount::new("SA", dec("10"), rate("0.01"));

    for amount in ["0", "-0.0001", "-50"] {
        assert_eq!(
            account.deposit(dec(amount)),
            Err(AccountError::InvalidAmount {
                amount: dec(amount)
            })
        );
        assert_eq!(account.balance(), dec("10"));
    }
}

#[test]
fn test_amounts_below_display_precision() {
    let tiny = dec("0.00001");
    let mut savings = SavingsAccount::new("SA", Money::ZERO, rate("0"));
    let mut checking = CheckingAccount::new("CA", Money::ZERO, Money::ZERO);

    assert_eq!(savings.deposit(tiny), Ok(tiny));
    assert_eq!(savings.withdraw(tiny), Ok(Money::ZERO));
    assert!(matches!(
        savings.withdraw(tiny),
        Err(AccountError::InsufficientFunds { .. })
    ));

    assert_eq!(checking.deposit(tiny), Ok(tiny));
    assert_eq!(checking.withdraw(tiny), Ok(Money::ZERO));
}

// ==================== SAVINGS WITHDRAW ====================

#[test]
fn test_savings_withdraw_boundaries() {
    let cases = [
        ("0", Some(Outcome::InvalidAmount)),
        ("-5", Some(Outcome::InvalidAmount)),
        ("0.0001", None),
        ("100", None),
        ("100.0001", Some(Outcome::InsufficientFunds)),
    ];

    for (amount, failure) in cases {
        let mut account = SavingsAccount::new("SA", dec("100"), rate("0"));
        let result = account.withdraw(dec(amount));

        match failure {
            None => {
                assert_eq!(result, Ok(dec("100") - dec(amount)));
            }
            Some(outcome) => {
                assert_eq!(Outcome::from(&result.unwrap_err()), outcome);
                assert_eq!(account.balance(), dec("100"));
            }
        }
    }
}

#[test]
fn test_savings_never_goes_negative() {
    let mut account = SavingsAccount::new("SA", dec("30"), rate("0"));
    let mut teller = Teller::new(Vec::new());

    for _ in 0..5 {
        let _ = teller.withdraw(&mut account, dec("10"));
        assert!(account.balance() >= account.floor());
    }

    assert_eq!(account.balance(), Money::ZERO);
    assert_eq!(
        outcomes(teller.sink()),
        vec![
            Outcome::Success,
            Outcome::Success,
            Outcome::Success,
            Outcome::InsufficientFunds,
            Outcome::InsufficientFunds,
        ]
    );
}

// ==================== CHECKING WITHDRAW ====================

#[test]
fn test_checking_withdraw_boundaries() {
    let cases = [
        ("0", Some(Outcome::InvalidAmount)),
        ("-1", Some(Outcome::InvalidAmount)),
        ("50", None),
        ("150", None),
        ("150.0001", Some(Outcome::OverdraftExceeded)),
    ];

    for (amount, failure) in cases {
        let mut account = CheckingAccount::new("CA", dec("50"), dec("100"));
        let result = account.withdraw(dec(amount));

        match failure {
            None => {
                assert_eq!(result, Ok(dec("50") - dec(amount)));
                assert!(account.balance() >= account.floor());
            }
            Some(outcome) => {
                assert_eq!(Outcome::from(&result.unwrap_err()), outcome);
                assert_eq!(account.balance(), dec("50"));
            }
        }
    }
}

#[test]
fn test_checking_zero_limit_behaves_like_savings_floor() {
    let mut account = CheckingAccount::new("CA", dec("10"), dec("-5"));

    assert!(account.withdraw(dec("10.0001")).is_err());
    assert_eq!(account.withdraw(dec("10")), Ok(Money::ZERO));
}

// ==================== INTEREST ====================

#[test]
fn test_interest_multiplies_balance() {
    let cases = [
        ("100", "0.05", "105.0000"),
        ("1234.5678", "0", "1234.5678"),
        ("0", "0.5", "0.0000"),
        ("200", "1", "400.0000"),
        ("10.10", "0.1", "11.1100"),
    ];

    for (balance, r, expected) in cases {
        let mut account = SavingsAccount::new("SA", dec(balance), rate(r));
        account.apply_interest();
        assert_eq!(account.balance().to_string(), expected);
    }
}

#[test]
fn test_interest_is_exact_below_display_precision() {
    let mut account = SavingsAccount::new("SA", dec("0.0003"), rate("0.5"));

    assert_eq!(account.apply_interest(), dec("0.00015"));
    assert_eq!(account.balance(), dec("0.00045"));
    assert_eq!(account.balance().to_string(), "0.0005");
}

#[test]
fn test_interest_compounds_without_drift() {
    let mut account = SavingsAccount::new("SA", dec("1000"), rate("0.0125"));
    let mut expected = dec("1000");

    for _ in 0..4 {
        account.apply_interest();
        expected = expected + expected * rate("0.0125");
        assert_eq!(account.balance(), expected);
    }

    assert_eq!(account.balance(), dec("1050.945336914062500"));
}

// ==================== SCENARIOS ====================

#[test]
fn test_scenario_savings() {
    let mut teller = Teller::new(Vec::new());
    let mut account = SavingsAccount::new("SA1", dec("1000"), rate("0.02"));

    assert_eq!(teller.deposit(&mut account, dec("10500")), Ok(dec("11500")));
    assert_eq!(teller.withdraw(&mut account, dec("200")), Ok(dec("11300")));
    assert_eq!(teller.apply_interest(&mut account), dec("226"));
    assert_eq!(account.balance(), dec("11526"));

    let ops: Vec<Operation> = teller.sink().iter().map(|e| e.operation).collect();
    assert_eq!(
        ops,
        vec![Operation::Deposit, Operation::Withdraw, Operation::ApplyInterest]
    );
    assert!(teller.sink().iter().all(|e| e.outcome.is_success()));
}

#[test]
fn test_scenario_checking_with_overdraft() {
    let mut teller = Teller::new(Vec::new());
    let mut account = CheckingAccount::new("CA1", dec("500"), dec("200"));

    assert_eq!(teller.deposit(&mut account, dec("22200")), Ok(dec("22700")));
    assert_eq!(teller.withdraw(&mut account, dec("750")), Ok(dec("21950")));
    assert_eq!(teller.withdraw(&mut account, dec("1")), Ok(dec("21949")));

    // Only amounts beyond balance + limit fail
    assert_eq!(
        teller.withdraw(&mut account, dec("22149.0001")),
        Err(AccountError::OverdraftExceeded {
            requested: dec("22149.0001"),
            available: dec("22149"),
        })
    );
    assert_eq!(teller.withdraw(&mut account, dec("22149")), Ok(dec("-200")));
}

#[test]
fn test_scenario_checking_overdraft_exceeded() {
    let mut teller = Teller::new(Vec::new());
    let mut account = CheckingAccount::new("CA2", dec("0"), dec("100"));

    let result = teller.withdraw(&mut account, dec("150"));

    assert!(matches!(result, Err(AccountError::OverdraftExceeded { .. })));
    assert_eq!(account.balance(), Money::ZERO);
    assert_eq!(outcomes(teller.sink()), vec![Outcome::OverdraftExceeded]);
}

#[test]
fn test_polymorphic_accounts_share_teller() {
    let mut teller = Teller::new(Vec::new());
    let mut accounts: Vec<Box<dyn Account>> = vec![
        Box::new(SavingsAccount::new("SA", dec("100"), rate("0.01"))),
        Box::new(CheckingAccount::new("CA", dec("100"), dec("50"))),
    ];

    for account in accounts.iter_mut() {
        let _ = teller.withdraw(account.as_mut(), dec("120"));
    }

    assert_eq!(accounts[0].balance(), dec("100"));
    assert_eq!(accounts[1].balance(), dec("-20"));
    assert_eq!(
        outcomes(teller.sink()),
        vec![Outcome::InsufficientFunds, Outcome::Success]
    );
}
