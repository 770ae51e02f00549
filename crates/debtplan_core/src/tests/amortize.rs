//! Tests for single-debt amortization mechanics
//!
//! These tests verify:
//! - Exact month counts and totals for interest-free debts
//! - Interest-bearing payoff horizons
//! - The full error taxonomy, including `PaymentTooLow` detection
//! - The epsilon zero-clamp on the final balance

use crate::amortize::{amortize, amortize_capped};
use crate::error::AmortizeError;

/// Interest-free scenario A: 10k at 0% with $500/month is exactly 20 months
#[test]
fn test_zero_interest_exact_payoff() {
    let summary = amortize(10_000.0, 0.0, 500.0).unwrap();

    assert_eq!(summary.months, 20);
    assert_eq!(summary.years(), 1);
    assert_eq!(summary.remainder_months(), 8);
    assert!(
        summary.total_interest.abs() < 1e-9,
        "interest-free debt accrued interest: {}",
        summary.total_interest
    );
    assert!(
        (summary.total_paid - 10_000.0).abs() < 1e-9,
        "expected total paid 10000, got {}",
        summary.total_paid
    );
}

/// The final month pays only what is owed when the balance does not divide
/// evenly by the payment
#[test]
fn test_zero_interest_partial_final_month() {
    let summary = amortize(1_000.0, 0.0, 300.0).unwrap();

    // ceil(1000 / 300) = 4, with a $100 final payment
    assert_eq!(summary.months, 4);
    assert!((summary.total_paid - 1_000.0).abs() < 1e-9);
}

/// Scenario B: 10k at 18% with $500/month lands strictly between 20 and 30
/// months and accrues real interest
#[test]
fn test_interest_bearing_payoff() {
    let summary = amortize(10_000.0, 18.0, 500.0).unwrap();

    assert!(
        summary.months > 20 && summary.months < 30,
        "expected months in (20, 30), got {}",
        summary.months
    );
    assert!(summary.total_interest > 0.0);
    // Conservation: paid = principal + interest, within the zero-clamp slack
    assert!(
        (summary.total_paid - summary.total_interest - summary.principal).abs() < 0.02,
        "paid {} != principal {} + interest {}",
        summary.total_paid,
        summary.principal,
        summary.total_interest
    );
}

/// 50% APR with a $10 payment can never amortize and must be detected
/// up front, not after burning the whole month budget
#[test]
fn test_payment_too_low_detected() {
    let result = amortize(10_000.0, 50.0, 10.0);

    match result {
        Err(AmortizeError::PaymentTooLow {
            payment,
            first_month_interest,
        }) => {
            assert_eq!(payment, 10.0);
            // 10_000 * 0.50 / 12
            assert!((first_month_interest - 416.666_666_666_666_7).abs() < 1e-9);
        }
        other => panic!("expected PaymentTooLow, got {other:?}"),
    }
}

/// A payment exactly equal to the first month's interest is still too low
#[test]
fn test_payment_equal_to_interest_is_too_low() {
    // 12% APR on 10k = exactly $100/month interest
    let result = amortize(10_000.0, 12.0, 100.0);
    assert!(matches!(result, Err(AmortizeError::PaymentTooLow { .. })));

    // One cent above the interest amortizes, if very slowly
    let result = amortize_capped(10_000.0, 12.0, 100.01, u32::MAX);
    assert!(result.is_ok());
}

#[test]
fn test_invalid_inputs_rejected() {
    assert!(matches!(
        amortize(0.0, 5.0, 100.0),
        Err(AmortizeError::InvalidBalance(b)) if b == 0.0
    ));
    assert!(matches!(
        amortize(-50.0, 5.0, 100.0),
        Err(AmortizeError::InvalidBalance(_))
    ));
    assert!(matches!(
        amortize(1_000.0, -1.0, 100.0),
        Err(AmortizeError::InvalidRate(r)) if r == -1.0
    ));
    assert!(matches!(
        amortize(1_000.0, 5.0, 0.0),
        Err(AmortizeError::InvalidPayment(p)) if p == 0.0
    ));
}

/// Exceeding the cap is an explicit error carrying the months consumed
#[test]
fn test_cap_exceeded_is_did_not_converge() {
    let result = amortize_capped(10_000.0, 0.0, 500.0, 10);

    assert!(matches!(
        result,
        Err(AmortizeError::DidNotConverge { months: 10 })
    ));
}

/// Residual balances below a cent are clamped to zero rather than dragging
/// out an extra month of floating-point dust
#[test]
fn test_epsilon_clamp_absorbs_residual() {
    let summary = amortize(100.005, 0.0, 100.0).unwrap();

    assert_eq!(summary.months, 1);
    assert!((summary.total_paid - 100.0).abs() < 1e-9);
}
