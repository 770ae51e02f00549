//! Single-debt amortizer
//!
//! Closed-loop monthly amortization of one liability under a fixed payment:
//! each month accrues interest on the remaining balance, the payment covers
//! interest first, and the remainder retires principal. The loop is bounded
//! by a month cap and every failure mode is an explicit error, never an
//! infinite loop or a silent truncation.

use crate::config::{BALANCE_EPSILON, DEFAULT_MAX_MONTHS};
use crate::error::{AmortizeError, AmortizeResult};
use crate::model::{AmortizationSummary, MONTHS_PER_YEAR};

/// Amortize a single debt with the default month cap.
///
/// `annual_rate` is in percent; zero means interest-free.
pub fn amortize(
    balance: f64,
    annual_rate: f64,
    monthly_payment: f64,
) -> AmortizeResult<AmortizationSummary> {
    amortize_capped(balance, annual_rate, monthly_payment, DEFAULT_MAX_MONTHS)
}

/// Amortize a single debt with a caller-chosen month cap.
///
/// Errors are returned rather than clamped: a non-positive balance, a
/// negative rate, a non-positive payment, a payment that cannot cover the
/// first month's interest, or a balance still outstanding at the cap.
pub fn amortize_capped(
    balance: f64,
    annual_rate: f64,
    monthly_payment: f64,
    max_months: u32,
) -> AmortizeResult<AmortizationSummary> {
    if balance <= 0.0 {
        return Err(AmortizeError::InvalidBalance(balance));
    }
    if annual_rate < 0.0 {
        return Err(AmortizeError::InvalidRate(annual_rate));
    }
    if monthly_payment <= 0.0 {
        return Err(AmortizeError::InvalidPayment(monthly_payment));
    }

    let monthly_rate = annual_rate / 100.0 / MONTHS_PER_YEAR;
    let first_month_interest = balance * monthly_rate;
    if monthly_payment <= first_month_interest {
        return Err(AmortizeError::PaymentTooLow {
            payment: monthly_payment,
            first_month_interest,
        });
    }

    let mut remaining = balance;
    let mut months = 0u32;
    let mut total_paid = 0.0;
    let mut total_interest = 0.0;

    while remaining > 0.0 {
        if months >= max_months {
            return Err(AmortizeError::DidNotConverge { months });
        }

        let interest = remaining * monthly_rate;
        // Final month pays only what is owed, never past the payoff point
        let payment = monthly_payment.min(remaining + interest);
        let principal = payment - interest;

        remaining -= principal;
        if remaining < BALANCE_EPSILON {
            remaining = 0.0;
        }

        total_paid += payment;
        total_interest += interest;
        months += 1;
    }

    Ok(AmortizationSummary {
        principal: balance,
        months,
        total_paid,
        total_interest,
    })
}
