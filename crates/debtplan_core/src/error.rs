use std::fmt;

use crate::model::{DebtId, PayoffPlan};

/// Errors from the single-debt amortizer.
///
/// All of these are expected domain outcomes returned to the caller, never
/// silently clamped away: a payment that cannot cover the first month's
/// interest must be reported as `PaymentTooLow`, not looped on forever.
#[derive(Debug, Clone, PartialEq)]
pub enum AmortizeError {
    /// Balance must be > 0 to amortize
    InvalidBalance(f64),
    /// Annual interest rate must be >= 0
    InvalidRate(f64),
    /// Monthly payment must be > 0
    InvalidPayment(f64),
    /// Payment does not exceed the first month's interest; the balance
    /// would never decrease
    PaymentTooLow {
        payment: f64,
        first_month_interest: f64,
    },
    /// The month cap was reached with a balance still outstanding
    DidNotConverge { months: u32 },
}

impl fmt::Display for AmortizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmortizeError::InvalidBalance(balance) => {
                write!(f, "balance must be positive, got {balance}")
            }
            AmortizeError::InvalidRate(rate) => {
                write!(f, "annual interest rate must be non-negative, got {rate}")
            }
            AmortizeError::InvalidPayment(payment) => {
                write!(f, "monthly payment must be positive, got {payment}")
            }
            AmortizeError::PaymentTooLow {
                payment,
                first_month_interest,
            } => {
                write!(
                    f,
                    "payment {payment:.2} does not cover the first month's interest \
                     {first_month_interest:.2}; the debt would never amortize"
                )
            }
            AmortizeError::DidNotConverge { months } => {
                write!(f, "balance still outstanding after {months} months")
            }
        }
    }
}

impl std::error::Error for AmortizeError {}

/// Programming-contract violations in caller-supplied data.
///
/// These are caller bugs, signaled fail-fast at construction rather than
/// handled gracefully mid-simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    DuplicateDebtId(DebtId),
    DuplicateDebtName(String),
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::DuplicateDebtId(id) => {
                write!(f, "duplicate debt id {id:?} in debt set")
            }
            InvariantViolation::DuplicateDebtName(name) => {
                write!(f, "duplicate debt name {name:?} in debt set")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Errors from the multi-debt strategy simulator.
#[derive(Debug, Clone)]
pub enum SimulateError {
    /// A debt failed domain validation; the whole simulation aborts rather
    /// than producing a plan with missing debts
    InvalidDebt {
        debt_id: DebtId,
        source: AmortizeError,
    },
    /// The month cap was reached with debts still open. The partial plan up
    /// to the cap is attached so the caller can still show progress.
    DidNotConverge { plan: Box<PayoffPlan> },
}

impl fmt::Display for SimulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulateError::InvalidDebt { debt_id, source } => {
                write!(f, "debt {debt_id:?}: {source}")
            }
            SimulateError::DidNotConverge { plan } => {
                write!(
                    f,
                    "debts still open after {} months ({} strategy)",
                    plan.payoff_months, plan.strategy
                )
            }
        }
    }
}

impl std::error::Error for SimulateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulateError::InvalidDebt { source, .. } => Some(source),
            SimulateError::DidNotConverge { .. } => None,
        }
    }
}

pub type AmortizeResult<T> = std::result::Result<T, AmortizeError>;
pub type SimulateResult<T> = std::result::Result<T, SimulateError>;
