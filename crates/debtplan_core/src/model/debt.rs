//! Debt and debt-set definitions
//!
//! A `Debt` is one liability: an outstanding balance, an annual interest
//! rate, and the contractual minimum payment. A `DebtSet` is the collection
//! a repayment plan is simulated over, unique by id.

use serde::{Deserialize, Serialize};

use super::ids::DebtId;
use crate::error::InvariantViolation;

/// Months per year, used to derive the monthly compounding rate.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// One liability in a repayment plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub debt_id: DebtId,
    /// Display name, unique within a set when built through `DebtSetBuilder`
    pub name: String,
    /// Outstanding principal. A debt at zero accrues no interest and makes
    /// no payment in any later month.
    pub balance: f64,
    /// Annual interest rate in percent (e.g. 19.99). Zero = interest-free.
    pub annual_rate: f64,
    /// Contractual minimum payment per month, required > 0 while balance > 0
    pub minimum_payment: f64,
}

impl Debt {
    /// Create a debt with an explicit id.
    #[must_use]
    pub fn new(
        debt_id: DebtId,
        name: impl Into<String>,
        balance: f64,
        annual_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            debt_id,
            name: name.into(),
            balance,
            annual_rate,
            minimum_payment,
        }
    }

    /// Monthly compounding rate derived from the annual percentage rate.
    #[must_use]
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 100.0 / MONTHS_PER_YEAR
    }

    /// Whether the debt still carries a balance.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.balance > 0.0
    }
}

/// Repayment ordering strategy.
///
/// The ordering is computed once at the start of a simulation and held fixed
/// for its whole duration; freed-up minimum payments roll into the next open
/// debt in that fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Highest interest rate first, ties broken by smaller balance
    Avalanche,
    /// Smallest balance first, ties broken by higher interest rate
    Snowball,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Avalanche => write!(f, "avalanche"),
            Strategy::Snowball => write!(f, "snowball"),
        }
    }
}

/// A collection of debts, unique by id.
///
/// Immutable for the duration of a simulation: the simulator works on an
/// internal copy and never mutates caller data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtSet {
    debts: Vec<Debt>,
}

impl DebtSet {
    /// Build a set from explicit debts, rejecting duplicate ids.
    pub fn new(debts: Vec<Debt>) -> Result<Self, InvariantViolation> {
        let mut seen = std::collections::HashSet::new();
        for debt in &debts {
            if !seen.insert(debt.debt_id) {
                return Err(InvariantViolation::DuplicateDebtId(debt.debt_id));
            }
        }
        Ok(Self { debts })
    }

    /// All debts, in insertion order (ordering carries no meaning).
    #[must_use]
    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Debt> {
        self.debts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.debts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }

    /// Look up a debt by id.
    #[must_use]
    pub fn get(&self, debt_id: DebtId) -> Option<&Debt> {
        self.debts.iter().find(|d| d.debt_id == debt_id)
    }

    /// Resolve a debt id from its display name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<DebtId> {
        self.debts
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.debt_id)
    }

    /// Sum of outstanding balances.
    #[must_use]
    pub fn total_balance(&self) -> f64 {
        self.debts.iter().map(|d| d.balance).sum()
    }

    /// Sum of minimum payments across open debts.
    #[must_use]
    pub fn total_minimum_payment(&self) -> f64 {
        self.debts
            .iter()
            .filter(|d| d.is_open())
            .map(|d| d.minimum_payment)
            .sum()
    }
}
