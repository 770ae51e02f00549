//! Debt-set builder
//!
//! Fluent API for assembling a `DebtSet` with automatic id assignment and
//! name-based lookups.

use crate::error::InvariantViolation;
use crate::model::{Debt, DebtId, DebtSet};

/// Builder for creating debt sets with automatic id assignment.
///
/// Ids are assigned in insertion order; names must be unique so they can be
/// used as lookup keys through `DebtSet::id_of`.
#[derive(Debug, Default)]
pub struct DebtSetBuilder {
    pending: Vec<PendingDebt>,
}

#[derive(Debug, Clone)]
struct PendingDebt {
    name: String,
    balance: f64,
    annual_rate: f64,
    minimum_payment: f64,
}

impl DebtSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a debt: name, outstanding balance, annual rate in percent, and
    /// contractual minimum payment per month.
    #[must_use]
    pub fn debt(
        mut self,
        name: impl Into<String>,
        balance: f64,
        annual_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        self.pending.push(PendingDebt {
            name: name.into(),
            balance,
            annual_rate,
            minimum_payment,
        });
        self
    }

    /// Resolve pending debts into a `DebtSet`, assigning sequential ids.
    pub fn build(self) -> Result<DebtSet, InvariantViolation> {
        let mut names = std::collections::HashSet::new();
        for pending in &self.pending {
            if !names.insert(pending.name.as_str()) {
                return Err(InvariantViolation::DuplicateDebtName(pending.name.clone()));
            }
        }

        let debts = self
            .pending
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                Debt::new(
                    DebtId(i as u16),
                    p.name,
                    p.balance,
                    p.annual_rate,
                    p.minimum_payment,
                )
            })
            .collect();

        DebtSet::new(debts)
    }
}
