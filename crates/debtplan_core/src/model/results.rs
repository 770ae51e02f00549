//! Simulation results and snapshots
//!
//! Contains the output types from running simulations: the month-by-month
//! payoff plan, the two-strategy comparison, and the single-debt
//! amortization summary. All of these are plain immutable data suitable for
//! serialization by external report/export code.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::debt::Strategy;
use super::ids::DebtId;

/// One debt's activity in one simulated month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DebtMonth {
    pub debt_id: DebtId,
    /// Amount actually paid, capped so the debt is never overpaid past zero
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Balance after this month's payment (zero-clamped below epsilon)
    pub remaining_balance: f64,
}

/// One simulated month across all open debts.
///
/// Appended once per month and never mutated afterwards. Contains a row for
/// every debt that was open at the start of the month; retired debts
/// contribute nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// 1-based month index within the plan
    pub month: u32,
    pub debts: Vec<DebtMonth>,
    pub total_payment: f64,
    pub total_principal: f64,
    pub total_interest: f64,
}

impl MonthlySnapshot {
    /// Get this month's row for a specific debt, if it was open.
    #[must_use]
    pub fn debt(&self, debt_id: DebtId) -> Option<&DebtMonth> {
        self.debts.iter().find(|d| d.debt_id == debt_id)
    }
}

/// Complete results from simulating one repayment strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffPlan {
    pub strategy: Strategy,

    /// Priority ordering computed once at the start and held fixed for the
    /// whole plan. Freed minimums roll into the first open debt in this
    /// order, never a re-sorted one.
    pub debt_order: Vec<DebtId>,

    /// Chronological month-by-month snapshots
    pub months: Vec<MonthlySnapshot>,

    /// Months until every debt reached zero (or the cap, for partial plans)
    pub payoff_months: u32,
    pub total_interest_paid: f64,
    pub total_paid: f64,

    /// Calendar date the last debt retires, when the simulation was given a
    /// start date and converged
    pub debt_free_date: Option<jiff::civil::Date>,

    /// Interest accrued per debt over the plan
    pub interest_by_debt: FxHashMap<DebtId, f64>,

    /// Month (1-based) each debt reached zero balance
    pub payoff_month_by_debt: FxHashMap<DebtId, u32>,
}

impl PayoffPlan {
    /// Whole years in the payoff horizon.
    #[must_use]
    pub fn years(&self) -> u32 {
        self.payoff_months / 12
    }

    /// Months beyond the whole years in the payoff horizon.
    #[must_use]
    pub fn remainder_months(&self) -> u32 {
        self.payoff_months % 12
    }

    /// Month a specific debt retired, if it did within the plan.
    #[must_use]
    pub fn payoff_month_of(&self, debt_id: DebtId) -> Option<u32> {
        self.payoff_month_by_debt.get(&debt_id).copied()
    }

    /// Total interest accrued on a specific debt over the plan.
    #[must_use]
    pub fn interest_paid_on(&self, debt_id: DebtId) -> f64 {
        self.interest_by_debt.get(&debt_id).copied().unwrap_or(0.0)
    }

    /// Get the snapshot for a specific 1-based month.
    #[must_use]
    pub fn month(&self, month: u32) -> Option<&MonthlySnapshot> {
        self.months.get(month.checked_sub(1)? as usize)
    }
}

/// Result of running both strategies over the same debt set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub avalanche: PayoffPlan,
    pub snowball: PayoffPlan,

    /// `snowball.total_interest_paid - avalanche.total_interest_paid`;
    /// positive means avalanche is cheaper
    pub interest_savings: f64,

    /// `snowball.payoff_months - avalanche.payoff_months`
    pub months_difference: i32,

    pub recommended: Strategy,
}

impl StrategyComparison {
    /// The plan for the recommended strategy.
    #[must_use]
    pub fn recommended_plan(&self) -> &PayoffPlan {
        match self.recommended {
            Strategy::Avalanche => &self.avalanche,
            Strategy::Snowball => &self.snowball,
        }
    }
}

/// Closed-loop amortization of a single debt under a fixed payment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AmortizationSummary {
    /// Original principal
    pub principal: f64,
    /// Months until the balance reached zero
    pub months: u32,
    pub total_paid: f64,
    pub total_interest: f64,
}

impl AmortizationSummary {
    /// Whole years in the payoff horizon.
    #[must_use]
    pub fn years(&self) -> u32 {
        self.months / 12
    }

    /// Months beyond the whole years in the payoff horizon.
    #[must_use]
    pub fn remainder_months(&self) -> u32 {
        self.months % 12
    }
}
