//! Simulation configuration
//!
//! `SimulationParameters` drives one strategy run; `CompareConfig` drives the
//! two-strategy comparison. Every tunable the engine uses is a named value
//! here with an explicit default, never a magic literal buried in a loop.
//!
//! # Builder DSL
//!
//! For an ergonomic way to assemble a debt set, use the builder:
//!
//! ```ignore
//! use debtplan_core::config::DebtSetBuilder;
//!
//! let debts = DebtSetBuilder::new()
//!     .debt("Visa", 4_500.0, 22.9, 90.0)
//!     .debt("Car Loan", 12_000.0, 6.4, 260.0)
//!     .debt("Student Loan", 28_000.0, 4.9, 310.0)
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::model::Strategy;

pub mod builder;

pub use builder::DebtSetBuilder;

/// Safety cap on simulation length: 600 months = 50 years.
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// Balances below this many currency units are clamped to exactly zero to
/// absorb floating-point drift across hundreds of simulated months.
pub const BALANCE_EPSILON: f64 = 0.01;

/// When the interest gap between strategies is smaller than this many
/// currency units, the comparator prefers Snowball: psychological momentum
/// wins when the cost difference is negligible.
pub const SNOWBALL_PREFERENCE_THRESHOLD: f64 = 1000.0;

fn default_max_months() -> u32 {
    DEFAULT_MAX_MONTHS
}

fn default_recommendation_threshold() -> f64 {
    SNOWBALL_PREFERENCE_THRESHOLD
}

/// Parameters for one strategy simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Budget beyond the minimums, allocated to exactly one target debt per
    /// month according to the strategy ordering. Must be >= 0.
    pub extra_monthly_payment: f64,

    pub strategy: Strategy,

    /// Month cap; exceeding it is reported as a `DidNotConverge` error, not
    /// a silent truncation
    #[serde(default = "default_max_months")]
    pub max_months: u32,

    /// When set, the plan also reports the calendar debt-free date
    #[serde(default)]
    pub start_date: Option<jiff::civil::Date>,
}

impl SimulationParameters {
    /// Parameters for a strategy with no extra budget.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            extra_monthly_payment: 0.0,
            strategy,
            max_months: DEFAULT_MAX_MONTHS,
            start_date: None,
        }
    }

    #[must_use]
    pub fn with_extra(mut self, extra_monthly_payment: f64) -> Self {
        self.extra_monthly_payment = extra_monthly_payment;
        self
    }

    #[must_use]
    pub fn with_max_months(mut self, max_months: u32) -> Self {
        self.max_months = max_months;
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, start_date: jiff::civil::Date) -> Self {
        self.start_date = Some(start_date);
        self
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::new(Strategy::Avalanche)
    }
}

/// Configuration for the two-strategy comparator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Interest gap below which Snowball is recommended regardless of cost
    #[serde(default = "default_recommendation_threshold")]
    pub recommendation_threshold: f64,

    #[serde(default = "default_max_months")]
    pub max_months: u32,

    #[serde(default)]
    pub start_date: Option<jiff::civil::Date>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            recommendation_threshold: SNOWBALL_PREFERENCE_THRESHOLD,
            max_months: DEFAULT_MAX_MONTHS,
            start_date: None,
        }
    }
}

impl CompareConfig {
    #[must_use]
    pub fn with_threshold(mut self, recommendation_threshold: f64) -> Self {
        self.recommendation_threshold = recommendation_threshold;
        self
    }
}
