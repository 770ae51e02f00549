//! Debt repayment simulation library
//!
//! This crate provides the simulation and scoring engine behind debtplan.
//! It supports:
//! - Closed-loop monthly amortization of a single liability
//! - Multi-debt payoff plans under the avalanche and snowball strategies,
//!   including the freed-minimum payment waterfall
//! - A two-strategy comparator with an interest-savings recommendation
//! - A weighted financial health score over an income/expense/savings/debt
//!   snapshot
//!
//! The engine is pure and deterministic: every operation is a synchronous
//! function of its inputs with no I/O and no shared mutable state. Callers
//! keep ownership of their data; simulations work on internal copies.
//!
//! # Builder DSL
//!
//! Use the fluent builder for ergonomic debt-set setup:
//!
//! ```ignore
//! use debtplan_core::config::{DebtSetBuilder, SimulationParameters};
//! use debtplan_core::model::Strategy;
//! use debtplan_core::simulate::simulate;
//!
//! let debts = DebtSetBuilder::new()
//!     .debt("Visa", 4_500.0, 22.9, 90.0)
//!     .debt("Car Loan", 12_000.0, 6.4, 260.0)
//!     .build()?;
//!
//! let params = SimulationParameters::new(Strategy::Avalanche).with_extra(200.0);
//! let plan = simulate(&debts, &params)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod amortize;
pub mod compare;
pub mod error;
pub mod health;
pub mod simulate;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use amortize::{amortize, amortize_capped};
pub use compare::{compare, compare_with_config};
pub use config::{CompareConfig, DebtSetBuilder, SimulationParameters};
pub use error::{AmortizeError, InvariantViolation, SimulateError};
pub use health::{FinancialSnapshot, Grade, HealthScore, ScoringConfig, score_health};
pub use model::{
    AmortizationSummary, Debt, DebtId, DebtSet, MonthlySnapshot, PayoffPlan, Strategy,
    StrategyComparison,
};
pub use simulate::simulate;
