//! Engine data model
//!
//! Input types (`Debt`, `DebtSet`, `Strategy`) and output types
//! (`PayoffPlan`, `MonthlySnapshot`, `StrategyComparison`,
//! `AmortizationSummary`). All output types are plain immutable data.

pub mod debt;
pub mod ids;
pub mod results;

pub use debt::{Debt, DebtSet, MONTHS_PER_YEAR, Strategy};
pub use ids::DebtId;
pub use results::{
    AmortizationSummary, DebtMonth, MonthlySnapshot, PayoffPlan, StrategyComparison,
};
