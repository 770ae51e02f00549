//! Debts profile file
//!
//! A profile is a human-editable YAML document describing the household's
//! liabilities, the extra monthly budget, and an optional point-in-time
//! snapshot for health scoring:
//!
//! ```yaml
//! extra_monthly_payment: 250
//! start_date: 2026-01-01
//! debts:
//!   - name: Visa
//!     balance: 4500
//!     annual_rate: 22.9
//!     minimum_payment: 90
//! snapshot:
//!   monthly_income: 5200
//!   monthly_expenses: 3900
//!   total_savings: 8000
//! ```

use std::fs;
use std::path::Path;

use color_eyre::eyre::{WrapErr, eyre};
use serde::Deserialize;

use debtplan_core::config::DebtSetBuilder;
use debtplan_core::error::InvariantViolation;
use debtplan_core::health::FinancialSnapshot;
use debtplan_core::model::DebtSet;

/// Top-level profile document.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub debts: Vec<DebtEntry>,

    /// Budget beyond the minimums; the `--extra` flag overrides this
    #[serde(default)]
    pub extra_monthly_payment: f64,

    /// When set, plans also report the calendar debt-free date.
    /// ISO format, e.g. `2026-01-01`.
    #[serde(default)]
    pub start_date: Option<String>,

    /// Point-in-time finances for the `score` command
    #[serde(default)]
    pub snapshot: Option<SnapshotEntry>,
}

/// One liability in the profile.
#[derive(Debug, Clone, Deserialize)]
pub struct DebtEntry {
    pub name: String,
    pub balance: f64,
    /// Annual rate in percent
    pub annual_rate: f64,
    pub minimum_payment: f64,
}

/// Snapshot block for health scoring. Debt totals default to sums over the
/// profile's debts when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotEntry {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    #[serde(default)]
    pub total_savings: f64,
    #[serde(default)]
    pub total_debt_balance: Option<f64>,
    #[serde(default)]
    pub monthly_debt_payment: Option<f64>,
}

impl Profile {
    /// Load and parse a profile from a YAML file.
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("reading profile {}", path.display()))?;
        let profile: Profile = serde_saphyr::from_str(&content)
            .wrap_err_with(|| format!("parsing profile {}", path.display()))?;
        tracing::debug!(
            "loaded profile with {} debts from {}",
            profile.debts.len(),
            path.display()
        );
        Ok(profile)
    }

    /// Parse the optional plan start date.
    pub fn parsed_start_date(&self) -> color_eyre::Result<Option<jiff::civil::Date>> {
        self.start_date
            .as_deref()
            .map(|s| {
                s.parse::<jiff::civil::Date>()
                    .map_err(|_| eyre!("invalid start_date {s:?}, expected YYYY-MM-DD"))
            })
            .transpose()
    }

    /// Assemble the engine's debt set from the profile entries.
    pub fn debt_set(&self) -> Result<DebtSet, InvariantViolation> {
        let mut builder = DebtSetBuilder::new();
        for entry in &self.debts {
            builder = builder.debt(
                entry.name.clone(),
                entry.balance,
                entry.annual_rate,
                entry.minimum_payment,
            );
        }
        builder.build()
    }

    /// Assemble the scoring snapshot, defaulting debt totals from the
    /// profile's debts when the snapshot block omits them.
    pub fn financial_snapshot(&self) -> Option<FinancialSnapshot> {
        let entry = self.snapshot.as_ref()?;

        let total_debt_balance = entry
            .total_debt_balance
            .unwrap_or_else(|| self.debts.iter().map(|d| d.balance).sum());
        let monthly_debt_payment = entry
            .monthly_debt_payment
            .unwrap_or_else(|| self.debts.iter().map(|d| d.minimum_payment).sum());

        Some(FinancialSnapshot {
            monthly_income: entry.monthly_income,
            monthly_expenses: entry.monthly_expenses,
            total_debt_balance,
            total_savings: entry.total_savings,
            monthly_debt_payment,
        })
    }
}
