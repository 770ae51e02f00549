//! Financial health scoring
//!
//! Stateless scoring of a point-in-time financial snapshot into a weighted
//! composite 0-100 score with per-category sub-scores and a letter grade.
//! Recomputed fresh on every call; there is no stored history. Every ratio
//! guards its denominator: a zero income or zero expenses contributes a
//! category score of 0, never NaN or infinity.

use serde::{Deserialize, Serialize};

/// Weight of the debt-management category in the composite score.
pub const DEBT_MANAGEMENT_WEIGHT: f64 = 0.25;
/// Weight of the savings-rate category in the composite score.
pub const SAVINGS_RATE_WEIGHT: f64 = 0.20;
/// Weight of the budget-adherence category in the composite score.
pub const BUDGET_ADHERENCE_WEIGHT: f64 = 0.20;
/// Weight of the emergency-fund category in the composite score.
pub const EMERGENCY_FUND_WEIGHT: f64 = 0.20;
/// Weight of the financial-stability category in the composite score.
pub const FINANCIAL_STABILITY_WEIGHT: f64 = 0.15;

/// Expense ratio (percent of income) treated as on-budget.
pub const TARGET_EXPENSE_RATIO: f64 = 70.0;
/// Months of expenses a fully-funded emergency fund covers.
pub const EMERGENCY_FUND_TARGET_MONTHS: f64 = 6.0;

/// Penalty per point of debt-to-income ratio.
const DTI_PENALTY_FACTOR: f64 = 2.0;
/// Scaling from savings percent to category score (20% saved = full marks).
const SAVINGS_RATE_MULTIPLIER: f64 = 5.0;

/// One point-in-time view of a user's finances, produced externally and
/// passed in whole. All values are >= 0; the engine never mutates it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub total_debt_balance: f64,
    pub total_savings: f64,
    pub monthly_debt_payment: f64,
}

/// Category weights and targets for the composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub target_expense_ratio: f64,
    pub emergency_fund_target_months: f64,
}

/// Per-category weights; the defaults sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub debt_management: f64,
    pub savings_rate: f64,
    pub budget_adherence: f64,
    pub emergency_fund: f64,
    pub financial_stability: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            debt_management: DEBT_MANAGEMENT_WEIGHT,
            savings_rate: SAVINGS_RATE_WEIGHT,
            budget_adherence: BUDGET_ADHERENCE_WEIGHT,
            emergency_fund: EMERGENCY_FUND_WEIGHT,
            financial_stability: FINANCIAL_STABILITY_WEIGHT,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            target_expense_ratio: TARGET_EXPENSE_RATIO,
            emergency_fund_target_months: EMERGENCY_FUND_TARGET_MONTHS,
        }
    }
}

/// Letter grade bands over the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Band a 0-100 composite score: A >= 90, B >= 80, C >= 70, D >= 60.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{letter}")
    }
}

/// Per-category sub-scores, each in 0-100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryScores {
    pub debt_management: f64,
    pub savings_rate: f64,
    pub budget_adherence: f64,
    pub emergency_fund: f64,
    pub financial_stability: f64,
}

/// Composite financial health score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthScore {
    /// Weighted composite, rounded, in 0-100
    pub overall: u8,
    pub categories: CategoryScores,
    pub grade: Grade,
}

/// Score a snapshot with the default weights and targets.
#[must_use]
pub fn score_health(snapshot: &FinancialSnapshot) -> HealthScore {
    score_health_with_config(snapshot, &ScoringConfig::default())
}

/// Score a snapshot with caller-supplied weights and targets.
#[must_use]
pub fn score_health_with_config(
    snapshot: &FinancialSnapshot,
    config: &ScoringConfig,
) -> HealthScore {
    let income = snapshot.monthly_income;
    let expenses = snapshot.monthly_expenses;

    let debt_management = if income > 0.0 {
        let debt_to_income = snapshot.monthly_debt_payment / income * 100.0;
        clamp_score(100.0 - debt_to_income * DTI_PENALTY_FACTOR)
    } else {
        0.0
    };

    let savings_rate = if income > 0.0 {
        let savings_percent = (income - expenses) / income * 100.0;
        clamp_score(savings_percent * SAVINGS_RATE_MULTIPLIER)
    } else {
        0.0
    };

    let budget_adherence = if income > 0.0 {
        let expense_ratio = expenses / income * 100.0;
        clamp_score(100.0 - (expense_ratio - config.target_expense_ratio).abs())
    } else {
        0.0
    };

    let emergency_fund = if expenses > 0.0 {
        let months_covered = snapshot.total_savings / expenses;
        clamp_score(months_covered / config.emergency_fund_target_months * 100.0)
    } else {
        0.0
    };

    let financial_stability = if income > 0.0 {
        let net_position = snapshot.total_savings - snapshot.total_debt_balance;
        clamp_score(net_position / (income * 12.0) * 100.0 + 50.0)
    } else {
        0.0
    };

    let categories = CategoryScores {
        debt_management,
        savings_rate,
        budget_adherence,
        emergency_fund,
        financial_stability,
    };

    let weights = &config.weights;
    let weighted = debt_management * weights.debt_management
        + savings_rate * weights.savings_rate
        + budget_adherence * weights.budget_adherence
        + emergency_fund * weights.emergency_fund
        + financial_stability * weights.financial_stability;

    let overall = clamp_score(weighted).round() as u8;

    HealthScore {
        overall,
        categories,
        grade: Grade::from_score(overall),
    }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
