//! Tests for the financial health scoring module
//!
//! These tests verify:
//! - Each category formula on a hand-computed snapshot
//! - Division-by-zero guards (zero income, zero expenses)
//! - Grade banding and the 0-100 range of the composite

use crate::health::{
    FinancialSnapshot, Grade, ScoringConfig, score_health, score_health_with_config,
};

fn mid_snapshot() -> FinancialSnapshot {
    FinancialSnapshot {
        monthly_income: 5_000.0,
        monthly_expenses: 4_000.0,
        total_debt_balance: 16_000.0,
        total_savings: 6_000.0,
        monthly_debt_payment: 500.0,
    }
}

/// Every category on a hand-computed middle-of-the-road snapshot
#[test]
fn test_category_formulas() {
    let score = score_health(&mid_snapshot());
    let categories = &score.categories;

    // DTI 10% -> 100 - 20
    assert!((categories.debt_management - 80.0).abs() < 1e-9);
    // 20% saved, x5 -> capped contribution of 100
    assert!((categories.savings_rate - 100.0).abs() < 1e-9);
    // Expense ratio 80%, 10 points off the 70% target
    assert!((categories.budget_adherence - 90.0).abs() < 1e-9);
    // 1.5 months of expenses saved, against a 6-month target
    assert!((categories.emergency_fund - 25.0).abs() < 1e-9);
    // Net position -10k over 60k annual income -> 50 - 16.67
    assert!((categories.financial_stability - 33.333_333_333_333_33).abs() < 1e-6);

    // 80*.25 + 100*.20 + 90*.20 + 25*.20 + 33.33*.15
    assert_eq!(score.overall, 68);
    assert_eq!(score.grade, Grade::D);
}

/// Zero income zeroes every income-denominated ratio instead of going NaN
#[test]
fn test_zero_income_boundary() {
    let score = score_health(&FinancialSnapshot {
        monthly_income: 0.0,
        monthly_expenses: 2_000.0,
        total_debt_balance: 5_000.0,
        total_savings: 12_000.0,
        monthly_debt_payment: 300.0,
    });

    assert_eq!(score.categories.debt_management, 0.0);
    assert_eq!(score.categories.savings_rate, 0.0);
    assert_eq!(score.categories.budget_adherence, 0.0);
    assert_eq!(score.categories.financial_stability, 0.0);
    // Emergency fund is expense-denominated and still scores
    assert!((score.categories.emergency_fund - 100.0).abs() < 1e-9);

    assert!(score.overall <= 100, "overall out of range");
    assert!(score.categories.emergency_fund.is_finite());
}

/// Zero expenses zeroes the emergency-fund ratio instead of going infinite
#[test]
fn test_zero_expenses_boundary() {
    let score = score_health(&FinancialSnapshot {
        monthly_income: 4_000.0,
        monthly_expenses: 0.0,
        total_debt_balance: 0.0,
        total_savings: 20_000.0,
        monthly_debt_payment: 0.0,
    });

    assert_eq!(score.categories.emergency_fund, 0.0);
    // Expense ratio 0%, 70 points from target
    assert!((score.categories.budget_adherence - 30.0).abs() < 1e-9);
}

/// Spending beyond income clamps the savings category at zero rather than
/// dragging the composite negative
#[test]
fn test_overspending_clamped() {
    let score = score_health(&FinancialSnapshot {
        monthly_income: 3_000.0,
        monthly_expenses: 9_000.0,
        total_debt_balance: 40_000.0,
        total_savings: 0.0,
        monthly_debt_payment: 2_500.0,
    });

    assert_eq!(score.categories.savings_rate, 0.0);
    assert_eq!(score.categories.debt_management, 0.0);
    assert_eq!(score.categories.financial_stability, 0.0);
    assert!(score.overall <= 100);
    assert_eq!(score.grade, Grade::F);
}

/// A strong profile earns an A
#[test]
fn test_strong_profile_grades_a() {
    let score = score_health(&FinancialSnapshot {
        monthly_income: 10_000.0,
        monthly_expenses: 7_000.0,
        total_debt_balance: 0.0,
        total_savings: 42_000.0,
        monthly_debt_payment: 0.0,
    });

    // 100/100/100/100 on the first four, 85 stability
    assert_eq!(score.overall, 98);
    assert_eq!(score.grade, Grade::A);
}

#[test]
fn test_grade_bands() {
    assert_eq!(Grade::from_score(100), Grade::A);
    assert_eq!(Grade::from_score(90), Grade::A);
    assert_eq!(Grade::from_score(89), Grade::B);
    assert_eq!(Grade::from_score(80), Grade::B);
    assert_eq!(Grade::from_score(79), Grade::C);
    assert_eq!(Grade::from_score(70), Grade::C);
    assert_eq!(Grade::from_score(69), Grade::D);
    assert_eq!(Grade::from_score(60), Grade::D);
    assert_eq!(Grade::from_score(59), Grade::F);
    assert_eq!(Grade::from_score(0), Grade::F);
}

/// Weights and targets come from configuration, not literals
#[test]
fn test_config_overrides() {
    let mut config = ScoringConfig::default();
    config.target_expense_ratio = 80.0;

    let score = score_health_with_config(&mid_snapshot(), &config);

    // Expense ratio is exactly the custom target now
    assert!((score.categories.budget_adherence - 100.0).abs() < 1e-9);

    // Sanity: default weights sum to 1.0
    let weights = ScoringConfig::default().weights;
    let sum = weights.debt_management
        + weights.savings_rate
        + weights.budget_adherence
        + weights.emergency_fund
        + weights.financial_stability;
    assert!((sum - 1.0).abs() < 1e-12);
}
