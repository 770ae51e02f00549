//! Report rendering
//!
//! Turns engine results into plain-text tables for the terminal, or
//! JSON-friendly view structs for `--json`. The views resolve debt ids to
//! profile names so downstream consumers never see internal ids.

use serde::Serialize;

use debtplan_core::health::HealthScore;
use debtplan_core::model::{DebtSet, PayoffPlan, StrategyComparison};

use crate::util::format::{format_currency, format_duration, format_rate};

/// JSON view of one strategy's payoff plan.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub strategy: String,
    /// False when the plan hit the month cap and is partial
    pub converged: bool,
    pub payoff_months: u32,
    pub total_paid: f64,
    pub total_interest_paid: f64,
    pub debt_free_date: Option<String>,
    pub debts: Vec<DebtReport>,
}

/// JSON view of one debt within a plan.
#[derive(Debug, Serialize)]
pub struct DebtReport {
    pub name: String,
    pub starting_balance: f64,
    pub annual_rate: f64,
    pub interest_paid: f64,
    /// 1-based month the debt retired; absent in partial plans
    pub payoff_month: Option<u32>,
}

/// JSON view of the two-strategy comparison.
#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub avalanche: PlanReport,
    pub snowball: PlanReport,
    pub interest_savings: f64,
    pub months_difference: i32,
    pub recommended: String,
}

impl PlanReport {
    pub fn new(plan: &PayoffPlan, debts: &DebtSet, converged: bool) -> Self {
        let debt_reports = plan
            .debt_order
            .iter()
            .filter_map(|id| debts.get(*id))
            .map(|debt| DebtReport {
                name: debt.name.clone(),
                starting_balance: debt.balance,
                annual_rate: debt.annual_rate,
                interest_paid: plan.interest_paid_on(debt.debt_id),
                payoff_month: plan.payoff_month_of(debt.debt_id),
            })
            .collect();

        Self {
            strategy: plan.strategy.to_string(),
            converged,
            payoff_months: plan.payoff_months,
            total_paid: plan.total_paid,
            total_interest_paid: plan.total_interest_paid,
            debt_free_date: plan.debt_free_date.map(|d| d.to_string()),
            debts: debt_reports,
        }
    }
}

impl ComparisonReport {
    pub fn new(comparison: &StrategyComparison, debts: &DebtSet) -> Self {
        Self {
            avalanche: PlanReport::new(&comparison.avalanche, debts, true),
            snowball: PlanReport::new(&comparison.snowball, debts, true),
            interest_savings: comparison.interest_savings,
            months_difference: comparison.months_difference,
            recommended: comparison.recommended.to_string(),
        }
    }
}

/// Render one plan as a text report.
pub fn plan_text(plan: &PayoffPlan, debts: &DebtSet, converged: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("Payoff plan ({})\n", plan.strategy));
    if converged {
        out.push_str(&format!(
            "  Debt-free in:   {} ({} months)\n",
            format_duration(plan.payoff_months),
            plan.payoff_months
        ));
    } else {
        out.push_str(&format!(
            "  Did not finish within {} months; totals below are partial\n",
            plan.payoff_months
        ));
    }
    out.push_str(&format!(
        "  Total paid:     {}\n",
        format_currency(plan.total_paid)
    ));
    out.push_str(&format!(
        "  Total interest: {}\n",
        format_currency(plan.total_interest_paid)
    ));
    if let Some(date) = plan.debt_free_date {
        out.push_str(&format!("  Debt-free date: {date}\n"));
    }

    out.push_str(&format!(
        "\n  {:<18} {:>14} {:>8} {:>14} {:>10}\n",
        "Debt", "Start balance", "Rate", "Interest paid", "Paid off"
    ));
    for id in &plan.debt_order {
        let Some(debt) = debts.get(*id) else { continue };
        let paid_off = plan
            .payoff_month_of(*id)
            .map_or_else(|| "-".to_string(), |m| format!("month {m}"));
        out.push_str(&format!(
            "  {:<18} {:>14} {:>8} {:>14} {:>10}\n",
            debt.name,
            format_currency(debt.balance),
            format_rate(debt.annual_rate),
            format_currency(plan.interest_paid_on(*id)),
            paid_off
        ));
    }

    out
}

/// Render the two-strategy comparison as a text report.
pub fn comparison_text(comparison: &StrategyComparison) -> String {
    let mut out = String::new();

    out.push_str("Strategy comparison\n");
    out.push_str(&format!(
        "  {:<12} {:>12} {:>16}\n",
        "Strategy", "Months", "Total interest"
    ));
    for plan in [&comparison.avalanche, &comparison.snowball] {
        out.push_str(&format!(
            "  {:<12} {:>12} {:>16}\n",
            plan.strategy.to_string(),
            format_duration(plan.payoff_months),
            format_currency(plan.total_interest_paid)
        ));
    }

    out.push_str(&format!(
        "\n  Avalanche saves {} in interest",
        format_currency(comparison.interest_savings)
    ));
    if comparison.months_difference != 0 {
        out.push_str(&format!(
            " and {} months",
            comparison.months_difference
        ));
    }
    out.push('\n');
    out.push_str(&format!("  Recommended: {}\n", comparison.recommended));

    out
}

/// Render a health score as a text report.
pub fn health_text(score: &HealthScore) -> String {
    let categories = &score.categories;
    let rows = [
        ("Debt management", categories.debt_management),
        ("Savings rate", categories.savings_rate),
        ("Budget adherence", categories.budget_adherence),
        ("Emergency fund", categories.emergency_fund),
        ("Financial stability", categories.financial_stability),
    ];

    let mut out = String::new();
    out.push_str(&format!(
        "Financial health: {} (grade {})\n\n",
        score.overall, score.grade
    ));
    for (label, value) in rows {
        out.push_str(&format!("  {label:<20} {value:>6.1}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use debtplan_core::config::{DebtSetBuilder, SimulationParameters};
    use debtplan_core::health::{FinancialSnapshot, score_health};
    use debtplan_core::model::Strategy;
    use debtplan_core::simulate::simulate;

    fn fixture() -> (DebtSet, PayoffPlan) {
        let debts = DebtSetBuilder::new()
            .debt("Visa", 4_500.0, 22.9, 90.0)
            .debt("Car Loan", 12_000.0, 6.4, 260.0)
            .build()
            .unwrap();
        let plan = simulate(
            &debts,
            &SimulationParameters::new(Strategy::Avalanche).with_extra(200.0),
        )
        .unwrap();
        (debts, plan)
    }

    #[test]
    fn test_plan_report_resolves_names() {
        let (debts, plan) = fixture();
        let report = PlanReport::new(&plan, &debts, true);

        assert_eq!(report.strategy, "avalanche");
        assert_eq!(report.debts.len(), 2);
        // Avalanche: Visa first
        assert_eq!(report.debts[0].name, "Visa");
        assert!(report.debts[0].payoff_month.is_some());

        // The view serializes cleanly
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"Visa\""));
    }

    #[test]
    fn test_plan_text_mentions_each_debt() {
        let (debts, plan) = fixture();
        let text = plan_text(&plan, &debts, true);

        assert!(text.contains("Payoff plan (avalanche)"));
        assert!(text.contains("Visa"));
        assert!(text.contains("Car Loan"));
        assert!(text.contains("Debt-free in:"));
    }

    #[test]
    fn test_health_text_lists_categories() {
        let score = score_health(&FinancialSnapshot {
            monthly_income: 5_000.0,
            monthly_expenses: 4_000.0,
            total_debt_balance: 16_000.0,
            total_savings: 6_000.0,
            monthly_debt_payment: 500.0,
        });
        let text = health_text(&score);

        assert!(text.contains("grade D"));
        assert!(text.contains("Emergency fund"));
    }
}
