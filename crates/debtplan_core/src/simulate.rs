//! Multi-debt strategy simulator
//!
//! Orchestrates one single-debt amortization step per open debt per month
//! and implements the payment waterfall: every open debt pays its minimum,
//! the first open debt in the frozen priority order also receives the extra
//! budget, and a retired debt's minimum permanently joins the extra budget
//! from the following month on. That freed-minimum reallocation is the
//! defining snowball/avalanche effect.

use jiff::ToSpan;
use rustc_hash::FxHashMap;

use crate::config::{BALANCE_EPSILON, SimulationParameters};
use crate::error::{AmortizeError, SimulateError, SimulateResult};
use crate::model::{Debt, DebtId, DebtMonth, DebtSet, MonthlySnapshot, PayoffPlan, Strategy};

/// Internal mutable copy of one debt. Caller data is never touched.
#[derive(Debug, Clone)]
struct WorkingDebt {
    debt_id: DebtId,
    balance: f64,
    monthly_rate: f64,
    minimum_payment: f64,
}

impl From<&Debt> for WorkingDebt {
    fn from(debt: &Debt) -> Self {
        Self {
            debt_id: debt.debt_id,
            balance: debt.balance,
            monthly_rate: debt.monthly_rate(),
            minimum_payment: debt.minimum_payment,
        }
    }
}

/// Simulate paying down a debt set under one strategy.
///
/// The priority ordering is computed once here and held fixed for the whole
/// run; it is deliberately never re-sorted mid-plan. On a `DidNotConverge`
/// the partial plan up to the cap is attached to the error.
pub fn simulate(debts: &DebtSet, params: &SimulationParameters) -> SimulateResult<PayoffPlan> {
    validate(debts)?;

    let mut working: Vec<WorkingDebt> = debts.iter().map(WorkingDebt::from).collect();
    sort_by_priority(&mut working, params.strategy);
    let debt_order: Vec<DebtId> = working.iter().map(|w| w.debt_id).collect();

    let mut available_extra = params.extra_monthly_payment;
    let mut months: Vec<MonthlySnapshot> = Vec::new();
    let mut interest_by_debt: FxHashMap<DebtId, f64> = FxHashMap::default();
    let mut payoff_month_by_debt: FxHashMap<DebtId, u32> = FxHashMap::default();
    let mut total_paid = 0.0;
    let mut total_interest_paid = 0.0;
    let mut month = 0u32;
    let mut converged = true;

    loop {
        if !working.iter().any(|w| w.balance > 0.0) {
            break;
        }
        if month >= params.max_months {
            converged = false;
            break;
        }
        month += 1;

        // The extra-payment target: first debt in the frozen order with a
        // balance left
        let target = working
            .iter()
            .find(|w| w.balance > 0.0)
            .map(|w| w.debt_id);

        let mut rows: Vec<DebtMonth> = Vec::new();
        let mut freed_minimums = 0.0;
        let mut total_payment = 0.0;
        let mut total_principal = 0.0;
        let mut total_interest = 0.0;

        for debt in working.iter_mut() {
            if debt.balance <= 0.0 {
                continue;
            }

            let interest = debt.balance * debt.monthly_rate;
            let mut payment = debt.minimum_payment;
            if target == Some(debt.debt_id) {
                payment += available_extra;
            }
            // Never overpay past the payoff point
            payment = payment.min(debt.balance + interest);
            let principal = payment - interest;

            debt.balance -= principal;
            if debt.balance < BALANCE_EPSILON {
                debt.balance = 0.0;
                freed_minimums += debt.minimum_payment;
                payoff_month_by_debt.insert(debt.debt_id, month);
            }

            *interest_by_debt.entry(debt.debt_id).or_insert(0.0) += interest;
            total_payment += payment;
            total_principal += principal;
            total_interest += interest;
            rows.push(DebtMonth {
                debt_id: debt.debt_id,
                payment,
                interest,
                principal,
                remaining_balance: debt.balance,
            });
        }

        total_paid += total_payment;
        total_interest_paid += total_interest;
        months.push(MonthlySnapshot {
            month,
            debts: rows,
            total_payment,
            total_principal,
            total_interest,
        });

        // Minimums freed this month compound into the extra budget for the
        // remaining life of the plan, starting next month
        available_extra += freed_minimums;
    }

    let debt_free_date = if converged {
        params
            .start_date
            .and_then(|start| start.checked_add((i64::from(month)).months()).ok())
    } else {
        None
    };

    let plan = PayoffPlan {
        strategy: params.strategy,
        debt_order,
        months,
        payoff_months: month,
        total_interest_paid,
        total_paid,
        debt_free_date,
        interest_by_debt,
        payoff_month_by_debt,
    };

    if converged {
        Ok(plan)
    } else {
        Err(SimulateError::DidNotConverge {
            plan: Box::new(plan),
        })
    }
}

/// Domain validation for every debt in the set.
///
/// A structurally invalid debt aborts the whole simulation; no plan with
/// missing debts is ever produced. A minimum payment that merely fails to
/// cover its own interest is not rejected here: the waterfall can still
/// retire such a debt once earlier debts free their minimums, so the only
/// honest failure for that case is `DidNotConverge` at the cap.
fn validate(debts: &DebtSet) -> SimulateResult<()> {
    for debt in debts.iter() {
        if debt.balance < 0.0 {
            return Err(SimulateError::InvalidDebt {
                debt_id: debt.debt_id,
                source: AmortizeError::InvalidBalance(debt.balance),
            });
        }
        if debt.annual_rate < 0.0 {
            return Err(SimulateError::InvalidDebt {
                debt_id: debt.debt_id,
                source: AmortizeError::InvalidRate(debt.annual_rate),
            });
        }
        if debt.is_open() && debt.minimum_payment <= 0.0 {
            return Err(SimulateError::InvalidDebt {
                debt_id: debt.debt_id,
                source: AmortizeError::InvalidPayment(debt.minimum_payment),
            });
        }
    }
    Ok(())
}

/// Sort working debts into strategy priority order.
///
/// Avalanche: rate descending, ties by balance ascending (retire the smaller
/// of equally-expensive debts first). Snowball: balance ascending, ties by
/// rate descending.
fn sort_by_priority(working: &mut [WorkingDebt], strategy: Strategy) {
    use std::cmp::Ordering;

    let cmp = |a: f64, b: f64| a.partial_cmp(&b).unwrap_or(Ordering::Equal);

    working.sort_by(|a, b| match strategy {
        Strategy::Avalanche => {
            cmp(b.monthly_rate, a.monthly_rate).then(cmp(a.balance, b.balance))
        }
        Strategy::Snowball => {
            cmp(a.balance, b.balance).then(cmp(b.monthly_rate, a.monthly_rate))
        }
    });
}
