//! Strategy comparator
//!
//! Runs the simulator once per strategy over identical inputs and reduces
//! the pair to a recommendation. The two runs share no mutable state, so
//! with the `parallel` feature they execute on separate rayon tasks.

use crate::config::{CompareConfig, SimulationParameters};
use crate::error::SimulateResult;
use crate::model::{DebtSet, Strategy, StrategyComparison};
use crate::simulate::simulate;

/// Compare both strategies with the default configuration.
pub fn compare(debts: &DebtSet, extra_monthly_payment: f64) -> SimulateResult<StrategyComparison> {
    compare_with_config(debts, extra_monthly_payment, &CompareConfig::default())
}

/// Compare both strategies under a caller-supplied configuration.
///
/// If either strategy fails to converge within the cap the comparison is not
/// emitted: a truncated interest total would make the recommendation
/// dishonest. The `DidNotConverge` error carries that strategy's partial
/// plan.
pub fn compare_with_config(
    debts: &DebtSet,
    extra_monthly_payment: f64,
    config: &CompareConfig,
) -> SimulateResult<StrategyComparison> {
    let params_for = |strategy: Strategy| SimulationParameters {
        extra_monthly_payment,
        strategy,
        max_months: config.max_months,
        start_date: config.start_date,
    };

    // Each run operates on its own internal copy of the debt set; nothing
    // observable is shared between them
    #[cfg(feature = "parallel")]
    let (avalanche, snowball) = rayon::join(
        || simulate(debts, &params_for(Strategy::Avalanche)),
        || simulate(debts, &params_for(Strategy::Snowball)),
    );

    #[cfg(not(feature = "parallel"))]
    let (avalanche, snowball) = (
        simulate(debts, &params_for(Strategy::Avalanche)),
        simulate(debts, &params_for(Strategy::Snowball)),
    );

    let avalanche = avalanche?;
    let snowball = snowball?;

    let interest_savings = snowball.total_interest_paid - avalanche.total_interest_paid;
    let months_difference = snowball.payoff_months as i32 - avalanche.payoff_months as i32;

    let recommended = if interest_savings.abs() < config.recommendation_threshold {
        // Negligible cost difference: psychological momentum wins
        Strategy::Snowball
    } else if avalanche.total_interest_paid <= snowball.total_interest_paid {
        Strategy::Avalanche
    } else {
        Strategy::Snowball
    };

    Ok(StrategyComparison {
        avalanche,
        snowball,
        interest_savings,
        months_difference,
        recommended,
    })
}
