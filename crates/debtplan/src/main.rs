use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::eyre;

use debtplan::profile::Profile;
use debtplan::{init_logging, report};
use debtplan_core::compare::compare_with_config;
use debtplan_core::config::{CompareConfig, SimulationParameters};
use debtplan_core::error::SimulateError;
use debtplan_core::health::score_health;
use debtplan_core::model::Strategy;
use debtplan_core::simulate::simulate;

#[derive(Parser, Debug)]
#[command(name = "debtplan")]
#[command(about = "A debt repayment planner and financial health scorer")]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a payoff plan under one strategy
    Plan {
        /// Path to the YAML debts profile
        profile: PathBuf,

        #[arg(long, value_enum, default_value_t = StrategyArg::Avalanche)]
        strategy: StrategyArg,

        /// Extra monthly budget beyond the minimums (overrides the profile)
        #[arg(long)]
        extra: Option<f64>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run both strategies over the same debts and recommend one
    Compare {
        /// Path to the YAML debts profile
        profile: PathBuf,

        /// Extra monthly budget beyond the minimums (overrides the profile)
        #[arg(long)]
        extra: Option<f64>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score financial health from the profile's snapshot block
    Score {
        /// Path to the YAML debts profile
        profile: PathBuf,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Avalanche,
    Snowball,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Avalanche => Strategy::Avalanche,
            StrategyArg::Snowball => Strategy::Snowball,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::Plan {
            profile,
            strategy,
            extra,
            json,
        } => run_plan(&profile, strategy.into(), extra, json),
        Command::Compare {
            profile,
            extra,
            json,
        } => run_compare(&profile, extra, json),
        Command::Score { profile, json } => run_score(&profile, json),
    }
}

fn run_plan(
    path: &Path,
    strategy: Strategy,
    extra: Option<f64>,
    json: bool,
) -> color_eyre::Result<()> {
    let profile = Profile::load(path)?;
    let debts = profile.debt_set()?;

    let mut params = SimulationParameters::new(strategy)
        .with_extra(extra.unwrap_or(profile.extra_monthly_payment));
    if let Some(start) = profile.parsed_start_date()? {
        params = params.with_start_date(start);
    }

    // A plan that hits the cap is still worth showing; everything else aborts
    let (plan, converged) = match simulate(&debts, &params) {
        Ok(plan) => (plan, true),
        Err(SimulateError::DidNotConverge { plan }) => {
            tracing::warn!(
                "plan did not converge within {} months; showing partial totals",
                plan.payoff_months
            );
            (*plan, false)
        }
        Err(err) => return Err(err.into()),
    };

    if json {
        let view = report::PlanReport::new(&plan, &debts, converged);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", report::plan_text(&plan, &debts, converged));
    }
    Ok(())
}

fn run_compare(path: &Path, extra: Option<f64>, json: bool) -> color_eyre::Result<()> {
    let profile = Profile::load(path)?;
    let debts = profile.debt_set()?;
    let extra = extra.unwrap_or(profile.extra_monthly_payment);

    let config = CompareConfig {
        start_date: profile.parsed_start_date()?,
        ..CompareConfig::default()
    };

    let comparison = compare_with_config(&debts, extra, &config)?;

    if json {
        let view = report::ComparisonReport::new(&comparison, &debts);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", report::comparison_text(&comparison));
    }
    Ok(())
}

fn run_score(path: &Path, json: bool) -> color_eyre::Result<()> {
    let profile = Profile::load(path)?;
    let snapshot = profile
        .financial_snapshot()
        .ok_or_else(|| eyre!("profile {} has no snapshot block", path.display()))?;

    let score = score_health(&snapshot);

    if json {
        println!("{}", serde_json::to_string_pretty(&score)?);
    } else {
        print!("{}", report::health_text(&score));
    }
    Ok(())
}
