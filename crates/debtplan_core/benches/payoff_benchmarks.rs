//! Criterion benchmarks for debtplan_core simulation
//!
//! Run with: cargo bench -p debtplan_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use debtplan_core::compare::compare;
use debtplan_core::config::{DebtSetBuilder, SimulationParameters};
use debtplan_core::model::{DebtSet, Strategy};
use debtplan_core::simulate::simulate;

fn household_debts(count: usize) -> DebtSet {
    let mut builder = DebtSetBuilder::new();
    for i in 0..count {
        // Spread balances and rates so orderings are non-trivial
        let balance = 2_000.0 + 3_500.0 * i as f64;
        let rate = 3.0 + (i as f64 * 7.0) % 22.0;
        let minimum = balance * 0.025;
        builder = builder.debt(format!("Debt {i}"), balance, rate, minimum);
    }
    builder.build().expect("bench debt set")
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for num_debts in [2, 5, 10, 25] {
        let debts = household_debts(num_debts);
        let params = SimulationParameters::new(Strategy::Avalanche).with_extra(300.0);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_debts),
            &debts,
            |b, debts| b.iter(|| simulate(black_box(debts), black_box(&params))),
        );
    }

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let debts = household_debts(10);

    c.bench_function("compare_both_strategies", |b| {
        b.iter(|| compare(black_box(&debts), black_box(250.0)))
    });
}

criterion_group!(benches, bench_simulate, bench_compare);
criterion_main!(benches);
