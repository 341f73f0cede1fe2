//! # Estimator Benchmarks
//!
//! Performance benchmarks for the coopifi-core staking flow. The derived
//! snapshot is recomputed on every keystroke, so both the estimator and
//! the full derive path are measured.
//!
//! Run with: `cargo bench -p coopifi-core`

use coopifi_core::{
    Decimal, PoolCatalog, PoolSymbol, RiskTier, SelectionState, Snapshot, StakingPool,
    estimate_annual_return,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Create a catalog with N pools.
fn create_catalog(size: usize) -> PoolCatalog {
    let pools = (0..size)
        .map(|i| {
            StakingPool::new(
                PoolSymbol::new(format!("POOL{i}")),
                format!("Pool {i}"),
                Decimal::new(85, 3),
                RiskTier::Low,
                Decimal::new(100, 0),
            )
        })
        .collect();
    PoolCatalog::new(pools).expect("catalog")
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_annual_return");
    let apy = Decimal::new(85, 3);

    for raw in ["1000", "123456.78", "not a number"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(raw), raw, |b, raw| {
            b.iter(|| black_box(estimate_annual_return(black_box(raw), black_box(apy))));
        });
    }

    group.finish();
}

fn bench_snapshot_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_derive");

    for size in [3, 64, 256].iter() {
        let catalog = create_catalog(*size);
        let mut selection = SelectionState::new();
        selection
            .select_pool(PoolSymbol::new("POOL0"), &catalog)
            .expect("select");
        selection.set_amount("1000");

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(selection, catalog),
            |b, (selection, catalog)| {
                b.iter(|| black_box(Snapshot::derive(black_box(selection), black_box(catalog))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_estimate, bench_snapshot_derive);
criterion_main!(benches);
