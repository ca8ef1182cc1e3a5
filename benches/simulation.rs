//! benches/simulation.rs
//! Run with:  cargo bench --bench simulation
//! HTML:      target/criterion/report/index.html

use bond_market_simulator::simulators::trading::simulate_daily_trading;
use bond_market_simulator::{
    DayContext, MarketConditions, Population, SimulationConfig, Venue, run_simulation,
};
use bond_market_simulator::simulators::market_state::initialize_venue;
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

// ────────────────────────────────────────────────────────────────────────────
//  Parameter grids
// ────────────────────────────────────────────────────────────────────────────
const BOND_COUNTS: &[usize] = &[25, 100, 400];
const RUN_DAYS: usize = 30;

/// One trading day on each venue, fresh book every iteration.
pub fn bench_daily_trading(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_trading");
    let conditions = MarketConditions {
        day: 10,
        reference_rate: 0.0303,
        sentiment: 0.2,
        volatility: 0.011,
        event_impact: 0.0,
    };
    let date = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();

    for &n in BOND_COUNTS {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let population = Population::generate(n, 1_000, &mut rng).unwrap();
        group.throughput(Throughput::Elements(n as u64));

        for venue in Venue::ALL {
            let minimum = match venue {
                Venue::Traditional => 10_000.0,
                Venue::Tokenized => 100.0,
            };
            let ctx = DayContext {
                date,
                conditions: &conditions,
                investors: &population.investors,
            };
            let id = BenchmarkId::new(venue.to_string(), n);
            group.bench_function(id, |b| {
                b.iter_batched(
                    || {
                        let mut rng = ChaCha8Rng::seed_from_u64(7);
                        let state = initialize_venue(population.bonds.for_venue(venue), venue, &mut rng).unwrap();
                        (state, rng)
                    },
                    |(mut state, mut rng)| {
                        let out = simulate_daily_trading(&mut state, &ctx, venue, minimum, &mut rng).unwrap();
                        black_box(out);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

/// End-to-end runs, parallel vs sequential venue stepping.
pub fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.sample_size(10);

    for &n in BOND_COUNTS {
        for parallel in [true, false] {
            let config = SimulationConfig {
                bond_count: n,
                investor_count: 1_000,
                day_count: RUN_DAYS,
                parallel_venues: parallel,
                ..SimulationConfig::default()
            };
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_function(BenchmarkId::new(label, n), |b| {
                b.iter(|| black_box(run_simulation(config.clone()).unwrap()))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_daily_trading, bench_full_run);
criterion_main!(benches);
