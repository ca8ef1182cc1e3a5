// src/market.rs

use crate::config::{ISSUE_DATE, PROGRESS_LOG_INTERVAL, SimulationConfig};
use crate::error::{SimError, SimResult};
use crate::population::Population;
use crate::rng::{Stream, stream_rng};
use crate::simulators::conditions::ConditionProcess;
use crate::simulators::market_trait::Marketable;
use crate::simulators::trading::{DayContext, DayOutcome};
use crate::simulators::venue_market::VenueMarket;
use crate::types::{DailyMetrics, Transaction, Venue};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything one venue produced over the run, ordered by day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueOutput {
    pub metrics: Vec<DailyMetrics>,
    /// Generation order within a day, grouped by day.
    pub transactions: Vec<Transaction>,
}

impl VenueOutput {
    fn record(&mut self, outcome: DayOutcome) {
        self.metrics.push(outcome.metrics);
        self.transactions.extend(outcome.transactions);
    }

    /// The slice of the log that belongs to `date`.
    pub fn transactions_on(&self, date: NaiveDate) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(move |t| t.date == date)
    }
}

/// The engine's whole contract with downstream analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub traditional: VenueOutput,
    pub tokenized: VenueOutput,
}

impl SimulationOutput {
    pub fn venue(&self, venue: Venue) -> &VenueOutput {
        match venue {
            Venue::Traditional => &self.traditional,
            Venue::Tokenized => &self.tokenized,
        }
    }
}

/// This is the main simulation engine. It owns the population, the shared
/// condition process and both venues, and runs the day loop.
pub struct Simulation {
    config: SimulationConfig,
    population: Population,
    conditions: ConditionProcess,
    traditional: VenueMarket,
    tokenized: VenueMarket,
    start_date: NaiveDate,
}

impl Simulation {
    /// Validates the configuration and builds the opening state of both venues.
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        config.validate()?;

        let mut population_rng = stream_rng(config.seed, Stream::Population);
        let population =
            Population::generate(config.bond_count, config.investor_count, &mut population_rng)?;

        let conditions =
            ConditionProcess::new(config.day_count, stream_rng(config.seed, Stream::Conditions))?;
        let traditional = VenueMarket::new(
            Venue::Traditional,
            population.bonds.for_venue(Venue::Traditional),
            config.traditional_min_amount,
            config.smoothing,
            config.seed,
        )?;
        let tokenized = VenueMarket::new(
            Venue::Tokenized,
            population.bonds.for_venue(Venue::Tokenized),
            config.tokenized_min_amount,
            config.smoothing,
            config.seed,
        )?;

        let (y, m, d) = ISSUE_DATE;
        let start_date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| SimError::config("start_date", format!("{y}-{m}-{d} is not a date")))?;

        Ok(Self {
            config,
            population,
            conditions,
            traditional,
            tokenized,
            start_date,
        })
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn conditions(&self) -> &ConditionProcess {
        &self.conditions
    }

    /// Runs every configured day in order. Each day starts from the previous
    /// day's carried-forward book, so days can never be reordered.
    /// A simulation that has already run is reset first.
    pub fn run(&mut self) -> SimResult<SimulationOutput> {
        if self.conditions.days_drawn() != 0 {
            self.reset()?;
        }
        let days = self.config.day_count;
        info!(
            bonds = self.population.bonds.total_count(),
            investors = self.population.investors.len(),
            days,
            traditional_min = self.traditional.min_amount(),
            tokenized_min = self.tokenized.min_amount(),
            "simulation started"
        );

        let mut output = SimulationOutput::default();
        for day in 0..days {
            let (traditional, tokenized) = self.run_day(day)?;
            output.traditional.record(traditional);
            output.tokenized.record(tokenized);

            if (day + 1) % PROGRESS_LOG_INTERVAL == 0 {
                info!(completed = day + 1, total = days, "simulation progress");
            }
        }

        info!(
            traditional_trades = output.traditional.transactions.len(),
            tokenized_trades = output.tokenized.transactions.len(),
            "simulation finished"
        );
        Ok(output)
    }

    /// One day: draw the shared conditions, trade both venues against the
    /// same draw, then roll both books forward.
    fn run_day(&mut self, day: usize) -> SimResult<(DayOutcome, DayOutcome)> {
        let conditions = self.conditions.next(day);
        let ctx = DayContext {
            date: self.start_date + Duration::days(day as i64),
            conditions: &conditions,
            investors: &self.population.investors,
        };
        let traditional = &mut self.traditional;
        let tokenized = &mut self.tokenized;

        let (trad, tok) = if self.config.parallel_venues {
            rayon::join(|| traditional.step(&ctx), || tokenized.step(&ctx))
        } else {
            (traditional.step(&ctx), tokenized.step(&ctx))
        };
        let (trad, tok) = (trad?, tok?);

        let (trad_roll, tok_roll) = if self.config.parallel_venues {
            rayon::join(|| traditional.roll_forward(), || tokenized.roll_forward())
        } else {
            (traditional.roll_forward(), tokenized.roll_forward())
        };
        trad_roll?;
        tok_roll?;

        Ok((trad, tok))
    }

    /// Back to day zero. The population is kept; it is a pure function of the seed.
    pub fn reset(&mut self) -> SimResult<()> {
        self.conditions
            .reset(stream_rng(self.config.seed, Stream::Conditions));
        self.traditional.reset()?;
        self.tokenized.reset()
    }
}

/// Builds a simulation from `config` and runs it to completion.
pub fn run_simulation(config: SimulationConfig) -> SimResult<SimulationOutput> {
    Simulation::new(config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(parallel_venues: bool) -> SimulationConfig {
        SimulationConfig {
            bond_count: 6,
            investor_count: 40,
            day_count: 12,
            parallel_venues,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn one_row_per_day_per_venue() {
        let output = run_simulation(small(true)).unwrap();
        for venue in Venue::ALL {
            let metrics = &output.venue(venue).metrics;
            assert_eq!(metrics.len(), 12);
            for (day, row) in metrics.iter().enumerate() {
                assert_eq!(
                    row.date,
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(day as i64)
                );
            }
        }
    }

    #[test]
    fn parallel_and_sequential_venues_agree() {
        let parallel = run_simulation(small(true)).unwrap();
        let sequential = run_simulation(small(false)).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn reset_reproduces_the_run() {
        let mut sim = Simulation::new(small(false)).unwrap();
        let first = sim.run().unwrap();
        assert_eq!(sim.conditions().days_drawn(), 12);

        sim.reset().unwrap();
        assert_eq!(sim.conditions().days_drawn(), 0);
        let second = sim.run().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn running_twice_starts_over() {
        // Arrange
        let mut sim = Simulation::new(small(true)).unwrap();

        // Act
        let first = sim.run().unwrap();
        let second = sim.run().unwrap();

        // Assert
        assert_eq!(sim.conditions().days_drawn(), 12);
        assert_eq!(first, second);
    }

    #[test]
    fn both_venues_trade_against_the_same_draw() {
        let mut sim = Simulation::new(small(true)).unwrap();
        for day in 0..12 {
            let (trad, tok) = sim.run_day(day).unwrap();
            assert_eq!(trad.conditions, tok.conditions);
            assert_eq!(trad.conditions.day, day);
            assert_eq!(trad.metrics.date, tok.metrics.date);
        }
        assert_eq!(sim.conditions().days_drawn(), 12);
    }

    #[test]
    fn metrics_count_matches_the_daily_log() {
        let output = run_simulation(small(true)).unwrap();
        for venue in Venue::ALL {
            let out = output.venue(venue);
            for row in &out.metrics {
                assert_eq!(row.num_transactions, out.transactions_on(row.date).count());
            }
        }
    }

    #[test]
    fn invalid_config_fails_before_the_loop() {
        let cfg = SimulationConfig {
            day_count: 0,
            ..small(true)
        };
        assert!(matches!(
            Simulation::new(cfg),
            Err(SimError::InvalidConfig { field: "day_count", .. })
        ));
    }
}
