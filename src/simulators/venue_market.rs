// src/simulators/venue_market.rs

use super::carry_forward::carry_forward;
use super::market_state::{MarketState, initialize_venue};
use super::market_trait::Marketable;
use super::trading::{DayContext, DayOutcome, simulate_daily_trading};
use crate::config::SmoothingConfig;
use crate::error::SimResult;
use crate::rng::{SimRng, Stream, stream_rng};
use crate::types::{Bond, Venue};
use tracing::debug;

/// One venue's book plus the random stream that drives it. The two venues
/// never share state; they only read the same daily conditions.
pub struct VenueMarket {
    venue: Venue,
    min_amount: f64,
    smoothing: SmoothingConfig,
    seed: u64,
    bonds: Vec<Bond>,
    state: Vec<MarketState>,
    rng: SimRng,
}

fn stream_for(venue: Venue) -> Stream {
    match venue {
        Venue::Traditional => Stream::Traditional,
        Venue::Tokenized => Stream::Tokenized,
    }
}

impl VenueMarket {
    /// Lists `bonds` on `venue` and builds the opening book.
    pub fn new(
        venue: Venue,
        bonds: &[Bond],
        min_amount: f64,
        smoothing: SmoothingConfig,
        seed: u64,
    ) -> SimResult<Self> {
        let mut rng = stream_rng(seed, stream_for(venue));
        let state = initialize_venue(bonds, venue, &mut rng)?;
        Ok(Self {
            venue,
            min_amount,
            smoothing,
            seed,
            bonds: bonds.to_vec(),
            state,
            rng,
        })
    }

    pub fn min_amount(&self) -> f64 {
        self.min_amount
    }
}

impl Marketable for VenueMarket {
    fn venue(&self) -> Venue {
        self.venue
    }

    fn step(&mut self, ctx: &DayContext<'_>) -> SimResult<DayOutcome> {
        let outcome = simulate_daily_trading(
            &mut self.state,
            ctx,
            self.venue,
            self.min_amount,
            &mut self.rng,
        )?;
        debug!(
            venue = %self.venue,
            day = ctx.conditions.day,
            avg_price = outcome.metrics.avg_price,
            total_volume = outcome.metrics.total_volume,
            num_transactions = outcome.metrics.num_transactions,
            "trading day closed"
        );
        Ok(outcome)
    }

    fn roll_forward(&mut self) -> SimResult<()> {
        carry_forward(&mut self.state, self.venue, &self.smoothing, &mut self.rng)
    }

    fn current_price(&self) -> f64 {
        self.state.iter().map(|r| r.price).sum::<f64>() / self.state.len() as f64
    }

    fn reset(&mut self) -> SimResult<()> {
        self.rng = stream_rng(self.seed, stream_for(self.venue));
        self.state = initialize_venue(&self.bonds, self.venue, &mut self.rng)?;
        Ok(())
    }
}
