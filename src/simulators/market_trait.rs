// src/simulators/market_trait.rs

use super::trading::{DayContext, DayOutcome};
use crate::error::SimResult;
use crate::types::Venue;

/// A trait for any venue the driver can step through time.
/// This keeps the day loop independent of how a venue models its book.
pub trait Marketable {
    /// Which market this is.
    fn venue(&self) -> Venue;

    /// Runs one trading day against the shared conditions and returns the
    /// day's metrics and trades. Leaves the book in its end-of-day state.
    fn step(&mut self, ctx: &DayContext<'_>) -> SimResult<DayOutcome>;

    /// Commits the end-of-day book as tomorrow's starting book.
    fn roll_forward(&mut self) -> SimResult<()>;

    /// Mean price across the venue's bonds, without advancing anything.
    fn current_price(&self) -> f64;

    /// Resets the venue to its opening state.
    fn reset(&mut self) -> SimResult<()>;
}
