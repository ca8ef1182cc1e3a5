// src/simulators/trading.rs

//! One venue, one day: reprice every bond, sample the day's trades, and
//! reduce the book to a metrics row.

use super::conditions::MarketConditions;
use super::market_state::MarketState;
use crate::config::{
    AMOUNT_MARKUP_MEAN, ATTEMPTS_PER_BOND, MAX_ASSET_FRACTION, RATE_SENSITIVITY_PER_YEAR,
    REFERENCE_RATE, SENTIMENT_PRICE_GAIN,
};
use crate::error::{SimError, SimResult};
use crate::types::{DailyMetrics, Investor, Side, Transaction, Venue};
use chrono::NaiveDate;
use rand::Rng;
use rand::distributions::Distribution;
use rand_distr::{Exp, Normal};
use tracing::trace;

/// Read-only inputs shared by both venues on a given day.
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    pub date: NaiveDate,
    pub conditions: &'a MarketConditions,
    pub investors: &'a [Investor],
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayOutcome {
    pub metrics: DailyMetrics,
    pub transactions: Vec<Transaction>,
    /// The shared draw this day was traded against.
    pub conditions: MarketConditions,
}

/// Inclusive `[minimum, cap]` for a single trade, or `None` when an
/// investor with this ticket `budget` cannot reach the venue minimum.
///
/// A face-value cap below the minimum is a skip too, so no logged trade is
/// ever smaller than the venue minimum.
pub fn amount_bounds(venue: Venue, minimum: f64, face_value: f64, budget: f64) -> Option<(f64, f64)> {
    if budget < minimum {
        return None;
    }
    let cap = (venue.cap_multiple() * face_value).min(budget);
    if cap < minimum {
        return None;
    }
    Some((minimum, cap))
}

/// Rate, sentiment, event and idiosyncratic moves, applied in place.
pub fn update_prices<R: Rng + ?Sized>(
    state: &mut [MarketState],
    conditions: &MarketConditions,
    venue: Venue,
    rng: &mut R,
) -> SimResult<()> {
    let noise = Normal::new(0.0, conditions.volatility).map_err(SimError::distribution)?;
    let market_factor = 1.0 + conditions.event_impact + conditions.sentiment * SENTIMENT_PRICE_GAIN;
    let rate_gap = conditions.reference_rate - REFERENCE_RATE;

    for row in state.iter_mut() {
        // Linear duration proxy, no convexity or coupon effect.
        let sensitivity = row.maturity_years as f64 * RATE_SENSITIVITY_PER_YEAR;
        let idiosyncratic = noise.sample(rng);
        row.price *= (1.0 - sensitivity * rate_gap) * market_factor * (1.0 + idiosyncratic);

        if !row.price.is_finite() || row.price <= 0.0 {
            return Err(SimError::InvariantViolation {
                venue,
                bond_id: row.bond_id,
                what: "price",
                value: row.price,
            });
        }
    }
    Ok(())
}

/// Draws up to the day's attempt budget. Unaffordable pairings are skipped
/// and not replaced, so the realised count can fall short of the budget.
pub fn sample_transactions<R: Rng + ?Sized>(
    state: &mut [MarketState],
    ctx: &DayContext<'_>,
    venue: Venue,
    minimum: f64,
    rng: &mut R,
) -> SimResult<Vec<Transaction>> {
    if state.is_empty() {
        return Err(SimError::EmptyPopulation("bond"));
    }
    if ctx.investors.is_empty() {
        return Err(SimError::EmptyPopulation("investor"));
    }
    let markup = Exp::new(1.0 / AMOUNT_MARKUP_MEAN).map_err(SimError::distribution)?;
    let attempts = venue.attempt_budget(state.len() * ATTEMPTS_PER_BOND, ctx.conditions.sentiment);

    let mut transactions = Vec::with_capacity(attempts);
    for _ in 0..attempts {
        let bond_idx = rng.gen_range(0..state.len());
        let investor = &ctx.investors[rng.gen_range(0..ctx.investors.len())];
        let row = &mut state[bond_idx];

        let budget = investor.ticket_budget(MAX_ASSET_FRACTION);
        let Some((floor, cap)) = amount_bounds(venue, minimum, row.face_value, budget) else {
            trace!(%venue, bond_id = row.bond_id, investor_id = investor.id, "unaffordable draw skipped");
            continue;
        };

        let amount = (floor * (1.0 + markup.sample(rng))).min(cap);
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };

        transactions.push(Transaction {
            date: ctx.date,
            bond_id: row.bond_id,
            investor_id: investor.id,
            price: side.execution_price(row.price, row.spread),
            amount,
            side,
            venue,
        });
        row.daily_volume += amount;
    }
    Ok(transactions)
}

pub fn aggregate_metrics(date: NaiveDate, state: &[MarketState], num_transactions: usize) -> DailyMetrics {
    let n = state.len() as f64;
    DailyMetrics {
        date,
        avg_price: state.iter().map(|r| r.price).sum::<f64>() / n,
        total_volume: state.iter().map(|r| r.daily_volume).sum(),
        avg_spread: state.iter().map(|r| r.spread).sum::<f64>() / n,
        num_transactions,
        market_depth: state.iter().map(|r| r.depth as f64).sum::<f64>() / n,
    }
}

/// The full trading step. Leaves `state` holding the day's updated values,
/// ready for carry-forward.
pub fn simulate_daily_trading<R: Rng + ?Sized>(
    state: &mut [MarketState],
    ctx: &DayContext<'_>,
    venue: Venue,
    minimum: f64,
    rng: &mut R,
) -> SimResult<DayOutcome> {
    if state.is_empty() {
        return Err(SimError::EmptyPopulation("bond"));
    }
    update_prices(state, ctx.conditions, venue, rng)?;
    let transactions = sample_transactions(state, ctx, venue, minimum, rng)?;
    let metrics = aggregate_metrics(ctx.date, state, transactions.len());
    Ok(DayOutcome {
        metrics,
        transactions,
        conditions: *ctx.conditions,
    })
}
