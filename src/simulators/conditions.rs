// src/simulators/conditions.rs

//! Shared macro state, drawn once per simulated day and read by both venues.
//!
//! Sentiment is the only quantity carried across days. It follows a clipped
//! AR(1) walk, so consecutive days are correlated rather than independent.
//! Volatility is a deterministic function of sentiment; the reference rate
//! and the event shock are fresh draws each day.

use crate::config::{
    BASE_VOLATILITY, EVENT_IMPACT_SD, EVENT_PROBABILITY, RATE_NOISE_SD, RATE_TREND_TOTAL,
    REFERENCE_RATE, SENTIMENT_DELTA_SD, SENTIMENT_INNOVATION_WEIGHT, SENTIMENT_PERSISTENCE,
    VOLATILITY_SENTIMENT_GAIN,
};
use crate::error::{SimError, SimResult};
use crate::rng::SimRng;
use rand::Rng;
use rand::distributions::Distribution;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketConditions {
    pub day: usize,
    pub reference_rate: f64,
    /// In [-1, 1].
    pub sentiment: f64,
    pub volatility: f64,
    /// Zero on most days.
    pub event_impact: f64,
}

/// One AR(1) step, clipped to [-1, 1].
pub fn next_sentiment(sentiment: f64, delta: f64) -> f64 {
    (SENTIMENT_PERSISTENCE * sentiment + SENTIMENT_INNOVATION_WEIGHT * delta).clamp(-1.0, 1.0)
}

/// Calm markets sit at the base volatility; either extreme adds up to 50%.
pub fn volatility_for(sentiment: f64) -> f64 {
    BASE_VOLATILITY * (1.0 + VOLATILITY_SENTIMENT_GAIN * sentiment.abs())
}

/// Linear drift that adds `RATE_TREND_TOTAL` over the full run.
pub fn rate_trend(day: usize, day_count: usize) -> f64 {
    day as f64 / day_count as f64 * RATE_TREND_TOTAL
}

pub struct ConditionProcess {
    day_count: usize,
    sentiment: f64,
    days_drawn: usize,
    rng: SimRng,
    sentiment_delta: Normal<f64>,
    rate_noise: Normal<f64>,
    event_shock: Normal<f64>,
}

impl ConditionProcess {
    pub fn new(day_count: usize, rng: SimRng) -> SimResult<Self> {
        if day_count == 0 {
            return Err(SimError::config("day_count", "must be positive, got 0"));
        }
        Ok(Self {
            day_count,
            sentiment: 0.0,
            days_drawn: 0,
            rng,
            sentiment_delta: Normal::new(0.0, SENTIMENT_DELTA_SD).map_err(SimError::distribution)?,
            rate_noise: Normal::new(0.0, RATE_NOISE_SD).map_err(SimError::distribution)?,
            event_shock: Normal::new(0.0, EVENT_IMPACT_SD).map_err(SimError::distribution)?,
        })
    }

    /// Draws the conditions for `day`. Day 0 pins sentiment at its initial value.
    pub fn next(&mut self, day: usize) -> MarketConditions {
        let reference_rate = REFERENCE_RATE
            + rate_trend(day, self.day_count)
            + self.rate_noise.sample(&mut self.rng);

        if day == 0 {
            self.sentiment = 0.0;
        } else {
            let delta = self.sentiment_delta.sample(&mut self.rng);
            self.sentiment = next_sentiment(self.sentiment, delta);
        }

        let event_impact = if self.rng.gen_bool(EVENT_PROBABILITY) {
            self.event_shock.sample(&mut self.rng)
        } else {
            0.0
        };
        if event_impact != 0.0 {
            warn!(day, event_impact, "market event shock");
        }

        self.days_drawn += 1;
        MarketConditions {
            day,
            reference_rate,
            sentiment: self.sentiment,
            volatility: volatility_for(self.sentiment),
            event_impact,
        }
    }

    pub fn sentiment(&self) -> f64 {
        self.sentiment
    }

    /// How many days of conditions have been drawn since construction or reset.
    pub fn days_drawn(&self) -> usize {
        self.days_drawn
    }

    /// Back to the initial state with a fresh stream.
    pub fn reset(&mut self, rng: SimRng) {
        self.sentiment = 0.0;
        self.days_drawn = 0;
        self.rng = rng;
    }
}
