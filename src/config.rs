// src/config.rs

//! A centralized place for the model's tuning parameters.
//!
//! The constants describe the fixed market model. The scalars a caller is
//! expected to vary live in [`SimulationConfig`].

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

// --- Population: bonds ---
pub const FACE_VALUES: [f64; 5] = [1_000.0, 5_000.0, 10_000.0, 50_000.0, 100_000.0];
pub const COUPON_RATE_MIN: f64 = 0.01;
pub const COUPON_RATE_MAX: f64 = 0.08;
pub const MATURITY_YEARS: [u32; 9] = [1, 2, 3, 5, 7, 10, 15, 20, 30];
// Weights line up with `CreditRating::ALL`.
pub const CREDIT_RATING_WEIGHTS: [f64; 6] = [0.05, 0.15, 0.25, 0.30, 0.15, 0.10];
/// Every bond is issued on the first simulated day.
pub const ISSUE_DATE: (i32, u32, u32) = (2024, 1, 1);

// --- Population: investors ---
// Weights line up with `InvestorType::ALL`.
pub const INVESTOR_TYPE_WEIGHTS: [f64; 3] = [0.6, 0.3, 0.1];
// Wealth is heavy tailed: LogNormal(10, 2) scaled up.
pub const ASSETS_LOG_MEAN: f64 = 10.0;
pub const ASSETS_LOG_SIGMA: f64 = 2.0;
pub const ASSETS_SCALE: f64 = 10_000.0;
pub const BLOCKCHAIN_PREF_ALPHA: f64 = 2.0;
pub const BLOCKCHAIN_PREF_BETA: f64 = 5.0;
pub const RISK_AVERSION_MEAN: f64 = 0.5;
pub const RISK_AVERSION_SD: f64 = 0.15;
pub const RISK_AVERSION_MIN: f64 = 0.1;
pub const RISK_AVERSION_MAX: f64 = 0.9;
pub const HORIZON_YEARS: [u32; 7] = [1, 2, 3, 5, 7, 10, 15];
pub const HORIZON_WEIGHTS: [f64; 7] = [0.15, 0.20, 0.25, 0.15, 0.10, 0.10, 0.05];

// --- Market initialization ---
pub const REFERENCE_RATE: f64 = 0.03;
/// Floor daily volume as a fraction of face value.
pub const BASE_VOLUME_FRACTION: f64 = 0.01;
pub const TOKENIZED_VOLUME_MULTIPLIER: f64 = 5.0;
pub const TRADITIONAL_SPREAD_BASE: f64 = 0.005;
pub const TRADITIONAL_SPREAD_SLOPE: f64 = 0.002;
pub const TOKENIZED_SPREAD_BASE: f64 = 0.001;
pub const TOKENIZED_SPREAD_SLOPE: f64 = 0.001;
pub const TRADITIONAL_DEPTH_FLOOR: u32 = 10;
pub const TOKENIZED_DEPTH_FLOOR: u32 = 50;

// --- Market conditions ---
pub const SENTIMENT_PERSISTENCE: f64 = 0.8;
pub const SENTIMENT_INNOVATION_WEIGHT: f64 = 0.2;
pub const SENTIMENT_DELTA_SD: f64 = 0.1;
pub const BASE_VOLATILITY: f64 = 0.01;
pub const VOLATILITY_SENTIMENT_GAIN: f64 = 0.5;
/// Total drift of the reference rate over the whole run.
pub const RATE_TREND_TOTAL: f64 = 0.01;
pub const RATE_NOISE_SD: f64 = 0.0005;
pub const EVENT_PROBABILITY: f64 = 0.01;
pub const EVENT_IMPACT_SD: f64 = 0.03;

// --- Daily trading ---
/// Simplified duration: price sensitivity per year of maturity.
pub const RATE_SENSITIVITY_PER_YEAR: f64 = 0.05;
pub const SENTIMENT_PRICE_GAIN: f64 = 0.01;
pub const ATTEMPTS_PER_BOND: usize = 2;
/// Share of an investor's assets one trade may commit.
pub const MAX_ASSET_FRACTION: f64 = 0.1;
pub const TRADITIONAL_CAP_MULTIPLE: f64 = 5.0;
pub const TOKENIZED_CAP_MULTIPLE: f64 = 1.0;
/// Mean of the exponential markup applied on top of the venue minimum.
pub const AMOUNT_MARKUP_MEAN: f64 = 2.0;

// --- Reporting ---
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
pub const ROLLING_VOLATILITY_WINDOW: usize = 30;
pub const PROGRESS_LOG_INTERVAL: usize = 30;

/// Carry-forward smoothing policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Weight of the recomputed floor volume.
    pub volume_floor_weight: f64,
    /// Weight of the day's realised volume.
    pub volume_carry_weight: f64,
    /// Standard deviation of the multiplicative spread noise (mean 1).
    pub spread_noise_sd: f64,
    /// Standard deviation of the multiplicative depth noise (mean 1).
    pub depth_noise_sd: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            volume_floor_weight: 0.2,
            volume_carry_weight: 0.8,
            spread_noise_sd: 0.05,
            depth_noise_sd: 0.1,
        }
    }
}

impl SmoothingConfig {
    pub fn validate(&self) -> SimResult<()> {
        non_negative("smoothing.volume_floor_weight", self.volume_floor_weight)?;
        non_negative("smoothing.volume_carry_weight", self.volume_carry_weight)?;
        non_negative("smoothing.spread_noise_sd", self.spread_noise_sd)?;
        non_negative("smoothing.depth_noise_sd", self.depth_noise_sd)
    }
}

/// Everything a caller chooses about a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub bond_count: usize,
    pub investor_count: usize,
    pub day_count: usize,
    pub traditional_min_amount: f64,
    pub tokenized_min_amount: f64,
    pub seed: u64,
    /// Step the two venues on separate rayon tasks within a day.
    pub parallel_venues: bool,
    pub smoothing: SmoothingConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bond_count: 100,
            investor_count: 1_000,
            day_count: 365,
            traditional_min_amount: 10_000.0,
            tokenized_min_amount: 100.0,
            seed: 42,
            parallel_venues: true,
            smoothing: SmoothingConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Rejects non-positive counts and amounts. Runs before any state is built.
    pub fn validate(&self) -> SimResult<()> {
        positive_count("bond_count", self.bond_count)?;
        positive_count("investor_count", self.investor_count)?;
        positive_count("day_count", self.day_count)?;
        positive_amount("traditional_min_amount", self.traditional_min_amount)?;
        positive_amount("tokenized_min_amount", self.tokenized_min_amount)?;
        self.smoothing.validate()
    }
}

fn positive_count(field: &'static str, value: usize) -> SimResult<()> {
    if value == 0 {
        return Err(SimError::config(field, "must be positive, got 0"));
    }
    Ok(())
}

fn positive_amount(field: &'static str, value: f64) -> SimResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SimError::config(
            field,
            format!("must be a positive number, got {value}"),
        ));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> SimResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimError::config(
            field,
            format!("must be a non-negative number, got {value}"),
        ));
    }
    Ok(())
}
