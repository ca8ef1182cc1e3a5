// src/types/venue.rs

use crate::config::{
    BASE_VOLUME_FRACTION, TOKENIZED_CAP_MULTIPLE, TOKENIZED_DEPTH_FLOOR, TOKENIZED_SPREAD_BASE,
    TOKENIZED_SPREAD_SLOPE, TOKENIZED_VOLUME_MULTIPLIER, TRADITIONAL_CAP_MULTIPLE,
    TRADITIONAL_DEPTH_FLOOR, TRADITIONAL_SPREAD_BASE, TRADITIONAL_SPREAD_SLOPE,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two parallel markets. Every structural difference between
/// them is read off this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Traditional,
    Tokenized,
}

impl Venue {
    pub const ALL: [Venue; 2] = [Venue::Traditional, Venue::Tokenized];

    pub fn is_tokenized(self) -> bool {
        self == Venue::Tokenized
    }

    /// Liquidity floor for a bond: 1% of face value, five times that on chain.
    pub fn floor_volume(self, face_value: f64) -> f64 {
        let base = face_value * BASE_VOLUME_FRACTION;
        match self {
            Venue::Traditional => base,
            Venue::Tokenized => base * TOKENIZED_VOLUME_MULTIPLIER,
        }
    }

    /// Opening bid-ask spread, linear in maturity.
    pub fn initial_spread(self, maturity_years: u32) -> f64 {
        let (base, slope) = match self {
            Venue::Traditional => (TRADITIONAL_SPREAD_BASE, TRADITIONAL_SPREAD_SLOPE),
            Venue::Tokenized => (TOKENIZED_SPREAD_BASE, TOKENIZED_SPREAD_SLOPE),
        };
        base + slope * maturity_years as f64
    }

    /// Guaranteed number of standing orders before the Poisson jitter.
    pub fn depth_floor(self) -> u32 {
        match self {
            Venue::Traditional => TRADITIONAL_DEPTH_FLOOR,
            Venue::Tokenized => TOKENIZED_DEPTH_FLOOR,
        }
    }

    /// Largest single trade as a multiple of face value.
    pub fn cap_multiple(self) -> f64 {
        match self {
            Venue::Traditional => TRADITIONAL_CAP_MULTIPLE,
            Venue::Tokenized => TOKENIZED_CAP_MULTIPLE,
        }
    }

    /// Transaction attempts for the day. Tokenized flow sits higher and
    /// reacts more strongly to sentiment.
    pub fn attempt_budget(self, base: usize, sentiment: f64) -> usize {
        let scale = match self {
            Venue::Traditional => 0.5 + 0.5 * sentiment,
            Venue::Tokenized => 1.5 + sentiment,
        };
        // Truncate toward zero, then floor at one attempt.
        let attempts = (base as f64 * scale) as i64;
        attempts.max(1) as usize
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Venue::Traditional => f.write_str("traditional"),
            Venue::Tokenized => f.write_str("tokenized"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MATURITY_YEARS;

    #[test]
    fn tokenized_spread_never_exceeds_traditional() {
        for years in MATURITY_YEARS.iter().copied().chain(0..=50) {
            assert!(
                Venue::Tokenized.initial_spread(years) <= Venue::Traditional.initial_spread(years),
                "maturity {years}"
            );
        }
    }

    #[test]
    fn tokenized_depth_floor_is_deeper() {
        assert!(Venue::Tokenized.depth_floor() >= Venue::Traditional.depth_floor());
    }

    #[test]
    fn floor_volume_scales_for_tokenized() {
        assert_eq!(Venue::Traditional.floor_volume(10_000.0), 100.0);
        assert_eq!(Venue::Tokenized.floor_volume(10_000.0), 500.0);
    }

    #[test]
    fn attempt_budget_follows_sentiment() {
        // base = 2 * 10 bonds
        assert_eq!(Venue::Tokenized.attempt_budget(20, 0.0), 30);
        assert_eq!(Venue::Traditional.attempt_budget(20, 0.0), 10);
        assert_eq!(Venue::Tokenized.attempt_budget(20, 0.5), 40);
        assert_eq!(Venue::Traditional.attempt_budget(20, 0.5), 15);
        // Deeply negative sentiment still leaves one attempt.
        assert_eq!(Venue::Traditional.attempt_budget(20, -1.0), 1);
        assert_eq!(Venue::Tokenized.attempt_budget(2, -1.0), 1);
        // Truncation, not rounding: 4 * 0.55 = 2.2 -> 2
        assert_eq!(Venue::Traditional.attempt_budget(4, 0.1), 2);
    }

    #[test]
    fn display_matches_serde_names() {
        for venue in Venue::ALL {
            let json = serde_json::to_string(&venue).unwrap();
            assert_eq!(json, format!("\"{venue}\""));
        }
    }
}
