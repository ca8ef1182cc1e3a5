// src/simulators/market_state.rs

use crate::config::REFERENCE_RATE;
use crate::error::{SimError, SimResult};
use crate::types::{Bond, Venue};
use rand::Rng;
use rand::distributions::Distribution;
use rand_distr::Poisson;
use serde::{Deserialize, Serialize};

/// A venue's live view of one bond. Owned by exactly one venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketState {
    pub bond_id: u64,
    // Copied from the bond so the hot loop never goes back to the universe.
    pub face_value: f64,
    pub maturity_years: u32,

    pub price: f64,
    pub daily_volume: f64,
    pub spread: f64,
    /// Standing orders on the book.
    pub depth: u32,
}

/// Opening price: face value adjusted by coupon carry over the remaining life.
pub fn initial_price(bond: &Bond) -> f64 {
    bond.face_value * (1.0 + (bond.coupon_rate - REFERENCE_RATE) * bond.maturity_years as f64)
}

/// Builds the opening state for every bond listed on `venue`.
pub fn initialize_venue<R: Rng + ?Sized>(
    bonds: &[Bond],
    venue: Venue,
    rng: &mut R,
) -> SimResult<Vec<MarketState>> {
    let floor = venue.depth_floor();
    let jitter = Poisson::new(floor as f64).map_err(SimError::distribution)?;

    bonds
        .iter()
        .map(|bond| {
            let price = initial_price(bond);
            if !price.is_finite() || price <= 0.0 {
                return Err(SimError::InvariantViolation {
                    venue,
                    bond_id: bond.id,
                    what: "initial price",
                    value: price,
                });
            }
            let extra: f64 = jitter.sample(rng);
            Ok(MarketState {
                bond_id: bond.id,
                face_value: bond.face_value,
                maturity_years: bond.maturity_years,
                price,
                daily_volume: venue.floor_volume(bond.face_value),
                spread: venue.initial_spread(bond.maturity_years),
                depth: floor + extra as u32,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CreditRating;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bond(face: f64, coupon: f64, years: u32) -> Bond {
        let issue = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Bond::new(1, face, coupon, years, CreditRating::AA, issue).unwrap()
    }

    #[test]
    fn price_reflects_coupon_versus_reference() {
        assert!((initial_price(&bond(1_000.0, 0.05, 10)) - 1_200.0).abs() < 1e-9);
        assert!((initial_price(&bond(1_000.0, 0.03, 10)) - 1_000.0).abs() < 1e-9);
        assert!((initial_price(&bond(1_000.0, 0.02, 5)) - 950.0).abs() < 1e-9);
    }

    #[test]
    fn venues_differ_only_in_liquidity_terms() {
        // Arrange
        let trad = bond(10_000.0, 0.04, 7);
        let tok = trad.tokenized_mirror(2);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        // Act
        let t = &initialize_venue(&[trad], Venue::Traditional, &mut rng).unwrap()[0];
        let k = &initialize_venue(&[tok], Venue::Tokenized, &mut rng).unwrap()[0];

        // Assert
        assert_eq!(t.price, k.price);
        assert_eq!(t.daily_volume, 100.0);
        assert_eq!(k.daily_volume, 500.0);
        assert!((t.spread - 0.019).abs() < 1e-12);
        assert!((k.spread - 0.008).abs() < 1e-12);
        assert!(t.depth >= 10);
        assert!(k.depth >= 50);
    }

    #[test]
    fn deep_discount_bond_is_an_invariant_violation() {
        // 30 years at 1% against a 3% reference wipes out 60% of face value,
        // which is still positive; push the coupon below zero to break it.
        let broken = bond(1_000.0, -0.1, 30);
        let err = initialize_venue(&[broken], Venue::Traditional, &mut ChaCha8Rng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, SimError::InvariantViolation { what: "initial price", .. }));
    }
}
