// src/simulators/carry_forward.rs

//! Turns a day's ending book into the next day's starting book.
//!
//! Volume is pulled back toward its floor so one busy day fades instead of
//! sticking; spread and depth pick up a little multiplicative noise. Price is
//! carried over exactly.

use super::market_state::MarketState;
use crate::config::SmoothingConfig;
use crate::error::{SimError, SimResult};
use crate::types::Venue;
use rand::Rng;
use rand::distributions::Distribution;
use rand_distr::Normal;

pub fn carry_forward<R: Rng + ?Sized>(
    state: &mut [MarketState],
    venue: Venue,
    smoothing: &SmoothingConfig,
    rng: &mut R,
) -> SimResult<()> {
    let spread_noise = Normal::new(1.0, smoothing.spread_noise_sd).map_err(SimError::distribution)?;
    let depth_noise = Normal::new(1.0, smoothing.depth_noise_sd).map_err(SimError::distribution)?;

    for row in state.iter_mut() {
        row.daily_volume = venue.floor_volume(row.face_value) * smoothing.volume_floor_weight
            + row.daily_volume * smoothing.volume_carry_weight;

        row.spread *= spread_noise.sample(rng);
        if !row.spread.is_finite() || row.spread <= 0.0 {
            return Err(SimError::InvariantViolation {
                venue,
                bond_id: row.bond_id,
                what: "spread",
                value: row.spread,
            });
        }

        let depth = (row.depth as f64 * depth_noise.sample(rng)).round();
        if !depth.is_finite() || depth < 0.0 {
            return Err(SimError::InvariantViolation {
                venue,
                bond_id: row.bond_id,
                what: "depth",
                value: depth,
            });
        }
        row.depth = depth as u32;
    }
    Ok(())
}
