// src/population/generator.rs

use super::universe::BondUniverse;
use crate::config::{
    ASSETS_LOG_MEAN, ASSETS_LOG_SIGMA, ASSETS_SCALE, BLOCKCHAIN_PREF_ALPHA, BLOCKCHAIN_PREF_BETA,
    COUPON_RATE_MAX, COUPON_RATE_MIN, CREDIT_RATING_WEIGHTS, FACE_VALUES, HORIZON_WEIGHTS,
    HORIZON_YEARS, INVESTOR_TYPE_WEIGHTS, ISSUE_DATE, MATURITY_YEARS, RISK_AVERSION_MAX,
    RISK_AVERSION_MEAN, RISK_AVERSION_MIN, RISK_AVERSION_SD,
};
use crate::error::{SimError, SimResult};
use crate::types::{Bond, CreditRating, Investor, InvestorType};
use chrono::NaiveDate;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rand_distr::{Beta, LogNormal, Normal};
use tracing::info;

/// Bonds and investors, generated once and read-only for the whole run.
#[derive(Debug, Clone)]
pub struct Population {
    pub bonds: BondUniverse,
    pub investors: Vec<Investor>,
}

impl Population {
    pub fn generate<R: Rng + ?Sized>(
        bond_count: usize,
        investor_count: usize,
        rng: &mut R,
    ) -> SimResult<Self> {
        let bonds = generate_bonds(bond_count, rng)?;
        let investors = generate_investors(investor_count, rng)?;
        Ok(Self { bonds, investors })
    }
}

fn issue_date() -> SimResult<NaiveDate> {
    let (y, m, d) = ISSUE_DATE;
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| SimError::config("issue_date", format!("{y}-{m}-{d} is not a date")))
}

/// `count` traditional bonds plus their tokenized twins.
pub fn generate_bonds<R: Rng + ?Sized>(count: usize, rng: &mut R) -> SimResult<BondUniverse> {
    if count == 0 {
        return Err(SimError::config("bond_count", "must be positive, got 0"));
    }
    let issue = issue_date()?;
    let ratings = WeightedIndex::new(CREDIT_RATING_WEIGHTS).map_err(SimError::distribution)?;

    let mut traditional = Vec::with_capacity(count);
    for id in 1..=count as u64 {
        let face_value = FACE_VALUES[rng.gen_range(0..FACE_VALUES.len())];
        let coupon_rate = rng.gen_range(COUPON_RATE_MIN..COUPON_RATE_MAX);
        let maturity_years = MATURITY_YEARS[rng.gen_range(0..MATURITY_YEARS.len())];
        let credit_rating = CreditRating::ALL[ratings.sample(rng)];
        traditional.push(Bond::new(
            id,
            face_value,
            coupon_rate,
            maturity_years,
            credit_rating,
            issue,
        )?);
    }

    let universe = BondUniverse::from_traditional(traditional);
    info!(
        total = universe.total_count(),
        tokenized = universe.pair_count(),
        "generated bond universe"
    );
    Ok(universe)
}

pub fn generate_investors<R: Rng + ?Sized>(count: usize, rng: &mut R) -> SimResult<Vec<Investor>> {
    if count == 0 {
        return Err(SimError::config("investor_count", "must be positive, got 0"));
    }
    let types = WeightedIndex::new(INVESTOR_TYPE_WEIGHTS).map_err(SimError::distribution)?;
    let horizons = WeightedIndex::new(HORIZON_WEIGHTS).map_err(SimError::distribution)?;
    let wealth = LogNormal::new(ASSETS_LOG_MEAN, ASSETS_LOG_SIGMA).map_err(SimError::distribution)?;
    let preference =
        Beta::new(BLOCKCHAIN_PREF_ALPHA, BLOCKCHAIN_PREF_BETA).map_err(SimError::distribution)?;
    let aversion = Normal::new(RISK_AVERSION_MEAN, RISK_AVERSION_SD).map_err(SimError::distribution)?;

    let investors: Vec<Investor> = (1..=count as u64)
        .map(|id| Investor {
            id,
            investor_type: InvestorType::ALL[types.sample(rng)],
            assets: wealth.sample(rng) * ASSETS_SCALE,
            blockchain_preference: preference.sample(rng),
            risk_aversion: aversion
                .sample(rng)
                .clamp(RISK_AVERSION_MIN, RISK_AVERSION_MAX),
            investment_horizon: HORIZON_YEARS[horizons.sample(rng)],
        })
        .collect();

    info!(count = investors.len(), "generated investors");
    Ok(investors)
}
