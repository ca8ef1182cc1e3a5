// src/types/bond.rs
//! Immutable bond terms.

use crate::error::{SimError, SimResult};
use crate::types::venue::Venue;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditRating {
    AAA,
    AA,
    A,
    BBB,
    BB,
    B,
}

impl CreditRating {
    /// Ordered best to worst; the population weights follow this order.
    pub const ALL: [CreditRating; 6] = [
        CreditRating::AAA,
        CreditRating::AA,
        CreditRating::A,
        CreditRating::BBB,
        CreditRating::BB,
        CreditRating::B,
    ];
}

/// Immutable facts about an issue. A tokenized bond is the exact economic
/// twin of a traditional one; only `id` and `is_tokenized` differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub id: u64,
    pub face_value: f64,
    pub coupon_rate: f64,
    pub maturity_years: u32,
    pub credit_rating: CreditRating,
    pub issue_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub is_tokenized: bool,
}

impl Bond {
    /// Builds a traditional bond; the maturity date is derived from the issue date.
    pub fn new(
        id: u64,
        face_value: f64,
        coupon_rate: f64,
        maturity_years: u32,
        credit_rating: CreditRating,
        issue_date: NaiveDate,
    ) -> SimResult<Self> {
        let maturity_date = issue_date
            .checked_add_months(Months::new(maturity_years * 12))
            .ok_or_else(|| {
                SimError::config(
                    "maturity_years",
                    format!("{maturity_years} years from {issue_date} is out of range"),
                )
            })?;
        Ok(Self {
            id,
            face_value,
            coupon_rate,
            maturity_years,
            credit_rating,
            issue_date,
            maturity_date,
            is_tokenized: false,
        })
    }

    /// The on-chain twin of this bond under a new id.
    pub fn tokenized_mirror(&self, id: u64) -> Self {
        Self {
            id,
            is_tokenized: true,
            ..self.clone()
        }
    }

    pub fn venue(&self) -> Venue {
        if self.is_tokenized {
            Venue::Tokenized
        } else {
            Venue::Traditional
        }
    }

    /// Same economic terms, regardless of id and venue.
    pub fn same_terms(&self, other: &Bond) -> bool {
        self.face_value == other.face_value
            && self.coupon_rate == other.coupon_rate
            && self.maturity_years == other.maturity_years
            && self.credit_rating == other.credit_rating
            && self.issue_date == other.issue_date
            && self.maturity_date == other.maturity_date
    }
}
