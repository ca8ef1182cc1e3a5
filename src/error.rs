// src/error.rs

//! Error type shared by every fallible operation in the engine.

use crate::types::venue::Venue;
use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A configuration scalar is out of range. Detected before the day loop.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// The trading step was handed an empty bond or investor set.
    #[error("cannot trade with an empty {0} set")]
    EmptyPopulation(&'static str),

    /// A `rand_distr` constructor rejected its parameters.
    #[error("invalid distribution parameters: {0}")]
    Distribution(String),

    /// A modelled quantity left its valid domain. This is a modelling bug,
    /// not something to clamp away.
    #[error("{venue} bond {bond_id}: {what} is {value}")]
    InvariantViolation {
        venue: Venue,
        bond_id: u64,
        what: &'static str,
        value: f64,
    },
}

impl SimError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Adapter for the `rand_distr` constructor errors.
    pub(crate) fn distribution(err: impl std::fmt::Display) -> Self {
        Self::Distribution(err.to_string())
    }
}
