// src/types/order.rs

use crate::types::venue::Venue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Execution price around `mid`: buyers lift the ask, sellers hit the bid.
    pub fn execution_price(self, mid: f64, spread: f64) -> f64 {
        match self {
            Side::Buy => mid * (1.0 + spread / 2.0),
            Side::Sell => mid * (1.0 - spread / 2.0),
        }
    }
}

/// An executed trade. Appended to its venue's log and never touched again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub bond_id: u64,
    pub investor_id: u64,
    pub price: f64,
    pub amount: f64,
    pub side: Side,
    pub venue: Venue,
}
