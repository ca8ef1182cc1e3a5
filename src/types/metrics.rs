// src/types/metrics.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One venue's aggregate state at the end of one simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    pub date: NaiveDate,
    pub avg_price: f64,
    pub total_volume: f64,
    pub avg_spread: f64,
    pub num_transactions: usize,
    /// Mean standing-order count across the venue's bonds.
    pub market_depth: f64,
}
