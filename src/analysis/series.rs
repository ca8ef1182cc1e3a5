// src/analysis/series.rs

use crate::config::ROLLING_VOLATILITY_WINDOW;
use crate::types::DailyMetrics;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Day-over-day relative change of the mean price. One shorter than `metrics`.
pub fn daily_returns(metrics: &[DailyMetrics]) -> Vec<f64> {
    metrics
        .windows(2)
        .map(|w| w[1].avg_price / w[0].avg_price - 1.0)
        .collect()
}

/// Trades per unit of volume.
pub fn liquidity_ratio(metrics: &[DailyMetrics]) -> Vec<f64> {
    metrics
        .iter()
        .map(|m| m.num_transactions as f64 / m.total_volume)
        .collect()
}

/// Spread paid on the day's volume, a rough transaction-cost proxy.
pub fn transaction_costs(metrics: &[DailyMetrics]) -> Vec<f64> {
    metrics.iter().map(|m| m.avg_spread * m.total_volume).collect()
}

pub fn cumulative(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Sample standard deviation over each full window, scaled by `sqrt(window)`.
pub fn rolling_volatility(returns: &[f64], window: usize) -> Vec<f64> {
    if window < 2 {
        return Vec::new();
    }
    returns
        .windows(window)
        .map(|w| w.std_dev() * (window as f64).sqrt())
        .collect()
}

/// End-of-run values of the daily series for one venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDigest {
    pub cumulative_volume: f64,
    pub cumulative_transaction_cost: f64,
    pub mean_liquidity_ratio: f64,
    /// `None` when the run is shorter than one full window of returns.
    pub peak_rolling_volatility: Option<f64>,
}

impl SeriesDigest {
    pub fn from_metrics(metrics: &[DailyMetrics]) -> Self {
        let volumes: Vec<f64> = metrics.iter().map(|m| m.total_volume).collect();
        let last = |v: Vec<f64>| v.last().copied().unwrap_or(0.0);
        let liquidity = liquidity_ratio(metrics);

        Self {
            cumulative_volume: last(cumulative(&volumes)),
            cumulative_transaction_cost: last(cumulative(&transaction_costs(metrics))),
            mean_liquidity_ratio: if liquidity.is_empty() { 0.0 } else { liquidity.iter().mean() },
            peak_rolling_volatility: rolling_volatility(&daily_returns(metrics), ROLLING_VOLATILITY_WINDOW)
                .into_iter()
                .reduce(f64::max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn row(day: u32, price: f64, volume: f64, spread: f64, trades: usize) -> DailyMetrics {
        DailyMetrics {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            avg_price: price,
            total_volume: volume,
            avg_spread: spread,
            num_transactions: trades,
            market_depth: 10.0,
        }
    }

    #[test]
    fn returns_are_relative_changes() {
        let m = [row(1, 100.0, 1.0, 0.01, 1), row(2, 110.0, 1.0, 0.01, 1), row(3, 99.0, 1.0, 0.01, 1)];
        let r = daily_returns(&m);
        assert_eq!(r.len(), 2);
        assert_relative_eq!(r[0], 0.1, epsilon = 1e-12);
        assert_relative_eq!(r[1], -0.1, epsilon = 1e-12);
    }

    #[test]
    fn liquidity_and_costs_per_day() {
        let m = [row(1, 100.0, 2_000.0, 0.01, 10), row(2, 100.0, 500.0, 0.02, 0)];
        assert_eq!(liquidity_ratio(&m), vec![0.005, 0.0]);
        assert_eq!(transaction_costs(&m), vec![20.0, 10.0]);
        assert_eq!(cumulative(&transaction_costs(&m)), vec![20.0, 30.0]);
    }

    #[test]
    fn rolling_volatility_uses_full_windows_only() {
        let returns = [0.01, -0.01, 0.01, -0.01, 0.01];
        let vol = rolling_volatility(&returns, 4);
        assert_eq!(vol.len(), 2);
        // Sample sd of [a, -a, a, -a] is a * sqrt(4/3)
        let expected = 0.01 * (4.0f64 / 3.0).sqrt() * 2.0;
        assert_relative_eq!(vol[0], expected, epsilon = 1e-12);
        assert_relative_eq!(vol[1], expected, epsilon = 1e-12);
        assert!(rolling_volatility(&returns, 10).is_empty());
    }

    #[test]
    fn digest_sums_the_run_and_skips_short_windows() {
        let m = [row(1, 100.0, 2_000.0, 0.01, 10), row(2, 100.0, 500.0, 0.02, 0)];
        let digest = SeriesDigest::from_metrics(&m);
        assert_relative_eq!(digest.cumulative_volume, 2_500.0);
        assert_relative_eq!(digest.cumulative_transaction_cost, 30.0, epsilon = 1e-9);
        assert_relative_eq!(digest.mean_liquidity_ratio, 0.0025, epsilon = 1e-12);
        assert!(digest.peak_rolling_volatility.is_none());
    }
}
