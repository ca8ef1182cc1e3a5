// src/analysis/summary.rs

use super::series::daily_returns;
use crate::config::TRADING_DAYS_PER_YEAR;
use crate::market::SimulationOutput;
use crate::types::{DailyMetrics, Venue};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Whole-run statistics for one venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueSummary {
    pub venue: Venue,
    pub total_transactions: usize,
    pub total_volume: f64,
    pub avg_daily_transactions: f64,
    pub avg_daily_volume: f64,
    /// Mean spread, in percent.
    pub avg_spread_pct: f64,
    pub avg_market_depth: f64,
    /// Annualised standard deviation of daily mean-price returns, in percent.
    /// `None` until there are at least two returns.
    pub annualized_volatility_pct: Option<f64>,
}

impl VenueSummary {
    /// `None` for an empty table.
    pub fn from_metrics(venue: Venue, metrics: &[DailyMetrics]) -> Option<Self> {
        if metrics.is_empty() {
            return None;
        }
        let total_transactions = metrics.iter().map(|m| m.num_transactions).sum();
        let total_volume = metrics.iter().map(|m| m.total_volume).sum();

        let returns = daily_returns(metrics);
        let annualized_volatility_pct = (returns.len() >= 2)
            .then(|| returns.iter().std_dev() * 100.0 * TRADING_DAYS_PER_YEAR.sqrt());

        Some(Self {
            venue,
            total_transactions,
            total_volume,
            avg_daily_transactions: metrics.iter().map(|m| m.num_transactions as f64).mean(),
            avg_daily_volume: metrics.iter().map(|m| m.total_volume).mean(),
            avg_spread_pct: metrics.iter().map(|m| m.avg_spread).mean() * 100.0,
            avg_market_depth: metrics.iter().map(|m| m.market_depth).mean(),
            annualized_volatility_pct,
        })
    }
}

/// How the tokenized venue compares with the traditional one. A ratio whose
/// denominator is zero is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementRatios {
    pub transactions_ratio: Option<f64>,
    pub volume_ratio: Option<f64>,
    /// `1 - tokenized / traditional` mean spread.
    pub spread_reduction: Option<f64>,
    pub depth_improvement: Option<f64>,
    pub volatility_ratio: Option<f64>,
}

fn ratio(num: f64, den: f64) -> Option<f64> {
    (den != 0.0 && den.is_finite() && num.is_finite()).then(|| num / den)
}

impl ImprovementRatios {
    pub fn between(traditional: &VenueSummary, tokenized: &VenueSummary) -> Self {
        Self {
            transactions_ratio: ratio(
                tokenized.total_transactions as f64,
                traditional.total_transactions as f64,
            ),
            volume_ratio: ratio(tokenized.total_volume, traditional.total_volume),
            spread_reduction: ratio(tokenized.avg_spread_pct, traditional.avg_spread_pct)
                .map(|r| 1.0 - r),
            depth_improvement: ratio(tokenized.avg_market_depth, traditional.avg_market_depth),
            volatility_ratio: tokenized
                .annualized_volatility_pct
                .zip(traditional.annualized_volatility_pct)
                .and_then(|(tok, trad)| ratio(tok, trad)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub traditional: VenueSummary,
    pub tokenized: VenueSummary,
    pub improvement: ImprovementRatios,
}

impl ComparisonReport {
    /// `None` when the run produced no days.
    pub fn from_output(output: &SimulationOutput) -> Option<Self> {
        let traditional = VenueSummary::from_metrics(Venue::Traditional, &output.traditional.metrics)?;
        let tokenized = VenueSummary::from_metrics(Venue::Tokenized, &output.tokenized.metrics)?;
        let improvement = ImprovementRatios::between(&traditional, &tokenized);
        Some(Self {
            traditional,
            tokenized,
            improvement,
        })
    }
}

// -----------------------------------------------------------------------------
//  Unit tests: summary statistics on a hand-built table
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn row(day: u32, price: f64, volume: f64, spread: f64, trades: usize, depth: f64) -> DailyMetrics {
        DailyMetrics {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            avg_price: price,
            total_volume: volume,
            avg_spread: spread,
            num_transactions: trades,
            market_depth: depth,
        }
    }

    fn traditional_table() -> Vec<DailyMetrics> {
        vec![
            row(1, 100.0, 1_000.0, 0.02, 2, 20.0),
            row(2, 101.0, 3_000.0, 0.02, 4, 20.0),
            row(3, 100.0, 2_000.0, 0.02, 0, 20.0),
        ]
    }

    fn tokenized_table() -> Vec<DailyMetrics> {
        vec![
            row(1, 100.0, 4_000.0, 0.005, 6, 100.0),
            row(2, 100.5, 6_000.0, 0.005, 9, 100.0),
            row(3, 100.0, 5_000.0, 0.005, 12, 100.0),
        ]
    }

    #[test]
    fn venue_summary_matches_hand_computation() {
        let s = VenueSummary::from_metrics(Venue::Traditional, &traditional_table()).unwrap();

        assert_eq!(s.total_transactions, 6);
        assert_relative_eq!(s.total_volume, 6_000.0);
        assert_relative_eq!(s.avg_daily_transactions, 2.0);
        assert_relative_eq!(s.avg_daily_volume, 2_000.0);
        assert_relative_eq!(s.avg_spread_pct, 2.0, epsilon = 1e-12);
        assert_relative_eq!(s.avg_market_depth, 20.0);

        // returns: +1%, then 100/101 - 1
        let r: [f64; 2] = [0.01, 100.0 / 101.0 - 1.0];
        let mean = (r[0] + r[1]) / 2.0;
        let sd = (((r[0] - mean).powi(2) + (r[1] - mean).powi(2)) / 1.0).sqrt();
        assert_relative_eq!(
            s.annualized_volatility_pct.unwrap(),
            sd * 100.0 * 252f64.sqrt(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn single_day_has_no_volatility() {
        let s = VenueSummary::from_metrics(Venue::Tokenized, &tokenized_table()[..1]).unwrap();
        assert!(s.annualized_volatility_pct.is_none());
        assert!(VenueSummary::from_metrics(Venue::Tokenized, &[]).is_none());
    }

    #[test]
    fn ratios_compare_tokenized_against_traditional() {
        let trad = VenueSummary::from_metrics(Venue::Traditional, &traditional_table()).unwrap();
        let tok = VenueSummary::from_metrics(Venue::Tokenized, &tokenized_table()).unwrap();

        let r = ImprovementRatios::between(&trad, &tok);

        assert_relative_eq!(r.transactions_ratio.unwrap(), 27.0 / 6.0);
        assert_relative_eq!(r.volume_ratio.unwrap(), 15_000.0 / 6_000.0);
        assert_relative_eq!(r.spread_reduction.unwrap(), 0.75, epsilon = 1e-12);
        assert_relative_eq!(r.depth_improvement.unwrap(), 5.0);
        // Tokenized moved half as far each day.
        assert!(r.volatility_ratio.unwrap() < 1.0);
    }

    #[test]
    fn zero_denominators_are_none() {
        let mut quiet = traditional_table();
        for m in &mut quiet {
            m.num_transactions = 0;
        }
        let trad = VenueSummary::from_metrics(Venue::Traditional, &quiet).unwrap();
        let tok = VenueSummary::from_metrics(Venue::Tokenized, &tokenized_table()).unwrap();

        let r = ImprovementRatios::between(&trad, &tok);
        assert!(r.transactions_ratio.is_none());
        assert!(r.volume_ratio.is_some());
    }

    #[test]
    fn report_is_built_from_simulation_output() {
        let mut output = SimulationOutput::default();
        output.traditional.metrics = traditional_table();
        output.tokenized.metrics = tokenized_table();

        let report = ComparisonReport::from_output(&output).unwrap();
        assert_eq!(report.traditional.venue, Venue::Traditional);
        assert_eq!(report.tokenized.venue, Venue::Tokenized);
        assert!(ComparisonReport::from_output(&SimulationOutput::default()).is_none());
    }
}
