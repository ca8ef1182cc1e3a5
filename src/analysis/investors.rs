// src/analysis/investors.rs

use crate::types::{Investor, InvestorType, Transaction};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::collections::HashMap;

/// Trading activity of one investor class on one venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorBreakdown {
    pub investor_type: InvestorType,
    pub transactions: usize,
    pub total_amount: f64,
    /// `None` when the class never traded.
    pub mean_amount: Option<f64>,
}

/// Groups a transaction log by the type of the investor behind each trade.
/// Always returns one row per [`InvestorType`], in declaration order.
/// Trades by ids missing from `investors` are ignored.
pub fn breakdown_by_type(transactions: &[Transaction], investors: &[Investor]) -> Vec<InvestorBreakdown> {
    let type_of: HashMap<u64, InvestorType> =
        investors.iter().map(|i| (i.id, i.investor_type)).collect();

    let mut amounts: HashMap<InvestorType, Vec<f64>> = HashMap::new();
    for t in transactions {
        if let Some(kind) = type_of.get(&t.investor_id) {
            amounts.entry(*kind).or_default().push(t.amount);
        }
    }

    InvestorType::ALL
        .iter()
        .map(|&investor_type| {
            let bucket = amounts.remove(&investor_type).unwrap_or_default();
            InvestorBreakdown {
                investor_type,
                transactions: bucket.len(),
                total_amount: bucket.iter().sum(),
                mean_amount: (!bucket.is_empty()).then(|| bucket.iter().mean()),
            }
        })
        .collect()
}
