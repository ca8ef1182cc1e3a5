// src/types/investor.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InvestorType {
    Retail,
    Institutional,
    Corporate,
}

impl InvestorType {
    pub const ALL: [InvestorType; 3] = [
        InvestorType::Retail,
        InvestorType::Institutional,
        InvestorType::Corporate,
    ];
}

/// A market participant. Generated once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investor {
    pub id: u64,
    pub investor_type: InvestorType,
    pub assets: f64,
    /// Appetite for on-chain instruments, in [0, 1].
    pub blockchain_preference: f64,
    /// In [0.1, 0.9].
    pub risk_aversion: f64,
    pub investment_horizon: u32,
}

impl Investor {
    /// The most this investor will put into a single trade.
    pub fn ticket_budget(&self, max_asset_fraction: f64) -> f64 {
        self.assets * max_asset_fraction
    }
}
