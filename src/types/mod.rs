// src/types/mod.rs

pub mod bond;
pub mod investor;
pub mod metrics;
pub mod order;
pub mod venue;

pub use bond::{Bond, CreditRating};
pub use investor::{Investor, InvestorType};
pub use metrics::DailyMetrics;
pub use order::{Side, Transaction};
pub use venue::Venue;
