// src/analysis/mod.rs

//! Pure reductions over the engine's output tables. Nothing here touches
//! the filesystem; rendering and persistence belong to the caller.

pub mod investors;
pub mod series;
pub mod summary;

pub use investors::{InvestorBreakdown, breakdown_by_type};
pub use series::SeriesDigest;
pub use summary::{ComparisonReport, ImprovementRatios, VenueSummary};
