// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod analysis;
pub mod config;
pub mod error;
pub mod market;
pub mod population;
pub mod rng;
pub mod simulators;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From our `market` engine ---
pub use market::{Simulation, SimulationOutput, VenueOutput, run_simulation};

// --- From `config` / `error` ---
pub use config::{SimulationConfig, SmoothingConfig};
pub use error::{SimError, SimResult};

// --- From `population` ---
pub use population::{BondUniverse, Population};

// --- From `simulators` ---
pub use simulators::conditions::{ConditionProcess, MarketConditions};
pub use simulators::market_state::MarketState;
pub use simulators::market_trait::Marketable;
pub use simulators::trading::{DayContext, DayOutcome};
pub use simulators::venue_market::VenueMarket;

// --- From `analysis` ---
pub use analysis::{ComparisonReport, ImprovementRatios, VenueSummary};

// --- From `types` ---
pub use types::{Bond, CreditRating, DailyMetrics, Investor, InvestorType, Side, Transaction, Venue};
