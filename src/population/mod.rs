// src/population/mod.rs
// -----------------
pub mod generator;
pub mod universe;

// Re-export the most useful items so callers don't have to dive
// another level down the path.
pub use generator::{Population, generate_bonds, generate_investors};
pub use universe::BondUniverse;
