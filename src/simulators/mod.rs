// src/simulators/mod.rs

pub mod carry_forward;
pub mod conditions;
pub mod market_state;
pub mod market_trait;
pub mod trading;
pub mod venue_market;
