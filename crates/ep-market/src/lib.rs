//! ep-market: wholesale market clearing for the energy-transition model.
//!
//! Contains:
//! - brent (bracketed derivative-free root finding + bracket expansion)
//! - market (`EnergyMarket` composition root and the clearing-price solve)
//! - error (market error types; non-convergence is distinguishable)

pub mod brent;
pub mod error;
pub mod market;

// Re-exports
pub use brent::{BrentConfig, RootResult, bracket_root, brent_root};
pub use error::{MarketError, MarketResult};
pub use market::{EnergyMarket, PRICE_BRACKET_HI, PRICE_BRACKET_LO};
