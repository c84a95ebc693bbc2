//! Error types for the dynamical system and the shooting solver.

use ep_core::numeric::Real;
use ep_market::MarketError;
use ep_sectors::SectorError;
use thiserror::Error;

/// Errors from equilibrium computation, integration and trajectory
/// annotation. All are local to one solve.
#[derive(Error, Debug, Clone)]
pub enum DynamicsError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Numeric failure: {what}")]
    Numeric { what: String },

    #[error("Degenerate shooting: {what}")]
    DegenerateShooting { what: String },

    #[error(
        "Integration failure at t={t}: {what} (last valid state q={q}, capital={capital})"
    )]
    IntegrationFailure {
        t: Real,
        q: Real,
        capital: Real,
        what: String,
    },

    #[error(transparent)]
    Market(#[from] MarketError),

    #[error(transparent)]
    Sector(#[from] SectorError),
}

pub type DynResult<T> = Result<T, DynamicsError>;
