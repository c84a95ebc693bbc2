//! Error types for market clearing and root finding.

use ep_core::numeric::Real;
use ep_sectors::SectorError;
use thiserror::Error;

/// Errors from the clearing-price solve and the underlying root finder.
#[derive(Error, Debug, Clone)]
pub enum MarketError {
    #[error("No sign change over bracket [{lo:e}, {hi:e}]: f(lo)={f_lo:e}, f(hi)={f_hi:e}")]
    NoSignChange {
        lo: Real,
        hi: Real,
        f_lo: Real,
        f_hi: Real,
    },

    #[error("Root search exhausted {max_iterations} iterations (last x={x:e})")]
    IterationsExhausted { max_iterations: usize, x: Real },

    #[error("Non-finite objective value at x={x:e}")]
    NonFinite { x: Real },

    #[error(transparent)]
    Sector(#[from] SectorError),
}

pub type MarketResult<T> = Result<T, MarketError>;

impl MarketError {
    /// Whether this is a non-convergence condition (missing bracket or
    /// exhausted iteration budget) rather than a model evaluation error.
    pub fn is_non_convergence(&self) -> bool {
        matches!(
            self,
            MarketError::NoSignChange { .. } | MarketError::IterationsExhausted { .. }
        )
    }
}
