//! Error types for sector calculations.

use ep_core::CoreError;
use thiserror::Error;

/// Errors that can occur while evaluating sector economics.
#[derive(Error, Debug, Clone)]
pub enum SectorError {
    #[error("Invalid parameter {what}: {value}")]
    InvalidParameter { what: &'static str, value: f64 },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Unsupported functional form: {what}")]
    UnsupportedForm { what: &'static str },
}

pub type SectorResult<T> = Result<T, SectorError>;

impl From<CoreError> for SectorError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NonFinite { what, .. } => SectorError::NonPhysical { what },
            CoreError::InvalidParameter { what, value } => {
                SectorError::InvalidParameter { what, value }
            }
            CoreError::Invariant { what } => SectorError::NonPhysical { what },
        }
    }
}
