use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid parameter {what}: {value}")]
    InvalidParameter { what: &'static str, value: f64 },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
