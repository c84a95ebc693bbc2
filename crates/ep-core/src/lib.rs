//! ep-core: stable foundation for enpath.
//!
//! Contains:
//! - numeric (Real + tolerances + float guards)
//! - prices (exogenous price triple held fixed for one solve)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod prices;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use prices::Prices;
