//! ep-sectors: sector component library for the energy-transition model.
//!
//! Provides the two competing energy producers and the consumer side of the
//! wholesale market:
//! - `NonRenewableSector` — fossil-fuel generation with CES/Cobb-Douglas
//!   production, convex capital adjustment costs and q-theory dynamics
//! - `RenewableSector` — capital-only generation with a subsidised price and
//!   static capital demand
//! - `EnergyDemand` trait + `InelasticDemand` consumer
//!
//! All sector operations are deterministic functions of validated parameters
//! and their inputs; nothing here owns mutable state.

pub mod consumer;
pub mod error;
pub mod non_renewable;
pub mod params;
pub mod renewable;

// Re-exports
pub use consumer::{EnergyDemand, InelasticDemand};
pub use error::{SectorError, SectorResult};
pub use non_renewable::NonRenewableSector;
pub use params::{NonRenewableParams, RenewableParams};
pub use renewable::RenewableSector;
