//! ep-dynamics: transition dynamics of the energy-transition model.
//!
//! Assembles the two-dimensional dynamical system in Tobin's q and the
//! non-renewable capital stock, and solves the saddle-path boundary-value
//! problem by reverse shooting:
//! - `TransitionDynamics` — equilibrium locus + right-hand side, with the
//!   clearing price recomputed on every evaluation
//! - `Integrator` (RK4 / forward Euler) over a pluggable `DynamicModel`
//! - `ReverseShootingSolver` — bounded reverse-time integration from a
//!   perturbed equilibrium, then one forward annotation pass
//! - `GrowthRateEstimator` — swappable Chebyshev smoothing stage for the
//!   energy-price growth rate
//! - `sweep` — embarrassingly parallel solves over independent cases

pub mod error;
pub mod growth;
pub mod integrator;
pub mod model;
pub mod shooting;
pub mod sweep;
pub mod trajectory;
pub mod transition;

// Re-exports
pub use error::{DynResult, DynamicsError};
pub use growth::{ChebyshevGrowth, GrowthRateEstimator};
pub use integrator::{ForwardEuler, Integrator, IntegratorType, Rk4};
pub use model::{DynamicModel, Reversed};
pub use shooting::{ReverseShootingSolver, ShootingOptions};
pub use sweep::{SweepCase, solve_many};
pub use trajectory::{Trajectory, TrajectoryPoint};
pub use transition::{EquilibriumState, QkState, TransitionDynamics};
