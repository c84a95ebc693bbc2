//! DynamicModel trait for pluggable dynamic systems.

use ep_core::numeric::Real;

use crate::error::DynResult;

/// Trait for continuous-time dynamic system models.
///
/// A DynamicModel must implement:
/// - State type (Clone, for snapshots)
/// - RHS (right-hand side) computation: x_dot = f(t, x)
/// - Scalar field arithmetic for integration: add states, scale by scalar
pub trait DynamicModel {
    /// State type (must be Clone).
    type State: Clone;

    /// Compute the state derivative dxdt = f(t, x).
    fn rhs(&self, t: Real, x: &Self::State) -> DynResult<Self::State>;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: Real) -> Self::State;
}

/// Time-reversal adapter: integrates the negated vector field of the inner
/// model. Stepping this model forward in solver time traces the inner
/// model's trajectories backward, which is how the shooting solver follows
/// the stable manifold away from the saddle point.
pub struct Reversed<'a, M>(pub &'a M);

impl<M: DynamicModel> DynamicModel for Reversed<'_, M> {
    type State = M::State;

    fn rhs(&self, t: Real, x: &Self::State) -> DynResult<Self::State> {
        let dx = self.0.rhs(t, x)?;
        Ok(self.0.scale(&dx, -1.0))
    }

    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State {
        self.0.add(a, b)
    }

    fn scale(&self, a: &Self::State, scale: Real) -> Self::State {
        self.0.scale(a, scale)
    }
}
