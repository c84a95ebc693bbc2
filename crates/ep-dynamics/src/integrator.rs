//! Fixed-step time integrators.

use ep_core::numeric::Real;

use crate::error::DynResult;
use crate::model::DynamicModel;

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step using the dynamic model.
    fn step<M: DynamicModel>(&self, model: &M, t: Real, x: &M::State, dt: Real)
    -> DynResult<M::State>;
}

/// Integrator selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorType {
    /// 4th-order Runge-Kutta (default, 4 rhs calls per step).
    #[default]
    Rk4,
    /// Forward Euler (1st-order, 1 rhs call per step).
    ForwardEuler,
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Debug)]
pub struct Rk4;

impl Integrator for Rk4 {
    fn step<M: DynamicModel>(
        &self,
        model: &M,
        t: Real,
        x: &M::State,
        dt: Real,
    ) -> DynResult<M::State> {
        let k1 = model.rhs(t, x)?;

        let x2 = model.add(x, &model.scale(&k1, 0.5 * dt));
        let k2 = model.rhs(t + 0.5 * dt, &x2)?;

        let x3 = model.add(x, &model.scale(&k2, 0.5 * dt));
        let k3 = model.rhs(t + 0.5 * dt, &x3)?;

        let x4 = model.add(x, &model.scale(&k3, dt));
        let k4 = model.rhs(t + dt, &x4)?;

        // Combine: x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let k_sum = model.add(
            &model.add(&k1, &model.scale(&k2, 2.0)),
            &model.add(&model.scale(&k3, 2.0), &k4),
        );

        Ok(model.add(x, &model.scale(&k_sum, dt / 6.0)))
    }
}

/// Forward Euler (explicit, 1st order).
#[derive(Clone, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: DynamicModel>(
        &self,
        model: &M,
        t: Real,
        x: &M::State,
        dt: Real,
    ) -> DynResult<M::State> {
        let xdot = model.rhs(t, x)?;
        Ok(model.add(x, &model.scale(&xdot, dt)))
    }
}
