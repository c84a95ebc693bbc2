//! Reverse shooting onto the saddle path.
//!
//! The transition path is the stable manifold of the saddle point, which
//! forward integration cannot follow (any numerical error diverges along
//! the unstable direction). Instead the solver perturbs the equilibrium
//! capital stock by a tiny relative amount towards the initial condition
//! and integrates the time-reversed field, along which the saddle path is
//! attracting, until capital crosses the requested starting level. The
//! sample order is then flipped and the path annotated with prices,
//! outputs, costs and profits in one forward pass.

use ep_core::numeric::Real;
use ep_sectors::EnergyDemand;

use crate::error::{DynResult, DynamicsError};
use crate::growth::{ChebyshevGrowth, GrowthRateEstimator};
use crate::integrator::{ForwardEuler, Integrator, IntegratorType, Rk4};
use crate::model::Reversed;
use crate::trajectory::{Trajectory, TrajectoryPoint};
use crate::transition::{QkState, TransitionDynamics};

/// Tuning knobs for one shooting solve.
#[derive(Clone, Copy, Debug)]
pub struct ShootingOptions {
    /// Fixed integration step.
    pub dt: Real,
    /// Relative perturbation applied to the equilibrium capital stock.
    pub perturbation: Real,
    /// Hard cap on reverse-time steps before the solve is declared
    /// degenerate.
    pub max_steps: usize,
    pub integrator: IntegratorType,
}

impl Default for ShootingOptions {
    fn default() -> Self {
        Self {
            dt: 0.1,
            perturbation: 1e-12,
            max_steps: 200_000,
            integrator: IntegratorType::default(),
        }
    }
}

/// Solves the saddle-path boundary-value problem by reverse shooting.
#[derive(Clone, Debug)]
pub struct ReverseShootingSolver<G = ChebyshevGrowth> {
    options: ShootingOptions,
    growth: G,
}

impl ReverseShootingSolver {
    pub fn new(options: ShootingOptions) -> Self {
        Self {
            options,
            growth: ChebyshevGrowth::default(),
        }
    }
}

impl<G: GrowthRateEstimator> ReverseShootingSolver<G> {
    /// Swap in a different growth-rate estimator for the price series.
    pub fn with_growth_estimator(options: ShootingOptions, growth: G) -> Self {
        Self { options, growth }
    }

    pub fn options(&self) -> &ShootingOptions {
        &self.options
    }

    /// Solve the transition path from `initial_capital` at time `t0` to
    /// the saddle point.
    pub fn solve<D: EnergyDemand>(
        &self,
        dynamics: &TransitionDynamics<D>,
        t0: Real,
        initial_capital: Real,
    ) -> DynResult<Trajectory> {
        if !(self.options.dt > 0.0) || !self.options.dt.is_finite() {
            return Err(DynamicsError::InvalidArg {
                what: "integration step must be positive and finite",
            });
        }
        if self.options.max_steps == 0 {
            return Err(DynamicsError::InvalidArg {
                what: "max_steps must be at least one",
            });
        }
        if !(initial_capital > 0.0) || !initial_capital.is_finite() {
            return Err(DynamicsError::InvalidArg {
                what: "initial capital must be positive and finite",
            });
        }

        let equilibrium = dynamics.equilibrium()?;
        let gap = initial_capital - equilibrium.capital;
        if gap.abs() <= self.options.perturbation * equilibrium.capital {
            return Err(DynamicsError::DegenerateShooting {
                what: format!(
                    "initial capital {initial_capital} is indistinguishable from the \
                     equilibrium stock {}",
                    equilibrium.capital
                ),
            });
        }

        // Nudge the equilibrium capital towards the initial condition so
        // the reversed flow leaves the saddle on the correct branch.
        let downward = gap < 0.0;
        let sign = if downward { -1.0 } else { 1.0 };
        let start = QkState {
            q: equilibrium.q,
            capital: equilibrium.capital * (1.0 + sign * self.options.perturbation),
        };
        tracing::debug!(
            equilibrium_capital = equilibrium.capital,
            initial_capital,
            downward,
            "starting reverse shoot"
        );

        let mut states = match self.options.integrator {
            IntegratorType::Rk4 => self.integrate(&Rk4, dynamics, start, initial_capital, downward),
            IntegratorType::ForwardEuler => {
                self.integrate(&ForwardEuler, dynamics, start, initial_capital, downward)
            }
        }?;

        // Reverse-time samples run saddle -> start; the reported path runs
        // the other way.
        states.reverse();
        let ts: Vec<Real> = (0..states.len())
            .map(|i| t0 + i as Real * self.options.dt)
            .collect();

        let prices: Vec<Real> = states
            .iter()
            .map(|state| dynamics.market_price(state.capital))
            .collect::<DynResult<_>>()?;
        let growth_rates = self.growth.growth_rates(&ts, &prices)?;

        let mut points = Vec::with_capacity(states.len());
        for (i, state) in states.iter().enumerate() {
            let price = prices[i];
            let growth = growth_rates[i];
            // costs and profits are reported per unit of each sector's
            // output; both outputs are strictly positive along a valid path
            let output_non_renewable = dynamics.non_renewable_output(state.capital, price)?;
            let output_renewable = dynamics.renewable_output(price)?;
            points.push(TrajectoryPoint {
                t: ts[i],
                q: state.q,
                capital: state.capital,
                price,
                output_non_renewable,
                output_renewable,
                cost_non_renewable: dynamics.non_renewable_costs(state.q, state.capital, price)?
                    / output_non_renewable,
                cost_renewable: dynamics.renewable_costs(price, growth)? / output_renewable,
                profit_non_renewable: dynamics.non_renewable_profits(state.q, state.capital, price)?
                    / output_non_renewable,
                profit_renewable: dynamics.renewable_profits(price, growth)? / output_renewable,
            });
        }
        tracing::debug!(samples = points.len(), "reverse shooting complete");
        Ok(Trajectory::new(points))
    }

    fn integrate<I: Integrator, D: EnergyDemand>(
        &self,
        integrator: &I,
        dynamics: &TransitionDynamics<D>,
        start: QkState,
        initial_capital: Real,
        downward: bool,
    ) -> DynResult<Vec<QkState>> {
        let reversed = Reversed(dynamics);
        let mut states = vec![start];
        let mut current = start;
        let mut t = 0.0;

        let crossed = |capital: Real| {
            if downward {
                capital <= initial_capital
            } else {
                capital >= initial_capital
            }
        };

        while !crossed(current.capital) {
            if states.len() > self.options.max_steps {
                return Err(DynamicsError::DegenerateShooting {
                    what: format!(
                        "saddle path did not reach capital {initial_capital} within {} steps",
                        self.options.max_steps
                    ),
                });
            }
            let next = integrator
                .step(&reversed, t, &current, self.options.dt)
                .map_err(|err| DynamicsError::IntegrationFailure {
                    t,
                    q: current.q,
                    capital: current.capital,
                    what: err.to_string(),
                })?;
            if !next.q.is_finite() || !next.capital.is_finite() || next.capital <= 0.0 {
                return Err(DynamicsError::IntegrationFailure {
                    t,
                    q: current.q,
                    capital: current.capital,
                    what: "state left the admissible region".to_string(),
                });
            }
            t += self.options.dt;
            current = next;
            states.push(current);
        }
        Ok(states)
    }
}
