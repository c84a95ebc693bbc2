//! Parallel parameter sweeps over independent transition solves.

use ep_core::Prices;
use ep_core::numeric::Real;
use ep_market::EnergyMarket;
use ep_sectors::{InelasticDemand, NonRenewableSector, RenewableSector};
use rayon::prelude::*;

use crate::error::DynResult;
use crate::shooting::{ReverseShootingSolver, ShootingOptions};
use crate::trajectory::Trajectory;
use crate::transition::TransitionDynamics;

/// One self-contained scenario of a sweep.
#[derive(Clone, Copy, Debug)]
pub struct SweepCase {
    pub renewable: RenewableSector,
    pub non_renewable: NonRenewableSector,
    pub demand: InelasticDemand,
    pub prices: Prices,
    pub initial_capital: Real,
}

/// Solve every case of a sweep, one saddle path each. Cases are
/// independent, so they run in parallel; a failed case yields its error
/// in place without disturbing the others.
pub fn solve_many(
    cases: &[SweepCase],
    t0: Real,
    options: &ShootingOptions,
) -> Vec<DynResult<Trajectory>> {
    cases
        .par_iter()
        .map(|case| {
            let market = EnergyMarket::new(case.demand, case.non_renewable, case.renewable);
            let dynamics = TransitionDynamics::new(market, case.prices);
            ReverseShootingSolver::new(*options).solve(&dynamics, t0, case.initial_capital)
        })
        .collect()
}
