//! End-to-end reverse-shooting solves on a below-equilibrium start.

use ep_core::Prices;
use ep_dynamics::{
    DynamicsError, ReverseShootingSolver, ShootingOptions, Trajectory, TransitionDynamics,
};
use ep_market::EnergyMarket;
use ep_sectors::{
    InelasticDemand, NonRenewableParams, NonRenewableSector, RenewableParams, RenewableSector,
};

fn dynamics() -> TransitionDynamics {
    let non_renewable = NonRenewableSector::new(
        NonRenewableParams::new(1.0, 0.7, 0.3, 1.0, 1.0, 0.05, 1.0).unwrap(),
    );
    let renewable = RenewableSector::new(RenewableParams::new(0.5, 0.3, 0.05, 0.1).unwrap());
    let market = EnergyMarket::new(InelasticDemand::new(1.0).unwrap(), non_renewable, renewable);
    TransitionDynamics::new(market, Prices::new(1.0, 1.0, 0.05).unwrap())
}

fn solve_baseline() -> Trajectory {
    let options = ShootingOptions {
        dt: 0.05,
        ..ShootingOptions::default()
    };
    ReverseShootingSolver::new(options)
        .solve(&dynamics(), 0.0, 1.0)
        .unwrap()
}

#[test]
fn path_runs_from_start_to_saddle() {
    let model = dynamics();
    let eq = model.equilibrium().unwrap();
    let trajectory = solve_baseline();
    assert!(trajectory.len() > 10);

    let first = trajectory.first().unwrap();
    let last = trajectory.last().unwrap();
    assert!(first.t == 0.0);
    // the path begins at the step on which capital crossed the start level
    assert!(first.capital <= 1.0);
    assert!(first.capital > 0.8);
    // and ends within the perturbation of the saddle point
    assert!(((last.capital - eq.capital) / eq.capital).abs() < 1e-9);
    assert!((last.q - eq.q).abs() < 1e-9);
}

#[test]
fn capital_rises_and_q_falls_monotonically() {
    let model = dynamics();
    let eq = model.equilibrium().unwrap();
    let trajectory = solve_baseline();
    for pair in trajectory.points().windows(2) {
        assert!(pair[1].capital > pair[0].capital);
        assert!(pair[1].t > pair[0].t);
    }
    // below-equilibrium capital commands an above-equilibrium valuation
    let first = trajectory.first().unwrap();
    let last = trajectory.last().unwrap();
    assert!(first.q > last.q);
    for point in trajectory.points() {
        assert!(point.q >= eq.q - 1e-9);
    }
}

#[test]
fn every_sample_clears_the_market() {
    let trajectory = solve_baseline();
    for point in trajectory.points() {
        assert!(point.price > 0.0);
        let supply = point.output_non_renewable + point.output_renewable;
        assert!(
            (supply - 1.0).abs() < 1e-8,
            "supply {supply} at t = {}",
            point.t
        );
        assert!(point.cost_non_renewable.is_finite());
        assert!(point.cost_renewable.is_finite());
        assert!(point.profit_non_renewable.is_finite());
        assert!(point.profit_renewable.is_finite());
    }
}

#[test]
fn sampled_path_satisfies_the_law_of_motion() {
    let model = dynamics();
    let trajectory = solve_baseline();
    let points = trajectory.points();
    let dt = points[1].t - points[0].t;
    // central differences on the interior samples against the vector field
    for window in points.windows(3) {
        let mid = &window[1];
        let capital_slope = (window[2].capital - window[0].capital) / (2.0 * dt);
        let capital_rate = model.capital_dot(mid.q, mid.capital).unwrap();
        assert!(
            (capital_slope - capital_rate).abs() < 1e-2 * capital_rate.abs() + 1e-4,
            "capital slope {capital_slope} vs rate {capital_rate} at t = {}",
            mid.t
        );
        let q_slope = (window[2].q - window[0].q) / (2.0 * dt);
        let q_rate = model.q_dot(mid.q, mid.capital, mid.price).unwrap();
        assert!(
            (q_slope - q_rate).abs() < 1e-2 * q_rate.abs() + 1e-6,
            "q slope {q_slope} vs rate {q_rate} at t = {}",
            mid.t
        );
    }
}

#[test]
fn per_unit_costs_and_profits_are_consistent() {
    // revenue per unit of output is the price received, so per-unit profit
    // must equal that price less the per-unit cost in both sectors
    let model = dynamics();
    let markup = 1.0 + model.market().renewable().params().mu;
    let trajectory = solve_baseline();
    for point in trajectory.points() {
        let non_renewable = point.price - point.cost_non_renewable;
        assert!(
            (point.profit_non_renewable - non_renewable).abs() < 1e-10,
            "at t = {}",
            point.t
        );
        let renewable = markup * point.price - point.cost_renewable;
        assert!(
            (point.profit_renewable - renewable).abs() < 1e-10,
            "at t = {}",
            point.t
        );
    }
}

#[test]
fn path_descends_from_an_above_equilibrium_start() {
    let model = dynamics();
    let eq = model.equilibrium().unwrap();
    let target = 1.01 * eq.capital;
    let options = ShootingOptions {
        dt: 0.05,
        ..ShootingOptions::default()
    };
    let trajectory = ReverseShootingSolver::new(options)
        .solve(&model, 0.0, target)
        .unwrap();
    assert!(trajectory.len() > 10);

    let first = trajectory.first().unwrap();
    let last = trajectory.last().unwrap();
    assert!(first.capital >= target);
    for pair in trajectory.points().windows(2) {
        assert!(pair[1].capital < pair[0].capital);
    }
    assert!(((last.capital - eq.capital) / eq.capital).abs() < 1e-9);
    // excess capital depresses its valuation on this branch
    assert!(first.q < last.q);
    assert!((last.q - eq.q).abs() < 1e-9);
}

#[test]
fn far_above_equilibrium_start_fails_with_diagnostics() {
    // well above the saddle point the backward path drives Tobin's q below
    // one, where the investment rule is undefined; the solve must report
    // the failed step with its last valid state instead of looping on
    let model = dynamics();
    let eq = model.equilibrium().unwrap();
    let options = ShootingOptions {
        dt: 0.05,
        ..ShootingOptions::default()
    };
    let err = ReverseShootingSolver::new(options)
        .solve(&model, 0.0, 1.05 * eq.capital)
        .unwrap_err();
    match err {
        DynamicsError::IntegrationFailure { t, q, capital, .. } => {
            assert!(t > 0.0);
            assert!(q >= 1.0);
            assert!(capital > eq.capital);
        }
        other => panic!("expected an integration failure, got {other}"),
    }
}

#[test]
fn starting_at_the_saddle_is_degenerate() {
    let model = dynamics();
    let eq = model.equilibrium().unwrap();
    let solver = ReverseShootingSolver::new(ShootingOptions::default());
    let err = solver.solve(&model, 0.0, eq.capital).unwrap_err();
    assert!(matches!(err, DynamicsError::DegenerateShooting { .. }));
}

#[test]
fn step_budget_exhaustion_is_degenerate() {
    let options = ShootingOptions {
        dt: 0.05,
        max_steps: 10,
        ..ShootingOptions::default()
    };
    let err = ReverseShootingSolver::new(options)
        .solve(&dynamics(), 0.0, 1.0)
        .unwrap_err();
    assert!(matches!(err, DynamicsError::DegenerateShooting { .. }));
}

#[test]
fn invalid_arguments_are_rejected_up_front() {
    let model = dynamics();
    let solver = ReverseShootingSolver::new(ShootingOptions {
        dt: 0.0,
        ..ShootingOptions::default()
    });
    assert!(matches!(
        solver.solve(&model, 0.0, 1.0).unwrap_err(),
        DynamicsError::InvalidArg { .. }
    ));

    let solver = ReverseShootingSolver::new(ShootingOptions::default());
    assert!(matches!(
        solver.solve(&model, 0.0, -1.0).unwrap_err(),
        DynamicsError::InvalidArg { .. }
    ));
}

#[test]
fn euler_agrees_with_rk4_on_the_coarse_shape() {
    let rk4 = solve_baseline();
    let euler = ReverseShootingSolver::new(ShootingOptions {
        dt: 0.01,
        integrator: ep_dynamics::IntegratorType::ForwardEuler,
        ..ShootingOptions::default()
    })
    .solve(&dynamics(), 0.0, 1.0)
    .unwrap();

    let rk4_last = rk4.last().unwrap();
    let euler_last = euler.last().unwrap();
    assert!(((rk4_last.capital - euler_last.capital) / rk4_last.capital).abs() < 1e-6);
    // the coarser first-order path still starts at the same capital level
    assert!(euler.first().unwrap().capital <= 1.0);
}
