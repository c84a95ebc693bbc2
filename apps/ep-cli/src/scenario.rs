//! Scenario files: the on-disk YAML description of one model economy and,
//! optionally, one transition solve.
//!
//! The raw file structs are plain serde mirrors of the YAML; everything
//! flows through the validating constructors of the domain crates before
//! any computation happens, so a scenario that loads is a scenario that
//! can run.

use std::path::Path;

use ep_core::{CoreError, Prices};
use ep_dynamics::{DynamicsError, IntegratorType, ShootingOptions, TransitionDynamics};
use ep_market::{EnergyMarket, MarketError};
use ep_sectors::{
    InelasticDemand, NonRenewableParams, NonRenewableSector, RenewableParams, RenewableSector,
    SectorError,
};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scenario parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Scenario has no solve section and no capital was given on the command line")]
    MissingInitialCapital,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Sector(#[from] SectorError),

    #[error(transparent)]
    Market(#[from] MarketError),

    #[error(transparent)]
    Dynamics(#[from] DynamicsError),
}

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    /// Perfectly inelastic energy demand.
    pub demand: f64,
    pub prices: PricesSpec,
    pub non_renewable: NonRenewableSpec,
    pub renewable: RenewableSpec,
    pub solve: Option<SolveSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricesSpec {
    pub capital: f64,
    pub fossil_fuel: f64,
    pub interest_rate: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NonRenewableSpec {
    pub tfp: f64,
    pub capital_exponent: f64,
    pub fuel_exponent: f64,
    pub returns_to_scale: f64,
    pub substitution_elasticity: f64,
    pub depreciation: f64,
    pub adjustment_cost: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenewableSpec {
    pub tfp: f64,
    pub capital_exponent: f64,
    pub depreciation: f64,
    pub subsidy: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolveSpec {
    pub initial_capital: f64,
    #[serde(default)]
    pub start_time: f64,
    #[serde(default = "default_dt")]
    pub dt: f64,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    #[serde(default)]
    pub integrator: IntegratorSpec,
}

fn default_dt() -> f64 {
    0.1
}

fn default_max_steps() -> usize {
    200_000
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorSpec {
    #[default]
    Rk4,
    ForwardEuler,
}

impl From<IntegratorSpec> for IntegratorType {
    fn from(spec: IntegratorSpec) -> Self {
        match spec {
            IntegratorSpec::Rk4 => IntegratorType::Rk4,
            IntegratorSpec::ForwardEuler => IntegratorType::ForwardEuler,
        }
    }
}

impl SolveSpec {
    pub fn shooting_options(&self) -> ShootingOptions {
        ShootingOptions {
            dt: self.dt,
            max_steps: self.max_steps,
            integrator: self.integrator.into(),
            ..ShootingOptions::default()
        }
    }
}

pub fn load_scenario(path: &Path) -> CliResult<ScenarioFile> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Run the whole file through the domain validators.
pub fn build_dynamics(scenario: &ScenarioFile) -> CliResult<TransitionDynamics> {
    let nr = &scenario.non_renewable;
    let non_renewable = NonRenewableSector::new(NonRenewableParams::new(
        nr.tfp,
        nr.capital_exponent,
        nr.fuel_exponent,
        nr.returns_to_scale,
        nr.substitution_elasticity,
        nr.depreciation,
        nr.adjustment_cost,
    )?);
    let r = &scenario.renewable;
    let renewable = RenewableSector::new(RenewableParams::new(
        r.tfp,
        r.capital_exponent,
        r.depreciation,
        r.subsidy,
    )?);
    let market = EnergyMarket::new(
        InelasticDemand::new(scenario.demand)?,
        non_renewable,
        renewable,
    );
    let prices = Prices::new(
        scenario.prices.capital,
        scenario.prices.fossil_fuel,
        scenario.prices.interest_rate,
    )?;
    Ok(TransitionDynamics::new(market, prices))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASELINE: &str = "\
demand: 1.0
prices:
  capital: 1.0
  fossil_fuel: 1.0
  interest_rate: 0.05
non_renewable:
  tfp: 1.0
  capital_exponent: 0.7
  fuel_exponent: 0.3
  returns_to_scale: 1.0
  substitution_elasticity: 1.0
  depreciation: 0.05
  adjustment_cost: 1.0
renewable:
  tfp: 0.5
  capital_exponent: 0.3
  depreciation: 0.05
  subsidy: 0.1
solve:
  initial_capital: 1.0
  dt: 0.05
";

    #[test]
    fn baseline_scenario_parses_and_builds() {
        let scenario: ScenarioFile = serde_yaml::from_str(BASELINE).unwrap();
        let solve = scenario.solve.as_ref().unwrap();
        assert_eq!(solve.initial_capital, 1.0);
        assert_eq!(solve.start_time, 0.0);
        assert_eq!(solve.max_steps, 200_000);
        let options = solve.shooting_options();
        assert_eq!(options.dt, 0.05);
        assert_eq!(options.integrator, IntegratorType::Rk4);
        build_dynamics(&scenario).unwrap();
    }

    #[test]
    fn invalid_parameters_fail_validation_not_parsing() {
        let text = BASELINE.replace("capital_exponent: 0.7", "capital_exponent: -0.7");
        let scenario: ScenarioFile = serde_yaml::from_str(&text).unwrap();
        assert!(matches!(
            build_dynamics(&scenario).unwrap_err(),
            CliError::Sector(_)
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let text = format!("{BASELINE}extra_field: 1\n");
        assert!(serde_yaml::from_str::<ScenarioFile>(&text).is_err());
    }

    #[test]
    fn integrator_spelling() {
        let text = BASELINE.replace("  dt: 0.05", "  dt: 0.05\n  integrator: forward_euler");
        let scenario: ScenarioFile = serde_yaml::from_str(&text).unwrap();
        let options = scenario.solve.unwrap().shooting_options();
        assert_eq!(options.integrator, IntegratorType::ForwardEuler);
    }
}
