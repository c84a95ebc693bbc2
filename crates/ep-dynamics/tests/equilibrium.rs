//! Saddle-point location against a closed-form benchmark.
//!
//! When the non-renewable technology is Cobb-Douglas with constant returns
//! and the renewable capital exponent equals the fuel exponent, both the
//! equilibrium energy price and the equilibrium capital stock have closed
//! forms. The numerical equilibrium (nested clearing-price solve inside a
//! bracketed root search over capital) must reproduce them.

use ep_core::Prices;
use ep_core::numeric::Real;
use ep_dynamics::TransitionDynamics;
use ep_market::EnergyMarket;
use ep_sectors::{
    InelasticDemand, NonRenewableParams, NonRenewableSector, RenewableParams, RenewableSector,
};
use proptest::prelude::*;

struct Benchmark {
    /// Shared exponent: renewable capital share and non-renewable fuel
    /// share. The non-renewable capital share is its complement.
    alpha: Real,
    tfp_non_renewable: Real,
    tfp_renewable: Real,
    depreciation: Real,
    adjustment: Real,
    depreciation_renewable: Real,
    subsidy: Real,
    demand: Real,
    prices: Prices,
}

impl Benchmark {
    fn dynamics(&self) -> TransitionDynamics {
        let non_renewable = NonRenewableSector::new(
            NonRenewableParams::new(
                self.tfp_non_renewable,
                1.0 - self.alpha,
                self.alpha,
                1.0,
                1.0,
                self.depreciation,
                self.adjustment,
            )
            .unwrap(),
        );
        let renewable = RenewableSector::new(
            RenewableParams::new(
                self.tfp_renewable,
                self.alpha,
                self.depreciation_renewable,
                self.subsidy,
            )
            .unwrap(),
        );
        let market = EnergyMarket::new(
            InelasticDemand::new(self.demand).unwrap(),
            non_renewable,
            renewable,
        );
        TransitionDynamics::new(market, self.prices)
    }

    fn analytic_q(&self) -> Real {
        1.0 + 1.5 * self.depreciation * self.depreciation * self.adjustment
    }

    fn analytic_price(&self) -> Real {
        let a = self.alpha;
        let rental = (self.prices.interest_rate + self.depreciation) * self.analytic_q()
            - self.adjustment * self.depreciation.powi(3);
        a.powf(-a) * (self.prices.fossil_fuel / self.tfp_non_renewable)
            * (self.prices.capital / self.prices.fossil_fuel * rental / (1.0 - a)).powf(1.0 - a)
    }

    fn analytic_capital(&self) -> Real {
        let a = self.alpha;
        let exponent = a / (1.0 - a);
        let price = self.analytic_price();
        let supply_per_unit = self.tfp_non_renewable.powf(1.0 / (1.0 - a))
            * (a * price / self.prices.fossil_fuel).powf(exponent);
        let renewable_supply = (self.tfp_renewable / self.tfp_non_renewable)
            .powf(1.0 / (1.0 - a))
            * (self.prices.fossil_fuel / self.prices.capital * (1.0 + self.subsidy)
                / (self.prices.interest_rate + self.depreciation_renewable))
                .powf(exponent);
        self.demand / supply_per_unit - renewable_supply
    }
}

fn baseline() -> Benchmark {
    Benchmark {
        alpha: 0.3,
        tfp_non_renewable: 1.0,
        tfp_renewable: 0.5,
        depreciation: 0.05,
        adjustment: 1.0,
        depreciation_renewable: 0.05,
        subsidy: 0.1,
        demand: 1.0,
        prices: Prices::new(1.0, 1.0, 0.05).unwrap(),
    }
}

#[test]
fn equilibrium_matches_closed_form_baseline() {
    let benchmark = baseline();
    let eq = benchmark.dynamics().equilibrium().unwrap();
    let capital = benchmark.analytic_capital();
    assert!((eq.q - benchmark.analytic_q()).abs() < 1e-14);
    assert!(
        ((eq.capital - capital) / capital).abs() < 1e-12,
        "numeric {} vs analytic {capital}",
        eq.capital
    );
}

#[test]
fn equilibrium_without_subsidy() {
    let benchmark = Benchmark {
        subsidy: 0.0,
        ..baseline()
    };
    let eq = benchmark.dynamics().equilibrium().unwrap();
    let capital = benchmark.analytic_capital();
    assert!(((eq.capital - capital) / capital).abs() < 1e-12);
    // dropping the subsidy shrinks renewable supply, so more non-renewable
    // capital is needed to clear the same demand
    assert!(eq.capital > baseline().dynamics().equilibrium().unwrap().capital);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn equilibrium_matches_closed_form(
        alpha in 0.25..0.4_f64,
        tfp_non_renewable in 0.9..1.5_f64,
        tfp_renewable in 0.2..0.5_f64,
        depreciation in 0.03..0.1_f64,
        adjustment in 0.5..2.0_f64,
        depreciation_renewable in 0.1..0.2_f64,
        subsidy in 0.0..0.2_f64,
        demand in 0.8..2.0_f64,
        interest_rate in 0.02..0.08_f64,
    ) {
        let benchmark = Benchmark {
            alpha,
            tfp_non_renewable,
            tfp_renewable,
            depreciation,
            adjustment,
            depreciation_renewable,
            subsidy,
            demand,
            prices: Prices::new(1.0, 1.0, interest_rate).unwrap(),
        };
        let capital = benchmark.analytic_capital();
        prop_assume!(capital > 0.1);

        let eq = benchmark.dynamics().equilibrium().unwrap();
        prop_assert!((eq.q - benchmark.analytic_q()).abs() < 1e-13);
        prop_assert!(
            ((eq.capital - capital) / capital).abs() < 1e-12,
            "numeric {} vs analytic {}", eq.capital, capital
        );
    }
}
