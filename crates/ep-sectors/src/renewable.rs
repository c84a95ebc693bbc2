//! Renewable energy sector.

use ep_core::Prices;
use ep_core::numeric::Real;

use crate::error::{SectorError, SectorResult};
use crate::params::RenewableParams;

/// Capital-intensive renewable generation.
///
/// The sector has no dynamics of its own: it rents capital each instant at
/// the user cost `p_K * (r + delta)` and produces `tfp * K^alpha` from it,
/// selling at the subsidised price `(1 + mu) * p_E`. Capital demand is the
/// static optimum given the contemporaneous price; costs and profits also
/// depend on the expected growth rate of the energy price through the
/// capital-gains term of the user cost.
#[derive(Clone, Copy, Debug)]
pub struct RenewableSector {
    params: RenewableParams,
}

impl RenewableSector {
    pub fn new(params: RenewableParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RenewableParams {
        &self.params
    }

    /// Subsidised price received per unit of energy.
    pub fn subsidy(&self, energy_price: Real) -> Real {
        (1.0 + self.params.mu) * energy_price
    }

    /// Static capital demand from the capital first-order condition:
    ///
    /// ```text
    /// K = (alpha * tfp * (1+mu) * p_E / (p_K * (r + delta)))^(1/(1-alpha))
    /// ```
    pub fn capital_demand(&self, energy_price: Real, prices: &Prices) -> SectorResult<Real> {
        if energy_price <= 0.0 || !energy_price.is_finite() {
            return Err(SectorError::NonPhysical {
                what: "energy price must be positive",
            });
        }
        let p = &self.params;
        let user_cost = prices.capital * (prices.interest_rate + p.delta);
        let base = p.alpha * p.tfp * self.subsidy(energy_price) / user_cost;
        Ok(base.powf(1.0 / (1.0 - p.alpha)))
    }

    /// Energy supplied at a candidate price.
    pub fn output(&self, energy_price: Real, prices: &Prices) -> SectorResult<Real> {
        let capital = self.capital_demand(energy_price, prices)?;
        Ok(self.params.tfp * capital.powf(self.params.alpha))
    }

    /// Revenue at the subsidised price.
    pub fn revenue(&self, energy_price: Real, prices: &Prices) -> SectorResult<Real> {
        Ok(self.subsidy(energy_price) * self.output(energy_price, prices)?)
    }

    /// Cost of renting capital, net of expected capital gains on the energy
    /// price: `p_K * (r + delta - g) * K`.
    pub fn costs(
        &self,
        energy_price: Real,
        price_growth: Real,
        prices: &Prices,
    ) -> SectorResult<Real> {
        if !price_growth.is_finite() {
            return Err(SectorError::NonPhysical {
                what: "price growth rate must be finite",
            });
        }
        let capital = self.capital_demand(energy_price, prices)?;
        Ok(prices.capital * (prices.interest_rate + self.params.delta - price_growth) * capital)
    }

    /// Profits: subsidised revenue less the net user cost of capital.
    pub fn profits(
        &self,
        energy_price: Real,
        price_growth: Real,
        prices: &Prices,
    ) -> SectorResult<Real> {
        let revenue = self.revenue(energy_price, prices)?;
        Ok(revenue - self.costs(energy_price, price_growth, prices)?)
    }
}
