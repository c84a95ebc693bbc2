//! Non-renewable (fossil-fuel) energy sector.

use ep_core::Prices;
use ep_core::numeric::Real;

use crate::error::{SectorError, SectorResult};
use crate::params::NonRenewableParams;

/// Fossil-fuel generation with installed capital and purchased fuel.
///
/// ## Model
///
/// Production is a generalized CES aggregator of capital `K` and fossil
/// fuel `F`:
///
/// ```text
/// E = tfp * (alpha*K^rho + beta*F^rho)^(gamma/rho),   rho = (sigma-1)/sigma
/// ```
///
/// collapsing to `E = tfp * K^alpha * F^beta` in the Cobb-Douglas case.
/// Fuel use is chosen each instant from its first-order condition; capital
/// accumulates subject to a convex adjustment cost
///
/// ```text
/// C(I, K) = (phi/2) * I^3 / K^2
/// ```
///
/// whose investment first-order condition gives the q-theory investment rule
/// `I = sqrt((2/3)*(q-1)/phi) * K` and the steady-state valuation
/// `q* = 1 + (3/2)*delta^2*phi`.
///
/// All methods are pure functions of the validated parameters and their
/// inputs.
#[derive(Clone, Copy, Debug)]
pub struct NonRenewableSector {
    params: NonRenewableParams,
}

impl NonRenewableSector {
    pub fn new(params: NonRenewableParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &NonRenewableParams {
        &self.params
    }

    /// Energy output from capital and fossil fuel.
    ///
    /// Output is exactly zero when either input is zero (both functional
    /// forms); negative inputs are rejected rather than silently powered.
    pub fn output(&self, capital: Real, fossil_fuel: Real) -> SectorResult<Real> {
        if capital < 0.0 || !capital.is_finite() {
            return Err(SectorError::NonPhysical {
                what: "capital must be non-negative",
            });
        }
        if fossil_fuel < 0.0 || !fossil_fuel.is_finite() {
            return Err(SectorError::NonPhysical {
                what: "fossil fuel must be non-negative",
            });
        }
        if capital == 0.0 || fossil_fuel == 0.0 {
            return Ok(0.0);
        }

        let p = &self.params;
        let energy = if p.is_cobb_douglas() {
            p.tfp * capital.powf(p.alpha) * fossil_fuel.powf(p.beta)
        } else {
            let rho = p.rho();
            let aggregate = p.alpha * capital.powf(rho) + p.beta * fossil_fuel.powf(rho);
            p.tfp * aggregate.powf(p.gamma / rho)
        };
        Ok(energy)
    }

    /// Fuel demand from the fuel first-order condition.
    ///
    /// Closed form exists only under Cobb-Douglas:
    ///
    /// ```text
    /// F = (beta * tfp * p_E * K^alpha / p_F)^(1/(1-beta))
    /// ```
    ///
    /// For a genuine CES configuration the condition has no closed-form
    /// solution and the call is refused instead of approximated.
    pub fn fossil_fuel_demand(
        &self,
        capital: Real,
        energy_price: Real,
        fossil_fuel_price: Real,
    ) -> SectorResult<Real> {
        let p = &self.params;
        if !p.is_cobb_douglas() {
            return Err(SectorError::UnsupportedForm {
                what: "fossil fuel demand has no closed form for non-Cobb-Douglas CES",
            });
        }
        if capital < 0.0 || !capital.is_finite() {
            return Err(SectorError::NonPhysical {
                what: "capital must be non-negative",
            });
        }
        if energy_price <= 0.0 || fossil_fuel_price <= 0.0 {
            return Err(SectorError::NonPhysical {
                what: "prices must be positive",
            });
        }
        if capital == 0.0 {
            return Ok(0.0);
        }

        let base = p.beta * p.tfp * energy_price * capital.powf(p.alpha) / fossil_fuel_price;
        Ok(base.powf(1.0 / (1.0 - p.beta)))
    }

    /// Supply at a candidate price: output with fuel use set optimally.
    pub fn output_at_price(
        &self,
        capital: Real,
        energy_price: Real,
        fossil_fuel_price: Real,
    ) -> SectorResult<Real> {
        let fuel = self.fossil_fuel_demand(capital, energy_price, fossil_fuel_price)?;
        self.output(capital, fuel)
    }

    /// Marginal product of installed capital.
    pub fn marginal_product_capital(&self, capital: Real, fossil_fuel: Real) -> SectorResult<Real> {
        if capital <= 0.0 {
            return Err(SectorError::NonPhysical {
                what: "marginal product requires positive capital",
            });
        }
        let p = &self.params;
        if p.is_cobb_douglas() {
            let energy = self.output(capital, fossil_fuel)?;
            Ok(p.alpha * energy / capital)
        } else {
            if fossil_fuel <= 0.0 {
                return Err(SectorError::NonPhysical {
                    what: "marginal product requires positive fossil fuel",
                });
            }
            let rho = p.rho();
            let aggregate = p.alpha * capital.powf(rho) + p.beta * fossil_fuel.powf(rho);
            Ok(p.tfp
                * p.gamma
                * p.alpha
                * capital.powf(rho - 1.0)
                * aggregate.powf(p.gamma / rho - 1.0))
        }
    }

    /// Revenue contribution of the marginal unit of capital.
    pub fn value_marginal_product_capital(
        &self,
        capital: Real,
        energy_price: Real,
        fossil_fuel_price: Real,
    ) -> SectorResult<Real> {
        let fuel = self.fossil_fuel_demand(capital, energy_price, fossil_fuel_price)?;
        Ok(energy_price * self.marginal_product_capital(capital, fuel)?)
    }

    /// Investment from the marginal-adjustment-cost first-order condition.
    ///
    /// Defined only for `q >= 1`: below one the square root has no real,
    /// non-negative solution and the caller gets an explicit error.
    pub fn investment_demand(&self, q: Real, capital: Real) -> SectorResult<Real> {
        if capital <= 0.0 {
            return Err(SectorError::NonPhysical {
                what: "investment demand requires positive capital",
            });
        }
        if q < 1.0 {
            return Err(SectorError::NonPhysical {
                what: "Tobin's q below one has no non-negative investment root",
            });
        }
        Ok(((2.0 / 3.0) * (q - 1.0) / self.params.phi).sqrt() * capital)
    }

    /// Convex capital adjustment cost `C(I, K) = (phi/2) * I^3 / K^2`.
    pub fn adjustment_cost(&self, investment: Real, capital: Real) -> SectorResult<Real> {
        if capital <= 0.0 {
            return Err(SectorError::NonPhysical {
                what: "adjustment cost requires positive capital",
            });
        }
        Ok((self.params.phi / 2.0) * investment.powi(3) / capital.powi(2))
    }

    /// Marginal adjustment cost of investment, `(3/2)*phi*(I/K)^2`.
    ///
    /// The investment rule inverts `q = 1 + marginal_adjustment_cost`.
    pub fn marginal_adjustment_cost(&self, investment: Real, capital: Real) -> SectorResult<Real> {
        if capital <= 0.0 {
            return Err(SectorError::NonPhysical {
                what: "marginal adjustment cost requires positive capital",
            });
        }
        let ratio = investment / capital;
        Ok(1.5 * self.params.phi * ratio * ratio)
    }

    /// Revenue at a candidate price with fuel use set optimally.
    pub fn revenue(
        &self,
        capital: Real,
        energy_price: Real,
        fossil_fuel_price: Real,
    ) -> SectorResult<Real> {
        Ok(energy_price * self.output_at_price(capital, energy_price, fossil_fuel_price)?)
    }

    /// Total costs: capital adjustment plus fossil fuel purchase.
    pub fn costs(
        &self,
        q: Real,
        capital: Real,
        energy_price: Real,
        prices: &Prices,
    ) -> SectorResult<Real> {
        let investment = self.investment_demand(q, capital)?;
        let fuel = self.fossil_fuel_demand(capital, energy_price, prices.fossil_fuel)?;
        Ok(self.adjustment_cost(investment, capital)? + prices.fossil_fuel * fuel)
    }

    /// Profits: revenue less costs.
    pub fn profits(
        &self,
        q: Real,
        capital: Real,
        energy_price: Real,
        prices: &Prices,
    ) -> SectorResult<Real> {
        let revenue = self.revenue(capital, energy_price, prices.fossil_fuel)?;
        Ok(revenue - self.costs(q, capital, energy_price, prices)?)
    }

    /// Capital accumulation: `K_dot = I(q, K) - delta*K`.
    pub fn equation_motion_capital(&self, q: Real, capital: Real) -> SectorResult<Real> {
        let investment = self.investment_demand(q, capital)?;
        Ok(investment - self.params.delta * capital)
    }

    /// q-theory arbitrage condition:
    ///
    /// ```text
    /// q_dot = (r + delta)*q - phi*(I/K)^3 - VMPK / capital_price
    /// ```
    ///
    /// The middle term is the capital derivative of the adjustment cost
    /// evaluated at the optimal investment rate.
    pub fn equation_motion_q(
        &self,
        q: Real,
        capital: Real,
        energy_price: Real,
        prices: &Prices,
    ) -> SectorResult<Real> {
        let p = &self.params;
        let investment = self.investment_demand(q, capital)?;
        let vmpk =
            self.value_marginal_product_capital(capital, energy_price, prices.fossil_fuel)?;
        let ratio = investment / capital;
        Ok((prices.interest_rate + p.delta) * q - p.phi * ratio.powi(3) - vmpk / prices.capital)
    }

    /// Steady-state Tobin's q, `1 + (3/2)*delta^2*phi`.
    pub fn equilibrium_q(&self) -> Real {
        1.0 + 1.5 * self.params.delta * self.params.delta * self.params.phi
    }
}
