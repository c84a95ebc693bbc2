//! Wholesale energy market and the clearing-price solve.

use ep_core::Prices;
use ep_core::numeric::Real;
use ep_sectors::{EnergyDemand, InelasticDemand, NonRenewableSector, RenewableSector};

use crate::brent::{BrentConfig, brent_root};
use crate::error::MarketResult;

/// Lower end of the clearing-price search bracket.
pub const PRICE_BRACKET_LO: Real = 1e-12;
/// Upper end of the clearing-price search bracket.
pub const PRICE_BRACKET_HI: Real = 1e12;

/// One consumer plus the two producing sectors trading a single wholesale
/// energy good. Purely a composition root: the market owns no mutable state
/// and a clearing solve leaves it untouched.
#[derive(Clone, Debug)]
pub struct EnergyMarket<D: EnergyDemand = InelasticDemand> {
    consumer: D,
    non_renewable: NonRenewableSector,
    renewable: RenewableSector,
}

impl<D: EnergyDemand> EnergyMarket<D> {
    pub fn new(consumer: D, non_renewable: NonRenewableSector, renewable: RenewableSector) -> Self {
        Self {
            consumer,
            non_renewable,
            renewable,
        }
    }

    pub fn consumer(&self) -> &D {
        &self.consumer
    }

    pub fn non_renewable(&self) -> &NonRenewableSector {
        &self.non_renewable
    }

    pub fn renewable(&self) -> &RenewableSector {
        &self.renewable
    }

    /// Quantity demanded at a candidate price.
    pub fn aggregate_demand(&self, energy_price: Real) -> Real {
        self.consumer.demand(energy_price)
    }

    /// Total energy supplied by both sectors at a candidate price.
    pub fn aggregate_supply(
        &self,
        capital: Real,
        energy_price: Real,
        prices: &Prices,
    ) -> MarketResult<Real> {
        let non_renewable =
            self.non_renewable
                .output_at_price(capital, energy_price, prices.fossil_fuel)?;
        let renewable = self.renewable.output(energy_price, prices)?;
        Ok(non_renewable + renewable)
    }

    /// Excess demand at a candidate price; its root is the market price.
    pub fn excess_demand(
        &self,
        capital: Real,
        energy_price: Real,
        prices: &Prices,
    ) -> MarketResult<Real> {
        Ok(self.aggregate_demand(energy_price)
            - self.aggregate_supply(capital, energy_price, prices)?)
    }

    /// Find the unique energy price clearing the market at the given
    /// non-renewable capital stock.
    ///
    /// Demand must exceed supply at the bottom of the bracket and supply
    /// must exceed demand at the top, otherwise no equilibrium price exists
    /// for this capital level and the solve fails with a non-convergence
    /// error.
    pub fn find_market_price(
        &self,
        capital: Real,
        prices: &Prices,
        config: &BrentConfig,
    ) -> MarketResult<Real> {
        let result = brent_root(
            |price| self.excess_demand(capital, price, prices),
            PRICE_BRACKET_LO,
            PRICE_BRACKET_HI,
            config,
        )?;
        tracing::debug!(
            capital,
            price = result.x,
            iterations = result.iterations,
            "market cleared"
        );
        Ok(result.x)
    }
}
