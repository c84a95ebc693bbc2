//! The (q, K) transition dynamics of the non-renewable sector.

use ep_core::Prices;
use ep_core::numeric::Real;
use ep_market::{BrentConfig, EnergyMarket, bracket_root, brent_root};
use ep_sectors::{EnergyDemand, InelasticDemand};

use crate::error::{DynResult, DynamicsError};
use crate::model::DynamicModel;

/// State vector of the dynamical system: Tobin's marginal valuation ratio
/// `q` and the non-renewable capital stock `K`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QkState {
    pub q: Real,
    pub capital: Real,
}

/// The saddle point of the system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquilibriumState {
    pub q: Real,
    pub capital: Real,
}

/// Starting point and growth factor for the equilibrium-capital bracket
/// expansion.
const CAPITAL_BRACKET_START: Real = 1.0;
const CAPITAL_BRACKET_FACTOR: Real = 10.0;
const CAPITAL_BRACKET_EXPANSIONS: usize = 12;

/// Transition dynamics of the energy economy.
///
/// Wraps a market and the exogenous prices of one solve, and exposes the
/// right-hand side of the `(q, K)` system, its saddle-point equilibrium,
/// and the derived per-sample economic quantities used for reporting.
///
/// The clearing price at a candidate capital level is recomputed through
/// the market on every RHS evaluation; this is the coupling point between
/// the static market and the dynamic capital accumulation.
#[derive(Clone, Debug)]
pub struct TransitionDynamics<D: EnergyDemand = InelasticDemand> {
    market: EnergyMarket<D>,
    prices: Prices,
    root_config: BrentConfig,
}

impl<D: EnergyDemand> TransitionDynamics<D> {
    pub fn new(market: EnergyMarket<D>, prices: Prices) -> Self {
        Self {
            market,
            prices,
            root_config: BrentConfig::default(),
        }
    }

    /// Override the root-finder configuration used for both the clearing
    /// price and the equilibrium locus.
    pub fn with_root_config(mut self, root_config: BrentConfig) -> Self {
        self.root_config = root_config;
        self
    }

    pub fn market(&self) -> &EnergyMarket<D> {
        &self.market
    }

    pub fn prices(&self) -> &Prices {
        &self.prices
    }

    /// Market-clearing energy price at a candidate capital stock.
    pub fn market_price(&self, capital: Real) -> DynResult<Real> {
        Ok(self
            .market
            .find_market_price(capital, &self.prices, &self.root_config)?)
    }

    /// `K_dot` at a state.
    pub fn capital_dot(&self, q: Real, capital: Real) -> DynResult<Real> {
        Ok(self
            .market
            .non_renewable()
            .equation_motion_capital(q, capital)?)
    }

    /// `q_dot` at a state, given the contemporaneous clearing price.
    pub fn q_dot(&self, q: Real, capital: Real, energy_price: Real) -> DynResult<Real> {
        Ok(self
            .market
            .non_renewable()
            .equation_motion_q(q, capital, energy_price, &self.prices)?)
    }

    /// The saddle point `(q*, K*)`.
    ///
    /// `q*` is closed form; `K*` is the root of the `q_dot` locus evaluated
    /// at `q = q*`, with the clearing price recomputed at each candidate
    /// capital level. The bracket is grown geometrically from `K = 1` until
    /// the locus changes sign.
    pub fn equilibrium(&self) -> DynResult<EquilibriumState> {
        let q_star = self.market.non_renewable().equilibrium_q();
        let locus = |capital: Real| {
            let price = self
                .market
                .find_market_price(capital, &self.prices, &self.root_config)?;
            self.market
                .non_renewable()
                .equation_motion_q(q_star, capital, price, &self.prices)
                .map_err(Into::into)
        };

        let (lo, hi) = bracket_root(
            locus,
            CAPITAL_BRACKET_START,
            CAPITAL_BRACKET_FACTOR,
            CAPITAL_BRACKET_EXPANSIONS,
        )?;
        let root = brent_root(locus, lo, hi, &self.root_config)?;
        tracing::debug!(q = q_star, capital = root.x, "equilibrium located");
        Ok(EquilibriumState {
            q: q_star,
            capital: root.x,
        })
    }

    // Derived per-sample quantities for trajectory annotation.

    pub fn non_renewable_output(&self, capital: Real, energy_price: Real) -> DynResult<Real> {
        Ok(self.market.non_renewable().output_at_price(
            capital,
            energy_price,
            self.prices.fossil_fuel,
        )?)
    }

    pub fn renewable_output(&self, energy_price: Real) -> DynResult<Real> {
        Ok(self.market.renewable().output(energy_price, &self.prices)?)
    }

    pub fn non_renewable_costs(&self, q: Real, capital: Real, energy_price: Real) -> DynResult<Real> {
        Ok(self
            .market
            .non_renewable()
            .costs(q, capital, energy_price, &self.prices)?)
    }

    pub fn renewable_costs(&self, energy_price: Real, price_growth: Real) -> DynResult<Real> {
        Ok(self
            .market
            .renewable()
            .costs(energy_price, price_growth, &self.prices)?)
    }

    pub fn non_renewable_profits(
        &self,
        q: Real,
        capital: Real,
        energy_price: Real,
    ) -> DynResult<Real> {
        Ok(self
            .market
            .non_renewable()
            .profits(q, capital, energy_price, &self.prices)?)
    }

    pub fn renewable_profits(&self, energy_price: Real, price_growth: Real) -> DynResult<Real> {
        Ok(self
            .market
            .renewable()
            .profits(energy_price, price_growth, &self.prices)?)
    }
}

impl<D: EnergyDemand> DynamicModel for TransitionDynamics<D> {
    type State = QkState;

    fn rhs(&self, _t: Real, x: &QkState) -> DynResult<QkState> {
        if x.capital <= 0.0 || !x.capital.is_finite() {
            return Err(DynamicsError::InvalidArg {
                what: "capital must stay positive during integration",
            });
        }
        let price = self.market_price(x.capital)?;
        Ok(QkState {
            q: self.q_dot(x.q, x.capital, price)?,
            capital: self.capital_dot(x.q, x.capital)?,
        })
    }

    fn add(&self, a: &QkState, b: &QkState) -> QkState {
        QkState {
            q: a.q + b.q,
            capital: a.capital + b.capital,
        }
    }

    fn scale(&self, a: &QkState, scale: Real) -> QkState {
        QkState {
            q: a.q * scale,
            capital: a.capital * scale,
        }
    }
}
