//! Exogenous prices for one model solve.

use crate::error::CoreResult;
use crate::numeric::{Real, ensure_positive};

/// Price of capital goods, price of fossil fuel, and the interest rate.
///
/// These are parameters of a solve, not state: they are fixed for the
/// duration of one transition-path computation. All three must be strictly
/// positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prices {
    /// Price of a unit of installed capital
    pub capital: Real,
    /// Price of a unit of fossil fuel
    pub fossil_fuel: Real,
    /// Risk-free interest rate
    pub interest_rate: Real,
}

impl Prices {
    pub fn new(capital: Real, fossil_fuel: Real, interest_rate: Real) -> CoreResult<Self> {
        Ok(Self {
            capital: ensure_positive(capital, "capital price")?,
            fossil_fuel: ensure_positive(fossil_fuel, "fossil fuel price")?,
            interest_rate: ensure_positive(interest_rate, "interest rate")?,
        })
    }
}
