//! Consumer side of the wholesale energy market.

use ep_core::numeric::{Real, ensure_non_negative};

use crate::error::SectorResult;

/// Demand schedule for wholesale energy.
///
/// The market solver only requires a quantity demanded at a candidate price,
/// so any downward-sloping (or flat) schedule can be plugged in.
pub trait EnergyDemand {
    fn demand(&self, energy_price: Real) -> Real;
}

/// Perfectly price-inelastic demand: a fixed quantity at any price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InelasticDemand {
    pub quantity: Real,
}

impl InelasticDemand {
    pub fn new(quantity: Real) -> SectorResult<Self> {
        ensure_non_negative(quantity, "quantity demanded")?;
        Ok(Self { quantity })
    }
}

impl EnergyDemand for InelasticDemand {
    fn demand(&self, _energy_price: Real) -> Real {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inelastic_ignores_price() {
        let consumer = InelasticDemand::new(1.5).unwrap();
        assert_eq!(consumer.demand(0.01), 1.5);
        assert_eq!(consumer.demand(100.0), 1.5);
    }

    #[test]
    fn rejects_negative_quantity() {
        assert!(InelasticDemand::new(-1.0).is_err());
    }
}
