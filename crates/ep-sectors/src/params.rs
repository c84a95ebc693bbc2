//! Validated, immutable sector parameter sets.

use ep_core::numeric::{Real, ensure_non_negative, ensure_positive};

use crate::error::{SectorError, SectorResult};

/// Tolerance for deciding whether a CES configuration degenerates to
/// Cobb-Douglas (`sigma == 1` and `alpha + beta == gamma`).
const FORM_TOL: Real = 1e-12;

/// Parameters of the renewable energy sector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenewableParams {
    /// Total factor productivity
    pub tfp: Real,
    /// Output elasticity of capital, strictly inside (0, 1)
    pub alpha: Real,
    /// Depreciation rate of renewable capital
    pub delta: Real,
    /// Subsidy markup over the wholesale price (non-negative)
    pub mu: Real,
}

impl RenewableParams {
    pub fn new(tfp: Real, alpha: Real, delta: Real, mu: Real) -> SectorResult<Self> {
        ensure_positive(tfp, "renewable tfp")?;
        ensure_positive(alpha, "renewable alpha")?;
        if alpha >= 1.0 {
            // capital demand requires diminishing returns
            return Err(SectorError::InvalidParameter {
                what: "renewable alpha",
                value: alpha,
            });
        }
        ensure_positive(delta, "renewable delta")?;
        ensure_non_negative(mu, "renewable mu")?;
        Ok(Self {
            tfp,
            alpha,
            delta,
            mu,
        })
    }
}

/// Parameters of the non-renewable (fossil-fuel) energy sector.
///
/// Production is a generalized CES aggregator of capital and fossil fuel
/// with exponent `rho = (sigma - 1) / sigma`. The Cobb-Douglas special case
/// (`sigma == 1` with `alpha + beta == gamma`) is a branch of the same
/// operations, not a separate type. A unit substitution elasticity without
/// the matching scale parameter has no well-defined aggregator and is
/// rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NonRenewableParams {
    /// Total factor productivity
    pub tfp: Real,
    /// Output elasticity of capital
    pub alpha: Real,
    /// Output elasticity of fossil fuel, strictly below one
    pub beta: Real,
    /// Scale parameter of the CES aggregator
    pub gamma: Real,
    /// Elasticity of substitution between capital and fossil fuel
    pub sigma: Real,
    /// Depreciation rate of installed capital
    pub delta: Real,
    /// Capital adjustment cost coefficient
    pub phi: Real,
}

impl NonRenewableParams {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tfp: Real,
        alpha: Real,
        beta: Real,
        gamma: Real,
        sigma: Real,
        delta: Real,
        phi: Real,
    ) -> SectorResult<Self> {
        ensure_positive(tfp, "non-renewable tfp")?;
        ensure_positive(alpha, "non-renewable alpha")?;
        ensure_positive(beta, "non-renewable beta")?;
        if beta >= 1.0 {
            // fuel demand has no interior optimum otherwise
            return Err(SectorError::InvalidParameter {
                what: "non-renewable beta",
                value: beta,
            });
        }
        ensure_positive(gamma, "non-renewable gamma")?;
        ensure_positive(sigma, "non-renewable sigma")?;
        ensure_positive(delta, "non-renewable delta")?;
        ensure_positive(phi, "non-renewable phi")?;

        let unit_sigma = (sigma - 1.0).abs() <= FORM_TOL;
        if unit_sigma && (alpha + beta - gamma).abs() > FORM_TOL {
            // rho = 0 but the exponents do not collapse to Cobb-Douglas
            return Err(SectorError::InvalidParameter {
                what: "non-renewable sigma (degenerate CES)",
                value: sigma,
            });
        }

        Ok(Self {
            tfp,
            alpha,
            beta,
            gamma,
            sigma,
            delta,
            phi,
        })
    }

    /// True when the aggregator collapses to `tfp * K^alpha * F^beta`.
    pub fn is_cobb_douglas(&self) -> bool {
        (self.sigma - 1.0).abs() <= FORM_TOL && (self.alpha + self.beta - self.gamma).abs() <= FORM_TOL
    }

    /// CES exponent `rho = (sigma - 1) / sigma`.
    pub fn rho(&self) -> Real {
        (self.sigma - 1.0) / self.sigma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renewable_validation() {
        assert!(RenewableParams::new(1.0, 0.3, 0.05, 0.1).is_ok());
        assert!(RenewableParams::new(0.0, 0.3, 0.05, 0.1).is_err());
        assert!(RenewableParams::new(1.0, 1.0, 0.05, 0.1).is_err());
        assert!(RenewableParams::new(1.0, 0.3, -0.05, 0.1).is_err());
        // zero markup is a valid "no subsidy" configuration
        assert!(RenewableParams::new(1.0, 0.3, 0.05, 0.0).is_ok());
    }

    #[test]
    fn non_renewable_validation() {
        assert!(NonRenewableParams::new(1.0, 0.7, 0.3, 1.0, 1.0, 0.05, 1.0).is_ok());
        assert!(NonRenewableParams::new(-1.0, 0.7, 0.3, 1.0, 1.0, 0.05, 1.0).is_err());
        assert!(NonRenewableParams::new(1.0, 0.7, 1.2, 1.9, 1.0, 0.05, 1.0).is_err());
        assert!(NonRenewableParams::new(1.0, 0.7, 0.3, 1.0, 1.0, 0.05, 0.0).is_err());
    }

    #[test]
    fn degenerate_ces_rejected() {
        // sigma = 1 but alpha + beta != gamma: rho = 0 with no Cobb-Douglas limit
        let err = NonRenewableParams::new(1.0, 0.5, 0.4, 1.3, 1.0, 0.05, 1.0).unwrap_err();
        assert!(matches!(err, SectorError::InvalidParameter { .. }));
    }

    #[test]
    fn form_detection() {
        let cd = NonRenewableParams::new(1.0, 0.7, 0.3, 1.0, 1.0, 0.05, 1.0).unwrap();
        assert!(cd.is_cobb_douglas());
        assert_eq!(cd.rho(), 0.0);

        let ces = NonRenewableParams::new(1.0, 0.5, 0.4, 1.0, 2.0, 0.05, 1.0).unwrap();
        assert!(!ces.is_cobb_douglas());
        assert_eq!(ces.rho(), 0.5);
    }
}
