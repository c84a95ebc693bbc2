//! Growth-rate estimation for the energy-price series.
//!
//! Finite differences on a coarse-step trajectory are noisy, so the default
//! estimator fits one smooth Chebyshev polynomial to the whole series and
//! differentiates it analytically. The stage is swappable: anything mapping
//! a (t, value) series to per-sample growth rates can be plugged into the
//! shooting solver.

use ep_core::numeric::Real;
use nalgebra::{DMatrix, DVector};

use crate::error::{DynResult, DynamicsError};

/// Maps a sampled positive series to its local growth rate `v'(t)/v(t)` at
/// every sample.
pub trait GrowthRateEstimator {
    fn growth_rates(&self, ts: &[Real], values: &[Real]) -> DynResult<Vec<Real>>;
}

/// Least-squares Chebyshev fit with analytic differentiation.
#[derive(Clone, Copy, Debug)]
pub struct ChebyshevGrowth {
    /// Polynomial degree of the fit (capped at sample count minus one)
    pub degree: usize,
}

impl Default for ChebyshevGrowth {
    fn default() -> Self {
        Self { degree: 15 }
    }
}

impl GrowthRateEstimator for ChebyshevGrowth {
    fn growth_rates(&self, ts: &[Real], values: &[Real]) -> DynResult<Vec<Real>> {
        if ts.len() != values.len() {
            return Err(DynamicsError::InvalidArg {
                what: "time and value series must have equal length",
            });
        }
        if ts.len() < 2 {
            return Err(DynamicsError::InvalidArg {
                what: "growth estimation needs at least two samples",
            });
        }
        let t_first = ts[0];
        let t_last = ts[ts.len() - 1];
        if !(t_last > t_first) {
            return Err(DynamicsError::InvalidArg {
                what: "time series must be strictly increasing overall",
            });
        }

        let degree = self.degree.min(ts.len() - 1);
        // map sample times onto the Chebyshev domain [-1, 1]
        let scale = 2.0 / (t_last - t_first);
        let us: Vec<Real> = ts.iter().map(|t| (t - t_first) * scale - 1.0).collect();

        let design = DMatrix::from_fn(us.len(), degree + 1, |i, j| chebyshev_t(j, us[i]));
        let rhs = DVector::from_column_slice(values);
        let coeffs = design
            .svd(true, true)
            .solve(&rhs, 1e-14)
            .map_err(|what| DynamicsError::Numeric {
                what: format!("Chebyshev least squares failed: {what}"),
            })?;

        let coeffs: Vec<Real> = coeffs.iter().copied().collect();
        let deriv = chebyshev_derivative(&coeffs);

        us.iter()
            .map(|&u| {
                let value = clenshaw(&coeffs, u);
                if value.abs() < Real::EPSILON {
                    return Err(DynamicsError::Numeric {
                        what: "fitted series passes through zero".to_string(),
                    });
                }
                // chain rule back from the scaled domain
                Ok(clenshaw(&deriv, u) * scale / value)
            })
            .collect()
    }
}

/// Chebyshev polynomial of the first kind, `T_n(x)`, by recurrence.
fn chebyshev_t(n: usize, x: Real) -> Real {
    if n == 0 {
        return 1.0;
    }
    let mut prev = 1.0;
    let mut current = x;
    for _ in 1..n {
        let next = 2.0 * x * current - prev;
        prev = current;
        current = next;
    }
    current
}

/// Evaluate a Chebyshev series by Clenshaw recurrence.
fn clenshaw(coeffs: &[Real], x: Real) -> Real {
    match coeffs.len() {
        0 => 0.0,
        1 => coeffs[0],
        _ => {
            let mut b1 = 0.0;
            let mut b2 = 0.0;
            for &c in coeffs[1..].iter().rev() {
                let b = c + 2.0 * x * b1 - b2;
                b2 = b1;
                b1 = b;
            }
            coeffs[0] + x * b1 - b2
        }
    }
}

/// Coefficients of the derivative of a Chebyshev series.
fn chebyshev_derivative(coeffs: &[Real]) -> Vec<Real> {
    let m = coeffs.len();
    if m < 2 {
        return vec![0.0];
    }
    let degree = m - 1;
    let mut c = coeffs.to_vec();
    let mut deriv = vec![0.0; degree];
    let mut j = degree;
    while j > 2 {
        deriv[j - 1] = (2 * j) as Real * c[j];
        c[j - 2] += (j as Real * c[j]) / (j - 2) as Real;
        j -= 1;
    }
    if degree > 1 {
        deriv[1] = 4.0 * c[2];
    }
    deriv[0] = c[1];
    deriv
}
