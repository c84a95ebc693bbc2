//! Bracketed scalar root finding.

use ep_core::numeric::Real;

use crate::error::{MarketError, MarketResult};

/// Root finder configuration.
#[derive(Clone, Copy, Debug)]
pub struct BrentConfig {
    /// Absolute tolerance on the root location
    pub abs_tol: Real,
    /// Maximum iterations
    pub max_iterations: usize,
}

impl Default for BrentConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1e-15,
            max_iterations: 200,
        }
    }
}

/// Root finding result.
#[derive(Clone, Copy, Debug)]
pub struct RootResult {
    /// Root location
    pub x: Real,
    /// Objective value at the root
    pub f_x: Real,
    /// Number of iterations used
    pub iterations: usize,
}

fn eval<F>(f: &F, x: Real) -> MarketResult<Real>
where
    F: Fn(Real) -> MarketResult<Real>,
{
    let v = f(x)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MarketError::NonFinite { x })
    }
}

/// Brent's method: bracketed, derivative-free root finding combining
/// bisection, secant steps and inverse quadratic interpolation.
///
/// The bracket `[lo, hi]` must contain a sign change; if it does not the
/// search fails with a distinguishable non-convergence error rather than
/// returning a spurious value.
pub fn brent_root<F>(f: F, lo: Real, hi: Real, config: &BrentConfig) -> MarketResult<RootResult>
where
    F: Fn(Real) -> MarketResult<Real>,
{
    let mut a = lo;
    let mut b = hi;
    let mut fa = eval(&f, a)?;
    let mut fb = eval(&f, b)?;

    if fa == 0.0 {
        return Ok(RootResult {
            x: a,
            f_x: fa,
            iterations: 0,
        });
    }
    if fb == 0.0 {
        return Ok(RootResult {
            x: b,
            f_x: fb,
            iterations: 0,
        });
    }
    if fa.signum() == fb.signum() {
        return Err(MarketError::NoSignChange {
            lo,
            hi,
            f_lo: fa,
            f_hi: fb,
        });
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iter in 0..config.max_iterations {
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * Real::EPSILON * b.abs() + 0.5 * config.abs_tol;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol1 || fb == 0.0 {
            tracing::debug!(iterations = iter, root = b, "brent converged");
            return Ok(RootResult {
                x: b,
                f_x: fb,
                iterations: iter,
            });
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            // attempt inverse quadratic interpolation (secant if a == c)
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                // interpolation acceptable
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            // bounds decreasing too slowly: bisect
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        if d.abs() > tol1 {
            b += d;
        } else {
            b += tol1.copysign(xm);
        }
        fb = eval(&f, b)?;
    }

    Err(MarketError::IterationsExhausted {
        max_iterations: config.max_iterations,
        x: b,
    })
}

/// Geometric bracket expansion around a starting point.
///
/// Expands outward by `factor` per step until the objective changes sign,
/// returning a bracket suitable for [`brent_root`]. A side whose evaluation
/// fails stops expanding; if both sides close without a sign change the
/// search reports non-convergence over the widest bracket reached.
pub fn bracket_root<F>(
    f: F,
    x0: Real,
    factor: Real,
    max_expansions: usize,
) -> MarketResult<(Real, Real)>
where
    F: Fn(Real) -> MarketResult<Real>,
{
    let f0 = eval(&f, x0)?;
    if f0 == 0.0 {
        return Ok((x0, x0));
    }

    let mut lo = x0;
    let mut f_lo = f0;
    let mut hi = x0;
    let mut f_hi = f0;
    let mut lo_open = true;
    let mut hi_open = true;

    for _ in 0..max_expansions {
        if lo_open {
            let cand = lo / factor;
            match eval(&f, cand) {
                Ok(fc) => {
                    if fc == 0.0 || fc.signum() != f_lo.signum() {
                        return Ok((cand, lo));
                    }
                    lo = cand;
                    f_lo = fc;
                }
                Err(_) => lo_open = false,
            }
        }
        if hi_open {
            let cand = hi * factor;
            match eval(&f, cand) {
                Ok(fc) => {
                    if fc == 0.0 || fc.signum() != f_hi.signum() {
                        return Ok((hi, cand));
                    }
                    hi = cand;
                    f_hi = fc;
                }
                Err(_) => hi_open = false,
            }
        }
        if !lo_open && !hi_open {
            break;
        }
    }

    Err(MarketError::NoSignChange {
        lo,
        hi,
        f_lo,
        f_hi,
    })
}
