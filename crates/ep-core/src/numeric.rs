use crate::CoreError;

/// Floating point type used throughout the system
pub type Real = f64;

/// One tolerance pair for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Guard for parameters that are only economically meaningful when strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::InvalidParameter { what, value: v })
    }
}

/// Guard for quantities that may be zero but never negative.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, CoreError> {
    ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(CoreError::InvalidParameter { what, value: v })
    }
}
