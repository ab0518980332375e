use crate::HgError;

/// Floating point type used throughout the system.
pub type Real = f64;

/// Absolute + relative tolerance pair.
///
/// Balance checks each carry their own pair rather than sharing one
/// global default, because mass closure is relative (1%) while energy
/// closure is absolute (0.01 J).
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Purely absolute tolerance (relative part disabled).
    pub const fn absolute(abs: Real) -> Self {
        Self { abs, rel: 0.0 }
    }

    /// Purely relative tolerance (absolute part disabled).
    pub const fn relative(rel: Real) -> Self {
        Self { abs: 0.0, rel }
    }
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

/// True when `delta` closes against a reference `scale`.
///
/// Used by balance checks: `delta` is the raw imbalance, `scale` is
/// the magnitude of the conserved total it is measured against.
pub fn closes(delta: Real, scale: Real, tol: Tolerances) -> bool {
    let d = delta.abs();
    d <= tol.abs || d <= tol.rel * scale.abs()
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HgError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HgError::NonFinite { what, value: v })
    }
}
