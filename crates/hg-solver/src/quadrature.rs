//! Composite Simpson quadrature.
//!
//! Used for enthalpy integrals of temperature-dependent heat
//! capacities. The integrands are smooth except for a single step
//! discontinuity in mercury's Cp at saturation, which composite
//! Simpson handles to well below balance-check tolerance at the
//! default panel count.

use crate::error::{SolverError, SolverResult};

/// Default number of panels for [`integrate`].
pub const DEFAULT_PANELS: usize = 200;

/// Integrate `f` over `[a, b]` with composite Simpson at the default
/// panel count. A reversed interval (`a > b`) yields the negated
/// integral, matching the usual orientation convention.
pub fn integrate<F: Fn(f64) -> f64>(f: F, a: f64, b: f64) -> SolverResult<f64> {
    simpson(f, a, b, DEFAULT_PANELS)
}

/// Composite Simpson rule with `panels` subdivisions (must be even
/// and non-zero).
pub fn simpson<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, panels: usize) -> SolverResult<f64> {
    if panels == 0 || panels % 2 != 0 {
        return Err(SolverError::InvalidArg {
            what: "panel count must be even and non-zero",
        });
    }
    if !a.is_finite() || !b.is_finite() {
        return Err(SolverError::InvalidArg {
            what: "integration bounds must be finite",
        });
    }
    if a == b {
        return Ok(0.0);
    }

    let h = (b - a) / panels as f64;
    let mut acc = f(a) + f(b);
    for i in 1..panels {
        let x = a + i as f64 * h;
        let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
        acc += weight * f(x);
    }
    let value = acc * h / 3.0;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::Numeric {
            what: format!("integral over [{a}, {b}] is non-finite"),
        })
    }
}
