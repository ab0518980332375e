//! Shared argument validation for unit operations.

use crate::error::{OpError, OpResult};
use hg_core::units::Temperature;

/// Fraction in [0, 1].
pub fn check_fraction(v: f64, what: &'static str) -> OpResult<()> {
    if v.is_finite() && (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(OpError::InvalidArg { what })
    }
}

/// Efficiency in (0, 1].
pub fn check_efficiency(v: f64, what: &'static str) -> OpResult<()> {
    if v.is_finite() && v > 0.0 && v <= 1.0 {
        Ok(())
    } else {
        Err(OpError::InvalidArg { what })
    }
}

/// Positive, finite absolute temperature.
pub fn check_temperature(t: Temperature, what: &'static str) -> OpResult<()> {
    if t.value.is_finite() && t.value > 0.0 {
        Ok(())
    } else {
        Err(OpError::InvalidArg { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hg_core::units::k;

    #[test]
    fn fraction_bounds_inclusive() {
        assert!(check_fraction(0.0, "r").is_ok());
        assert!(check_fraction(1.0, "r").is_ok());
        assert!(check_fraction(-0.1, "r").is_err());
        assert!(check_fraction(1.1, "r").is_err());
        assert!(check_fraction(f64::NAN, "r").is_err());
    }

    #[test]
    fn efficiency_excludes_zero() {
        assert!(check_efficiency(0.0, "eta").is_err());
        assert!(check_efficiency(0.5, "eta").is_ok());
        assert!(check_efficiency(1.0, "eta").is_ok());
    }

    #[test]
    fn temperature_must_be_positive() {
        assert!(check_temperature(k(300.0), "t").is_ok());
        assert!(check_temperature(k(0.0), "t").is_err());
    }
}
