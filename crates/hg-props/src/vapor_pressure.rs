//! Mercury vapor-pressure correlation.

use crate::error::{PropsError, PropsResult};
use hg_core::units::{Pressure, Temperature, kpa};

/// Lower validity bound of the correlation [K] (0 °C).
pub const VP_HG_T_MIN_K: f64 = 273.15;

/// Upper validity bound of the correlation [K] (150 °C).
pub const VP_HG_T_MAX_K: f64 = 423.15;

/// Mercury vapor pressure, `exp(-3212.5/T + 7.150)` kPa.
///
/// A rough two-constant fit valid only between 0 and 150 °C;
/// evaluation outside that window is an error rather than a silent
/// extrapolation, because the condenser recovery fraction computed
/// from it would be garbage.
pub fn mercury_vapor_pressure(t: Temperature) -> PropsResult<Pressure> {
    let t_k = t.value;
    if !(VP_HG_T_MIN_K..=VP_HG_T_MAX_K).contains(&t_k) {
        return Err(PropsError::OutOfCorrelationRange {
            what: "mercury vapor pressure",
            t_k,
        });
    }
    Ok(kpa((-3_212.5 / t_k + 7.150).exp()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hg_core::units::k;

    #[test]
    fn increases_with_temperature() {
        let lo = mercury_vapor_pressure(k(281.0)).unwrap();
        let hi = mercury_vapor_pressure(k(350.0)).unwrap();
        assert!(hi.value > lo.value);
    }

    #[test]
    fn magnitude_at_chilled_condenser_temperature() {
        // exp(-3212.5/281 + 7.150) kPa ≈ 0.014 kPa
        let vp = mercury_vapor_pressure(k(281.0)).unwrap();
        let vp_kpa = vp.value / 1_000.0;
        assert!(vp_kpa > 0.005 && vp_kpa < 0.05, "vp = {vp_kpa} kPa");
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(mercury_vapor_pressure(k(250.0)).is_err());
        assert!(mercury_vapor_pressure(k(500.0)).is_err());
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(mercury_vapor_pressure(k(VP_HG_T_MIN_K)).is_ok());
        assert!(mercury_vapor_pressure(k(VP_HG_T_MAX_K)).is_ok());
    }
}
