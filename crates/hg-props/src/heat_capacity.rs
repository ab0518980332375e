//! Heat-capacity correlations.
//!
//! All values in SI: J/(kg·K) on kelvin. Correlation sources are the
//! process design basis; they are engineering fits, not reference
//! data.

use crate::table::CpTable;

/// Molar mass of mercury [kg/mol].
pub const M_HG_KG_MOL: f64 = 0.200_59;

/// Mercury saturation temperature at atmospheric pressure [K].
pub const TSAT_HG_K: f64 = 629.88;

/// Mercury heat of vaporization [J/kg].
pub const HVAP_HG_J_KG: f64 = 59_110.0 / M_HG_KG_MOL;

/// Nitrogen, constant over the process range [J/(kg·K)].
pub const CP_N2: f64 = 1_040.0;

// Liquid-mercury molar fit Cp = A - B*T [J/(mol·K)]
const HG_LIQ_A: f64 = 30.39;
const HG_LIQ_B: f64 = 0.011_47;

// Ideal monatomic gas, 5/2 R [J/(mol·K)]
const HG_GAS_MOLAR: f64 = 20.786;

/// Liquid mercury, linear in T.
pub fn cp_hg_liquid(t_k: f64) -> f64 {
    (HG_LIQ_A - HG_LIQ_B * t_k) / M_HG_KG_MOL
}

/// Mercury vapor, constant ideal-gas value.
pub fn cp_hg_gas() -> f64 {
    HG_GAS_MOLAR / M_HG_KG_MOL
}

/// Mercury, piecewise at saturation.
///
/// Steps at `TSAT_HG_K`; the design basis models no transition
/// region.
pub fn cp_hg(t_k: f64) -> f64 {
    if t_k < TSAT_HG_K {
        cp_hg_liquid(t_k)
    } else {
        cp_hg_gas()
    }
}

/// Phosphor powder, yttrium-oxide proxy, tabulated.
static POWDER_TABLE: CpTable = CpTable::new(&[
    (200.0, 380.0),
    (298.15, 454.0),
    (400.0, 492.0),
    (600.0, 523.0),
    (800.0, 541.0),
    (1_000.0, 553.0),
]);

/// Liquid water, tabulated over the chiller-loop range.
static WATER_TABLE: CpTable = CpTable::new(&[
    (273.15, 4_217.0),
    (293.15, 4_184.0),
    (313.15, 4_179.0),
    (333.15, 4_185.0),
    (353.15, 4_197.0),
    (373.15, 4_216.0),
]);

pub fn cp_powder(t_k: f64) -> f64 {
    POWDER_TABLE.eval(t_k)
}

pub fn cp_water(t_k: f64) -> f64 {
    WATER_TABLE.eval(t_k)
}

/// Aluminium, quadratic fit.
pub fn cp_al(t_k: f64) -> f64 {
    738.0 + 0.59 * t_k - 1.7e-4 * t_k * t_k
}

/// Soda-lime glass, Maier-Kelley form on a silica basis; the
/// inverse-square term dominates below ambient.
pub fn cp_glass(t_k: f64) -> f64 {
    (46.94 + 0.034_31 * t_k - 1.130_1e6 / (t_k * t_k)) / 0.060_08
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mercury_discontinuity_at_saturation() {
        let below = cp_hg(TSAT_HG_K - 1e-9);
        let at = cp_hg(TSAT_HG_K);
        assert!((below - cp_hg_liquid(TSAT_HG_K - 1e-9)).abs() < 1e-12);
        assert!((at - cp_hg_gas()).abs() < 1e-12);
        // The step is real and sizeable
        assert!((below - at).abs() > 1.0);
    }

    #[test]
    fn liquid_mercury_near_handbook_value() {
        // ~139 J/(kg·K) at ambient; the linear fit sits within a few %
        let cp = cp_hg_liquid(298.15);
        assert!(cp > 125.0 && cp < 145.0, "cp = {cp}");
    }

    #[test]
    fn water_matches_table_points_exactly() {
        assert_eq!(cp_water(293.15), 4_184.0);
        assert_eq!(cp_water(373.15), 4_216.0);
    }

    #[test]
    fn powder_extrapolates_silently_below_table() {
        // "Line" boundary: extension of the first segment, no panic
        let v = cp_powder(150.0);
        assert!(v.is_finite());
        assert!(v < 380.0);
    }

    #[test]
    fn glass_inverse_square_term_bites_at_low_t() {
        assert!(cp_glass(250.0) < cp_glass(400.0));
    }

    #[test]
    fn aluminium_increases_over_process_range() {
        assert!(cp_al(300.0) < cp_al(900.0));
    }
}
