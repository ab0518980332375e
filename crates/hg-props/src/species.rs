//! Chemical species handled by the recovery process.

use crate::error::{PropsError, PropsResult};
use crate::heat_capacity;
use hg_core::units::{SpecHeatCapacity, Temperature};

/// Species present in fluorescent-lamp waste processing.
///
/// This is a closed set: every variant has a heat-capacity
/// correlation, so constructing a component never needs a fallback
/// path. Parsing an unrecognized key fails in [`Species::from_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Mercury (Hg)
    Hg,
    /// Nitrogen carrier gas (N₂)
    N2,
    /// Phosphor powder (yttrium-oxide proxy)
    Powder,
    /// Soda-lime lamp glass
    Glass,
    /// Aluminium end caps
    Al,
    /// Chiller-loop coolant water (H₂O)
    Water,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::Hg,
        Species::N2,
        Species::Powder,
        Species::Glass,
        Species::Al,
        Species::Water,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::Hg => "Hg",
            Species::N2 => "N2",
            Species::Powder => "powder",
            Species::Glass => "glass",
            Species::Al => "Al",
            Species::Water => "water",
        }
    }

    /// Parse a species key as it appears in configuration files.
    pub fn from_key(key: &str) -> PropsResult<Species> {
        Species::ALL
            .iter()
            .copied()
            .find(|s| s.key() == key)
            .ok_or_else(|| PropsError::UnknownSpecies {
                key: key.to_string(),
            })
    }

    /// Molar mass [kg/mol].
    pub fn molar_mass_kg_mol(&self) -> f64 {
        match self {
            Species::Hg => heat_capacity::M_HG_KG_MOL,
            Species::N2 => 0.028_014,
            Species::Powder => 0.225_81,
            Species::Glass => 0.060_08,
            Species::Al => 0.026_982,
            Species::Water => 0.018_015,
        }
    }

    /// Specific heat capacity [J/(kg·K)] at temperature `t`.
    ///
    /// Dispatch is exhaustive over the closed set; mercury is the
    /// only phase-dependent correlation (liquid below saturation,
    /// ideal gas at or above it).
    pub fn cp(&self, t: Temperature) -> SpecHeatCapacity {
        self.cp_si(t.value)
    }

    /// Same as [`Species::cp`] on a raw kelvin value, for use as a
    /// quadrature integrand.
    pub fn cp_si(&self, t_k: f64) -> SpecHeatCapacity {
        match self {
            Species::Hg => heat_capacity::cp_hg(t_k),
            Species::N2 => heat_capacity::CP_N2,
            Species::Powder => heat_capacity::cp_powder(t_k),
            Species::Glass => heat_capacity::cp_glass(t_k),
            Species::Al => heat_capacity::cp_al(t_k),
            Species::Water => heat_capacity::cp_water(t_k),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips() {
        for s in Species::ALL {
            assert_eq!(Species::from_key(s.key()).unwrap(), s);
        }
    }

    #[test]
    fn unknown_key_rejected() {
        let err = Species::from_key("Cd").unwrap_err();
        assert!(err.to_string().contains("Cd"));
    }

    #[test]
    fn every_species_has_positive_cp_at_ambient() {
        for s in Species::ALL {
            assert!(s.cp_si(298.15) > 0.0, "cp({s}) not positive");
        }
    }
}
