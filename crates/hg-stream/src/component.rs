//! Component: one species/phase within a stream.

use crate::error::{StreamError, StreamResult};
use hg_core::units::{Energy, Mass, SpecEnthalpy, j};
use hg_props::Species;

/// Phase tag. Informational bookkeeping only; no computation branches
/// on it except mercury's own saturation-piecewise heat capacity,
/// which keys on temperature, not on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
}

impl Phase {
    pub fn key(&self) -> &'static str {
        match self {
            Phase::Solid => "s",
            Phase::Liquid => "l",
            Phase::Gas => "g",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A mass of one chemical species in one phase.
///
/// `h` is specific enthalpy [J/kg] relative to the plant-wide
/// reference state. The heat-capacity correlation is bound by the
/// closed [`Species`] set at construction; there is no dispatch, and
/// no fallback, after this point.
///
/// Components are immutable values: every unit operation consumes
/// its inputs and constructs fresh outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    species: Species,
    phase: Phase,
    mass: Mass,
    h: SpecEnthalpy,
}

impl Component {
    /// Validates mass (finite, non-negative) and enthalpy (finite).
    pub fn new(species: Species, phase: Phase, mass: Mass, h: SpecEnthalpy) -> StreamResult<Self> {
        if !mass.value.is_finite() || mass.value < 0.0 {
            return Err(StreamError::NonPhysical {
                what: "component mass must be finite and non-negative",
            });
        }
        if !h.is_finite() {
            return Err(StreamError::NonPhysical {
                what: "specific enthalpy must be finite",
            });
        }
        Ok(Self {
            species,
            phase,
            mass,
            h,
        })
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Specific enthalpy [J/kg].
    pub fn specific_enthalpy(&self) -> SpecEnthalpy {
        self.h
    }

    /// Total enthalpy `H = m·h`.
    pub fn total_enthalpy(&self) -> Energy {
        j(self.mass.value * self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hg_core::units::g;

    #[test]
    fn total_enthalpy_is_mass_times_specific() {
        let c = Component::new(Species::Hg, Phase::Liquid, g(10.0), 2_000.0).unwrap();
        // 0.01 kg * 2000 J/kg
        assert!((c.total_enthalpy().value - 20.0).abs() < 1e-12);
    }

    #[test]
    fn zero_mass_is_allowed() {
        // r_F = 1 leaves a zero-mass residual component
        let c = Component::new(Species::Hg, Phase::Liquid, g(0.0), 100.0).unwrap();
        assert_eq!(c.total_enthalpy().value, 0.0);
    }

    #[test]
    fn negative_mass_rejected() {
        assert!(Component::new(Species::N2, Phase::Gas, g(-1.0), 0.0).is_err());
    }

    #[test]
    fn non_finite_enthalpy_rejected() {
        assert!(Component::new(Species::N2, Phase::Gas, g(1.0), f64::NAN).is_err());
    }
}
