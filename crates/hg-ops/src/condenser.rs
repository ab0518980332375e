//! Condenser model.

use crate::common::{check_efficiency, check_temperature};
use crate::error::{OpError, OpResult};
use crate::shapes::{MercuryStream, VaporStream};
use hg_core::units::{Energy, Pressure, Temperature, j, kg};
use hg_props::heat_capacity::{CP_N2, HVAP_HG_J_KG, cp_hg_liquid};
use hg_props::{ReferenceState, absolute_h, mercury_vapor_pressure};
use hg_stream::{Component, Phase, energy_check, mass_check, stream_energy};

/// Chilled mercury condenser.
///
/// ## Model
///
/// The recovery fraction comes from the mercury vapor-pressure
/// correlation, treating mercury's partial pressure as the full
/// condenser pressure:
///
/// ```text
/// r_C = 1 − vp(Tout) / (Pcond − vp(Tout))
/// ```
///
/// This is the design basis' stated rough estimate, not a rigorous
/// equilibrium flash; it is preserved as-is. A `(Tout, Pcond)` pair
/// that pushes `r_C` outside [0, 1] is rejected at construction so a
/// negative condensed mass can never enter a stream.
///
/// The condensed liquid keeps the heat of vaporization in its
/// reference enthalpy (design-basis convention), so the duty covers
/// sensible cooling only.
///
/// ## Sign convention
///
/// `duty` is NEGATIVE (heat removed from the process).
#[derive(Clone, Debug)]
pub struct Condenser {
    /// Equipment name for reporting
    pub name: String,
    /// Outlet temperature
    pub t_out: Temperature,
    /// Combined thermal efficiency (0 < eff <= 1)
    pub efficiency: f64,
    /// Operating pressure
    pub p_cond: Pressure,
    recovery: f64,
}

/// Condenser outputs: vent vapor, condensed liquid, heat duty.
#[derive(Clone, Debug)]
pub struct CondenserOutput {
    pub vent: VaporStream,
    pub liquid: MercuryStream,
    pub duty: Energy,
}

impl Condenser {
    pub fn new(
        name: impl Into<String>,
        t_out: Temperature,
        efficiency: f64,
        p_cond: Pressure,
    ) -> OpResult<Self> {
        check_temperature(t_out, "condenser outlet temperature")?;
        check_efficiency(efficiency, "condenser efficiency must be in (0,1]")?;
        if !p_cond.value.is_finite() || p_cond.value <= 0.0 {
            return Err(OpError::InvalidArg {
                what: "condenser pressure must be positive",
            });
        }

        let vp = mercury_vapor_pressure(t_out)?;
        if vp.value >= p_cond.value {
            return Err(OpError::NonPhysical {
                what: format!(
                    "mercury vapor pressure {:.3} kPa exceeds condenser pressure {:.3} kPa",
                    vp.value / 1e3,
                    p_cond.value / 1e3
                ),
            });
        }
        let recovery = 1.0 - vp.value / (p_cond.value - vp.value);
        if !(0.0..=1.0).contains(&recovery) {
            return Err(OpError::NonPhysical {
                what: format!(
                    "recovery fraction {recovery:.4} outside [0,1] at Tout = {:.2} K, \
                     Pcond = {:.3} kPa",
                    t_out.value,
                    p_cond.value / 1e3
                ),
            });
        }

        Ok(Self {
            name: name.into(),
            t_out,
            efficiency,
            p_cond,
            recovery,
        })
    }

    /// Mercury recovery fraction implied by `(t_out, p_cond)`.
    pub fn recovery(&self) -> f64 {
        self.recovery
    }

    pub fn run(&self, reference: ReferenceState, inlet: &VaporStream) -> OpResult<CondenserOutput> {
        let t_out = self.t_out;
        let h_hg_out = HVAP_HG_J_KG + absolute_h(cp_hg_liquid, reference, t_out)?;

        let m_hg = inlet.hg.mass();
        let m_cond = kg(self.recovery * m_hg.value);
        let m_vent = kg(m_hg.value - m_cond.value);

        let hg_liquid = Component::new(inlet.hg.species(), Phase::Liquid, m_cond, h_hg_out)?;
        let hg_vent = Component::new(inlet.hg.species(), Phase::Gas, m_vent, h_hg_out)?;

        let n2_out = Component::new(
            inlet.n2.species(),
            Phase::Gas,
            inlet.n2.mass(),
            inlet.n2.specific_enthalpy() + CP_N2 * (t_out.value - inlet.temperature.value),
        )?;

        let vent = VaporStream::new(t_out, hg_vent, n2_out)?;
        let liquid = MercuryStream::new(t_out, hg_liquid)?;

        let inlet_s = inlet.stream()?;
        let vent_s = vent.stream()?;
        let liquid_s = liquid.stream()?;

        let e_in = stream_energy(&inlet_s).value;
        let e_out = stream_energy(&vent_s).value + stream_energy(&liquid_s).value;
        let duty = j((e_out - e_in) / self.efficiency);

        mass_check(&[&inlet_s], &[&vent_s, &liquid_s])?;
        energy_check(
            &[&inlet_s],
            &[&vent_s, &liquid_s],
            j(duty.value * self.efficiency),
        )?;

        Ok(CondenserOutput { vent, liquid, duty })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hg_core::units::{constants, g, k, kpa, pa};
    use hg_props::Species;
    use hg_props::heat_capacity::cp_hg_liquid;

    fn hot_vapor(hg_g: f64, n2_g: f64, t_k: f64) -> VaporStream {
        let reference = ReferenceState::default();
        let h_hg = HVAP_HG_J_KG + absolute_h(cp_hg_liquid, reference, k(t_k)).unwrap();
        let h_n2 = CP_N2 * (t_k - reference.t0.value);
        VaporStream::new(
            k(t_k),
            Component::new(Species::Hg, Phase::Gas, g(hg_g), h_hg).unwrap(),
            Component::new(Species::N2, Phase::Gas, g(n2_g), h_n2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn recovery_is_high_at_chilled_atmospheric_conditions() {
        let c = Condenser::new("cond", k(281.0), 0.8, pa(constants::ATM_PA)).unwrap();
        assert!(c.recovery() > 0.99 && c.recovery() <= 1.0);
    }

    #[test]
    fn out_of_correlation_range_rejected() {
        assert!(Condenser::new("cond", k(500.0), 0.8, pa(constants::ATM_PA)).is_err());
    }

    #[test]
    fn vacuum_operation_rejected_when_vp_dominates() {
        // Pcond below the vapor pressure cannot condense
        assert!(Condenser::new("cond", k(423.15), 0.8, pa(100.0)).is_err());
    }

    #[test]
    fn negative_recovery_rejected() {
        // vp < Pcond < 2·vp gives r_C < 0; must refuse the configuration
        let vp = mercury_vapor_pressure(k(423.15)).unwrap();
        let p = pa(1.5 * vp.value);
        assert!(Condenser::new("cond", k(423.15), 0.8, p).is_err());
    }

    #[test]
    fn condensation_splits_and_cools() {
        let reference = ReferenceState::default();
        let c = Condenser::new("cond", k(281.0), 0.8, kpa(101.325)).unwrap();
        let inlet = hot_vapor(9.0, 50.0, 400.0);
        let out = c.run(reference, &inlet).unwrap();

        let r = c.recovery();
        assert!((out.liquid.hg.mass().value - r * 0.009).abs() < 1e-12);
        assert!((out.vent.hg.mass().value - (1.0 - r) * 0.009).abs() < 1e-12);
        assert_eq!(out.vent.temperature.value, 281.0);
        // Cooling: heat leaves the process
        assert!(out.duty.value < 0.0);
    }

    #[test]
    fn duty_closes_energy_balance() {
        let reference = ReferenceState::default();
        let c = Condenser::new("cond", k(281.0), 0.75, kpa(101.325)).unwrap();
        let inlet = hot_vapor(9.0, 50.0, 400.0);
        let out = c.run(reference, &inlet).unwrap();

        let e_in = stream_energy(&inlet.stream().unwrap()).value;
        let e_out = stream_energy(&out.vent.stream().unwrap()).value
            + stream_energy(&out.liquid.stream().unwrap()).value;
        assert!((e_in - e_out + out.duty.value * 0.75).abs() < 0.01);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use hg_core::units::{constants, k, pa};
    use hg_props::vapor_pressure::{VP_HG_T_MAX_K, VP_HG_T_MIN_K};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn recovery_stays_in_unit_interval_at_atmospheric(
            t_k in VP_HG_T_MIN_K..VP_HG_T_MAX_K
        ) {
            let c = Condenser::new("cond", k(t_k), 0.8, pa(constants::ATM_PA)).unwrap();
            prop_assert!((0.0..=1.0).contains(&c.recovery()));
        }
    }
}
