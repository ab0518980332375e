//! Retort furnace model.

use crate::common::{check_efficiency, check_fraction, check_temperature};
use crate::error::OpResult;
use crate::shapes::{CarrierGas, FurnaceFeed, SolidResidue, VaporStream};
use hg_core::units::{Energy, Temperature, j, kg};
use hg_props::heat_capacity::{CP_N2, HVAP_HG_J_KG, cp_hg_liquid};
use hg_props::{ReferenceState, absolute_h};
use hg_stream::{Component, Phase, energy_check, mass_check};

/// Indirectly heated retort furnace.
///
/// Vaporizes a fraction `removal` of the feed mercury into the
/// nitrogen carrier and heats everything to the furnace temperature.
///
/// ## Model
///
/// ```text
/// m_vap        = removal · m_Hg,feed
/// h_Hg,vapor   = Δh_vap + ∫ Cp_Hg,liq dT   over [T0, Tf]
/// h_N2,out     = h_N2,in + Cp_N2 · (Tf − T_in)
/// h_solids,out = ∫ Cp_species dT           over [T0, Tf]
/// Qf           = (E_out − E_in) / eff
/// ```
///
/// Nitrogen leaving with the solids when the retort is opened is
/// neglected; the residue stream is mercury plus host solids only.
///
/// ## Sign convention
///
/// `duty` is POSITIVE (heat supplied to the process).
#[derive(Clone, Debug)]
pub struct Furnace {
    /// Equipment name for reporting
    pub name: String,
    /// Target furnace temperature
    pub t_furnace: Temperature,
    /// Thermal efficiency (0 < eff <= 1)
    pub efficiency: f64,
    /// Mercury removal fraction in [0, 1]
    pub removal: f64,
}

/// Furnace outputs: vapor exit, solid residue, heat duty.
#[derive(Clone, Debug)]
pub struct FurnaceOutput {
    pub vapor: VaporStream,
    pub residue: SolidResidue,
    pub duty: Energy,
}

impl Furnace {
    pub fn new(
        name: impl Into<String>,
        t_furnace: Temperature,
        efficiency: f64,
        removal: f64,
    ) -> OpResult<Self> {
        check_temperature(t_furnace, "furnace temperature")?;
        check_efficiency(efficiency, "furnace efficiency must be in (0,1]")?;
        check_fraction(removal, "mercury removal fraction must be in [0,1]")?;
        Ok(Self {
            name: name.into(),
            t_furnace,
            efficiency,
            removal,
        })
    }

    /// Run the furnace on one feed batch with its carrier-gas supply.
    pub fn run(
        &self,
        reference: ReferenceState,
        feed: &FurnaceFeed,
        carrier: &CarrierGas,
    ) -> OpResult<FurnaceOutput> {
        let tf = self.t_furnace;

        // Liquid-branch mercury enthalpy at Tf, from the reference
        let h_hg_liq = absolute_h(cp_hg_liquid, reference, tf)?;

        let m_hg = feed.hg.mass();
        let m_vap = kg(self.removal * m_hg.value);
        let m_res = kg(m_hg.value - m_vap.value);

        let hg_vapor = Component::new(
            feed.hg.species(),
            Phase::Gas,
            m_vap,
            HVAP_HG_J_KG + h_hg_liq,
        )?;
        let hg_residual = Component::new(feed.hg.species(), Phase::Liquid, m_res, h_hg_liq)?;

        let n2_out = Component::new(
            carrier.n2.species(),
            Phase::Gas,
            carrier.n2.mass(),
            carrier.n2.specific_enthalpy() + CP_N2 * (tf.value - carrier.temperature.value),
        )?;

        let mut solids = Vec::with_capacity(2);
        for c in std::iter::once(&feed.host).chain(feed.extra.as_ref()) {
            let h = c.species().absolute_h(reference, tf)?;
            solids.push(Component::new(c.species(), Phase::Solid, c.mass(), h)?);
        }

        let vapor = VaporStream::new(tf, hg_vapor, n2_out)?;
        let residue = SolidResidue::new(tf, hg_residual, solids)?;

        let feed_s = feed.stream()?;
        let carrier_s = carrier.stream()?;
        let vapor_s = vapor.stream()?;
        let residue_s = residue.stream()?;

        let e_in = hg_stream::stream_energy(&feed_s).value + hg_stream::stream_energy(&carrier_s).value;
        let e_out =
            hg_stream::stream_energy(&vapor_s).value + hg_stream::stream_energy(&residue_s).value;
        let duty = j((e_out - e_in) / self.efficiency);

        mass_check(&[&feed_s, &carrier_s], &[&vapor_s, &residue_s])?;
        energy_check(
            &[&feed_s, &carrier_s],
            &[&vapor_s, &residue_s],
            j(duty.value * self.efficiency),
        )?;

        Ok(FurnaceOutput {
            vapor,
            residue,
            duty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hg_core::units::{g, k};
    use hg_props::Species;

    fn feed(hg_g: f64, powder_g: f64) -> FurnaceFeed {
        FurnaceFeed::new(
            k(298.15),
            Component::new(Species::Hg, Phase::Solid, g(hg_g), 0.0).unwrap(),
            Component::new(Species::Powder, Phase::Solid, g(powder_g), 0.0).unwrap(),
            None,
        )
        .unwrap()
    }

    fn carrier(n2_g: f64, t_k: f64) -> CarrierGas {
        CarrierGas::new(
            k(t_k),
            Component::new(Species::N2, Phase::Gas, g(n2_g), 0.0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn reference_scenario_splits_mercury() {
        // 10 g Hg + 100 g powder, 50 g N2 at 300 K, Tf = 873.15 K,
        // eff = 0.5, removal = 0.9
        let furnace = Furnace::new("retort", k(873.15), 0.5, 0.9).unwrap();
        let out = furnace
            .run(ReferenceState::default(), &feed(10.0, 100.0), &carrier(50.0, 300.0))
            .unwrap();

        assert!((out.vapor.hg.mass().value - 0.009).abs() < 1e-12);
        assert!((out.residue.hg.mass().value - 0.001).abs() < 1e-12);
        assert!(out.duty.value > 0.0);
    }

    #[test]
    fn duty_reverses_out_efficiency() {
        let reference = ReferenceState::default();
        let furnace = Furnace::new("retort", k(873.15), 0.5, 0.9).unwrap();
        let f = feed(10.0, 100.0);
        let c = carrier(50.0, 300.0);
        let out = furnace.run(reference, &f, &c).unwrap();

        let e_in = hg_stream::stream_energy(&f.stream().unwrap()).value
            + hg_stream::stream_energy(&c.stream().unwrap()).value;
        let e_out = hg_stream::stream_energy(&out.vapor.stream().unwrap()).value
            + hg_stream::stream_energy(&out.residue.stream().unwrap()).value;

        // Qf * eff must close the stream balance to within 0.01 J
        assert!((e_in - e_out + out.duty.value * 0.5).abs() < 0.01);
    }

    #[test]
    fn zero_removal_sends_nothing_overhead() {
        let furnace = Furnace::new("retort", k(873.15), 0.5, 0.0).unwrap();
        let out = furnace
            .run(ReferenceState::default(), &feed(10.0, 100.0), &carrier(50.0, 300.0))
            .unwrap();
        assert_eq!(out.vapor.hg.mass().value, 0.0);
        assert!((out.residue.hg.mass().value - 0.010).abs() < 1e-12);
    }

    #[test]
    fn full_removal_leaves_no_residual_mercury() {
        let furnace = Furnace::new("retort", k(873.15), 0.5, 1.0).unwrap();
        let out = furnace
            .run(ReferenceState::default(), &feed(10.0, 100.0), &carrier(50.0, 300.0))
            .unwrap();
        assert_eq!(out.residue.hg.mass().value, 0.0);
        assert!((out.vapor.hg.mass().value - 0.010).abs() < 1e-12);
    }

    #[test]
    fn everything_leaves_at_furnace_temperature() {
        let furnace = Furnace::new("retort", k(873.15), 0.8, 0.9).unwrap();
        let out = furnace
            .run(ReferenceState::default(), &feed(10.0, 100.0), &carrier(50.0, 300.0))
            .unwrap();
        assert_eq!(out.vapor.temperature.value, 873.15);
        assert_eq!(out.residue.temperature.value, 873.15);
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(Furnace::new("f", k(873.15), 0.0, 0.9).is_err());
        assert!(Furnace::new("f", k(873.15), 1.5, 0.9).is_err());
        assert!(Furnace::new("f", k(873.15), 0.5, 1.1).is_err());
    }

    #[test]
    fn extra_solid_constituent_is_heated_too() {
        let reference = ReferenceState::default();
        let f = FurnaceFeed::new(
            k(298.15),
            Component::new(Species::Hg, Phase::Solid, g(10.0), 0.0).unwrap(),
            Component::new(Species::Glass, Phase::Solid, g(500.0), 0.0).unwrap(),
            Some(Component::new(Species::Al, Phase::Solid, g(20.0), 0.0).unwrap()),
        )
        .unwrap();
        let furnace = Furnace::new("retort", k(873.15), 0.5, 0.9).unwrap();
        let out = furnace.run(reference, &f, &carrier(50.0, 300.0)).unwrap();

        assert_eq!(out.residue.solids.len(), 2);
        for c in &out.residue.solids {
            assert!(c.specific_enthalpy() > 0.0);
        }
    }
}
