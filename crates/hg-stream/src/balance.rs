//! Mass/energy aggregation and closure checks.
//!
//! The checks are the self-verification step every unit operation
//! runs before returning its outputs. A failed check is a logic or
//! parameter error upstream and always propagates; nothing in the
//! plant continues past an open balance.

use crate::error::{StreamError, StreamResult};
use crate::stream::Stream;
use hg_core::numeric::{Tolerances, closes};
use hg_core::units::{Energy, Mass, j, kg};

/// Relative tolerance for mass closure: 1% of throughput.
pub const MASS_REL_TOL: f64 = 0.01;

/// Absolute tolerance for energy closure [J].
pub const ENERGY_ABS_TOL_J: f64 = 0.01;

/// Total mass of a stream.
pub fn stream_mass(stream: &Stream) -> Mass {
    kg(stream.components().iter().map(|c| c.mass().value).sum())
}

/// Total enthalpy of a stream: `Σ mᵢ·hᵢ`.
pub fn stream_energy(stream: &Stream) -> Energy {
    j(stream
        .components()
        .iter()
        .map(|c| c.total_enthalpy().value)
        .sum())
}

fn total_mass(streams: &[&Stream]) -> f64 {
    streams.iter().map(|s| stream_mass(s).value).sum()
}

fn total_energy(streams: &[&Stream]) -> f64 {
    streams.iter().map(|s| stream_energy(s).value).sum()
}

/// Fail unless input and output mass agree within [`MASS_REL_TOL`].
pub fn mass_check(inputs: &[&Stream], outputs: &[&Stream]) -> StreamResult<()> {
    let m_in = total_mass(inputs);
    let m_out = total_mass(outputs);
    let delta = m_in - m_out;
    let scale = m_in.abs().max(m_out.abs());

    if closes(delta, scale, Tolerances::relative(MASS_REL_TOL)) {
        Ok(())
    } else {
        Err(StreamError::MassImbalance {
            delta_kg: delta,
            rel_pct: 100.0 * delta.abs() / scale,
        })
    }
}

/// Fail unless `E(inputs) − E(outputs) + extraneous ≈ 0` within
/// [`ENERGY_ABS_TOL_J`]. `extraneous` is duty not carried by any
/// stream (heat added positive, removed negative).
pub fn energy_check(inputs: &[&Stream], outputs: &[&Stream], extraneous: Energy) -> StreamResult<()> {
    let delta = total_energy(inputs) - total_energy(outputs) + extraneous.value;

    if closes(delta, 0.0, Tolerances::absolute(ENERGY_ABS_TOL_J)) {
        Ok(())
    } else {
        Err(StreamError::EnergyImbalance {
            delta_j: delta,
            tol_j: ENERGY_ABS_TOL_J,
        })
    }
}

/// Relative-tolerance variant of [`energy_check`] for operations
/// derived from a ratio rather than closed algebraically (chiller).
pub fn energy_check_rel(
    inputs: &[&Stream],
    outputs: &[&Stream],
    extraneous: Energy,
    rel_tol: f64,
) -> StreamResult<()> {
    let e_in = total_energy(inputs);
    let e_out = total_energy(outputs);
    let delta = e_in - e_out + extraneous.value;
    let scale = e_in.abs().max(e_out.abs()).max(extraneous.value.abs());

    if closes(delta, scale, Tolerances::relative(rel_tol)) {
        Ok(())
    } else {
        Err(StreamError::EnergyImbalanceRel {
            delta_j: delta,
            rel_pct: 100.0 * delta.abs() / scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, Phase};
    use hg_core::units::{g, k};
    use hg_props::Species;

    fn comp(species: Species, mass_g: f64, h: f64) -> Component {
        let phase = match species {
            Species::N2 => Phase::Gas,
            _ => Phase::Solid,
        };
        Component::new(species, phase, g(mass_g), h).unwrap()
    }

    fn stream(t_k: f64, comps: Vec<Component>) -> Stream {
        Stream::new(k(t_k), comps).unwrap()
    }

    #[test]
    fn stream_sums_are_definitional() {
        let s = stream(
            300.0,
            vec![comp(Species::Hg, 10.0, 500.0), comp(Species::Powder, 100.0, 40.0)],
        );
        assert!((stream_mass(&s).value - 0.110).abs() < 1e-12);
        // 0.01*500 + 0.1*40
        assert!((stream_energy(&s).value - 9.0).abs() < 1e-12);
    }

    #[test]
    fn mass_check_passes_within_one_percent() {
        let a = stream(300.0, vec![comp(Species::Hg, 100.0, 0.0)]);
        let b = stream(300.0, vec![comp(Species::Hg, 99.5, 0.0)]);
        assert!(mass_check(&[&a], &[&b]).is_ok());
    }

    #[test]
    fn mass_check_fails_with_delta_in_message() {
        let a = stream(300.0, vec![comp(Species::Hg, 100.0, 0.0)]);
        let b = stream(300.0, vec![comp(Species::Hg, 90.0, 0.0)]);
        let err = mass_check(&[&a], &[&b]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Mass balance not closed"), "{msg}");
        assert!(msg.contains("kg"), "{msg}");
    }

    #[test]
    fn energy_check_with_duty_closes() {
        let cold = stream(300.0, vec![comp(Species::Hg, 10.0, 0.0)]);
        let hot = stream(600.0, vec![comp(Species::Hg, 10.0, 1_000.0)]);
        // 0.01 kg gains 1000 J/kg = 10 J supplied as duty
        assert!(energy_check(&[&cold], &[&hot], j(10.0)).is_ok());
        assert!(energy_check(&[&cold], &[&hot], j(10.5)).is_err());
    }

    #[test]
    fn energy_check_rel_loosens_tolerance() {
        let cold = stream(281.0, vec![comp(Species::Water, 240.0, -71_000.0)]);
        let warm = stream(282.0, vec![comp(Species::Water, 240.0, -66_800.0)]);
        let q = (71_000.0 - 66_800.0) * 0.240;
        // 0.3 J of quadrature slack on ~1 kJ: fails absolute, passes 0.05% relative
        assert!(energy_check(&[&cold], &[&warm], j(q + 0.3)).is_err());
        assert!(energy_check_rel(&[&cold], &[&warm], j(q + 0.3), 5e-4).is_ok());
    }

    #[test]
    fn sums_over_multiple_streams() {
        let a = stream(300.0, vec![comp(Species::Hg, 10.0, 100.0)]);
        let b = stream(300.0, vec![comp(Species::N2, 50.0, 20.0)]);
        assert!((total_mass(&[&a, &b]) - 0.060).abs() < 1e-12);
        assert!((total_energy(&[&a, &b]) - 2.0).abs() < 1e-12);
    }
}
