//! Adiabatic merge of two vapor streams.

use crate::error::OpResult;
use crate::shapes::VaporStream;
use hg_core::units::{j, k, kg};
use hg_props::heat_capacity::{CP_N2, HVAP_HG_J_KG, cp_hg_liquid};
use hg_props::{ReferenceState, absolute_h};
use hg_solver::{ScalarNewtonConfig, newton_solve};
use hg_stream::{Component, Phase, energy_check, mass_check, stream_energy};

/// Newton seed for the mixing temperature [K].
const T_MIX_SEED_K: f64 = 500.0;

/// Merge two mercury/nitrogen vapor streams adiabatically.
///
/// Masses are additive per species; the outlet temperature `T3`
/// solves the energy-conservation equation
///
/// ```text
/// H(T3) = H(in1) + H(in2)
/// ```
///
/// with mixing enthalpy neglected. `H(T)` uses the same enthalpy
/// forms the furnaces produce: mercury carries the heat of
/// vaporization plus the liquid-Cp integral from `T0`, nitrogen a
/// constant Cp from `T0`. Both balances are verified before the
/// merged stream is returned.
pub fn merge_streams(
    reference: ReferenceState,
    a: &VaporStream,
    b: &VaporStream,
) -> OpResult<VaporStream> {
    let m_hg = kg(a.hg.mass().value + b.hg.mass().value);
    let m_n2 = kg(a.n2.mass().value + b.n2.mass().value);

    let a_s = a.stream()?;
    let b_s = b.stream()?;
    let h_target = stream_energy(&a_s).value + stream_energy(&b_s).value;

    let h_hg_at = |t_k: f64| -> Result<f64, hg_props::PropsError> {
        Ok(HVAP_HG_J_KG + absolute_h(cp_hg_liquid, reference, k(t_k))?)
    };
    let h_n2_at = |t_k: f64| reference.h0 + CP_N2 * (t_k - reference.t0.value);

    let result = newton_solve(
        T_MIX_SEED_K,
        |t_k| {
            let h_hg = h_hg_at(t_k).map_err(|e| hg_solver::SolverError::Numeric {
                what: e.to_string(),
            })?;
            Ok(m_hg.value * h_hg + m_n2.value * h_n2_at(t_k) - h_target)
        },
        &ScalarNewtonConfig::default(),
    )?;

    let t3 = k(result.x);
    let merged = VaporStream::new(
        t3,
        Component::new(a.hg.species(), Phase::Gas, m_hg, h_hg_at(t3.value)?)?,
        Component::new(a.n2.species(), Phase::Gas, m_n2, h_n2_at(t3.value))?,
    )?;

    let merged_s = merged.stream()?;
    mass_check(&[&a_s, &b_s], &[&merged_s])?;
    energy_check(&[&a_s, &b_s], &[&merged_s], j(0.0))?;

    Ok(merged)
}
