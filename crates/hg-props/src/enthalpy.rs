//! Reference-state enthalpy integration.
//!
//! Every specific enthalpy in the plant is relative to one global
//! reference `(T0, h0)`. Mixing enthalpies from two different
//! references would make every cross-stream energy balance
//! meaningless, so the reference is threaded explicitly rather than
//! read from an ambient constant.

use crate::error::PropsResult;
use crate::species::Species;
use hg_core::units::{SpecEnthalpy, Temperature, k};
use hg_solver::integrate;

/// Global enthalpy reference: `h0` at temperature `t0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceState {
    pub t0: Temperature,
    pub h0: SpecEnthalpy,
}

impl ReferenceState {
    pub fn new(t0: Temperature, h0: SpecEnthalpy) -> Self {
        Self { t0, h0 }
    }
}

impl Default for ReferenceState {
    /// 25 °C, zero enthalpy.
    fn default() -> Self {
        Self {
            t0: k(298.15),
            h0: 0.0,
        }
    }
}

/// Absolute specific enthalpy of a species with heat capacity `cp`
/// at temperature `t`: `h0 + ∫_{t0}^{t} cp dT`.
///
/// By construction `absolute_h(cp, reference, reference.t0)`
/// returns exactly `h0`.
pub fn absolute_h<F: Fn(f64) -> f64>(
    cp: F,
    reference: ReferenceState,
    t: Temperature,
) -> PropsResult<SpecEnthalpy> {
    let dh = integrate(cp, reference.t0.value, t.value)?;
    Ok(reference.h0 + dh)
}

impl Species {
    /// Absolute specific enthalpy via this species' own heat
    /// capacity. Mercury integrates through its saturation step; the
    /// unit operations that need the liquid branch alone use
    /// [`crate::heat_capacity::cp_hg_liquid`] directly.
    pub fn absolute_h(&self, reference: ReferenceState, t: Temperature) -> PropsResult<SpecEnthalpy> {
        absolute_h(|t_k| self.cp_si(t_k), reference, t)
    }
}
