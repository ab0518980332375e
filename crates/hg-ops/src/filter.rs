//! Activated-carbon polishing filter.

use crate::error::OpResult;
use crate::shapes::{CarrierGas, MercuryStream, VaporStream};
use hg_core::units::j;
use hg_stream::{energy_check, mass_check};

/// Carbon bed capturing residual mercury from the condenser vent.
///
/// Assumes 100% capture and no thermal or mass transformation: the
/// inlet is purely partitioned into a clean carrier stream and a
/// mercury collection stream, both unchanged. The balance checks
/// still run; they hold trivially.
#[derive(Clone, Debug)]
pub struct CarbonFilter {
    /// Equipment name for reporting
    pub name: String,
}

/// Filter outputs: cleaned carrier and collected mercury. No duty.
#[derive(Clone, Debug)]
pub struct FilterOutput {
    pub carrier: CarrierGas,
    pub capture: MercuryStream,
}

impl CarbonFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn run(&self, inlet: &VaporStream) -> OpResult<FilterOutput> {
        let carrier = CarrierGas::new(inlet.temperature, inlet.n2.clone())?;
        let capture = MercuryStream::new(inlet.temperature, inlet.hg.clone())?;

        let inlet_s = inlet.stream()?;
        let carrier_s = carrier.stream()?;
        let capture_s = capture.stream()?;

        mass_check(&[&inlet_s], &[&carrier_s, &capture_s])?;
        energy_check(&[&inlet_s], &[&carrier_s, &capture_s], j(0.0))?;

        Ok(FilterOutput { carrier, capture })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hg_core::units::{g, k};
    use hg_props::Species;
    use hg_stream::{Component, Phase, stream_energy, stream_mass};

    fn vent(hg_g: f64, n2_g: f64) -> VaporStream {
        VaporStream::new(
            k(281.0),
            Component::new(Species::Hg, Phase::Gas, g(hg_g), 300_000.0).unwrap(),
            Component::new(Species::N2, Phase::Gas, g(n2_g), -17_800.0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn pure_partition_preserves_everything() {
        let filter = CarbonFilter::new("carbon bed");
        let inlet = vent(0.001, 50.0);
        let out = filter.run(&inlet).unwrap();

        assert_eq!(out.capture.hg, inlet.hg);
        assert_eq!(out.carrier.n2, inlet.n2);
        assert_eq!(out.carrier.temperature, inlet.temperature);

        let m_in = stream_mass(&inlet.stream().unwrap()).value;
        let m_out = stream_mass(&out.carrier.stream().unwrap()).value
            + stream_mass(&out.capture.stream().unwrap()).value;
        assert!((m_in - m_out).abs() < 1e-15);

        let e_in = stream_energy(&inlet.stream().unwrap()).value;
        let e_out = stream_energy(&out.carrier.stream().unwrap()).value
            + stream_energy(&out.capture.stream().unwrap()).value;
        assert!((e_in - e_out).abs() < 1e-12);
    }

    #[test]
    fn zero_mercury_inlet_still_partitions() {
        let filter = CarbonFilter::new("carbon bed");
        let out = filter.run(&vent(0.0, 50.0)).unwrap();
        assert_eq!(out.capture.hg.mass().value, 0.0);
    }
}
