//! Stream: components at a common temperature.

use crate::component::Component;
use crate::error::{StreamError, StreamResult};
use hg_core::units::Temperature;

/// Label used until a stream is named for reporting.
pub const UNNAMED: &str = "unnamed";

/// An ordered collection of components at one well-mixed temperature.
///
/// Ordering follows the plant convention (mercury first, carrier
/// second, solids after); the unit operations never index into it
/// blindly (they build and consume named-field shapes), but reports
/// preserve it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    label: String,
    temperature: Temperature,
    components: Vec<Component>,
}

impl Stream {
    pub fn new(temperature: Temperature, components: Vec<Component>) -> StreamResult<Self> {
        if components.is_empty() {
            return Err(StreamError::EmptyStream);
        }
        if !temperature.value.is_finite() || temperature.value <= 0.0 {
            return Err(StreamError::NonPhysical {
                what: "stream temperature must be positive and finite",
            });
        }
        Ok(Self {
            label: UNNAMED.to_string(),
            temperature,
            components,
        })
    }

    /// Assign the reporting label, consuming self (streams are values).
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Phase;
    use hg_core::units::{g, k};
    use hg_props::Species;

    fn n2(mass_g: f64) -> Component {
        Component::new(Species::N2, Phase::Gas, g(mass_g), 0.0).unwrap()
    }

    #[test]
    fn label_defaults_to_sentinel() {
        let s = Stream::new(k(300.0), vec![n2(50.0)]).unwrap();
        assert_eq!(s.label(), UNNAMED);
        let s = s.labeled("flue gas");
        assert_eq!(s.label(), "flue gas");
    }

    #[test]
    fn empty_stream_rejected() {
        assert!(matches!(
            Stream::new(k(300.0), vec![]),
            Err(StreamError::EmptyStream)
        ));
    }

    #[test]
    fn non_physical_temperature_rejected() {
        assert!(Stream::new(k(0.0), vec![n2(1.0)]).is_err());
        assert!(Stream::new(k(f64::NAN), vec![n2(1.0)]).is_err());
    }
}
