//! hg-props: species and physical-property correlations for hgflow.
//!
//! Provides:
//! - the closed species set handled by the process
//! - temperature-dependent heat capacities (piecewise mercury,
//!   tabulated powder/water, polynomial aluminium/glass)
//! - reference-state enthalpy integration
//! - the mercury vapor-pressure correlation used by the condenser

pub mod enthalpy;
pub mod error;
pub mod heat_capacity;
pub mod species;
pub mod table;
pub mod vapor_pressure;

pub use enthalpy::{ReferenceState, absolute_h};
pub use error::{PropsError, PropsResult};
pub use species::Species;
pub use vapor_pressure::mercury_vapor_pressure;
