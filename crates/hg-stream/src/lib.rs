//! hg-stream: stream/component data model and balance checks.
//!
//! A `Component` is one species' mass and specific enthalpy; a
//! `Stream` is an ordered set of components at one well-mixed
//! temperature. `balance` holds the mass/energy aggregation and the
//! closure checks every unit operation runs on itself.

pub mod balance;
pub mod component;
pub mod error;
pub mod stream;

pub use balance::{energy_check, energy_check_rel, mass_check, stream_energy, stream_mass};
pub use component::{Component, Phase};
pub use error::{StreamError, StreamResult};
pub use stream::Stream;
