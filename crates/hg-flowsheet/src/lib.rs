//! hg-flowsheet: fixed-topology driver for the recovery plant.
//!
//! One synchronous pass over the hand-wired topology:
//!
//! ```text
//! powder feed ─┐                  ┌─ residue A
//!              ├─ furnace A ─ vapor A ─┐
//! carrier ─────┘                       ├─ merge ─ condenser ─┬─ liquid Hg
//! carrier ─────┐                       │                     └─ vent ─ filter ─┬─ clean N2
//!              ├─ furnace B ─ vapor B ─┘                                       └─ captured Hg
//! glass/Al feed┘                  └─ residue B
//! ```
//!
//! The chiller loop is sized from the condenser duty. The driver also
//! verifies plant-wide mass/energy closure on top of each unit
//! operation's own checks.

pub mod error;
pub mod plant;

pub use error::{FlowsheetError, FlowsheetResult};
pub use plant::{EquipmentDuty, Flowsheet, PlantReport};
