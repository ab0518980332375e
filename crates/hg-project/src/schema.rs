//! Process configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Newest schema version this build understands.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessConfig {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub reference: ReferenceDef,
    pub feed: FeedDef,
    pub carrier: CarrierDef,
    pub furnace: FurnaceDef,
    pub condenser: CondenserDef,
    pub chiller: ChillerDef,
    /// Batch cycle time, used to convert per-cycle duties to power.
    pub cycle_time_s: f64,
}

/// Global enthalpy reference temperature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceDef {
    pub t0_k: f64,
}

impl Default for ReferenceDef {
    fn default() -> Self {
        Self { t0_k: 298.15 }
    }
}

/// Lamp-waste feed per cycle, already separated into fractions.
///
/// Mercury splits between the phosphor-powder retort and the
/// glass/aluminium retort by `hg_to_powder_fraction`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedDef {
    pub inlet_t_k: f64,
    pub hg_kg: f64,
    pub powder_kg: f64,
    pub glass_kg: f64,
    pub al_kg: f64,
    pub hg_to_powder_fraction: f64,
}

/// Nitrogen carrier supply. One logical supply; each furnace draws a
/// copy of this stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarrierDef {
    pub n2_kg: f64,
    pub inlet_t_k: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FurnaceDef {
    pub t_k: f64,
    pub efficiency: f64,
    pub removal_fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CondenserDef {
    pub t_out_k: f64,
    pub efficiency: f64,
    pub pressure_kpa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChillerDef {
    /// Coolant species key; must parse against the handled set.
    pub coolant: String,
    pub t_cold_k: f64,
    pub t_warm_k: f64,
    pub efficiency: f64,
}
