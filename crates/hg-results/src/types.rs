//! Report table data types.

use hg_flowsheet::PlantReport;
use hg_project::ProcessConfig;
use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub config_name: String,
    pub timestamp: String,
    pub solver_version: String,
}

/// One component's row in the stream table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamRow {
    pub stream: String,
    pub species: String,
    pub phase: String,
    pub mass_kg: f64,
    pub t_k: f64,
    pub h_j_per_kg: f64,
    pub enthalpy_j: f64,
}

/// One equipment item's row in the duty table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentRow {
    pub equipment: String,
    pub duty_j: f64,
    pub power_w: f64,
}

/// Named system parameter with its unit.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterRow {
    pub name: String,
    pub value: f64,
    pub unit: &'static str,
}

/// Headline result with its unit.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub name: String,
    pub value: f64,
    pub unit: &'static str,
}

/// The four summary tables of a run.
#[derive(Debug, Clone, Serialize)]
pub struct ReportTables {
    pub streams: Vec<StreamRow>,
    pub equipment: Vec<EquipmentRow>,
    pub parameters: Vec<ParameterRow>,
    pub results: Vec<ResultRow>,
}

/// Flatten a plant report (plus its config) into the summary tables.
pub fn build_tables(config: &ProcessConfig, report: &PlantReport) -> ReportTables {
    let streams = report
        .streams
        .iter()
        .flat_map(|s| {
            s.components().iter().map(move |c| StreamRow {
                stream: s.label().to_string(),
                species: c.species().key().to_string(),
                phase: c.phase().key().to_string(),
                mass_kg: c.mass().value,
                t_k: s.temperature().value,
                h_j_per_kg: c.specific_enthalpy(),
                enthalpy_j: c.total_enthalpy().value,
            })
        })
        .collect();

    let equipment = report
        .equipment
        .iter()
        .map(|e| EquipmentRow {
            equipment: e.name.clone(),
            duty_j: e.duty.value,
            power_w: e.power.value,
        })
        .collect();

    let param = |name: &str, value: f64, unit: &'static str| ParameterRow {
        name: name.to_string(),
        value,
        unit,
    };
    let parameters = vec![
        param("reference temperature", config.reference.t0_k, "K"),
        param("feed mercury", config.feed.hg_kg, "kg"),
        param("feed powder", config.feed.powder_kg, "kg"),
        param("feed glass", config.feed.glass_kg, "kg"),
        param("feed aluminium", config.feed.al_kg, "kg"),
        param(
            "mercury to powder retort",
            config.feed.hg_to_powder_fraction,
            "-",
        ),
        param("carrier nitrogen", config.carrier.n2_kg, "kg"),
        param("carrier inlet temperature", config.carrier.inlet_t_k, "K"),
        param("furnace temperature", config.furnace.t_k, "K"),
        param("furnace efficiency", config.furnace.efficiency, "-"),
        param("mercury removal fraction", config.furnace.removal_fraction, "-"),
        param("condenser outlet temperature", config.condenser.t_out_k, "K"),
        param("condenser efficiency", config.condenser.efficiency, "-"),
        param("condenser pressure", config.condenser.pressure_kpa, "kPa"),
        param("chiller cold supply", config.chiller.t_cold_k, "K"),
        param("chiller warm return", config.chiller.t_warm_k, "K"),
        param("chiller efficiency", config.chiller.efficiency, "-"),
        param("cycle time", config.cycle_time_s, "s"),
    ];

    let result = |name: &str, value: f64, unit: &'static str| ResultRow {
        name: name.to_string(),
        value,
        unit,
    };
    let results = vec![
        result("mercury in feed", report.hg_feed.value, "kg"),
        result("mercury condensed", report.hg_condensed.value, "kg"),
        result("mercury captured on carbon", report.hg_captured.value, "kg"),
        result("mercury in residue", report.hg_in_residue.value, "kg"),
        result("overall recovery", report.recovery_fraction, "-"),
        result("heat input per cycle", report.heat_input.value, "J"),
        result("coolant circulated", report.coolant_mass.value, "kg"),
    ];

    ReportTables {
        streams,
        equipment,
        parameters,
        results,
    }
}
