//! CSV rendering of the summary tables.
//!
//! Plain comma-separated text built by hand; none of the fields can
//! contain commas (species keys, phase tags, fixed labels), so no
//! quoting layer is needed.

use crate::types::ReportTables;

fn fmt(v: f64) -> String {
    format!("{v:.6}")
}

pub fn stream_table_csv(tables: &ReportTables) -> String {
    let mut out = String::from("stream,species,phase,mass_kg,t_k,h_j_per_kg,enthalpy_j\n");
    for r in &tables.streams {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            r.stream,
            r.species,
            r.phase,
            fmt(r.mass_kg),
            fmt(r.t_k),
            fmt(r.h_j_per_kg),
            fmt(r.enthalpy_j)
        ));
    }
    out
}

pub fn equipment_table_csv(tables: &ReportTables) -> String {
    let mut out = String::from("equipment,duty_j,power_w\n");
    for r in &tables.equipment {
        out.push_str(&format!(
            "{},{},{}\n",
            r.equipment,
            fmt(r.duty_j),
            fmt(r.power_w)
        ));
    }
    out
}

pub fn parameter_table_csv(tables: &ReportTables) -> String {
    let mut out = String::from("name,value,unit\n");
    for r in &tables.parameters {
        out.push_str(&format!("{},{},{}\n", r.name, fmt(r.value), r.unit));
    }
    out
}

pub fn results_table_csv(tables: &ReportTables) -> String {
    let mut out = String::from("name,value,unit\n");
    for r in &tables.results {
        out.push_str(&format!("{},{},{}\n", r.name, fmt(r.value), r.unit));
    }
    out
}
