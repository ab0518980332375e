//! Error types for the stream data model.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Empty stream: a stream must carry at least one component")]
    EmptyStream,

    #[error(
        "Mass balance not closed: delta = {delta_kg:.6e} kg ({rel_pct:.4}% of throughput, \
         tolerance 1%)"
    )]
    MassImbalance { delta_kg: f64, rel_pct: f64 },

    #[error("Energy balance not closed: delta = {delta_j:.6e} J (tolerance {tol_j} J)")]
    EnergyImbalance { delta_j: f64, tol_j: f64 },

    #[error("Energy balance not closed: delta = {delta_j:.6e} J ({rel_pct:.4}% of throughput)")]
    EnergyImbalanceRel { delta_j: f64, rel_pct: f64 },
}

pub type StreamResult<T> = Result<T, StreamError>;
