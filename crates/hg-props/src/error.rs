//! Error types for property evaluation.

use hg_solver::SolverError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropsError {
    #[error("Unknown species: {key:?} is not in the handled set")]
    UnknownSpecies { key: String },

    #[error("Correlation out of range: {what} at T = {t_k} K")]
    OutOfCorrelationRange { what: &'static str, t_k: f64 },

    #[error(transparent)]
    Solver(#[from] SolverError),
}

pub type PropsResult<T> = Result<T, PropsError>;
