//! Error types for unit operations.

use hg_props::PropsError;
use hg_solver::SolverError;
use hg_stream::StreamError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpError {
    #[error("Stream shape mismatch: {what}")]
    Shape { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: String },

    #[error(transparent)]
    Balance(#[from] StreamError),

    #[error(transparent)]
    Props(#[from] PropsError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

pub type OpResult<T> = Result<T, OpError>;
