//! Error types for solver operations.

use thiserror::Error;

/// Errors encountered during quadrature or root finding.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Numeric failure: {what}")]
    Numeric { what: String },

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;
