//! hg-solver: local numerical kernels for hgflow.
//!
//! Provides:
//! - composite Simpson quadrature for heat-capacity integrals
//! - a damped scalar Newton root finder for adiabatic mixing temperature
//!
//! Both are synchronous and allocation-free; callers see either a
//! converged result or a hard error, never a partial one.

pub mod error;
pub mod quadrature;
pub mod root;

pub use error::{SolverError, SolverResult};
pub use quadrature::integrate;
pub use root::{ScalarNewtonConfig, ScalarNewtonResult, newton_solve};
