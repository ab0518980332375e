//! hg-project: process configuration for hgflow.
//!
//! A flat set of named physical constants and plant parameters,
//! loaded from YAML and validated before anything is simulated.
//! Every quantity field carries its unit in the field name.

pub mod error;
pub mod schema;
pub mod validate;

pub use error::{ProjectError, ProjectResult};
pub use schema::ProcessConfig;
pub use validate::{ValidationError, validate_config};

use std::path::Path;

/// Load and validate a process configuration file.
pub fn load_config(path: &Path) -> ProjectResult<ProcessConfig> {
    let text = std::fs::read_to_string(path)?;
    let config: ProcessConfig = serde_yaml::from_str(&text)?;
    validate_config(&config)?;
    Ok(config)
}
