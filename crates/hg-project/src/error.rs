//! Error types for configuration loading.

use crate::validate::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type ProjectResult<T> = Result<T, ProjectError>;
