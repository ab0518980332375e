//! Error types for the flowsheet driver.

use hg_ops::OpError;
use hg_props::PropsError;
use hg_stream::StreamError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowsheetError {
    #[error(transparent)]
    Op(#[from] OpError),

    #[error(transparent)]
    Balance(#[from] StreamError),

    #[error(transparent)]
    Props(#[from] PropsError),
}

pub type FlowsheetResult<T> = Result<T, FlowsheetError>;
