//! Error types for simulation runs.

use cm_components::ComponentError;
use thiserror::Error;

/// Errors encountered while driving a simulation run.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Component error: {0}")]
    Component(#[from] ComponentError),
}

pub type SimResult<T> = Result<T, SimError>;
