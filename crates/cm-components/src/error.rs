//! Error types for device model operations.

use cm_core::error::CmError;
use thiserror::Error;

/// Errors that can occur while constructing or driving device models.
#[derive(Error, Debug, Clone)]
pub enum ComponentError {
    #[error("Invalid geometry: {what} = {value}")]
    InvalidGeometry { what: &'static str, value: f64 },

    #[error("Invalid stimulus: {what} = {value}")]
    InvalidStimulus { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<ComponentError> for CmError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::InvalidGeometry { what, .. } => CmError::InvalidArg { what },
            ComponentError::InvalidStimulus { what, value } => {
                CmError::NonFinite { what, value }
            }
            ComponentError::InvalidArg { what } => CmError::InvalidArg { what },
        }
    }
}
