//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoriError {
    /// Rejected at the boundary: missing, malformed or empty text
    #[error("INPUT/{0}")]
    Input(String),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Failures of the external classifier. The only errors the pipeline can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("MODEL/LOAD: {0}")]
    ModelLoad(String),

    #[error("MODEL/INFERENCE: {0}")]
    Inference(String),

    #[error("MODEL/UNAVAILABLE: {0}")]
    Unavailable(String),
}

impl LoriError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    /// True for errors the caller caused
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}
