//! API errors rendered as the standard error envelope
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use thiserror::Error;

use lori_core::{ClassifierError, Envelope, LoriError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Input(String),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error("Request timed out")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Input(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Classifier(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label for `lori_request_errors_total`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Classifier(_) => "classifier",
            Self::Timeout => "timeout",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<LoriError> for ApiError {
    fn from(err: LoriError) -> Self {
        match err {
            LoriError::Input(message) => Self::Input(message),
            LoriError::Classifier(err) => Self::Classifier(err),
        }
    }
}

/// Errors raised by tower layers (timeout) in front of the handlers
pub async fn handle_layer_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("request timed out");
        ApiError::Timeout
    } else {
        tracing::error!(error = %err, "unhandled layer error");
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope: Envelope<()> = Envelope::error(self.to_string());
        (self.status_code(), Json(envelope)).into_response()
    }
}
