//! API Handlers
use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lori_analysis::{CategoryTaxonomy, SeverityLevel};
use lori_core::{AnalysisReport, ClassifierError, Envelope, LoriError, LORI_VERSION};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

const ENDPOINTS: [&str; 6] = [
    "POST /api/check-hate-speech",
    "GET /api/check-hate-speech",
    "GET /api/health",
    "GET /api/categories",
    "GET /api/labels",
    "GET /metrics",
];

/// Short, non-reversible fingerprint so raw text never reaches the logs
fn text_hash(text: &str) -> String {
    let hash = blake3::hash(text.as_bytes()).to_hex();
    hash.as_str()[..16].to_string()
}

pub async fn check_hate_speech(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<Envelope<AnalysisReport>>, ApiError> {
    match analyze_payload(&state, payload).await {
        Ok(report) => {
            state.metrics.record_analysis(&report);
            Ok(Json(Envelope::success(report)))
        }
        Err(err) => {
            if err.is_client_error() {
                tracing::warn!(error = %err, "rejected request");
            } else {
                tracing::error!(error = %err, "analysis failed");
            }
            let err = ApiError::from(err);
            state.metrics.record_error(err.kind());
            Err(err)
        }
    }
}

async fn analyze_payload(
    state: &AppState,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<AnalysisReport, LoriError> {
    let Json(request) = payload.map_err(|rejection| {
        LoriError::input(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let text = request
        .text
        .ok_or_else(|| LoriError::input("No text provided"))?;
    if text.trim().is_empty() {
        return Err(LoriError::input("Text must not be empty"));
    }

    tracing::debug!(
        text_hash = %text_hash(&text),
        chars = text.chars().count(),
        "analyzing text"
    );

    let classifier = state.classifier.clone();
    let analyzer = state.analyzer.clone();
    let report = tokio::task::spawn_blocking(move || {
        analyzer.classify_and_analyze(&text, classifier.as_ref())
    })
    .await
    .map_err(|e| ClassifierError::Unavailable(e.to_string()))??;

    let level = SeverityLevel::from_score(report.details.severity_score);
    tracing::info!(
        category = %report.category,
        is_hate_speech = report.is_hate_speech,
        confidence = report.confidence,
        severity_score = report.details.severity_score,
        severity = %level,
        requires_review = level.requires_review(),
        "analysis complete"
    );

    Ok(report)
}

/// Liveness check on the analysis route
pub async fn api_status() -> Json<Envelope<()>> {
    Json(Envelope::info("API is running"))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: LORI_VERSION.to_string(),
        timestamp: Utc::now(),
    })
}

pub async fn categories(
    State(state): State<AppState>,
) -> Json<Envelope<&'static CategoryTaxonomy>> {
    Json(Envelope::success(state.analyzer.taxonomy()))
}

pub async fn labels(State(state): State<AppState>) -> Json<Envelope<Vec<String>>> {
    Json(Envelope::success(state.classifier.labels()))
}

pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Lori hate speech analysis API".to_string(),
        version: LORI_VERSION.to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let body = state
        .metrics
        .encode()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    ))
}
