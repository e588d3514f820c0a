//! In-process tests for the HTTP surface
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use lori_analysis::Analyzer;
use lori_api::{create_app, ApiConfig, AppState};
use lori_core::{ClassificationResult, Classifier, ClassifierError};
use lori_lexicon::LexiconClassifier;

/// Returns the same verdict for every text
struct StubClassifier {
    label: &'static str,
    confidence: f64,
}

impl Classifier for StubClassifier {
    fn id(&self) -> &str {
        "stub"
    }

    fn classify(&self, _text: &str) -> Result<ClassificationResult, ClassifierError> {
        Ok(ClassificationResult::new(self.label, self.confidence))
    }

    fn labels(&self) -> Vec<String> {
        vec!["safe".into(), "hate".into(), "violence".into()]
    }
}

struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn id(&self) -> &str {
        "failing"
    }

    fn classify(&self, _text: &str) -> Result<ClassificationResult, ClassifierError> {
        Err(ClassifierError::Inference("model crashed".into()))
    }

    fn labels(&self) -> Vec<String> {
        vec![]
    }
}

fn app_with(classifier: Arc<dyn Classifier>) -> Router {
    let state = AppState::new(classifier, Analyzer::default()).unwrap();
    create_app(state, &ApiConfig::default())
}

fn stub_app(label: &'static str, confidence: f64) -> Router {
    app_with(Arc::new(StubClassifier { label, confidence }))
}

fn lexicon_app() -> Router {
    app_with(Arc::new(LexiconClassifier::builtin().unwrap()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/check-hate-speech")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_check_violence() {
    let (status, body) = send(
        stub_app("violence", 0.92),
        post_json(r#"{"text": "I will beat you up!"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert!(body.get("message").is_none());
    assert!(body["timestamp"].is_string());

    let data = &body["data"];
    assert_eq!(data["is_hate_speech"], false);
    assert_eq!(data["category"], "violence");
    assert_eq!(data["confidence"], 0.92);
    assert_eq!(data["details"]["category_details"].as_array().unwrap().len(), 9);
    assert_eq!(data["details"]["severity_score"], 100);
    assert_eq!(data["details"]["text_length"], 19);
    assert_eq!(data["details"]["metrics"]["word_count"], 5);
    assert_eq!(data["details"]["metrics"]["punctuation_count"], 1);
}

#[tokio::test]
async fn test_check_hate_flag() {
    let (status, body) = send(
        stub_app("hate", 0.7),
        post_json(r#"{"text": "racist and xenophobic remarks"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_hate_speech"], true);
    assert_eq!(
        body["data"]["details"]["found_words"],
        json!(["racist", "xenophobic"])
    );
}

#[tokio::test]
async fn test_check_with_lexicon_classifier() {
    let cases = [
        ("Thank you so much for your help!", "safe"),
        ("I will beat you up!", "violence"),
        ("Send me your nudes", "sexual"),
        ("You are such an idiot", "other"),
    ];

    for (text, expected) in cases {
        let request = post_json(&json!({ "text": text }).to_string());
        let (status, body) = send(lexicon_app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["category"], expected, "text: {}", text);
    }
}

#[tokio::test]
async fn test_missing_text_is_bad_request() {
    let payloads = [
        r#"{}"#,
        r#"{"text": null}"#,
        r#"{"text": "   "}"#,
        r#"{"text": 42}"#,
        "not json",
    ];
    for payload in payloads {
        let (status, body) = send(stub_app("safe", 0.9), post_json(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(body["status"], "error");
        assert!(body["message"].is_string());
        assert!(body.get("data").is_none());
    }
}

#[tokio::test]
async fn test_missing_text_message() {
    let (_, body) = send(stub_app("safe", 0.9), post_json("{}")).await;
    assert_eq!(body["message"], "No text provided");
}

#[tokio::test]
async fn test_classifier_failure_is_server_error() {
    let (status, body) = send(
        app_with(Arc::new(FailingClassifier)),
        post_json(r#"{"text": "anything"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "MODEL/INFERENCE: model crashed");
}

#[tokio::test]
async fn test_get_check_reports_running() {
    let (status, body) = send(stub_app("safe", 0.9), get("/api/check-hate-speech")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "API is running");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(stub_app("safe", 0.9), get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], lori_core::LORI_VERSION);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_categories_keep_taxonomy_order() {
    let response = stub_app("safe", 0.9).oneshot(get("/api/categories")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let raw = String::from_utf8(bytes.to_vec()).unwrap();

    let positions: Vec<usize> = ["\"hate\"", "\"violence\"", "\"sexual\"", "\"other\""]
        .iter()
        .map(|key| raw.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let body: Value = serde_json::from_str(&raw).unwrap();
    let data = body["data"].as_object().unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data["other"][0], "profanity");
    assert_eq!(data["hate"].as_array().unwrap().len(), 11);
    assert_eq!(data["violence"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_labels() {
    let (status, body) = send(lexicon_app(), get("/api/labels")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!(["safe", "hate", "violence", "sexual", "other"]));
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let (status, body) = send(stub_app("safe", 0.9), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["endpoints"]
        .as_array()
        .unwrap()
        .contains(&json!("POST /api/check-hate-speech")));
}

#[tokio::test]
async fn test_metrics_count_analyses_and_errors() {
    let app = stub_app("hate", 0.8);

    let _ = send(app.clone(), post_json(r#"{"text": "hello"}"#)).await;
    let _ = send(app.clone(), post_json("{}")).await;

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(text.contains("lori_analyses_total{category=\"hate\"} 1"));
    assert!(text.contains("lori_hate_speech_total 1"));
    assert!(text.contains("lori_request_errors_total{kind=\"input\"} 1"));
}

#[tokio::test]
async fn test_responses_carry_request_id_and_cors() {
    let request = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();

    let response = stub_app("safe", 0.9).oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let config = ApiConfig {
        max_body_bytes: 32,
        ..ApiConfig::default()
    };
    let state = AppState::new(
        Arc::new(StubClassifier { label: "safe", confidence: 0.9 }),
        Analyzer::default(),
    )
    .unwrap();
    let app = create_app(state, &config);

    let payload = json!({ "text": "a".repeat(256) }).to_string();
    let (status, body) = send(app, post_json(&payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_from_config_with_lexicon_file() {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../testing/fixtures/lexicons/minimal.yaml");
    let config = ApiConfig {
        lexicon_path: Some(path),
        ..ApiConfig::default()
    };

    let state = AppState::from_config(&config).unwrap();
    assert_eq!(state.classifier.labels(), vec!["safe", "hate", "violence"]);

    let bad = ApiConfig {
        lexicon_path: Some("/nonexistent/lexicon.yaml".into()),
        ..ApiConfig::default()
    };
    assert!(AppState::from_config(&bad).is_err());
}

/// Takes longer than the configured request timeout
struct SlowClassifier;

impl Classifier for SlowClassifier {
    fn id(&self) -> &str {
        "slow"
    }

    fn classify(&self, _text: &str) -> Result<ClassificationResult, ClassifierError> {
        std::thread::sleep(std::time::Duration::from_millis(1500));
        Ok(ClassificationResult::new("safe", 0.9))
    }

    fn labels(&self) -> Vec<String> {
        vec!["safe".into()]
    }
}

#[tokio::test]
async fn test_timeout_renders_error_envelope() {
    let config = ApiConfig {
        request_timeout_secs: 1,
        ..ApiConfig::default()
    };
    let state = AppState::new(Arc::new(SlowClassifier), Analyzer::new("safe")).unwrap();
    let app = create_app(state, &config);

    let (status, body) = send(app, post_json(r#"{"text": "hello"}"#)).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Request timed out");
    assert!(body["timestamp"].is_string());
    assert!(body.get("data").is_none());
}
