//! Request middleware: CORS and per-request logging span
use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tower_http::cors::CorsLayer;
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Id assigned to every request, available as an extension
#[derive(Debug, Clone, Copy)]
pub struct RequestId(pub Uuid);

/// Any origin, any method, any header
pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}

/// Wraps the request in a span carrying a fresh `request_id`
pub async fn request_logging(mut req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    req.extensions_mut().insert(RequestId(request_id));

    let span = tracing::info_span!(
        "request",
        %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );
    let started = Instant::now();

    let mut response = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            elapsed_ms = (started.elapsed().as_millis() as u64),
            "request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
