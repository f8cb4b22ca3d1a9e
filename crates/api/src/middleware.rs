//! Request correlation middleware
//!
//! Every request runs inside a tracing span carrying a request id, taken from
//! the caller's `x-request-id` header or generated fresh. The id is echoed
//! back on the response so clients and logs can be matched up.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Header used for request correlation
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps a request in a correlation span and logs its outcome.
pub async fn request_context(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path
    );

    async move {
        let start = Instant::now();
        let mut response = next.run(request).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        info!(
            status = response.status().as_u16(),
            elapsed_ms, "Request completed"
        );

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
    .instrument(span)
    .await
}
