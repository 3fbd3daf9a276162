//! Request correlation middleware.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

/// Propagate or generate `x-request-id` and echo it on the response, so the
/// two signing parties and the relay can correlate log lines end to end.
pub async fn inject_request_id(request: Request, next: Next) -> Response {
    let request_id = match request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
    {
        Some(id) => id.to_string(),
        None => {
            use rand::Rng;
            format!("rel-{:016x}", rand::thread_rng().gen::<u64>())
        }
    };

    let mut response = next.run(request).await;

    if let Ok(val) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", val);
    }

    response
}
