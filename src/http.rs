//! JSON request helpers over goose's request builder.
//!
//! goose's convenience methods cover bare GETs; everything that carries a
//! JSON body or custom headers goes through [`request_json`] /
//! [`request_json_with_headers`], which build a `reqwest` request and hand it
//! back to goose so the framework still records the metrics.
//!
//! [`check`] is the single place where an expected-status comparison happens:
//! on mismatch it downgrades the request to a goose failure (carrying the
//! response body) and returns `None` so chained sequences can decide what to
//! skip.

use goose::goose::GooseResponse;
use goose::prelude::*;
use serde_json::Value;
use tracing::warn;

/// Plain success.
pub const OK: &[u16] = &[200];

/// Success for creates; REST targets answer POST with either.
pub const CREATED: &[u16] = &[200, 201];

/// Issue a bodyless request (DELETE, or GET with a non-default method name).
pub async fn request_empty(
    user: &mut GooseUser,
    method: &GooseMethod,
    path: &str,
) -> Result<GooseResponse, Box<TransactionError>> {
    let request_builder = user.get_request_builder(method, path)?;
    let goose_request = GooseRequest::builder()
        .set_request_builder(request_builder)
        .build();
    user.request(goose_request).await
}

/// Issue a request with a JSON body.
pub async fn request_json(
    user: &mut GooseUser,
    method: &GooseMethod,
    path: &str,
    body: &Value,
) -> Result<GooseResponse, Box<TransactionError>> {
    let request_builder = user
        .get_request_builder(method, path)?
        .header("Content-Type", "application/json")
        .body(body.to_string());
    let goose_request = GooseRequest::builder()
        .set_request_builder(request_builder)
        .build();
    user.request(goose_request).await
}

/// Issue a request with a JSON body and additional headers (the payment
/// endpoints authenticate through headers).
pub async fn request_json_with_headers(
    user: &mut GooseUser,
    method: &GooseMethod,
    path: &str,
    body: &Value,
    headers: &[(&'static str, String)],
) -> Result<GooseResponse, Box<TransactionError>> {
    let mut request_builder = user.get_request_builder(method, path)?.body(body.to_string());
    for (name, value) in headers {
        request_builder = request_builder.header(*name, value.as_str());
    }
    let goose_request = GooseRequest::builder()
        .set_request_builder(request_builder)
        .build();
    user.request(goose_request).await
}

/// Compare the response status against the accepted set.
///
/// Returns the parsed JSON body (`Value::Null` when the body is empty or not
/// JSON) when the status is accepted. Otherwise the request is reported as a
/// goose failure together with the response body, and `None` is returned so
/// the caller can abort the rest of a chained sequence.
pub async fn check(
    user: &mut GooseUser,
    mut goose: GooseResponse,
    tag: &str,
    accepted: &[u16],
) -> Option<Value> {
    match goose.response {
        Ok(response) => {
            let status = response.status().as_u16();
            if accepted.contains(&status) {
                Some(response.json::<Value>().await.unwrap_or(Value::Null))
            } else {
                let body = response.text().await.unwrap_or_default();
                warn!(tag, status, body = body.as_str(), "unexpected status");
                let _ = user.set_failure(tag, &mut goose.request, None, Some(&body));
                None
            }
        }
        Err(error) => {
            warn!(tag, %error, "request failed");
            let detail = error.to_string();
            let _ = user.set_failure(tag, &mut goose.request, None, Some(&detail));
            None
        }
    }
}

/// Pull an id out of a response body, falling back to the id the payload was
/// generated with when the target echoes nothing usable back.
pub fn extract_id(body: &Value, fallback: &str) -> String {
    match body.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => fallback.to_string(),
    }
}
