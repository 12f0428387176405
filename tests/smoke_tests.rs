//! End-to-end tests for the smoke sweep against a mock API server.

use std::net::SocketAddr;
use std::thread;

use serde_json::json;
use stampede::client::ApiClient;
use stampede::config::{PaymentConfig, ProbeConfig};
use stampede::smoke::{self, Outcome};
use tiny_http::{Header, Method, Request, Response, Server};

/// Spin up a mock API on an ephemeral port. The handler maps each request to
/// a status code and JSON body.
fn start_mock<F>(handler: F) -> SocketAddr
where
    F: Fn(&Request) -> (u16, String) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    thread::spawn(move || {
        for request in server.incoming_requests() {
            let (status, body) = handler(&request);
            let content_type =
                Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header(content_type);
            let _ = request.respond(response);
        }
    });
    addr
}

fn entity_body() -> String {
    json!({"id": "srv-1", "token": "tok_live_123"}).to_string()
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::new(&format!("http://{addr}")).unwrap()
}

#[tokio::test]
async fn test_all_green_sweep() {
    let addr = start_mock(|_| (200, entity_body()));
    let client = client_for(addr);

    let report = smoke::run(&client, &ProbeConfig::default(), None).await;

    assert!(report.is_success());
    assert_eq!(report.failed(), 0);
    assert_eq!(report.skipped(), 0);
    // 18 independent probes + 7 lifecycle steps.
    assert_eq!(report.steps.len(), 25);
}

#[tokio::test]
async fn test_failed_create_skips_chain_entirely() {
    let addr = start_mock(|request| {
        if *request.method() == Method::Post && request.url() == "/api/events" {
            (500, json!({"error": "boom"}).to_string())
        } else {
            (200, entity_body())
        }
    });
    let client = client_for(addr);

    let report = smoke::run(&client, &ProbeConfig::default(), None).await;

    let create = report.step("lifecycle: create event").unwrap();
    assert_eq!(create.outcome, Outcome::Failed);
    assert_eq!(create.status, Some(500));
    assert!(create.detail.as_deref().unwrap().contains("boom"));

    // Nothing was created, so even the cleanup delete is skipped.
    for name in [
        "lifecycle: get event",
        "lifecycle: update event",
        "lifecycle: patch event",
        "lifecycle: create ticket",
        "lifecycle: delete ticket",
        "lifecycle: delete event",
    ] {
        assert_eq!(report.step(name).unwrap().outcome, Outcome::Skipped, "{name}");
    }
    assert_eq!(report.failed(), 1);
}

#[tokio::test]
async fn test_mid_chain_failure_still_cleans_up() {
    // The mock create echoes id "srv-1"; fail the chained update only.
    let addr = start_mock(|request| {
        if *request.method() == Method::Put && request.url() == "/api/events/srv-1" {
            (500, json!({"error": "update rejected"}).to_string())
        } else {
            (200, entity_body())
        }
    });
    let client = client_for(addr);

    let report = smoke::run(&client, &ProbeConfig::default(), None).await;

    assert_eq!(
        report.step("lifecycle: get event").unwrap().outcome,
        Outcome::Passed
    );
    assert_eq!(
        report.step("lifecycle: update event").unwrap().outcome,
        Outcome::Failed
    );
    assert_eq!(
        report.step("lifecycle: patch event").unwrap().outcome,
        Outcome::Skipped
    );
    assert_eq!(
        report.step("lifecycle: create ticket").unwrap().outcome,
        Outcome::Skipped
    );
    assert_eq!(
        report.step("lifecycle: delete ticket").unwrap().outcome,
        Outcome::Skipped
    );
    // Cleanup still runs for the event that was created.
    assert_eq!(
        report.step("lifecycle: delete event").unwrap().outcome,
        Outcome::Passed
    );
}

#[tokio::test]
async fn test_payment_flow_requires_credential_headers() {
    let addr = start_mock(|request| {
        let has_key = request
            .headers()
            .iter()
            .any(|h| h.field.equiv("X-Api-Key") && !h.value.as_str().is_empty());
        let has_merchant = request
            .headers()
            .iter()
            .any(|h| h.field.equiv("X-Merchant-Id"));
        if request.url().starts_with("/api/tokenize") || request.url().starts_with("/api/charges") {
            if has_key && has_merchant {
                (200, entity_body())
            } else {
                (401, json!({"error": "missing credentials"}).to_string())
            }
        } else {
            (200, entity_body())
        }
    });
    let client = client_for(addr);

    let report = smoke::run(
        &client,
        &ProbeConfig::default(),
        Some(&PaymentConfig::default()),
    )
    .await;

    assert_eq!(
        report.step("POST /api/tokenize").unwrap().outcome,
        Outcome::Passed
    );
    assert_eq!(
        report.step("POST /api/charges").unwrap().outcome,
        Outcome::Passed
    );
}

#[tokio::test]
async fn test_failed_tokenize_skips_charge() {
    let addr = start_mock(|request| {
        if request.url() == "/api/tokenize" {
            (500, json!({"error": "gateway down"}).to_string())
        } else {
            (200, entity_body())
        }
    });
    let client = client_for(addr);

    let report = smoke::run(
        &client,
        &ProbeConfig::default(),
        Some(&PaymentConfig::default()),
    )
    .await;

    assert_eq!(
        report.step("POST /api/tokenize").unwrap().outcome,
        Outcome::Failed
    );
    assert_eq!(
        report.step("POST /api/charges").unwrap().outcome,
        Outcome::Skipped
    );
}

#[tokio::test]
async fn test_tokenize_without_token_fails_charge() {
    let addr = start_mock(|request| {
        if request.url() == "/api/tokenize" {
            (200, json!({"id": "srv-1"}).to_string())
        } else {
            (200, entity_body())
        }
    });
    let client = client_for(addr);

    let report = smoke::run(
        &client,
        &ProbeConfig::default(),
        Some(&PaymentConfig::default()),
    )
    .await;

    let charge = report.step("POST /api/charges").unwrap();
    assert_eq!(charge.outcome, Outcome::Failed);
    assert_eq!(charge.status, None);
    assert!(charge.detail.as_deref().unwrap().contains("no token"));
}
