//! One-pass smoke sweep of the API surface.
//!
//! Every endpoint gets exactly one request: build a payload, send it, compare
//! the status code, record the result. The chained portion follows the same
//! rules as the load scenarios: a failed step skips the rest of its sequence,
//! cleanup deletes still run for anything that was created. The sweep never
//! aborts early; the report carries one entry per step.
//!
//! Fixed-id DELETE probes are deliberately absent here: the sweep may run
//! against a shared environment, so it only deletes resources it created
//! itself.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::config::{PaymentConfig, ProbeConfig};
use crate::http::{extract_id, CREATED, OK};
use crate::payload;

/// How a single step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

/// One endpoint probe within the sweep.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub name: String,
    /// HTTP status, when a response came back at all.
    pub status: Option<u16>,
    pub outcome: Outcome,
    /// Response body or transport error for failed steps.
    pub detail: Option<String>,
}

/// Ordered results of a full sweep.
#[derive(Debug, Default, Serialize)]
pub struct SmokeReport {
    pub steps: Vec<Step>,
}

impl SmokeReport {
    fn pass(&mut self, name: &str, status: u16) {
        info!(name, status, "ok");
        self.steps.push(Step {
            name: name.to_string(),
            status: Some(status),
            outcome: Outcome::Passed,
            detail: None,
        });
    }

    fn fail(&mut self, name: &str, status: Option<u16>, detail: String) {
        warn!(name, ?status, detail = detail.as_str(), "failed");
        self.steps.push(Step {
            name: name.to_string(),
            status,
            outcome: Outcome::Failed,
            detail: Some(detail),
        });
    }

    fn skip(&mut self, name: &str) {
        info!(name, "skipped");
        self.steps.push(Step {
            name: name.to_string(),
            status: None,
            outcome: Outcome::Skipped,
            detail: None,
        });
    }

    pub fn passed(&self) -> usize {
        self.count(Outcome::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(Outcome::Failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(Outcome::Skipped)
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.steps.iter().filter(|s| s.outcome == outcome).count()
    }

    /// True when nothing failed (skipped steps are not failures).
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Find a step by name.
    pub fn step(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.name == name)
    }
}

struct Sweep<'a> {
    client: &'a ApiClient,
    report: SmokeReport,
}

impl Sweep<'_> {
    /// Send one request and record the outcome. Returns the parsed body when
    /// the status was accepted, `None` otherwise.
    async fn execute(
        &mut self,
        name: &str,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: &[(&'static str, String)],
        accepted: &[u16],
    ) -> Option<Value> {
        match self.client.send(method, path, body, headers).await {
            Ok(response) => {
                if accepted.contains(&response.status) {
                    self.report.pass(name, response.status);
                    Some(response.json().unwrap_or(Value::Null))
                } else {
                    let detail = response.body.clone();
                    self.report.fail(name, Some(response.status), detail);
                    None
                }
            }
            Err(error) => {
                self.report.fail(name, None, error.to_string());
                None
            }
        }
    }

    /// Independent fixed-id probes over the whole surface.
    async fn probes(&mut self, config: &ProbeConfig) {
        let event_id = config.event_id;
        let ticket_id = config.ticket_id;
        let category_id = config.category_id;

        let steps: Vec<(&str, Method, String, Option<Value>, &[u16])> = vec![
            ("GET /api/events", Method::GET, "/api/events".into(), None, OK),
            (
                "GET /api/events/{id}",
                Method::GET,
                format!("/api/events/{event_id}"),
                None,
                OK,
            ),
            (
                "PUT /api/events/{id}",
                Method::PUT,
                format!("/api/events/{event_id}"),
                Some(payload::event()),
                OK,
            ),
            (
                "PATCH /api/events/{id}",
                Method::PATCH,
                format!("/api/events/{event_id}"),
                Some(payload::event_patch()),
                OK,
            ),
            (
                "GET /api/events/{id}/eventRegistrations",
                Method::GET,
                format!("/api/events/{event_id}/eventRegistrations"),
                None,
                OK,
            ),
            (
                "GET /api/events/{id}/attendees",
                Method::GET,
                format!("/api/events/{event_id}/attendees"),
                None,
                OK,
            ),
            (
                "GET /api/events/{id}/tickets",
                Method::GET,
                format!("/api/events/{event_id}/tickets"),
                None,
                OK,
            ),
            (
                "GET /api/events/{id}/tickets/{ticketId}",
                Method::GET,
                format!("/api/events/{event_id}/tickets/{ticket_id}"),
                None,
                OK,
            ),
            (
                "PUT /api/events/{id}/tickets/{ticketId}",
                Method::PUT,
                format!("/api/events/{event_id}/tickets/{ticket_id}"),
                Some(payload::ticket_update()),
                OK,
            ),
            (
                "PATCH /api/events/{id}/tickets/{ticketId}",
                Method::PATCH,
                format!("/api/events/{event_id}/tickets/{ticket_id}"),
                Some(payload::ticket_patch()),
                OK,
            ),
            (
                "GET /api/events/categories",
                Method::GET,
                "/api/events/categories".into(),
                None,
                OK,
            ),
            (
                "POST /api/events/categories",
                Method::POST,
                "/api/events/categories".into(),
                Some(payload::category()),
                CREATED,
            ),
            (
                "GET /api/events/categories/{id}",
                Method::GET,
                format!("/api/events/categories/{category_id}"),
                None,
                OK,
            ),
            (
                "PUT /api/events/categories/{id}",
                Method::PUT,
                format!("/api/events/categories/{category_id}"),
                Some(payload::category()),
                OK,
            ),
            (
                "PATCH /api/events/categories/{id}",
                Method::PATCH,
                format!("/api/events/categories/{category_id}"),
                Some(payload::category_patch()),
                OK,
            ),
            (
                "POST /api/events/search",
                Method::POST,
                "/api/events/search".into(),
                Some(payload::search_request()),
                OK,
            ),
            (
                "GET /api/events/search/searchFields",
                Method::GET,
                "/api/events/search/searchFields".into(),
                None,
                OK,
            ),
            (
                "GET /api/events/search/outputFields",
                Method::GET,
                "/api/events/search/outputFields".into(),
                None,
                OK,
            ),
        ];

        for (name, method, path, body, accepted) in steps {
            let _ = self
                .execute(name, method, &path, body.as_ref(), &[], accepted)
                .await;
        }
    }

    /// The chained create → read → update → delete sequence, with cleanup.
    async fn lifecycle(&mut self) {
        const CHAIN: &[&str] = &[
            "lifecycle: get event",
            "lifecycle: update event",
            "lifecycle: patch event",
            "lifecycle: create ticket",
            "lifecycle: delete ticket",
            "lifecycle: delete event",
        ];

        let event = payload::event();
        let generated_id = event["id"].as_str().unwrap_or_default().to_string();
        let Some(body) = self
            .execute(
                "lifecycle: create event",
                Method::POST,
                "/api/events",
                Some(&event),
                &[],
                CREATED,
            )
            .await
        else {
            // Nothing was created, so there is nothing to read or clean up.
            for name in CHAIN {
                self.report.skip(name);
            }
            return;
        };

        let event_id = extract_id(&body, &generated_id);
        let event_path = format!("/api/events/{event_id}");
        let mut aborted = false;

        if self
            .execute("lifecycle: get event", Method::GET, &event_path, None, &[], OK)
            .await
            .is_none()
        {
            aborted = true;
        }

        if aborted {
            self.report.skip("lifecycle: update event");
        } else if self
            .execute(
                "lifecycle: update event",
                Method::PUT,
                &event_path,
                Some(&payload::event()),
                &[],
                OK,
            )
            .await
            .is_none()
        {
            aborted = true;
        }

        if aborted {
            self.report.skip("lifecycle: patch event");
        } else if self
            .execute(
                "lifecycle: patch event",
                Method::PATCH,
                &event_path,
                Some(&payload::event_patch()),
                &[],
                OK,
            )
            .await
            .is_none()
        {
            aborted = true;
        }

        if aborted {
            self.report.skip("lifecycle: create ticket");
            self.report.skip("lifecycle: delete ticket");
        } else {
            let ticket = payload::ticket();
            let generated_ticket_id = ticket["id"].as_str().unwrap_or_default().to_string();
            let tickets_path = format!("{event_path}/tickets");
            match self
                .execute(
                    "lifecycle: create ticket",
                    Method::POST,
                    &tickets_path,
                    Some(&ticket),
                    &[],
                    CREATED,
                )
                .await
            {
                Some(ticket_body) => {
                    let ticket_id = extract_id(&ticket_body, &generated_ticket_id);
                    let _ = self
                        .execute(
                            "lifecycle: delete ticket",
                            Method::DELETE,
                            &format!("{tickets_path}/{ticket_id}"),
                            None,
                            &[],
                            OK,
                        )
                        .await;
                }
                None => self.report.skip("lifecycle: delete ticket"),
            }
        }

        // Cleanup runs no matter how far the chain got.
        let _ = self
            .execute(
                "lifecycle: delete event",
                Method::DELETE,
                &event_path,
                None,
                &[],
                OK,
            )
            .await;
    }

    /// Tokenize, then charge. A failed tokenize skips the charge.
    async fn charge_flow(&mut self, config: &PaymentConfig) {
        let headers = config.headers();
        let Some(body) = self
            .execute(
                "POST /api/tokenize",
                Method::POST,
                "/api/tokenize",
                Some(&payload::tokenize(config)),
                &headers,
                OK,
            )
            .await
        else {
            self.report.skip("POST /api/charges");
            return;
        };

        match body.get("token").and_then(Value::as_str) {
            Some(token) => {
                let _ = self
                    .execute(
                        "POST /api/charges",
                        Method::POST,
                        "/api/charges",
                        Some(&payload::charge(config, token)),
                        &headers,
                        OK,
                    )
                    .await;
            }
            None => {
                self.report.fail(
                    "POST /api/charges",
                    None,
                    "tokenize response carried no token".to_string(),
                );
            }
        }
    }
}

/// Run the full sweep. Payment endpoints are only touched when a
/// [`PaymentConfig`] is supplied.
pub async fn run(
    client: &ApiClient,
    probes: &ProbeConfig,
    payments: Option<&PaymentConfig>,
) -> SmokeReport {
    let mut sweep = Sweep {
        client,
        report: SmokeReport::default(),
    };

    sweep.probes(probes).await;
    sweep.lifecycle().await;
    if let Some(config) = payments {
        sweep.charge_flow(config).await;
    }

    sweep.report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = SmokeReport::default();
        report.pass("a", 200);
        report.fail("b", Some(500), "boom".to_string());
        report.skip("c");
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 1);
        assert!(!report.is_success());
        assert_eq!(report.step("b").unwrap().status, Some(500));
    }
}
