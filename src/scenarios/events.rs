//! Event transactions: fixed-id probes plus the full create → read → update
//! → delete lifecycle chain.

use std::sync::LazyLock;

use goose::prelude::*;

use crate::config::ProbeConfig;
use crate::http::{self, CREATED, OK};
use crate::payload;

static PROBES: LazyLock<ProbeConfig> = LazyLock::new(ProbeConfig::from_env);

async fn list_events(user: &mut GooseUser) -> TransactionResult {
    let response = user.get("/api/events").await?;
    let _ = http::check(user, response, "GET /api/events", OK).await;
    Ok(())
}

async fn create_event_stub(user: &mut GooseUser) -> TransactionResult {
    let response =
        http::request_json(user, &GooseMethod::Post, "/api/events", &payload::event_stub()).await?;
    let _ = http::check(user, response, "POST /api/events", CREATED).await;
    Ok(())
}

async fn get_event(user: &mut GooseUser) -> TransactionResult {
    let path = format!("/api/events/{}", PROBES.event_id);
    let response = user.get(&path).await?;
    let _ = http::check(user, response, "GET /api/events/{id}", OK).await;
    Ok(())
}

async fn put_event(user: &mut GooseUser) -> TransactionResult {
    let path = format!("/api/events/{}", PROBES.event_id);
    let response = http::request_json(user, &GooseMethod::Put, &path, &payload::event()).await?;
    let _ = http::check(user, response, "PUT /api/events/{id}", OK).await;
    Ok(())
}

async fn patch_event(user: &mut GooseUser) -> TransactionResult {
    let path = format!("/api/events/{}", PROBES.event_id);
    let response =
        http::request_json(user, &GooseMethod::Patch, &path, &payload::event_patch()).await?;
    let _ = http::check(user, response, "PATCH /api/events/{id}", OK).await;
    Ok(())
}

async fn delete_event(user: &mut GooseUser) -> TransactionResult {
    let path = format!("/api/events/{}", PROBES.event_id);
    let response = http::request_empty(user, &GooseMethod::Delete, &path).await?;
    let _ = http::check(user, response, "DELETE /api/events/{id}", OK).await;
    Ok(())
}

async fn event_registrations(user: &mut GooseUser) -> TransactionResult {
    let path = format!("/api/events/{}/eventRegistrations", PROBES.event_id);
    let response = user.get(&path).await?;
    let _ = http::check(user, response, "GET /api/events/{id}/eventRegistrations", OK).await;
    Ok(())
}

async fn event_attendees(user: &mut GooseUser) -> TransactionResult {
    let path = format!("/api/events/{}/attendees", PROBES.event_id);
    let response = user.get(&path).await?;
    let _ = http::check(user, response, "GET /api/events/{id}/attendees", OK).await;
    Ok(())
}

/// Create a full randomized event, then read, update, patch, attach a ticket
/// and tear everything down again.
///
/// A failed step skips the rest of the sequence, but anything already created
/// still gets its cleanup DELETE. A failed create skips the whole chain since
/// there is nothing to clean up.
async fn event_lifecycle(user: &mut GooseUser) -> TransactionResult {
    let event = payload::event();
    let generated_id = event["id"].as_str().unwrap_or_default().to_string();

    let created =
        http::request_json(user, &GooseMethod::Post, "/api/events", &event).await?;
    let Some(body) = http::check(user, created, "lifecycle: create event", CREATED).await else {
        return Ok(());
    };
    let event_id = http::extract_id(&body, &generated_id);
    let event_path = format!("/api/events/{event_id}");

    let mut aborted = false;

    let response = user.get(&event_path).await?;
    if http::check(user, response, "lifecycle: get event", OK).await.is_none() {
        aborted = true;
    }

    if !aborted {
        let response =
            http::request_json(user, &GooseMethod::Put, &event_path, &payload::event()).await?;
        if http::check(user, response, "lifecycle: update event", OK).await.is_none() {
            aborted = true;
        }
    }

    if !aborted {
        let response =
            http::request_json(user, &GooseMethod::Patch, &event_path, &payload::event_patch())
                .await?;
        if http::check(user, response, "lifecycle: patch event", OK).await.is_none() {
            aborted = true;
        }
    }

    if !aborted {
        let ticket = payload::ticket();
        let generated_ticket_id = ticket["id"].as_str().unwrap_or_default().to_string();
        let tickets_path = format!("{event_path}/tickets");
        let response =
            http::request_json(user, &GooseMethod::Post, &tickets_path, &ticket).await?;
        if let Some(ticket_body) =
            http::check(user, response, "lifecycle: create ticket", CREATED).await
        {
            let ticket_id = http::extract_id(&ticket_body, &generated_ticket_id);
            let ticket_path = format!("{tickets_path}/{ticket_id}");
            let response = http::request_empty(user, &GooseMethod::Delete, &ticket_path).await?;
            let _ = http::check(user, response, "lifecycle: delete ticket", OK).await;
        }
    }

    // Cleanup runs regardless of how far the chain got.
    let response = http::request_empty(user, &GooseMethod::Delete, &event_path).await?;
    let _ = http::check(user, response, "lifecycle: delete event", OK).await;

    Ok(())
}

/// Independent fixed-id probes over the whole event surface.
pub fn probes() -> Result<Scenario, GooseError> {
    Ok(scenario!("Event Probes")
        .set_weight(30)?
        .set_wait_time(PROBES.min_wait, PROBES.max_wait)?
        .register_transaction(transaction!(list_events).set_name("GET /api/events"))
        .register_transaction(transaction!(create_event_stub).set_name("POST /api/events"))
        .register_transaction(transaction!(get_event).set_name("GET /api/events/{id}"))
        .register_transaction(transaction!(put_event).set_name("PUT /api/events/{id}"))
        .register_transaction(transaction!(patch_event).set_name("PATCH /api/events/{id}"))
        .register_transaction(transaction!(delete_event).set_name("DELETE /api/events/{id}"))
        .register_transaction(
            transaction!(event_registrations).set_name("GET /api/events/{id}/eventRegistrations"),
        )
        .register_transaction(
            transaction!(event_attendees).set_name("GET /api/events/{id}/attendees"),
        ))
}

/// The chained create → read → update → delete sequence.
pub fn lifecycle() -> Result<Scenario, GooseError> {
    Ok(scenario!("Event Lifecycle")
        .set_weight(15)?
        .set_wait_time(PROBES.min_wait, PROBES.max_wait)?
        .register_transaction(transaction!(event_lifecycle).set_name("event lifecycle chain")))
}
