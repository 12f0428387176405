//! Ticket transactions against a fixed event, mirroring the per-ticket CRUD
//! surface.

use std::sync::LazyLock;

use goose::prelude::*;

use crate::config::ProbeConfig;
use crate::http::{self, CREATED, OK};
use crate::payload;

static PROBES: LazyLock<ProbeConfig> = LazyLock::new(ProbeConfig::from_env);

fn tickets_path() -> String {
    format!("/api/events/{}/tickets", PROBES.event_id)
}

fn ticket_path() -> String {
    format!("/api/events/{}/tickets/{}", PROBES.event_id, PROBES.ticket_id)
}

async fn list_tickets(user: &mut GooseUser) -> TransactionResult {
    let response = user.get(&tickets_path()).await?;
    let _ = http::check(user, response, "GET /api/events/{id}/tickets", OK).await;
    Ok(())
}

async fn create_ticket(user: &mut GooseUser) -> TransactionResult {
    let response =
        http::request_json(user, &GooseMethod::Post, &tickets_path(), &payload::ticket()).await?;
    let _ = http::check(user, response, "POST /api/events/{id}/tickets", CREATED).await;
    Ok(())
}

async fn get_ticket(user: &mut GooseUser) -> TransactionResult {
    let response = user.get(&ticket_path()).await?;
    let _ = http::check(user, response, "GET /api/events/{id}/tickets/{ticketId}", OK).await;
    Ok(())
}

async fn put_ticket(user: &mut GooseUser) -> TransactionResult {
    let response = http::request_json(
        user,
        &GooseMethod::Put,
        &ticket_path(),
        &payload::ticket_update(),
    )
    .await?;
    let _ = http::check(user, response, "PUT /api/events/{id}/tickets/{ticketId}", OK).await;
    Ok(())
}

async fn patch_ticket(user: &mut GooseUser) -> TransactionResult {
    let response = http::request_json(
        user,
        &GooseMethod::Patch,
        &ticket_path(),
        &payload::ticket_patch(),
    )
    .await?;
    let _ = http::check(user, response, "PATCH /api/events/{id}/tickets/{ticketId}", OK).await;
    Ok(())
}

async fn delete_ticket(user: &mut GooseUser) -> TransactionResult {
    let response = http::request_empty(user, &GooseMethod::Delete, &ticket_path()).await?;
    let _ = http::check(user, response, "DELETE /api/events/{id}/tickets/{ticketId}", OK).await;
    Ok(())
}

/// Fixed-id ticket probes.
pub fn probes() -> Result<Scenario, GooseError> {
    Ok(scenario!("Ticket Probes")
        .set_weight(20)?
        .set_wait_time(PROBES.min_wait, PROBES.max_wait)?
        .register_transaction(transaction!(list_tickets).set_name("GET /api/events/{id}/tickets"))
        .register_transaction(
            transaction!(create_ticket).set_name("POST /api/events/{id}/tickets"),
        )
        .register_transaction(
            transaction!(get_ticket).set_name("GET /api/events/{id}/tickets/{ticketId}"),
        )
        .register_transaction(
            transaction!(put_ticket).set_name("PUT /api/events/{id}/tickets/{ticketId}"),
        )
        .register_transaction(
            transaction!(patch_ticket).set_name("PATCH /api/events/{id}/tickets/{ticketId}"),
        )
        .register_transaction(
            transaction!(delete_ticket).set_name("DELETE /api/events/{id}/tickets/{ticketId}"),
        ))
}
