//! Search surface: the query endpoint plus its field-metadata endpoints.

use std::sync::LazyLock;

use goose::prelude::*;

use crate::config::ProbeConfig;
use crate::http::{self, OK};
use crate::payload;

static PROBES: LazyLock<ProbeConfig> = LazyLock::new(ProbeConfig::from_env);

async fn search_events(user: &mut GooseUser) -> TransactionResult {
    let response = http::request_json(
        user,
        &GooseMethod::Post,
        "/api/events/search",
        &payload::search_request(),
    )
    .await?;
    let _ = http::check(user, response, "POST /api/events/search", OK).await;
    Ok(())
}

async fn search_fields(user: &mut GooseUser) -> TransactionResult {
    let response = user.get("/api/events/search/searchFields").await?;
    let _ = http::check(user, response, "GET /api/events/search/searchFields", OK).await;
    Ok(())
}

async fn output_fields(user: &mut GooseUser) -> TransactionResult {
    let response = user.get("/api/events/search/outputFields").await?;
    let _ = http::check(user, response, "GET /api/events/search/outputFields", OK).await;
    Ok(())
}

/// Search queries and field metadata.
pub fn probes() -> Result<Scenario, GooseError> {
    Ok(scenario!("Search Probes")
        .set_weight(20)?
        .set_wait_time(PROBES.min_wait, PROBES.max_wait)?
        .register_transaction(transaction!(search_events).set_name("POST /api/events/search"))
        .register_transaction(
            transaction!(search_fields).set_name("GET /api/events/search/searchFields"),
        )
        .register_transaction(
            transaction!(output_fields).set_name("GET /api/events/search/outputFields"),
        ))
}
