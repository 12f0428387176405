//! Category CRUD transactions.

use std::sync::LazyLock;

use goose::prelude::*;

use crate::config::ProbeConfig;
use crate::http::{self, CREATED, OK};
use crate::payload;

static PROBES: LazyLock<ProbeConfig> = LazyLock::new(ProbeConfig::from_env);

const CATEGORIES: &str = "/api/events/categories";

fn category_path() -> String {
    format!("{CATEGORIES}/{}", PROBES.category_id)
}

async fn list_categories(user: &mut GooseUser) -> TransactionResult {
    let response = user.get(CATEGORIES).await?;
    let _ = http::check(user, response, "GET /api/events/categories", OK).await;
    Ok(())
}

async fn create_category(user: &mut GooseUser) -> TransactionResult {
    let response =
        http::request_json(user, &GooseMethod::Post, CATEGORIES, &payload::category()).await?;
    let _ = http::check(user, response, "POST /api/events/categories", CREATED).await;
    Ok(())
}

async fn get_category(user: &mut GooseUser) -> TransactionResult {
    let response = user.get(&category_path()).await?;
    let _ = http::check(user, response, "GET /api/events/categories/{id}", OK).await;
    Ok(())
}

async fn put_category(user: &mut GooseUser) -> TransactionResult {
    let response = http::request_json(
        user,
        &GooseMethod::Put,
        &category_path(),
        &payload::category(),
    )
    .await?;
    let _ = http::check(user, response, "PUT /api/events/categories/{id}", OK).await;
    Ok(())
}

async fn patch_category(user: &mut GooseUser) -> TransactionResult {
    let response = http::request_json(
        user,
        &GooseMethod::Patch,
        &category_path(),
        &payload::category_patch(),
    )
    .await?;
    let _ = http::check(user, response, "PATCH /api/events/categories/{id}", OK).await;
    Ok(())
}

async fn delete_category(user: &mut GooseUser) -> TransactionResult {
    let response = http::request_empty(user, &GooseMethod::Delete, &category_path()).await?;
    let _ = http::check(user, response, "DELETE /api/events/categories/{id}", OK).await;
    Ok(())
}

/// Category CRUD mix.
pub fn probes() -> Result<Scenario, GooseError> {
    Ok(scenario!("Category Probes")
        .set_weight(15)?
        .set_wait_time(PROBES.min_wait, PROBES.max_wait)?
        .register_transaction(
            transaction!(list_categories).set_name("GET /api/events/categories"),
        )
        .register_transaction(
            transaction!(create_category).set_name("POST /api/events/categories"),
        )
        .register_transaction(
            transaction!(get_category).set_name("GET /api/events/categories/{id}"),
        )
        .register_transaction(
            transaction!(put_category).set_name("PUT /api/events/categories/{id}"),
        )
        .register_transaction(
            transaction!(patch_category).set_name("PATCH /api/events/categories/{id}"),
        )
        .register_transaction(
            transaction!(delete_category).set_name("DELETE /api/events/categories/{id}"),
        ))
}
