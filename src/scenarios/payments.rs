//! The tokenize → charge flow.
//!
//! One transaction per charge: request a payment token for the configured
//! cardholder, then spend it. A failed tokenize aborts the charge; both
//! failures carry the response body into goose's failure metrics.

use std::sync::LazyLock;

use goose::prelude::*;
use serde_json::Value;

use crate::config::{PaymentConfig, ProbeConfig};
use crate::http::{self, OK};
use crate::payload;

static PAYMENT: LazyLock<PaymentConfig> = LazyLock::new(PaymentConfig::from_env);
static PROBES: LazyLock<ProbeConfig> = LazyLock::new(ProbeConfig::from_env);

async fn charge(user: &mut GooseUser) -> TransactionResult {
    let config = &*PAYMENT;
    let headers = config.headers();

    let response = http::request_json_with_headers(
        user,
        &GooseMethod::Post,
        "/api/tokenize",
        &payload::tokenize(config),
        &headers,
    )
    .await?;
    let Some(body) = http::check(user, response, "POST /api/tokenize", OK).await else {
        return Ok(());
    };

    let Some(token) = body.get("token").and_then(Value::as_str) else {
        // A 200 without a token is useless for the charge; nothing to spend.
        return Ok(());
    };

    let response = http::request_json_with_headers(
        user,
        &GooseMethod::Post,
        "/api/charges",
        &payload::charge(config, token),
        &headers,
    )
    .await?;
    let _ = http::check(user, response, "POST /api/charges", OK).await;
    Ok(())
}

/// The full charge flow as a single weighted scenario.
pub fn charges() -> Result<Scenario, GooseError> {
    Ok(scenario!("Payment Charges")
        .set_weight(1)?
        .set_wait_time(PROBES.min_wait, PROBES.max_wait)?
        .register_transaction(transaction!(charge).set_name("tokenize + charge")))
}
