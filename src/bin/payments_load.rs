//! Goose attack for the payment tokenize → charge flow.
//!
//! Each transaction requests a fresh payment token for the configured
//! cardholder and immediately spends it. Credentials and cardholder data are
//! environment-driven with development-gateway defaults, so a plain run
//! works against the dev environment out of the box.
//!
//! # Usage
//!
//! ```bash
//! # Development defaults
//! cargo run --release --bin payments-load -- \
//!   --host https://pay.example.org -u10 -r2 -t2m
//!
//! # Another merchant account, ACH instead of card
//! PAY_MERCHANT_ID=42 PAY_PRIVATE_KEY=key_... PAY_PUBLIC_KEY=public_... \
//! PAY_TOKEN_TYPE=ach \
//! cargo run --release --bin payments-load -- --host https://pay.example.org
//! ```
//!
//! The full set of `PAY_*` variables is documented in `stampede::config`.

use goose::prelude::*;
use stampede::scenarios::payments;

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        .register_scenario(payments::charges()?)
        .execute()
        .await?;

    Ok(())
}
