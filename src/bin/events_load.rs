//! Weighted goose attack against the events REST surface.
//!
//! Covers the full surface: event CRUD probes, the chained event lifecycle,
//! tickets, categories and search. Scenario weights live next to the
//! scenario constructors in `stampede::scenarios`.
//!
//! # Usage
//!
//! ```bash
//! # Sustained run against a target
//! cargo run --release --bin events-load -- \
//!   --host https://api.example.org \
//!   --users 50 \
//!   --hatch-rate 10 \
//!   --run-time 5m \
//!   --report-file load-test-report.html
//!
//! # Short CI pass
//! cargo run --release --bin events-load -- \
//!   --host http://localhost:8080 -u10 -r2 -t30s --no-reset-metrics
//! ```
//!
//! Probe ids and wait-time bounds come from the `STAMPEDE_*` environment
//! variables documented in `stampede::config`.

use goose::prelude::*;
use stampede::scenarios::{categories, events, search, tickets};

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        .register_scenario(events::probes()?)
        .register_scenario(events::lifecycle()?)
        .register_scenario(tickets::probes()?)
        .register_scenario(categories::probes()?)
        .register_scenario(search::probes()?)
        .execute()
        .await?;

    Ok(())
}
