//! # stampede
//!
//! **stampede** is the load-test suite for the event-management and payments
//! REST API. It is built on the [goose](https://docs.rs/goose) load framework:
//! goose owns the virtual users, task weighting, wait-time distribution and
//! request metrics, while this crate supplies the randomized request payloads
//! and the weighted transaction scenarios that exercise the API surface.
//!
//! ## Overview
//!
//! The library is organized into a handful of modules:
//!
//! - **[`config`]** - environment-driven runtime configuration (probe ids,
//!   wait-time bounds, payment credentials) with fixed development defaults
//! - **[`payload`]** - randomized JSON request bodies for events, tickets,
//!   categories, search, and the tokenize/charge payment flow
//! - **[`http`]** - JSON request helpers over goose's request builder with
//!   expected-status checking and failure reporting
//! - **[`scenarios`]** - goose transaction functions and weighted scenarios,
//!   one module per API surface
//! - **[`client`]** - a plain reqwest client for out-of-band requests
//! - **[`smoke`]** - a one-pass sweep of every endpoint with a pass/fail
//!   report, used by the `stampede` CLI and the integration tests
//!
//! ## Binaries
//!
//! - `events-load` - weighted goose attack against the events surface
//! - `payments-load` - tokenize → charge flow under load
//! - `stampede` - utility CLI: dump sample payloads, run the smoke sweep
//!
//! ```bash
//! cargo run --release --bin events-load -- --host https://api.example.org -u50 -r10 -t5m
//! ```

pub mod client;
pub mod config;
pub mod http;
pub mod payload;
pub mod scenarios;
pub mod smoke;
