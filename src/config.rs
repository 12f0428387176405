//! # Runtime Configuration
//!
//! Everything the load scenarios need beyond goose's own command line is
//! loaded from environment variables with fixed development defaults, so a
//! bare `cargo run --bin events-load -- --host ...` always works.
//!
//! ## Environment Variables
//!
//! ### Probe targets
//!
//! - `STAMPEDE_EVENT_ID` - event id used by the fixed-id probe transactions (default: `1`)
//! - `STAMPEDE_TICKET_ID` - ticket id for the ticket probes (default: `1`)
//! - `STAMPEDE_CATEGORY_ID` - category id for the category probes (default: `1`)
//! - `STAMPEDE_MIN_WAIT_MS` / `STAMPEDE_MAX_WAIT_MS` - per-user wait between
//!   transactions, milliseconds (defaults: `500` / `5000`)
//!
//! ### Payment flow
//!
//! Credentials and cardholder data for `payments-load`. The defaults are the
//! development-gateway test values; override them to point the flow at
//! another merchant account.
//!
//! - `PAY_PRIVATE_KEY`, `PAY_PUBLIC_KEY`, `PAY_MERCHANT_ID`
//! - `PAY_TOKEN_TYPE` - `cc` (default) or `ach`
//! - `PAY_CARD_NUMBER`, `PAY_CARD_CVC`, `PAY_EXPIRATION_DATE`
//! - `PAY_FIRST_NAME`, `PAY_LAST_NAME`, `PAY_EMAIL`, `PAY_PHONE`
//! - `PAY_ADDRESS_LINE_1`, `PAY_ADDRESS_LINE_2`, `PAY_ADDRESS_CITY`,
//!   `PAY_ADDRESS_STATE`, `PAY_ADDRESS_ZIP`, `PAY_ADDRESS_COUNTRY`

use std::env;
use std::time::Duration;

fn env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Fixed ids and pacing used by the probe transactions.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Event id hit by the fixed-id event probes.
    pub event_id: u64,
    /// Ticket id hit by the fixed-id ticket probes.
    pub ticket_id: u64,
    /// Category id hit by the fixed-id category probes.
    pub category_id: u64,
    /// Lower bound of the per-user wait between transactions.
    pub min_wait: Duration,
    /// Upper bound of the per-user wait between transactions.
    pub max_wait: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            event_id: 1,
            ticket_id: 1,
            category_id: 1,
            min_wait: Duration::from_millis(500),
            max_wait: Duration::from_millis(5000),
        }
    }
}

impl ProbeConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            event_id: env_u64("STAMPEDE_EVENT_ID", defaults.event_id),
            ticket_id: env_u64("STAMPEDE_TICKET_ID", defaults.ticket_id),
            category_id: env_u64("STAMPEDE_CATEGORY_ID", defaults.category_id),
            min_wait: Duration::from_millis(env_u64(
                "STAMPEDE_MIN_WAIT_MS",
                defaults.min_wait.as_millis() as u64,
            )),
            max_wait: Duration::from_millis(env_u64(
                "STAMPEDE_MAX_WAIT_MS",
                defaults.max_wait.as_millis() as u64,
            )),
        }
    }
}

/// Credentials and cardholder data for the tokenize → charge flow.
///
/// The tokenize request is built from these fields; the private key and
/// merchant id additionally ride the `X-Api-Key` / `X-Merchant-Id` headers on
/// every payment request.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub private_key: String,
    pub public_key: String,
    pub merchant_id: String,
    /// `cc` for card payments; anything else is treated as a bank-account
    /// (ACH style) tokenize request.
    pub token_type: String,
    pub first_name: String,
    pub last_name: String,
    pub card_cvc: String,
    pub card_number: String,
    pub expiration_date: String,
    pub email: String,
    pub phone: String,
    pub address_line_1: String,
    pub address_line_2: String,
    pub address_city: String,
    pub address_state: String,
    pub address_zip: String,
    pub address_country: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        // Development-gateway test credentials and the standard test card.
        Self {
            private_key: "key_21c4faaa4cf389049358c12a5f434ac1ca73200f1d1f4c3ae8d04fb8".into(),
            public_key: "public_d43ac11206bee0632dcce3578d33c69e3f1e10ffe46bc29c34c61627".into(),
            merchant_id: "231".into(),
            token_type: "cc".into(),
            first_name: "Load".into(),
            last_name: "Test User".into(),
            card_cvc: "666".into(),
            card_number: "4242424242424242".into(),
            expiration_date: "12/28".into(),
            email: "load-test@example.com".into(),
            phone: "5555555555".into(),
            address_line_1: "4545 Load Test Ave.".into(),
            address_line_2: "Ste. 201".into(),
            address_city: "Chicago".into(),
            address_state: "IL".into(),
            address_zip: "60640".into(),
            address_country: "US".into(),
        }
    }
}

impl PaymentConfig {
    /// Load configuration from environment variables, falling back to the
    /// development defaults.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            private_key: env_string("PAY_PRIVATE_KEY", &d.private_key),
            public_key: env_string("PAY_PUBLIC_KEY", &d.public_key),
            merchant_id: env_string("PAY_MERCHANT_ID", &d.merchant_id),
            token_type: env_string("PAY_TOKEN_TYPE", &d.token_type),
            first_name: env_string("PAY_FIRST_NAME", &d.first_name),
            last_name: env_string("PAY_LAST_NAME", &d.last_name),
            card_cvc: env_string("PAY_CARD_CVC", &d.card_cvc),
            card_number: env_string("PAY_CARD_NUMBER", &d.card_number),
            expiration_date: env_string("PAY_EXPIRATION_DATE", &d.expiration_date),
            email: env_string("PAY_EMAIL", &d.email),
            phone: env_string("PAY_PHONE", &d.phone),
            address_line_1: env_string("PAY_ADDRESS_LINE_1", &d.address_line_1),
            address_line_2: env_string("PAY_ADDRESS_LINE_2", &d.address_line_2),
            address_city: env_string("PAY_ADDRESS_CITY", &d.address_city),
            address_state: env_string("PAY_ADDRESS_STATE", &d.address_state),
            address_zip: env_string("PAY_ADDRESS_ZIP", &d.address_zip),
            address_country: env_string("PAY_ADDRESS_COUNTRY", &d.address_country),
        }
    }

    /// Whether the tokenize request should carry the credit-card fields.
    pub fn is_card(&self) -> bool {
        self.token_type == "cc"
    }

    /// Headers set on every payment request.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", "application/json".to_string()),
            ("Accept", "application/json".to_string()),
            ("X-Api-Key", self.private_key.clone()),
            ("X-App-Id", "14".to_string()),
            ("X-Merchant-Id", self.merchant_id.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_u64_default_on_garbage() {
        std::env::set_var("STAMPEDE_TEST_GARBAGE", "not-a-number");
        assert_eq!(env_u64("STAMPEDE_TEST_GARBAGE", 7), 7);
        std::env::remove_var("STAMPEDE_TEST_GARBAGE");
    }

    #[test]
    fn test_env_u64_parses() {
        std::env::set_var("STAMPEDE_TEST_NUMBER", "42");
        assert_eq!(env_u64("STAMPEDE_TEST_NUMBER", 7), 42);
        std::env::remove_var("STAMPEDE_TEST_NUMBER");
    }

    #[test]
    fn test_probe_defaults() {
        let config = ProbeConfig::default();
        assert_eq!(config.event_id, 1);
        assert_eq!(config.min_wait, Duration::from_millis(500));
        assert_eq!(config.max_wait, Duration::from_millis(5000));
    }

    #[test]
    fn test_payment_defaults_are_card() {
        let config = PaymentConfig::default();
        assert!(config.is_card());
        assert_eq!(config.card_number, "4242424242424242");
    }

    #[test]
    fn test_payment_headers_carry_credentials() {
        let config = PaymentConfig::default();
        let headers = config.headers();
        assert!(headers
            .iter()
            .any(|(name, value)| *name == "X-Api-Key" && *value == config.private_key));
        assert!(headers
            .iter()
            .any(|(name, value)| *name == "X-Merchant-Id" && *value == config.merchant_id));
    }
}
