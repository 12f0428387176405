//! Randomized JSON request bodies for the API surface.
//!
//! Every builder returns a fresh [`serde_json::Value`] ready to be serialized
//! into a request. The shapes mirror what the API accepts; the values are
//! drawn from small fixed word tables plus `fastrand`, so two calls never
//! produce the same aggregate. Payloads are transient request bodies only,
//! nothing here is persisted or mutated after the request is sent.

use crate::config::PaymentConfig;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

const WORDS: &[&str] = &[
    "gala", "summit", "harvest", "auction", "benefit", "forum", "outreach", "workshop", "banquet",
    "showcase", "drive", "festival", "retreat", "symposium", "concert", "mixer", "luncheon",
    "marathon", "breakfast", "expo",
];

const ADJECTIVES: &[&str] = &[
    "Adaptive", "Seamless", "Robust", "Focused", "Versatile", "Streamlined", "Integrated",
    "Balanced", "Proactive", "Dynamic",
];

const NOUNS: &[&str] = &[
    "engagement", "initiative", "experience", "platform", "community", "partnership", "campaign",
    "celebration", "program", "collaboration",
];

const COMPANY_SUFFIXES: &[&str] = &["Group", "Foundation", "Society", "Alliance", "Trust", "Center"];

const STREET_SUFFIXES: &[&str] = &["St.", "Ave.", "Blvd.", "Dr.", "Ln.", "Way"];

const CITIES: &[&str] = &[
    "Chicago", "Portland", "Austin", "Denver", "Raleigh", "Madison", "Tucson", "Boise",
    "Savannah", "Omaha",
];

const STATES: &[(&str, &str)] = &[
    ("IL", "Illinois"),
    ("OR", "Oregon"),
    ("TX", "Texas"),
    ("CO", "Colorado"),
    ("NC", "North Carolina"),
    ("WI", "Wisconsin"),
    ("AZ", "Arizona"),
    ("ID", "Idaho"),
    ("GA", "Georgia"),
    ("NE", "Nebraska"),
];

const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "United Kingdom",
    "Australia",
    "Germany",
    "Japan",
];

const TIMEZONES: &[&str] = &[
    "America/Chicago",
    "America/New_York",
    "America/Denver",
    "America/Los_Angeles",
    "Europe/London",
    "Australia/Sydney",
];

fn pick<T: Copy>(values: &[T]) -> T {
    values[fastrand::usize(..values.len())]
}

fn uuid() -> String {
    Uuid::new_v4().to_string()
}

/// A single lowercase word.
pub fn word() -> &'static str {
    pick(WORDS)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// A short sentence built from the word table.
pub fn sentence() -> String {
    let count = fastrand::usize(4..=8);
    let body = (0..count).map(|_| word()).collect::<Vec<_>>().join(" ");
    format!("{}.", capitalize(&body))
}

/// A few sentences.
pub fn paragraph() -> String {
    (0..3).map(|_| sentence()).collect::<Vec<_>>().join(" ")
}

/// A marketing-style phrase, e.g. "Adaptive community engagement".
pub fn catch_phrase() -> String {
    format!("{} {} {}", pick(ADJECTIVES), pick(NOUNS), word())
}

fn company() -> String {
    format!("{} {}", capitalize(word()), pick(COMPANY_SUFFIXES))
}

fn street_address() -> String {
    format!(
        "{} {} {}",
        fastrand::u32(100..=9999),
        capitalize(word()),
        pick(STREET_SUFFIXES)
    )
}

fn zip_code() -> String {
    format!("{:05}", fastrand::u32(10000..=99999))
}

/// Two-decimal amount in `[0, max]`.
fn money(max: u32) -> f64 {
    f64::from(fastrand::u32(0..=max * 100)) / 100.0
}

/// An ISO-8601 timestamp within roughly the last year.
pub fn iso_datetime() -> String {
    let offset = Duration::days(i64::from(fastrand::u32(0..365)))
        + Duration::seconds(i64::from(fastrand::u32(0..86_400)));
    (Utc::now() - offset).to_rfc3339()
}

fn time_of_day() -> String {
    format!(
        "{:02}:{:02}:{:02}",
        fastrand::u32(0..24),
        fastrand::u32(0..60),
        fastrand::u32(0..60)
    )
}

/// The `{id, name, status}` shape shared by category, topic, campaign, fund
/// and purpose references.
pub fn reference() -> Value {
    json!({
        "id": uuid(),
        "name": word(),
        "status": "ACTIVE",
    })
}

/// Full randomized event aggregate for `POST /api/events` and
/// `PUT /api/events/{id}`.
pub fn event() -> Value {
    let (state_code, state_name) = pick(STATES);
    json!({
        "id": uuid(),
        "name": catch_phrase(),
        "summary": sentence(),
        "code": format!("EVT-{:04}", fastrand::u32(0..10_000)),
        "maximumAttendees": fastrand::u32(10..=500),
        "category": reference(),
        "topic": reference(),
        "campaign": reference(),
        "publishEvent": true,
        "enableEventRegistrationForm": true,
        "archived": false,
        "enableWaitListing": true,
        "createAccountsforAttendees": true,
        "eventDescription": paragraph(),
        "eventDates": {
            "startDate": iso_datetime(),
            "endDate": iso_datetime(),
            "startTime": time_of_day(),
            "endTime": time_of_day(),
            "registrationOpenDate": iso_datetime(),
            "registrationCloseDate": iso_datetime(),
            "timeZone": {
                "id": uuid(),
                "name": pick(TIMEZONES),
                "status": "ACTIVE",
            },
        },
        "financialSettings": {
            "feeType": "Free",
            "admissionFee": {
                "fee": money(100),
                "craInfo": {
                    "advantageAmount": fastrand::u32(0..=100),
                    "advantageDescription": sentence(),
                },
                "taxDeductibleInfo": {
                    "nonDeductibleAmount": fastrand::u32(0..=100),
                    "nonDeductibleDescription": sentence(),
                },
            },
            "ticketsPerRegistration": {
                "number": fastrand::u32(1..=10),
                "operator": "Up_to",
            },
            "fund": reference(),
            "taxDeductiblePortion": {
                "fund": reference(),
                "purpose": reference(),
            },
            "donations": {
                "type": "None",
                "label": word(),
            },
        },
        "location": {
            "name": company(),
            "roomNumber": format!("Room-{:03}", fastrand::u32(0..1000)),
            "buildingNumber": format!("Bldg-{:02}", fastrand::u32(0..100)),
            "address": street_address(),
            "city": pick(CITIES),
            "stateProvince": {
                "code": state_code,
                "name": state_name,
                "status": "ACTIVE",
            },
            "country": {
                "id": uuid(),
                "name": pick(COUNTRIES),
                "status": "ACTIVE",
            },
            "zipCode": zip_code(),
            "zipCodeSuffix": format!("{:04}", fastrand::u32(0..10_000)),
        },
        "thumbnailUrl": format!("https://images.example.com/events/{}.png", uuid()),
    })
}

/// Minimal event body for the collection-POST probe.
pub fn event_stub() -> Value {
    json!({ "name": catch_phrase() })
}

/// Partial event update for PATCH.
pub fn event_patch() -> Value {
    json!({ "description": sentence() })
}

/// Randomized ticket aggregate with price, capacity and tax-deduction fields.
pub fn ticket() -> Value {
    json!({
        "id": uuid(),
        "name": format!("{} admission", capitalize(word())),
        "description": sentence(),
        "price": money(250),
        "maximumQuantity": fastrand::u32(1..=1000),
        "taxDeductiblePercentage": fastrand::u32(0..=100),
        "status": "ACTIVE",
    })
}

/// Ticket update body for PUT.
pub fn ticket_update() -> Value {
    json!({ "option": format!("{} option", capitalize(word())) })
}

/// Partial ticket update for PATCH.
pub fn ticket_patch() -> Value {
    json!({ "option": format!("{} option", capitalize(word())) })
}

/// Category create/update body.
pub fn category() -> Value {
    json!({ "name": capitalize(word()) })
}

/// Partial category update for PATCH.
pub fn category_patch() -> Value {
    json!({ "description": sentence() })
}

/// Search request body for `POST /api/events/search`.
pub fn search_request() -> Value {
    json!({ "query": word() })
}

/// Tokenize request built from the payment configuration.
///
/// Card payments carry `card_cvc` / `card_number` / `expiration_date`; any
/// other token type swaps `first_name` / `last_name` for the account-holder
/// fields instead.
pub fn tokenize(config: &PaymentConfig) -> Value {
    let mut body = json!({
        "merchant_id": config.merchant_id,
        "public_app_key": config.public_key,
        "type": config.token_type,
        "email": config.email,
        "phone": config.phone,
        "address_line_1": config.address_line_1,
        "address_line_2": config.address_line_2,
        "address_city": config.address_city,
        "address_state": config.address_state,
        "address_zip": config.address_zip,
        "address_country": config.address_country,
    });
    let fields = body.as_object_mut().expect("tokenize body is an object");
    if config.is_card() {
        fields.insert("first_name".into(), json!(config.first_name));
        fields.insert("last_name".into(), json!(config.last_name));
        fields.insert("card_cvc".into(), json!(config.card_cvc));
        fields.insert("card_number".into(), json!(config.card_number));
        fields.insert("expiration_date".into(), json!(config.expiration_date));
    } else {
        fields.insert(
            "account_holder_first_name".into(),
            json!(config.first_name),
        );
        fields.insert("account_holder_last_name".into(), json!(config.last_name));
    }
    body
}

/// Charge request for a previously issued token. Amounts are whole dollars
/// between 1 and 500, expressed in cents.
pub fn charge(config: &PaymentConfig, token: &str) -> Value {
    json!({
        "merchant_id": config.merchant_id,
        "amount": fastrand::u64(1..=500) * 100,
        "type": config.token_type,
        "currency": "usd",
        "funding_currency": "usd",
        "recurring": false,
        "origin": "ecommerce",
        "description": "Load Test Donation",
        "token": token,
        "platform_fee": fastrand::u64(1..=100),
        "capture": true,
        "metadata": {
            "key_name": "100",
            "another_key_name": "2",
            "third_key_name": "string",
        },
        "statement_descriptor": "Donation to The Example Foundation",
        "ip": "216.80.4.174",
    })
}
