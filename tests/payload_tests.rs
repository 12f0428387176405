//! Shape and range checks for the randomized payload builders.

use chrono::DateTime;
use serde_json::Value;
use stampede::config::PaymentConfig;
use stampede::payload;
use uuid::Uuid;

fn assert_reference(value: &Value, context: &str) {
    assert!(
        Uuid::parse_str(value["id"].as_str().unwrap()).is_ok(),
        "{context}: id is not a uuid"
    );
    assert!(!value["name"].as_str().unwrap().is_empty(), "{context}: empty name");
    assert_eq!(value["status"], "ACTIVE", "{context}: status");
}

#[test]
fn test_event_top_level_shape() {
    let event = payload::event();
    for key in [
        "id",
        "name",
        "summary",
        "code",
        "maximumAttendees",
        "category",
        "topic",
        "campaign",
        "publishEvent",
        "enableEventRegistrationForm",
        "archived",
        "enableWaitListing",
        "createAccountsforAttendees",
        "eventDescription",
        "eventDates",
        "financialSettings",
        "location",
        "thumbnailUrl",
    ] {
        assert!(event.get(key).is_some(), "event payload missing {key}");
    }

    assert!(Uuid::parse_str(event["id"].as_str().unwrap()).is_ok());
    let attendees = event["maximumAttendees"].as_u64().unwrap();
    assert!((10..=500).contains(&attendees));
    assert!(event["publishEvent"].as_bool().unwrap());
    assert!(!event["archived"].as_bool().unwrap());

    assert_reference(&event["category"], "category");
    assert_reference(&event["topic"], "topic");
    assert_reference(&event["campaign"], "campaign");
}

#[test]
fn test_event_dates_parse() {
    let event = payload::event();
    let dates = &event["eventDates"];
    for key in [
        "startDate",
        "endDate",
        "registrationOpenDate",
        "registrationCloseDate",
    ] {
        let raw = dates[key].as_str().unwrap();
        assert!(
            DateTime::parse_from_rfc3339(raw).is_ok(),
            "eventDates.{key} is not a valid timestamp: {raw}"
        );
    }
    for key in ["startTime", "endTime"] {
        let raw = dates[key].as_str().unwrap();
        assert_eq!(raw.len(), 8, "eventDates.{key} is not HH:MM:SS: {raw}");
    }
    assert_reference(&dates["timeZone"], "timeZone");
}

#[test]
fn test_event_financial_settings() {
    let event = payload::event();
    let financial = &event["financialSettings"];
    assert_eq!(financial["feeType"], "Free");

    let fee = financial["admissionFee"]["fee"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&fee));

    let cra = &financial["admissionFee"]["craInfo"];
    assert!(cra["advantageAmount"].as_u64().unwrap() <= 100);
    assert!(!cra["advantageDescription"].as_str().unwrap().is_empty());

    let deductible = &financial["admissionFee"]["taxDeductibleInfo"];
    assert!(deductible["nonDeductibleAmount"].as_u64().unwrap() <= 100);

    let per_registration = &financial["ticketsPerRegistration"];
    let number = per_registration["number"].as_u64().unwrap();
    assert!((1..=10).contains(&number));
    assert_eq!(per_registration["operator"], "Up_to");

    assert_reference(&financial["fund"], "fund");
    assert_reference(&financial["taxDeductiblePortion"]["fund"], "portion fund");
    assert_reference(&financial["taxDeductiblePortion"]["purpose"], "purpose");

    assert_eq!(financial["donations"]["type"], "None");
}

#[test]
fn test_event_location() {
    let event = payload::event();
    let location = &event["location"];
    for key in [
        "name",
        "roomNumber",
        "buildingNumber",
        "address",
        "city",
        "stateProvince",
        "country",
        "zipCode",
        "zipCodeSuffix",
    ] {
        assert!(location.get(key).is_some(), "location missing {key}");
    }
    assert!(location["roomNumber"].as_str().unwrap().starts_with("Room-"));
    assert!(location["buildingNumber"].as_str().unwrap().starts_with("Bldg-"));
    let state = &location["stateProvince"];
    assert_eq!(state["code"].as_str().unwrap().len(), 2);
    assert_eq!(state["status"], "ACTIVE");
    assert_eq!(location["zipCode"].as_str().unwrap().len(), 5);
}

#[test]
fn test_events_are_randomized() {
    let a = payload::event();
    let b = payload::event();
    assert_ne!(a["id"], b["id"]);
}

#[test]
fn test_ticket_shape() {
    let ticket = payload::ticket();
    assert!(Uuid::parse_str(ticket["id"].as_str().unwrap()).is_ok());
    let price = ticket["price"].as_f64().unwrap();
    assert!((0.0..=250.0).contains(&price));
    let quantity = ticket["maximumQuantity"].as_u64().unwrap();
    assert!((1..=1000).contains(&quantity));
    assert!(ticket["taxDeductiblePercentage"].as_u64().unwrap() <= 100);
    assert_eq!(ticket["status"], "ACTIVE");
}

#[test]
fn test_partial_update_bodies() {
    assert!(payload::event_patch().get("description").is_some());
    assert!(payload::event_stub().get("name").is_some());
    assert!(payload::ticket_update().get("option").is_some());
    assert!(payload::ticket_patch().get("option").is_some());
    assert!(payload::category().get("name").is_some());
    assert!(payload::category_patch().get("description").is_some());
}

#[test]
fn test_search_request_shape() {
    let search = payload::search_request();
    let object = search.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(!object["query"].as_str().unwrap().is_empty());
}

#[test]
fn test_tokenize_card_fields() {
    let config = PaymentConfig::default();
    let body = payload::tokenize(&config);
    assert_eq!(body["type"], "cc");
    assert_eq!(body["card_number"], config.card_number.as_str());
    assert_eq!(body["card_cvc"], config.card_cvc.as_str());
    assert_eq!(body["expiration_date"], config.expiration_date.as_str());
    assert_eq!(body["first_name"], config.first_name.as_str());
    assert_eq!(body["last_name"], config.last_name.as_str());
    assert!(body.get("account_holder_first_name").is_none());
}

#[test]
fn test_tokenize_ach_swaps_name_fields() {
    let config = PaymentConfig {
        token_type: "ach".to_string(),
        ..PaymentConfig::default()
    };
    let body = payload::tokenize(&config);
    assert_eq!(body["account_holder_first_name"], config.first_name.as_str());
    assert_eq!(body["account_holder_last_name"], config.last_name.as_str());
    assert!(body.get("first_name").is_none());
    assert!(body.get("last_name").is_none());
    assert!(body.get("card_number").is_none());
    assert!(body.get("card_cvc").is_none());
    assert!(body.get("expiration_date").is_none());
}

#[test]
fn test_charge_shape() {
    let config = PaymentConfig::default();
    let body = payload::charge(&config, "tok_abc123");
    assert_eq!(body["token"], "tok_abc123");
    assert_eq!(body["merchant_id"], config.merchant_id.as_str());
    assert_eq!(body["currency"], "usd");
    assert_eq!(body["funding_currency"], "usd");
    assert_eq!(body["recurring"], false);
    assert_eq!(body["capture"], true);
    assert_eq!(body["origin"], "ecommerce");

    let amount = body["amount"].as_u64().unwrap();
    assert_eq!(amount % 100, 0, "amount must be whole dollars in cents");
    assert!((100..=50_000).contains(&amount));

    let platform_fee = body["platform_fee"].as_u64().unwrap();
    assert!((1..=100).contains(&platform_fee));

    assert!(body["metadata"].as_object().unwrap().len() == 3);
}
