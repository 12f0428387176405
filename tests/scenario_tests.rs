//! Catalog checks for the goose scenarios: names, weights and transaction
//! counts that the load binaries register.

use stampede::scenarios::{categories, events, payments, search, tickets};

#[test]
fn test_event_probe_catalog() {
    let scenario = events::probes().unwrap();
    assert_eq!(scenario.name, "Event Probes");
    assert_eq!(scenario.weight, 30);
    assert_eq!(scenario.transactions.len(), 8);

    let names: Vec<&str> = scenario
        .transactions
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert!(names.contains(&"GET /api/events"));
    assert!(names.contains(&"DELETE /api/events/{id}"));
    assert!(names.contains(&"GET /api/events/{id}/eventRegistrations"));
    assert!(names.contains(&"GET /api/events/{id}/attendees"));
}

#[test]
fn test_event_lifecycle_catalog() {
    let scenario = events::lifecycle().unwrap();
    assert_eq!(scenario.name, "Event Lifecycle");
    assert_eq!(scenario.weight, 15);
    assert_eq!(scenario.transactions.len(), 1);
}

#[test]
fn test_ticket_probe_catalog() {
    let scenario = tickets::probes().unwrap();
    assert_eq!(scenario.name, "Ticket Probes");
    assert_eq!(scenario.weight, 20);
    assert_eq!(scenario.transactions.len(), 6);
}

#[test]
fn test_category_probe_catalog() {
    let scenario = categories::probes().unwrap();
    assert_eq!(scenario.name, "Category Probes");
    assert_eq!(scenario.weight, 15);
    assert_eq!(scenario.transactions.len(), 6);
}

#[test]
fn test_search_probe_catalog() {
    let scenario = search::probes().unwrap();
    assert_eq!(scenario.name, "Search Probes");
    assert_eq!(scenario.weight, 20);
    assert_eq!(scenario.transactions.len(), 3);
}

#[test]
fn test_payment_catalog() {
    let scenario = payments::charges().unwrap();
    assert_eq!(scenario.name, "Payment Charges");
    assert_eq!(scenario.transactions.len(), 1);
}

#[test]
fn test_wait_time_bounds_are_ordered() {
    let scenario = events::probes().unwrap();
    let (min, max) = scenario.transaction_wait.expect("wait time configured");
    assert!(min <= max);
}
