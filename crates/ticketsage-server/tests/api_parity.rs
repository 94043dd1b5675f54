//! API contract tests: ticket JSON shapes match what the
//! presentation layer renders.
//!
//! These tests work on the serialized form only (no HTTP server needed).

use std::collections::BTreeSet;

use ticketsage_runtime::{
    Entities, Priority, RejectionRecord, RejectionStatus, Ticket, TicketOutcome, TicketStatus,
};

fn sample_ticket() -> Ticket {
    Ticket {
        ticket_id: "3f9a0c1e".to_string(),
        title: "Hardware Issue".to_string(),
        description: "My laptop is not working urgently. Error 404 appears.".to_string(),
        cleaned_description: "my laptop is not working urgently error 404 appears".to_string(),
        category: "Hardware".to_string(),
        priority: Priority::High,
        entities: Entities {
            devices: ["laptop".to_string()].into_iter().collect::<BTreeSet<_>>(),
            error_codes: vec!["404".to_string(), "500".to_string(), "404".to_string()],
        },
        status: TicketStatus::Open,
        created_at: chrono::Utc::now(),
    }
}

/// Verify the ticket shape the renderer reads:
/// { ticket_id, title, description, cleaned_description, category, priority,
///   entities: { devices, error_codes }, status, created_at }
#[test]
fn test_ticket_response_shape() {
    let json = serde_json::to_value(TicketOutcome::Ticket(sample_ticket())).unwrap();

    assert!(json["ticket_id"].is_string());
    assert!(json["title"].is_string());
    assert!(json["description"].is_string());
    assert!(json["cleaned_description"].is_string());
    assert!(json["category"].is_string());
    assert_eq!(json["priority"], "High");
    assert_eq!(json["status"], "open");
    assert!(json["entities"].is_object());
    assert!(json["entities"]["devices"].is_array());
    assert!(json["entities"]["error_codes"].is_array());
    assert!(json["entities"]["error_codes"][0].is_string());
    assert!(json["created_at"].is_string());
}

/// created_at must be an ISO-8601 / RFC 3339 timestamp string.
#[test]
fn test_created_at_is_iso8601() {
    let ticket = sample_ticket();
    let json = serde_json::to_value(&ticket).unwrap();
    let raw = json["created_at"].as_str().unwrap();
    let parsed = chrono::DateTime::parse_from_rfc3339(raw).unwrap();
    assert_eq!(parsed, ticket.created_at);
}

/// Rejections carry only { status: "invalid", message }.
#[test]
fn test_rejection_response_shape() {
    let outcome = TicketOutcome::Rejected(RejectionRecord {
        status: RejectionStatus::Invalid,
        message: "Input is not a valid support ticket. Please describe a real issue.".into(),
    });
    let json = serde_json::to_value(&outcome).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj["status"], "invalid");
    assert!(obj["message"].is_string());
}

/// Serialized tickets round-trip without losing error-code order.
#[test]
fn test_ticket_round_trip() {
    let outcome = TicketOutcome::Ticket(sample_ticket());
    let text = serde_json::to_string(&outcome).unwrap();
    let back: TicketOutcome = serde_json::from_str(&text).unwrap();
    assert_eq!(back, outcome);
    assert_eq!(
        back.as_ticket().unwrap().entities.error_codes,
        vec!["404", "500", "404"]
    );
}

/// Consumers branch on `status`; a hand-written rejection parses as one.
#[test]
fn test_parse_consumer_payloads() {
    let rejected: TicketOutcome = serde_json::from_value(serde_json::json!({
        "status": "invalid",
        "message": "nope",
    }))
    .unwrap();
    assert!(!rejected.is_ticket());
    assert_eq!(rejected.status(), "invalid");

    let ticket: TicketOutcome = serde_json::from_value(serde_json::json!({
        "ticket_id": "0123abcd",
        "title": "Access Issue",
        "description": "cannot log in to the portal",
        "cleaned_description": "cannot log in to the portal",
        "category": "Access",
        "priority": "Low",
        "entities": { "devices": [], "error_codes": [] },
        "status": "open",
        "created_at": "2024-05-01T10:15:30.123456Z",
    }))
    .unwrap();
    assert!(ticket.is_ticket());
    assert_eq!(ticket.as_ticket().unwrap().priority, Priority::Low);
}
