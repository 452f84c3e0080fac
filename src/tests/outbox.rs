use super::{Outbox, Submission};

fn valid_submission() -> Submission {
    Submission {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.org".to_string(),
        message: "Shall we collaborate on an engine?".to_string(),
    }
}

#[test]
fn test_valid_submission_passes() {
    assert!(valid_submission().validate().is_ok());
}

#[test]
fn test_each_rule_reports_its_own_message() {
    let mut s = valid_submission();
    s.name = "   ".to_string();
    assert_eq!(s.validate().unwrap_err(), "Name is required");

    let mut s = valid_submission();
    s.email = String::new();
    assert_eq!(s.validate().unwrap_err(), "Email is required");

    let mut s = valid_submission();
    s.email = "ada at example dot org".to_string();
    assert_eq!(s.validate().unwrap_err(), "Invalid email format");

    let mut s = valid_submission();
    s.email = "ada@example".to_string();
    assert_eq!(s.validate().unwrap_err(), "Invalid email format");

    let mut s = valid_submission();
    s.message = "\n  \n".to_string();
    assert_eq!(s.validate().unwrap_err(), "Message is required");
}

#[test]
fn test_outbox_round_trips_as_json() {
    let mut outbox = Outbox::default();
    assert!(outbox.is_empty());

    outbox.record(valid_submission());
    assert!(!outbox.is_empty());

    let json = serde_json::to_string_pretty(&outbox).unwrap();
    let parsed: Outbox = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.submissions.len(), 1);
    assert_eq!(parsed.submissions[0].email, "ada@example.org");
}
