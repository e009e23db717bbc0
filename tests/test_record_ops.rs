//! Tests for Record phone operations.
//!
//! These tests exercise the full add/remove/edit/find surface of a record
//! through the public API, including the ordering behavior of edits.

use contact_book::{BookError, Record};

fn phone_values(record: &Record) -> Vec<&str> {
    record.phones().iter().map(|p| p.as_str()).collect()
}

#[test]
fn test_phones_accumulate_in_insertion_order() {
    let mut record = Record::new("John");
    record.add_phone("1234567890").unwrap();
    record.add_phone("5555555555").unwrap();

    assert_eq!(phone_values(&record), ["1234567890", "5555555555"]);
}

#[test]
fn test_invalid_phone_is_rejected_and_record_unchanged() {
    let mut record = Record::new("John");
    record.add_phone("1234567890").unwrap();

    for bad in ["123", "12345678901", "123-456-7890", "abcdefghij", ""] {
        let result = record.add_phone(bad);
        assert!(
            matches!(result, Err(BookError::Validation(_))),
            "expected {:?} to be rejected",
            bad
        );
    }

    assert_eq!(phone_values(&record), ["1234567890"]);
}

#[test]
fn test_edit_appends_replacement_at_end() {
    let mut record = Record::new("John");
    record.add_phone("1234567890").unwrap();
    record.add_phone("5555555555").unwrap();

    record.edit_phone("1234567890", "1112223333").unwrap();

    assert_eq!(phone_values(&record), ["5555555555", "1112223333"]);
}

#[test]
fn test_edit_unknown_phone_fails_and_leaves_record_intact() {
    let mut record = Record::new("John");
    record.add_phone("1234567890").unwrap();
    record.add_phone("5555555555").unwrap();

    let result = record.edit_phone("0000000000", "1112223333");
    match result {
        Err(BookError::PhoneNotFound(number)) => assert_eq!(number, "0000000000"),
        other => panic!("expected PhoneNotFound, got {:?}", other),
    }

    assert_eq!(phone_values(&record), ["1234567890", "5555555555"]);
}

#[test]
fn test_find_phone_matches_exact_value_only() {
    let mut record = Record::new("John");
    record.add_phone("1234567890").unwrap();

    assert!(record.find_phone("1234567890").is_some());
    assert!(record.find_phone("123456789").is_none());
    assert!(record.find_phone("12345678900").is_none());
}

#[test]
fn test_remove_is_silent_on_missing_phone() {
    let mut record = Record::new("John");
    record.add_phone("1234567890").unwrap();

    assert!(record.remove_phone("9999999999").is_none());
    assert_eq!(phone_values(&record), ["1234567890"]);
}
