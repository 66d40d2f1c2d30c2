/*!
 * Tests for recipient list validation and management
 */

use acto::errors::RecipientError;
use acto::recipients::{validate_address, RecipientList, MAX_RECIPIENTS};

/// Test that well-formed addresses pass validation
#[test]
fn test_validate_address_withWellFormedAddress_shouldAccept() {
    assert!(validate_address("a@b.com"));
    assert!(validate_address("first.last@example.co.uk"));
    assert!(validate_address("user+tag@mail.example.org"));
}

/// Test that malformed addresses fail validation
#[test]
fn test_validate_address_withMalformedAddress_shouldReject() {
    assert!(!validate_address("not-an-email"));
    assert!(!validate_address("a@b"));
    assert!(!validate_address("@example.com"));
    assert!(!validate_address("user@"));
    assert!(!validate_address("user name@example.com"));
    assert!(!validate_address(""));
}

/// Test that a valid address is appended to the list
#[test]
fn test_add_withValidAddress_shouldAppend() {
    let mut list = RecipientList::new();
    let added = list.add("a@b.com").unwrap();
    assert!(added);
    assert_eq!(list.len(), 1);
    assert_eq!(list.as_slice(), &["a@b.com".to_string()]);
}

/// Test that surrounding whitespace is trimmed before validation
#[test]
fn test_add_withSurroundingWhitespace_shouldTrimBeforeValidation() {
    let mut list = RecipientList::new();
    let added = list.add("  a@b.com  ").unwrap();
    assert!(added);
    assert_eq!(list.as_slice(), &["a@b.com".to_string()]);
}

/// Test that empty input is silently ignored
#[test]
fn test_add_withEmptyInput_shouldBeNoOp() {
    let mut list = RecipientList::new();
    let added = list.add("   ").unwrap();
    assert!(!added);
    assert!(list.is_empty());
}

/// Test that an invalid address is rejected with InvalidFormat
#[test]
fn test_add_withInvalidAddress_shouldReturnInvalidFormat() {
    let mut list = RecipientList::new();
    let result = list.add("not-an-email");
    assert!(matches!(result, Err(RecipientError::InvalidFormat)));
    assert!(list.is_empty());
}

/// Test that adding the same address twice reports a duplicate
#[test]
fn test_add_withDuplicateAddress_shouldReturnDuplicate() {
    let mut list = RecipientList::new();
    list.add("a@b.com").unwrap();
    let result = list.add("a@b.com");
    assert!(matches!(result, Err(RecipientError::Duplicate)));
    assert_eq!(list.len(), 1);
}

/// Test that the list refuses an eleventh address and stays unchanged
#[test]
fn test_add_withEleventhAddress_shouldReturnCapacityExceeded() {
    let mut list = RecipientList::new();
    for i in 0..MAX_RECIPIENTS {
        list.add(&format!("user{}@example.com", i)).unwrap();
    }
    assert_eq!(list.len(), MAX_RECIPIENTS);

    let result = list.add("overflow@example.com");
    assert!(matches!(result, Err(RecipientError::CapacityExceeded)));
    assert_eq!(list.len(), MAX_RECIPIENTS);
}

/// Test that format validation runs before the capacity check
#[test]
fn test_add_atCapacityWithInvalidAddress_shouldReportFormatFirst() {
    let mut list = RecipientList::new();
    for i in 0..MAX_RECIPIENTS {
        list.add(&format!("user{}@example.com", i)).unwrap();
    }

    let result = list.add("not-an-email");
    assert!(matches!(result, Err(RecipientError::InvalidFormat)));
}

/// Test that removing a known address shrinks the list
#[test]
fn test_remove_withKnownAddress_shouldShrinkList() {
    let mut list = RecipientList::new();
    list.add("a@b.com").unwrap();
    list.add("c@d.com").unwrap();

    list.remove("a@b.com");
    assert_eq!(list.as_slice(), &["c@d.com".to_string()]);
}

/// Test that removing an unknown address leaves the list alone
#[test]
fn test_remove_withUnknownAddress_shouldBeNoOp() {
    let mut list = RecipientList::new();
    list.add("a@b.com").unwrap();
    list.remove("missing@example.com");
    assert_eq!(list.len(), 1);
}

/// Test that clear empties a populated list
#[test]
fn test_clear_withPopulatedList_shouldEmptyList() {
    let mut list = RecipientList::new();
    list.add("a@b.com").unwrap();
    list.add("c@d.com").unwrap();
    list.clear();
    assert!(list.is_empty());
}

/// Test that error display strings match the user-facing text
#[test]
fn test_error_messages_shouldMatchUserFacingText() {
    assert_eq!(
        RecipientError::InvalidFormat.to_string(),
        "Please enter a valid email address"
    );
    assert_eq!(
        RecipientError::Duplicate.to_string(),
        "This email has already been added"
    );
    assert_eq!(
        RecipientError::CapacityExceeded.to_string(),
        "Maximum 10 emails allowed"
    );
}
