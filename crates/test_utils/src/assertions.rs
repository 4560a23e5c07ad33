//! Custom Test Assertions
//!
//! Assertion helpers for directory types that give more useful failure
//! messages than bare `assert!`.

use domain_party::{Party, PartyError};

/// Asserts that `needles` all occur in `haystack`, in the order given
///
/// # Panics
///
/// Panics naming the first needle that is missing or out of order
pub fn assert_contains_in_order(haystack: &str, needles: &[&str]) {
    let mut cursor = 0;
    for needle in needles {
        match haystack[cursor..].find(needle) {
            Some(pos) => cursor += pos + needle.len(),
            None => panic!(
                "Expected {:?} after byte {} in rendering:\n{}",
                needle, cursor, haystack
            ),
        }
    }
}

/// Asserts that a rendered party embeds every scalar field and every child
/// rendering, children in insertion order
pub fn assert_renders_completely(party: &Party) {
    let rendered = party.to_string();
    let id = format!("id:{}", party.id());
    let number = format!("number:{}", party.number());
    let name = format!("name:{}", party.name());
    let party_type = format!("type:{}", party.party_type());
    let group = format!("group:{}", party.group());
    let status = format!("status:{}", party.status());

    assert_contains_in_order(
        &rendered,
        &[&id, &number, &name, &party_type, &group, &status],
    );

    let children: Vec<String> = party
        .addresses()
        .iter()
        .map(ToString::to_string)
        .chain(party.communications().iter().map(ToString::to_string))
        .collect();
    let child_refs: Vec<&str> = children.iter().map(String::as_str).collect();
    assert_contains_in_order(&rendered, &child_refs);
}

/// Asserts that a result is an `InvalidContact` error for `contact_type`
pub fn assert_invalid_contact<T: std::fmt::Debug>(result: Result<T, PartyError>, contact_type: &str) {
    match result {
        Err(PartyError::InvalidContact { contact_type: rejected }) => assert_eq!(
            rejected, contact_type,
            "InvalidContact carried the wrong type"
        ),
        other => panic!("Expected InvalidContact({:?}), got {:?}", contact_type, other),
    }
}
