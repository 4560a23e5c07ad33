//! Property-Based Test Generators
//!
//! Proptest strategies producing contact strings on both sides of the
//! validation rules, and arbitrary directory field values.

use proptest::prelude::*;

use domain_party::{ContactType, PartyStatus, PartyType};

/// Strategy for email addresses that satisfy the email rule
pub fn valid_email_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9._%+-]{1,16}", "[a-z0-9-]{1,12}", "[a-z]{2,6}")
        .prop_map(|(local, domain, tld)| format!("{}@{}.{}", local, domain, tld))
}

/// Strategy for strings that never contain `@`, so can never be emails
pub fn invalid_email_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9. -]{0,24}"
}

/// Strategy for phone/fax numbers that satisfy the dial rule
pub fn valid_dial_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), "[0-9][0-9 -]{6,14}").prop_map(|(plus, body)| {
        if plus {
            format!("+{}", body)
        } else {
            body
        }
    })
}

/// Strategy for dial strings that are too short to be valid
pub fn short_dial_strategy() -> impl Strategy<Value = String> {
    "[0-9]{0,6}"
}

/// Strategy for supported contact types
pub fn contact_type_strategy() -> impl Strategy<Value = ContactType> {
    prop_oneof![
        Just(ContactType::Email),
        Just(ContactType::Phone),
        Just(ContactType::Fax),
    ]
}

/// Strategy for type strings the validator must reject
pub fn unknown_contact_type_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,10}".prop_filter("must not be a known contact type", |s| {
        !matches!(s.as_str(), "email" | "phone" | "fax")
    })
}

/// Strategy for mixed-case spellings of a known type
pub fn mixed_case_strategy(word: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
        word.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

/// Strategy for group names long enough to derive a party number
pub fn group_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{1,15}"
}

/// Strategy for party types
pub fn party_type_strategy() -> impl Strategy<Value = PartyType> {
    prop_oneof![Just(PartyType::Person), Just(PartyType::Organization)]
}

/// Strategy for party statuses
pub fn party_status_strategy() -> impl Strategy<Value = PartyStatus> {
    prop_oneof![Just(PartyStatus::Active), Just(PartyStatus::Inactive)]
}

/// Strategy for epoch-millisecond timestamps
pub fn timestamp_strategy() -> impl Strategy<Value = i64> {
    0i64..4_102_444_800_000i64
}
