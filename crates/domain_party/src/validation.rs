//! Contact validation rules
//!
//! Format checks applied when a [`Communication`](crate::Communication) is
//! built. They look at the shape of the string only; nothing here checks
//! that a mailbox or line actually exists.
//!
//! # Rules
//!
//! - **email**: a local part without spaces or `@`, then `@`, then a domain
//!   containing a dot, ending in a top-level domain of at least two letters
//! - **phone** / **fax**: 7 to 15 characters of digits, hyphens and spaces,
//!   optionally preceded by a single `+`
//! - any other type is rejected outright

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::communication::ContactType;
use crate::error::PartyError;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

static DIAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\- ]{7,15}$").expect("dial pattern compiles"));

/// Validator for contact strings
pub struct ContactValidator;

impl ContactValidator {
    /// Returns whether `contact` is well-formed for the given contact type
    /// string. The type is matched case-insensitively; unknown types are
    /// never valid.
    pub fn is_valid(contact_type: &str, contact: &str) -> bool {
        match contact_type.parse::<ContactType>() {
            Ok(kind) => Self::matches(kind, contact),
            Err(_) => false,
        }
    }

    /// Checks `contact` against the pattern for an already-parsed type
    pub fn matches(kind: ContactType, contact: &str) -> bool {
        match kind {
            ContactType::Email => EMAIL_PATTERN.is_match(contact),
            ContactType::Phone | ContactType::Fax => DIAL_PATTERN.is_match(contact),
        }
    }

    /// Same as [`ContactValidator::is_valid`] but reports the rejection
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidContact` carrying `contact_type` as given
    pub fn validate(contact_type: &str, contact: &str) -> Result<(), PartyError> {
        Self::classify(contact_type, contact).map(|_| ())
    }

    /// Parses `contact_type` once and checks `contact` against it
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidContact` carrying `contact_type` as given
    pub fn classify(contact_type: &str, contact: &str) -> Result<ContactType, PartyError> {
        match contact_type.parse::<ContactType>() {
            Ok(kind) if Self::matches(kind, contact) => Ok(kind),
            _ => {
                debug!(contact_type, "Rejected contact");
                Err(PartyError::invalid_contact(contact_type))
            }
        }
    }
}
