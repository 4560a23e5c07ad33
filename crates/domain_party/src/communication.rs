//! Communication channels attached to a party
//!
//! A [`Communication`] pairs a [`ContactType`] with the contact string for
//! that channel. The string is validated when the value is built (and again
//! when it is deserialized), so every `Communication` in memory is well-formed.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PartyError;
use crate::validation::ContactValidator;

/// Channel over which a party can be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactType {
    Email,
    Phone,
    Fax,
}

impl ContactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Email => "Email",
            ContactType::Phone => "Phone",
            ContactType::Fax => "Fax",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactType {
    type Err = PartyError;

    /// Parses `email`, `phone` or `fax` in any letter case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(ContactType::Email),
            "phone" => Ok(ContactType::Phone),
            "fax" => Ok(ContactType::Fax),
            _ => Err(PartyError::invalid_contact(s)),
        }
    }
}

/// Unchecked shape used on the deserialization path
#[derive(Deserialize)]
struct RawCommunication {
    contact_type: String,
    contact: String,
}

/// A validated contact entry
///
/// # Examples
///
/// ```rust
/// use domain_party::{Communication, ContactType, PartyError};
///
/// let email = Communication::new("Email", "alice@example.com").unwrap();
/// assert_eq!(email.contact_type(), ContactType::Email);
///
/// let err = Communication::new("Email", "not-an-email").unwrap_err();
/// assert!(matches!(err, PartyError::InvalidContact { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Communication {
    contact_type: ContactType,
    contact: String,
}

impl Communication {
    /// Builds a communication from a contact type string and contact value
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidContact` with `contact_type` as supplied
    /// when the type is unknown or the contact does not match its format
    pub fn new(contact_type: &str, contact: impl Into<String>) -> Result<Self, PartyError> {
        let contact = contact.into();
        let contact_type = ContactValidator::classify(contact_type, &contact)?;
        Ok(Self {
            contact_type,
            contact,
        })
    }

    /// Builds a communication from an already-typed channel
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidContact` when the contact does not match
    /// the format for `contact_type`
    pub fn of(contact_type: ContactType, contact: impl Into<String>) -> Result<Self, PartyError> {
        let contact = contact.into();
        if !ContactValidator::matches(contact_type, &contact) {
            return Err(PartyError::invalid_contact(contact_type.as_str()));
        }
        Ok(Self {
            contact_type,
            contact,
        })
    }

    pub fn contact_type(&self) -> ContactType {
        self.contact_type
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }
}

impl<'de> Deserialize<'de> for Communication {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawCommunication::deserialize(deserializer)?;
        Communication::new(&raw.contact_type, raw.contact).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Communication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comm{{type:{}, contact:{}}}", self.contact_type, self.contact)
    }
}
