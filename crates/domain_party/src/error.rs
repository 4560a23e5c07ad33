//! Party domain errors
//!
//! Every failure in this crate happens at construction time. A failed
//! construction produces no value, so nothing half-built can reach a party.

use thiserror::Error;

/// Errors that can occur in the party domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartyError {
    /// The contact string does not match the format for its type, or the
    /// type itself is not one of email, phone, fax
    #[error("Invalid contact: {contact_type}")]
    InvalidContact { contact_type: String },

    /// An argument cannot be used to build the entity
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PartyError {
    /// Creates an InvalidContact error for the rejected type
    pub fn invalid_contact(contact_type: impl Into<String>) -> Self {
        PartyError::InvalidContact {
            contact_type: contact_type.into(),
        }
    }

    /// Creates an InvalidArgument error with a message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PartyError::InvalidArgument(message.into())
    }
}
