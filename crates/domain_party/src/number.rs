//! Party business numbers
//!
//! A party number is the upper-cased first two characters of the party's
//! group, an underscore, and the creation time in epoch milliseconds, e.g.
//! `CU_1717171717171`. Two parties of the same group created in the same
//! millisecond receive the same number; callers that need a unique key use
//! the party id instead.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PartyError;

/// Human-oriented party identifier derived from group and creation time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyNumber(String);

impl PartyNumber {
    /// Derives the number for `group` at `timestamp_millis`
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidArgument` if `group` has fewer than two
    /// characters
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_party::PartyNumber;
    ///
    /// let number = PartyNumber::generate("Customer", 1_700_000_000_000).unwrap();
    /// assert_eq!(number.as_str(), "CU_1700000000000");
    /// ```
    pub fn generate(group: &str, timestamp_millis: i64) -> Result<Self, PartyError> {
        let head: String = group.chars().take(2).collect();
        if head.chars().count() < 2 {
            return Err(PartyError::invalid_argument(format!(
                "group {:?} is too short to derive a party number prefix",
                group
            )));
        }
        Ok(Self(format!("{}_{}", head.to_uppercase(), timestamp_millis)))
    }

    /// The two-letter prefix (may be longer if upper-casing expands a character)
    pub fn prefix(&self) -> &str {
        self.0.rsplit_once('_').map_or(self.0.as_str(), |(prefix, _)| prefix)
    }

    /// The creation time the number was stamped with, if it is well-formed
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.rsplit_once('_').and_then(|(_, millis)| millis.parse().ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
