//! Strongly-typed identifiers for directory entities
//!
//! Identifiers are sequential integers wrapped in newtypes so that an
//! address id can never be passed where a party id is expected. Values are
//! drawn from an [`IdSequence`]; the [`IdGenerator`] groups one sequence per
//! entity type and can be injected, or shared process-wide via
//! [`IdGenerator::global`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::CoreError;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Returns the raw sequence value
            pub fn value(&self) -> u64 {
                self.0
            }

            /// Returns the identifier prefix used in log fields
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let digits = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                digits.parse().map(Self).map_err(|_| {
                    CoreError::validation(format!("invalid {} id: {:?}", $prefix, s))
                })
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(AddressId, "ADDR");
define_id!(PartyId, "PTY");

/// A monotonic counter handing out sequence values starting at 1.
///
/// Every call to [`IdSequence::next_value`] consumes a value, whether or not
/// the caller goes on to use it, so sequences are unique but may have gaps.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// Creates a sequence whose first value is 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a sequence whose first value is `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Draws the next value
    pub fn next_value(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the value the next draw will produce, without consuming it
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }

    /// Rewinds the sequence so the next draw yields 1 again
    pub fn reset(&self) {
        self.next.store(1, Ordering::Relaxed);
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_IDS: Lazy<Arc<IdGenerator>> = Lazy::new(|| Arc::new(IdGenerator::new()));

/// Id service holding one sequence per entity type
#[derive(Debug, Default)]
pub struct IdGenerator {
    addresses: IdSequence,
    parties: IdSequence,
}

impl IdGenerator {
    /// Creates an isolated generator with both sequences at 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide generator used by the default constructors
    pub fn global() -> Arc<IdGenerator> {
        Arc::clone(&GLOBAL_IDS)
    }

    pub fn next_address_id(&self) -> AddressId {
        AddressId(self.addresses.next_value())
    }

    pub fn next_party_id(&self) -> PartyId {
        PartyId(self.parties.next_value())
    }

    /// Rewinds both sequences
    pub fn reset(&self) {
        self.addresses.reset();
        self.parties.reset();
    }
}
