//! Party aggregate
//!
//! A [`Party`] is the root of the directory model. It owns its addresses and
//! communications outright; the only way to change a party after creation is
//! to append one of those children.
//!
//! # Identity
//!
//! Each party carries two identifiers:
//!
//! - **id**: a sequential [`PartyId`] drawn from an [`IdGenerator`]. Unique,
//!   never reused, but not gap-free: the id is drawn before the number is
//!   derived, so a construction that fails still consumes one.
//! - **number**: a [`PartyNumber`] derived from the group and creation time.
//!   Meant for people to read, not guaranteed unique.
//!
//! # Examples
//!
//! ```rust
//! use domain_party::{Address, Communication, Party, PartyStatus, PartyType};
//!
//! let mut customer = Party::new("Alice Johnson", PartyType::Person, "Customer", PartyStatus::Active)?;
//! customer.add_address(Address::new(
//!     "Bill_To", "123 Billing St", "Suite 100", "New York", "NY", "USA", "10001",
//! ));
//! customer.add_communication(Communication::new("Email", "alice@example.com")?);
//!
//! let rendered = customer.to_string();
//! assert!(rendered.contains("name:Alice Johnson"));
//! assert!(rendered.contains("city:New York"));
//! assert!(rendered.contains("contact:alice@example.com"));
//! # Ok::<(), domain_party::PartyError>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use core_kernel::{Clock, IdGenerator, PartyId, SystemClock};

use crate::address::Address;
use crate::collection::AppendOnly;
use crate::communication::Communication;
use crate::error::PartyError;
use crate::number::PartyNumber;

/// Whether the party is a natural person or an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyType {
    Person,
    Organization,
}

impl PartyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyType::Person => "Person",
            PartyType::Organization => "Organization",
        }
    }
}

impl fmt::Display for PartyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartyType {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "person" => Ok(PartyType::Person),
            "organization" | "organisation" => Ok(PartyType::Organization),
            _ => Err(PartyError::invalid_argument(format!("unknown party type {:?}", s))),
        }
    }
}

/// Lifecycle status of a party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyStatus {
    Active,
    Inactive,
}

impl PartyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyStatus::Active => "Active",
            PartyStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for PartyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartyStatus {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(PartyStatus::Active),
            "inactive" => Ok(PartyStatus::Inactive),
            _ => Err(PartyError::invalid_argument(format!("unknown party status {:?}", s))),
        }
    }
}

/// Business relationship the party has with us
///
/// `Customer` and `Vendor` are recognised only in that exact spelling; any
/// other name is kept verbatim. The group name also seeds the party number,
/// so it must be at least two characters long. Serialized as the plain name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartyGroup {
    Customer,
    Vendor,
    Other(String),
}

impl PartyGroup {
    pub fn as_str(&self) -> &str {
        match self {
            PartyGroup::Customer => "Customer",
            PartyGroup::Vendor => "Vendor",
            PartyGroup::Other(name) => name,
        }
    }
}

impl fmt::Display for PartyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PartyGroup {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Customer" => PartyGroup::Customer,
            "Vendor" => PartyGroup::Vendor,
            _ => PartyGroup::Other(s),
        }
    }
}

impl From<&str> for PartyGroup {
    fn from(s: &str) -> Self {
        PartyGroup::from(s.to_string())
    }
}

impl From<PartyGroup> for String {
    fn from(group: PartyGroup) -> Self {
        match group {
            PartyGroup::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Unchecked shape used on the deserialization path
#[derive(Deserialize)]
struct RawParty {
    id: PartyId,
    number: PartyNumber,
    name: String,
    party_type: PartyType,
    group: PartyGroup,
    status: PartyStatus,
    #[serde(default)]
    addresses: AppendOnly<Address>,
    #[serde(default)]
    communications: AppendOnly<Communication>,
}

/// A person or organization in the directory
///
/// Deserialization applies the construction rules: the group must be long
/// enough to seed a number, the stored number must be the one that group
/// derives at its own timestamp, and no two different addresses may share
/// an id.
/// Communications are validated by their own `Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Party {
    id: PartyId,
    number: PartyNumber,
    name: String,
    party_type: PartyType,
    group: PartyGroup,
    status: PartyStatus,
    #[serde(default)]
    addresses: AppendOnly<Address>,
    #[serde(default)]
    communications: AppendOnly<Communication>,
}

impl Party {
    /// Creates a party with an id from the process-wide generator and a
    /// number stamped with the system clock
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidArgument` if the group name is shorter
    /// than two characters
    pub fn new(
        name: impl Into<String>,
        party_type: PartyType,
        group: impl Into<PartyGroup>,
        status: PartyStatus,
    ) -> Result<Self, PartyError> {
        Self::issue(
            &IdGenerator::global(),
            &SystemClock,
            name.into(),
            party_type,
            group.into(),
            status,
        )
    }

    pub(crate) fn issue(
        ids: &IdGenerator,
        clock: &dyn Clock,
        name: String,
        party_type: PartyType,
        group: PartyGroup,
        status: PartyStatus,
    ) -> Result<Self, PartyError> {
        let id = ids.next_party_id();
        let number = PartyNumber::generate(group.as_str(), clock.now_millis())?;
        debug!(party_id = %id, party_number = %number, %party_type, %group, "Party created");
        Ok(Self {
            id,
            number,
            name,
            party_type,
            group,
            status,
            addresses: AppendOnly::new(),
            communications: AppendOnly::new(),
        })
    }

    pub fn id(&self) -> PartyId {
        self.id
    }

    pub fn number(&self) -> &PartyNumber {
        &self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn party_type(&self) -> PartyType {
        self.party_type
    }

    pub fn group(&self) -> &PartyGroup {
        &self.group
    }

    pub fn status(&self) -> PartyStatus {
        self.status
    }

    /// Addresses in the order they were added
    pub fn addresses(&self) -> &AppendOnly<Address> {
        &self.addresses
    }

    /// Communications in the order they were added
    pub fn communications(&self) -> &AppendOnly<Communication> {
        &self.communications
    }

    /// Appends an address. Duplicates are kept as separate entries.
    pub fn add_address(&mut self, address: Address) {
        debug!(party_id = %self.id, address_id = %address.id(), "Address added to party");
        self.addresses.push(address);
    }

    /// Appends a communication. Duplicates are kept as separate entries.
    pub fn add_communication(&mut self, communication: Communication) {
        debug!(
            party_id = %self.id,
            contact_type = %communication.contact_type(),
            "Communication added to party"
        );
        self.communications.push(communication);
    }
}

impl Party {
    fn from_raw(raw: RawParty) -> Result<Self, PartyError> {
        let millis = raw.number.timestamp_millis().ok_or_else(|| {
            PartyError::invalid_argument(format!("malformed party number {:?}", raw.number.as_str()))
        })?;
        let expected = PartyNumber::generate(raw.group.as_str(), millis)?;
        if expected != raw.number {
            return Err(PartyError::invalid_argument(format!(
                "party number {} does not match group {:?} (expected {})",
                raw.number, raw.group.as_str(), expected
            )));
        }

        // The same address appended twice is fine; two different ones with one id are not
        let mut seen: HashMap<_, &Address> = HashMap::new();
        for address in raw.addresses.iter() {
            match seen.insert(address.id(), address) {
                Some(previous) if previous != address => {
                    return Err(PartyError::invalid_argument(format!(
                        "address id {} is shared by different addresses",
                        address.id()
                    )));
                }
                _ => {}
            }
        }

        Ok(Self {
            id: raw.id,
            number: raw.number,
            name: raw.name,
            party_type: raw.party_type,
            group: raw.group,
            status: raw.status,
            addresses: raw.addresses,
            communications: raw.communications,
        })
    }
}

impl<'de> Deserialize<'de> for Party {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawParty::deserialize(deserializer)?;
        Party::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Party {{id:{}, number:{}, name:{}, type:{}, group:{}, status:{}, addresses:{}, communications:{}}}",
            self.id,
            self.number,
            self.name,
            self.party_type,
            self.group,
            self.status,
            self.addresses,
            self.communications,
        )
    }
}
