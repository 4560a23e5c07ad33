//! Address types

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use core_kernel::{AddressId, IdGenerator};

/// Address usage tag
///
/// Tags are free-form. `Bill_To` and `Ship_To` are recognised only in that
/// exact spelling; any other text, including other casings, is carried
/// through verbatim. Serialized as the plain tag string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AddressType {
    BillTo,
    ShipTo,
    Other(String),
}

impl AddressType {
    pub fn as_str(&self) -> &str {
        match self {
            AddressType::BillTo => "Bill_To",
            AddressType::ShipTo => "Ship_To",
            AddressType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for AddressType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Bill_To" => AddressType::BillTo,
            "Ship_To" => AddressType::ShipTo,
            _ => AddressType::Other(s),
        }
    }
}

impl From<&str> for AddressType {
    fn from(s: &str) -> Self {
        AddressType::from(s.to_string())
    }
}

impl From<AddressType> for String {
    fn from(tag: AddressType) -> Self {
        match tag {
            AddressType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// A postal address
///
/// Fields are fixed at construction. The id is drawn from an
/// [`IdGenerator`], the process-wide one unless built through a
/// [`PartyFactory`](crate::PartyFactory).
///
/// Deserialization keeps the stored id as-is and does not draw a new one,
/// nor does it advance any generator. Loading a [`Party`](crate::Party)
/// rejects two different addresses that share an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    id: AddressId,
    address_type: AddressType,
    line1: String,
    line2: Option<String>,
    city: String,
    state: String,
    country: String,
    postal_code: String,
}

impl Address {
    /// Creates a new address with an id from the process-wide generator
    ///
    /// An empty `line2` is stored as absent.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        address_type: impl Into<AddressType>,
        line1: impl Into<String>,
        line2: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self::issue(
            &IdGenerator::global(),
            address_type.into(),
            line1.into(),
            line2.into(),
            city.into(),
            state.into(),
            country.into(),
            postal_code.into(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn issue(
        ids: &IdGenerator,
        address_type: AddressType,
        line1: String,
        line2: String,
        city: String,
        state: String,
        country: String,
        postal_code: String,
    ) -> Self {
        let id = ids.next_address_id();
        debug!(address_id = %id, %address_type, "Address created");
        Self {
            id,
            address_type,
            line1,
            line2: Some(line2).filter(|l| !l.is_empty()),
            city,
            state,
            country,
            postal_code,
        }
    }

    pub fn id(&self) -> AddressId {
        self.id
    }

    pub fn address_type(&self) -> &AddressType {
        &self.address_type
    }

    pub fn line1(&self) -> &str {
        &self.line1
    }

    pub fn line2(&self) -> Option<&str> {
        self.line2.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Formats address as a multi-line postal label
    pub fn format(&self) -> String {
        let mut lines = vec![self.line1.clone()];
        if let Some(l2) = &self.line2 {
            lines.push(l2.clone());
        }
        lines.push(format!("{}, {} {}", self.city, self.state, self.postal_code));
        lines.push(self.country.clone());
        lines.join("\n")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Address{{id:{}, type:{}, line1:{}, line2:{}, city:{}, state:{}, country:{}, postal:{}}}",
            self.id,
            self.address_type,
            self.line1,
            self.line2.as_deref().unwrap_or(""),
            self.city,
            self.state,
            self.country,
            self.postal_code,
        )
    }
}
