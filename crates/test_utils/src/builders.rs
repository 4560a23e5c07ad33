//! Test Data Builders
//!
//! Builders with sensible defaults so a test only spells out the fields it
//! cares about.

use domain_party::{Address, AddressType, Party, PartyError, PartyFactory, PartyGroup, PartyStatus, PartyType};

/// Builder for addresses
pub struct TestAddressBuilder {
    address_type: AddressType,
    line1: String,
    line2: String,
    city: String,
    state: String,
    country: String,
    postal_code: String,
}

impl Default for TestAddressBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAddressBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            address_type: AddressType::BillTo,
            line1: "1 Test Way".to_string(),
            line2: String::new(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            country: "USA".to_string(),
            postal_code: "62701".to_string(),
        }
    }

    pub fn with_type(mut self, address_type: impl Into<AddressType>) -> Self {
        self.address_type = address_type.into();
        self
    }

    pub fn with_line1(mut self, line1: impl Into<String>) -> Self {
        self.line1 = line1.into();
        self
    }

    pub fn with_line2(mut self, line2: impl Into<String>) -> Self {
        self.line2 = line2.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    /// Builds the address, drawing its id from `factory`
    pub fn build(self, factory: &PartyFactory) -> Address {
        factory.address(
            self.address_type,
            self.line1,
            self.line2,
            self.city,
            self.state,
            self.country,
            self.postal_code,
        )
    }
}

/// Builder for parties
pub struct TestPartyBuilder {
    name: String,
    party_type: PartyType,
    group: PartyGroup,
    status: PartyStatus,
}

impl Default for TestPartyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPartyBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: "Test Party".to_string(),
            party_type: PartyType::Person,
            group: PartyGroup::Customer,
            status: PartyStatus::Active,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_type(mut self, party_type: PartyType) -> Self {
        self.party_type = party_type;
        self
    }

    pub fn with_group(mut self, group: impl Into<PartyGroup>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_status(mut self, status: PartyStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the party through `factory`
    pub fn build(self, factory: &PartyFactory) -> Result<Party, PartyError> {
        factory.party(self.name, self.party_type, self.group, self.status)
    }
}
