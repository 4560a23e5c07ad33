//! Pre-built Test Fixtures
//!
//! Ready-to-use directory data mirroring the sample customer and vendor.
//! Fixtures take a [`PartyFactory`] so callers decide which id generator and
//! clock they run against.

use std::sync::Arc;

use core_kernel::{FixedClock, IdGenerator};
use domain_party::{Address, Communication, Party, PartyFactory, PartyStatus, PartyType};

/// Epoch millis used by every fixture clock (2023-11-14T22:13:20Z)
pub const FIXTURE_MILLIS: i64 = 1_700_000_000_000;

/// Creates a factory with a fresh id generator and a clock pinned to
/// [`FIXTURE_MILLIS`]
pub fn isolated_factory() -> PartyFactory {
    PartyFactory::new(
        Arc::new(IdGenerator::new()),
        Arc::new(FixedClock::new(FIXTURE_MILLIS)),
    )
}

/// Fixture for address test data
pub struct AddressFixtures;

impl AddressFixtures {
    /// Customer billing address with a second line
    pub fn billing(factory: &PartyFactory) -> Address {
        factory.address("Bill_To", "123 Billing St", "Suite 100", "New York", "NY", "USA", "10001")
    }

    /// Customer shipping address without a second line
    pub fn shipping(factory: &PartyFactory) -> Address {
        factory.address("Ship_To", "456 Shipping Ave", "", "Brooklyn", "NY", "USA", "11201")
    }

    /// Vendor billing address
    pub fn vendor_billing(factory: &PartyFactory) -> Address {
        factory.address("Bill_To", "789 Tech Blvd", "", "San Jose", "CA", "USA", "95112")
    }
}

/// Fixture for communication test data
pub struct CommunicationFixtures;

impl CommunicationFixtures {
    pub fn email() -> Communication {
        Communication::new("Email", "alice@example.com").expect("fixture email is valid")
    }

    pub fn phone() -> Communication {
        Communication::new("Phone", "+1-555-123-4567").expect("fixture phone is valid")
    }

    pub fn fax() -> Communication {
        Communication::new("Fax", "+1-555-987-6543").expect("fixture fax is valid")
    }
}

/// Fixture for party test data
pub struct PartyFixtures;

impl PartyFixtures {
    /// Alice Johnson with no children attached
    pub fn bare_customer(factory: &PartyFactory) -> Party {
        factory
            .party("Alice Johnson", PartyType::Person, "Customer", PartyStatus::Active)
            .expect("fixture customer is valid")
    }

    /// Alice Johnson with billing address and email attached
    pub fn customer(factory: &PartyFactory) -> Party {
        let mut party = Self::bare_customer(factory);
        party.add_address(AddressFixtures::billing(factory));
        party.add_communication(CommunicationFixtures::email());
        party
    }

    /// Tech Supplies Inc. with billing address, fax and email attached
    pub fn vendor(factory: &PartyFactory) -> Party {
        let mut party = factory
            .party("Tech Supplies Inc.", PartyType::Organization, "Vendor", PartyStatus::Active)
            .expect("fixture vendor is valid");
        party.add_address(AddressFixtures::vendor_billing(factory));
        party.add_communication(CommunicationFixtures::fax());
        party.add_communication(
            Communication::new("Email", "support@techsupplies.com").expect("fixture email is valid"),
        );
        party
    }
}
