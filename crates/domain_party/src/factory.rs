//! Construction with injected services
//!
//! The free constructors (`Party::new`, `Address::new`) draw ids from the
//! process-wide generator and read the system clock. A [`PartyFactory`]
//! does the same work against an id generator and clock of the caller's
//! choosing, which is how tests get reproducible ids and numbers.

use std::sync::Arc;

use core_kernel::{Clock, IdGenerator, SystemClock};

use crate::address::{Address, AddressType};
use crate::communication::Communication;
use crate::error::PartyError;
use crate::party::{Party, PartyGroup, PartyStatus, PartyType};

/// Builds directory entities from an owned id generator and clock
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use core_kernel::{FixedClock, IdGenerator};
/// use domain_party::{PartyFactory, PartyStatus, PartyType};
///
/// let factory = PartyFactory::new(
///     Arc::new(IdGenerator::new()),
///     Arc::new(FixedClock::new(1_700_000_000_000)),
/// );
/// let vendor = factory
///     .party("Tech Supplies Inc.", PartyType::Organization, "Vendor", PartyStatus::Active)
///     .unwrap();
/// assert_eq!(vendor.id().value(), 1);
/// assert_eq!(vendor.number().as_str(), "VE_1700000000000");
/// ```
#[derive(Debug, Clone)]
pub struct PartyFactory {
    ids: Arc<IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl PartyFactory {
    pub fn new(ids: Arc<IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }

    /// Factory equivalent to the free constructors
    pub fn system() -> Self {
        Self::new(IdGenerator::global(), Arc::new(SystemClock))
    }

    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Creates an address; an empty `line2` is stored as absent
    #[allow(clippy::too_many_arguments)]
    pub fn address(
        &self,
        address_type: impl Into<AddressType>,
        line1: impl Into<String>,
        line2: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Address {
        Address::issue(
            &self.ids,
            address_type.into(),
            line1.into(),
            line2.into(),
            city.into(),
            state.into(),
            country.into(),
            postal_code.into(),
        )
    }

    /// Creates a validated communication
    ///
    /// Communications carry no id, so this is the same as
    /// [`Communication::new`]; it exists so callers can build a whole
    /// directory through one handle.
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidContact` if the contact is malformed or the
    /// type is unknown
    pub fn communication(
        &self,
        contact_type: &str,
        contact: impl Into<String>,
    ) -> Result<Communication, PartyError> {
        Communication::new(contact_type, contact)
    }

    /// Creates a party
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidArgument` if the group name is shorter
    /// than two characters
    pub fn party(
        &self,
        name: impl Into<String>,
        party_type: PartyType,
        group: impl Into<PartyGroup>,
        status: PartyStatus,
    ) -> Result<Party, PartyError> {
        Party::issue(
            &self.ids,
            self.clock.as_ref(),
            name.into(),
            party_type,
            group.into(),
            status,
        )
    }
}

impl Default for PartyFactory {
    fn default() -> Self {
        Self::system()
    }
}
