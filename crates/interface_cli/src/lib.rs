//! Party Directory Command-Line Interface
//!
//! Wires the directory crates together: configuration from the environment,
//! a tracing subscriber, and the sample customer/vendor directory printed by
//! the `party-directory` binary.

pub mod config;
pub mod error;
pub mod logging;

use tracing::info;

use domain_party::{Party, PartyError, PartyFactory, PartyStatus, PartyType};

pub use error::CliError;

/// Builds the sample directory: one customer and one vendor
///
/// # Errors
///
/// Returns `PartyError` if any sample contact fails validation
pub fn sample_directory(factory: &PartyFactory) -> Result<Vec<Party>, PartyError> {
    let mut customer = factory.party(
        "Alice Johnson",
        PartyType::Person,
        "Customer",
        PartyStatus::Active,
    )?;
    customer.add_address(factory.address(
        "Bill_To",
        "123 Billing St",
        "Suite 100",
        "New York",
        "NY",
        "USA",
        "10001",
    ));
    customer.add_address(factory.address(
        "Ship_To",
        "456 Shipping Ave",
        "",
        "Brooklyn",
        "NY",
        "USA",
        "11201",
    ));
    customer.add_communication(factory.communication("Email", "alice@example.com")?);
    customer.add_communication(factory.communication("Phone", "+1-555-123-4567")?);

    let mut vendor = factory.party(
        "Tech Supplies Inc.",
        PartyType::Organization,
        "Vendor",
        PartyStatus::Active,
    )?;
    vendor.add_address(factory.address(
        "Bill_To",
        "789 Tech Blvd",
        "",
        "San Jose",
        "CA",
        "USA",
        "95112",
    ));
    vendor.add_address(factory.address(
        "Ship_To",
        "321 Supply Rd",
        "",
        "Fremont",
        "CA",
        "USA",
        "94536",
    ));
    vendor.add_communication(factory.communication("Fax", "+1-555-987-6543")?);
    vendor.add_communication(factory.communication("Email", "support@techsupplies.com")?);

    info!(
        customer = %customer.number(),
        vendor = %vendor.number(),
        "Sample directory assembled"
    );
    Ok(vec![customer, vendor])
}
