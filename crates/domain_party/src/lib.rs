//! Party Directory Domain
//!
//! This crate models the party directory: people and organizations
//! ([`Party`]) together with the postal addresses ([`Address`]) and contact
//! channels ([`Communication`]) they own.
//!
//! # Model
//!
//! - **Party**: aggregate root with a sequential id, a derived business
//!   number, and append-only lists of children
//! - **Address**: postal address with its own sequential id
//! - **Communication**: email, phone or fax entry, validated on construction
//!
//! Every entity renders to a stable one-line string through `Display`.
//!
//! # Examples
//!
//! ```rust
//! use domain_party::{Address, Communication, Party, PartyStatus, PartyType};
//!
//! let mut vendor = Party::new("Tech Supplies Inc.", PartyType::Organization, "Vendor", PartyStatus::Active)?;
//! vendor.add_address(Address::new("Bill_To", "789 Tech Blvd", "", "San Jose", "CA", "USA", "95112"));
//! vendor.add_communication(Communication::new("Fax", "+1-555-987-6543")?);
//! vendor.add_communication(Communication::new("Email", "support@techsupplies.com")?);
//!
//! assert_eq!(vendor.communications().len(), 2);
//! assert!(vendor.number().as_str().starts_with("VE_"));
//! # Ok::<(), domain_party::PartyError>(())
//! ```

pub mod party;
pub mod address;
pub mod communication;
pub mod collection;
pub mod number;
pub mod factory;
pub mod error;
pub mod validation;

pub use party::{Party, PartyType, PartyGroup, PartyStatus};
pub use address::{Address, AddressType};
pub use communication::{Communication, ContactType};
pub use collection::AppendOnly;
pub use number::PartyNumber;
pub use factory::PartyFactory;
pub use error::PartyError;
pub use validation::ContactValidator;
