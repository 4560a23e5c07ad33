//! Core Kernel - Foundational types shared by the directory crates
//!
//! This crate provides the building blocks used across the domain modules:
//! - Typed sequential identifiers and the id generator that issues them
//! - Injectable clocks
//! - ISO currency codes for the payment boundary

pub mod identifiers;
pub mod clock;
pub mod currency;
pub mod error;

pub use identifiers::{AddressId, PartyId, IdSequence, IdGenerator};
pub use clock::{Clock, SystemClock, FixedClock};
pub use currency::Currency;
pub use error::CoreError;
