//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! party directory test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built parties, addresses and communications
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for rendered output and errors
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
