//! Payment Collaborator Port
//!
//! This crate wraps an external payment provider behind the
//! [`PaymentGateway`] trait. It sits beside the party directory and shares
//! no data with it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_payment::{PaymentService, MockPaymentGateway};
//!
//! let service = PaymentService::new(Arc::new(MockPaymentGateway::new()));
//! let client_secret = service.create_payment_intent(2_500, "usd").await?;
//! ```

pub mod error;
pub mod gateway;
pub mod service;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::PaymentError;
pub use gateway::{IntentStatus, PaymentGateway, PaymentIntent};
pub use service::PaymentService;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockPaymentGateway;
