//! Payment gateway port
//!
//! The [`PaymentGateway`] trait is the seam to whatever payment provider is
//! in use. Implementations translate these calls into the provider's SDK or
//! HTTP API; the directory domain never calls them directly.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use core_kernel::Currency;

use crate::error::PaymentError;

/// Lifecycle of a payment intent on the provider side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentStatus {
    RequiresConfirmation,
    Succeeded,
}

/// A provider-side payment intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Provider identifier of the intent
    pub id: String,
    /// Secret handed to the client to complete the payment
    pub client_secret: String,
    /// Amount in minor units
    pub amount_minor: i64,
    pub currency: Currency,
    pub status: IntentStatus,
}

/// Operations the payment provider must support
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates an intent to collect `amount_minor` in `currency`
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: Currency,
    ) -> Result<PaymentIntent, PaymentError>;

    /// Confirms a previously created intent, returning whether the provider
    /// accepted the confirmation
    async fn confirm_payment(&self, intent_id: &str) -> Result<bool, PaymentError>;
}
