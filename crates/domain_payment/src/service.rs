//! Payment service
//!
//! Thin application-facing wrapper over a [`PaymentGateway`]. It checks
//! arguments before any provider round trip and hands back only what a
//! client needs.

use std::sync::Arc;

use tracing::{debug, instrument};

use core_kernel::Currency;

use crate::error::PaymentError;
use crate::gateway::PaymentGateway;

/// Payment operations exposed to callers
#[derive(Clone)]
pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Creates a payment intent and returns its client secret
    ///
    /// # Errors
    ///
    /// - `PaymentError::InvalidAmount` if `amount_in_cents` is not positive
    /// - `PaymentError::InvalidCurrency` if `currency` is not a supported ISO code
    /// - any error returned by the gateway
    #[instrument(skip(self))]
    pub async fn create_payment_intent(
        &self,
        amount_in_cents: i64,
        currency: &str,
    ) -> Result<String, PaymentError> {
        if amount_in_cents <= 0 {
            return Err(PaymentError::InvalidAmount(amount_in_cents));
        }
        let currency: Currency = currency
            .parse()
            .map_err(|_| PaymentError::InvalidCurrency(currency.to_string()))?;

        let intent = self
            .gateway
            .create_payment_intent(amount_in_cents, currency)
            .await?;
        debug!(intent_id = %intent.id, "Payment intent created");
        Ok(intent.client_secret)
    }

    /// Confirms a payment intent
    ///
    /// # Errors
    ///
    /// - `PaymentError::InvalidIntentId` if `intent_id` is blank
    /// - any error returned by the gateway
    #[instrument(skip(self))]
    pub async fn confirm_payment(&self, intent_id: &str) -> Result<bool, PaymentError> {
        if intent_id.trim().is_empty() {
            return Err(PaymentError::InvalidIntentId(intent_id.to_string()));
        }
        let confirmed = self.gateway.confirm_payment(intent_id).await?;
        debug!(confirmed, "Payment confirmation returned");
        Ok(confirmed)
    }
}
