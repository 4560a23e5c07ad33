//! Payment errors

use thiserror::Error;

/// Errors surfaced by the payment port
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Amounts are in minor units and must be positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),

    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("Invalid payment intent id: {0:?}")]
    InvalidIntentId(String),

    #[error("Payment intent not found: {0}")]
    IntentNotFound(String),

    /// The provider rejected or failed the request
    #[error("Payment provider error [{code}]: {message}")]
    Provider { code: String, message: String },
}

impl PaymentError {
    pub fn provider(code: impl Into<String>, message: impl Into<String>) -> Self {
        PaymentError::Provider {
            code: code.into(),
            message: message.into(),
        }
    }
}
