//! In-memory payment gateway for tests

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use core_kernel::Currency;

use crate::error::PaymentError;
use crate::gateway::{IntentStatus, PaymentGateway, PaymentIntent};

/// In-memory mock implementation of PaymentGateway
///
/// Intents live in a map keyed by id. Confirming an intent succeeds once;
/// confirming it again returns `false`. A scripted failure, if set, is
/// returned by every call instead.
#[derive(Debug, Default)]
pub struct MockPaymentGateway {
    intents: Arc<RwLock<HashMap<String, PaymentIntent>>>,
    failure: Arc<RwLock<Option<PaymentError>>>,
}

impl MockPaymentGateway {
    /// Creates a new mock gateway
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with `error`
    pub async fn fail_with(&self, error: PaymentError) {
        *self.failure.write().await = Some(error);
    }

    /// Returns a snapshot of a stored intent
    pub async fn intent(&self, id: &str) -> Option<PaymentIntent> {
        self.intents.read().await.get(id).cloned()
    }

    pub async fn intent_count(&self) -> usize {
        self.intents.read().await.len()
    }

    async fn scripted_failure(&self) -> Result<(), PaymentError> {
        match self.failure.read().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: Currency,
    ) -> Result<PaymentIntent, PaymentError> {
        self.scripted_failure().await?;

        let id = format!("pi_{}", Uuid::new_v4().simple());
        let intent = PaymentIntent {
            client_secret: format!("{}_secret_{}", id, Uuid::new_v4().simple()),
            id: id.clone(),
            amount_minor,
            currency,
            status: IntentStatus::RequiresConfirmation,
        };
        self.intents.write().await.insert(id, intent.clone());
        Ok(intent)
    }

    async fn confirm_payment(&self, intent_id: &str) -> Result<bool, PaymentError> {
        self.scripted_failure().await?;

        let mut intents = self.intents.write().await;
        let intent = intents
            .get_mut(intent_id)
            .ok_or_else(|| PaymentError::IntentNotFound(intent_id.to_string()))?;
        match intent.status {
            IntentStatus::RequiresConfirmation => {
                intent.status = IntentStatus::Succeeded;
                Ok(true)
            }
            IntentStatus::Succeeded => Ok(false),
        }
    }
}
