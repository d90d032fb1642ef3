use crate::domain::payment::PaymentOutcome;
use crate::domain::ports::PaymentStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A thread-safe in-memory store for payment outcomes.
///
/// Uses `Arc<RwLock<HashMap<Uuid, PaymentOutcome>>>` so clones share the same payments.
/// Contents live as long as the process; nothing is evicted.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<Uuid, PaymentOutcome>>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn add(&self, outcome: PaymentOutcome) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.insert(outcome.id(), outcome);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<PaymentOutcome>> {
        let payments = self.payments.read().await;
        Ok(payments.get(&id).cloned())
    }

    async fn len(&self) -> Result<usize> {
        let payments = self.payments.read().await;
        Ok(payments.len())
    }
}
