use super::bank::BankDecision;
use super::payment::{PaymentOutcome, PaymentRequest};
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn add(&self, outcome: PaymentOutcome) -> Result<()>;
    async fn get(&self, id: Uuid) -> Result<Option<PaymentOutcome>>;
    /// Number of recorded outcomes. A diagnostics hook; processing never reads it.
    async fn len(&self) -> Result<usize>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

/// Talks to the acquiring bank. Implementations make exactly one call per invocation.
#[async_trait]
pub trait BankGateway: Send + Sync {
    async fn authorize(&self, request: &PaymentRequest) -> BankDecision;
}

pub type PaymentStoreBox = Box<dyn PaymentStore>;
pub type BankGatewayBox = Box<dyn BankGateway>;
pub type PaymentStoreFactory = Box<dyn Fn() -> PaymentStoreBox + Send + Sync>;
