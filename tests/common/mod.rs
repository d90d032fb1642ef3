#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use payment_gateway::application::processor::PaymentProcessor;
use payment_gateway::domain::bank::BankDecision;
use payment_gateway::domain::payment::PaymentRequest;
use payment_gateway::domain::ports::BankGateway;
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A bank that always gives the same answer and counts how often it was asked.
#[derive(Clone)]
pub struct ScriptedBank {
    decision: BankDecision,
    calls: Arc<AtomicUsize>,
}

impl ScriptedBank {
    pub fn new(decision: BankDecision) -> Self {
        Self {
            decision,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn authorizing(code: &str) -> Self {
        Self::new(BankDecision::Authorized {
            authorization_code: code.to_string(),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BankGateway for ScriptedBank {
    async fn authorize(&self, _request: &PaymentRequest) -> BankDecision {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.decision.clone()
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

pub fn valid_request() -> PaymentRequest {
    PaymentRequest {
        card_number: "4532015112830366".to_string(),
        expiry_month: 12,
        expiry_year: 2027,
        currency: "USD".to_string(),
        amount: 1050,
        cvv: 123,
    }
}

pub fn processor_with(bank: ScriptedBank) -> (Arc<PaymentProcessor>, InMemoryPaymentStore) {
    let store = InMemoryPaymentStore::new();
    let processor = PaymentProcessor::new(Box::new(store.clone()), Box::new(bank))
        .with_clock(fixed_now);
    (Arc::new(processor), store)
}
