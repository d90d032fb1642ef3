use payment_gateway::domain::bank::BankDecision;
use payment_gateway::domain::payment::{PaymentOutcome, PaymentStatus};
use payment_gateway::domain::ports::{PaymentStore, PaymentStoreBox, PaymentStoreFactory};
use payment_gateway::error::PaymentError;
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use std::collections::HashSet;

mod common;
use common::ScriptedBank;

#[tokio::test]
async fn test_store_as_trait_object_across_tasks() {
    let store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let outcome = PaymentOutcome::declined(&common::valid_request());
    let id = outcome.id();

    // Verify Send + Sync by moving the boxed store into a task
    let handle = tokio::spawn(async move {
        store.add(outcome).await.unwrap();
        store.get(id).await.unwrap().unwrap()
    });

    let retrieved = handle.await.unwrap();
    assert_eq!(retrieved.id(), id);
    assert_eq!(retrieved.status(), PaymentStatus::Declined);
}

#[tokio::test]
async fn test_factory_instantiation() {
    let factory: PaymentStoreFactory =
        Box::new(|| Box::new(InMemoryPaymentStore::new()) as PaymentStoreBox);

    let first = factory();
    let second = factory();
    first
        .add(PaymentOutcome::declined(&common::valid_request()))
        .await
        .unwrap();

    assert_eq!(first.len().await.unwrap(), 1);
    assert!(second.is_empty().await.unwrap());
}

#[tokio::test]
async fn test_concurrent_processing_records_every_payment() {
    let bank = ScriptedBank::authorizing("AUTH12345");
    let (processor, store) = common::processor_with(bank.clone());

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let processor = processor.clone();
            tokio::spawn(async move {
                processor
                    .process_payment(common::valid_request())
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let outcome = handle.await.unwrap();
        assert!(store.get(outcome.id()).await.unwrap().is_some());
        ids.insert(outcome.id());
    }

    assert_eq!(ids.len(), 50);
    assert_eq!(store.len().await.unwrap(), 50);
    assert_eq!(bank.calls(), 50);
}

#[tokio::test]
async fn test_lookup_of_unknown_payment() {
    let (processor, _store) = common::processor_with(ScriptedBank::new(BankDecision::Declined));

    let result = processor.get_payment(uuid::Uuid::new_v4()).await;

    assert!(matches!(result, Err(PaymentError::NotFound(_))));
}
