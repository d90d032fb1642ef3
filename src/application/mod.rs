//! Application layer containing the payment-processing orchestration.
//!
//! This module defines the `PaymentProcessor`, which validates requests, asks the bank
//! for a decision and records every outcome in the injected store.

pub mod processor;
