use crate::domain::bank::BankDecision;
use crate::domain::payment::{PaymentOutcome, PaymentRequest};
use crate::domain::ports::{BankGatewayBox, PaymentStoreBox};
use crate::domain::validator;
use crate::error::{PaymentError, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// The entry point for processing card payments.
///
/// `PaymentProcessor` owns the storage backend and the bank gateway. It decides which
/// failures become data (rejected payments) and which are returned as errors: validation
/// failures are recorded, while an unreachable bank aborts the attempt without recording
/// anything.
pub struct PaymentProcessor {
    payment_store: PaymentStoreBox,
    bank_gateway: BankGatewayBox,
    clock: fn() -> DateTime<Utc>,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor` instance.
    ///
    /// # Arguments
    ///
    /// * `payment_store` - The store outcomes are recorded in.
    /// * `bank_gateway` - The client used to obtain authorization decisions.
    pub fn new(payment_store: PaymentStoreBox, bank_gateway: BankGatewayBox) -> Self {
        Self {
            payment_store,
            bank_gateway,
            clock: Utc::now,
        }
    }

    /// Replaces the clock used to decide whether a card has expired.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Processes a payment and records its outcome.
    ///
    /// Returns `PaymentError::BankUnavailable` if the bank could not be reached or gave an
    /// unusable answer; nothing is stored in that case.
    pub async fn process_payment(&self, request: PaymentRequest) -> Result<PaymentOutcome> {
        let outcome = match validator::validate(&request, (self.clock)()) {
            Err(reason) => {
                warn!(%reason, "Rejecting payment that failed validation");
                PaymentOutcome::rejected(&request, &reason)
            }
            Ok(()) => match self.bank_gateway.authorize(&request).await {
                BankDecision::Authorized { authorization_code } => {
                    PaymentOutcome::authorized(&request, authorization_code)?
                }
                BankDecision::Declined => PaymentOutcome::declined(&request),
                BankDecision::Unavailable { reason } => {
                    error!(%reason, "Bank unavailable, payment not recorded");
                    return Err(PaymentError::BankUnavailable(reason));
                }
            },
        };

        self.payment_store.add(outcome.clone()).await?;
        info!(id = %outcome.id(), status = %outcome.status(), "Payment processed");
        Ok(outcome)
    }

    /// Looks up a previously recorded payment.
    pub async fn get_payment(&self, id: Uuid) -> Result<PaymentOutcome> {
        debug!(%id, "Looking up payment");
        self.payment_store
            .get(id)
            .await?
            .ok_or(PaymentError::NotFound(id))
    }
}
