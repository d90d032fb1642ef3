use super::payment::{PaymentRequest, mask_card_number};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Request body expected by the acquiring bank.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct BankAuthorizationRequest {
    pub card_number: String,
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: u32,
}

impl From<&PaymentRequest> for BankAuthorizationRequest {
    fn from(request: &PaymentRequest) -> Self {
        Self {
            card_number: request.card_number.clone(),
            expiry_date: format_expiry_date(request.expiry_month, request.expiry_year),
            currency: request.currency.clone(),
            amount: request.amount,
            cvv: request.cvv,
        }
    }
}

impl fmt::Debug for BankAuthorizationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankAuthorizationRequest")
            .field("card_number", &mask_card_number(&self.card_number))
            .field("expiry_date", &self.expiry_date)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("cvv", &"***")
            .finish()
    }
}

/// Formats an expiry as the bank's zero-padded `MM/YY`.
pub fn format_expiry_date(month: i32, year: i32) -> String {
    format!("{:02}/{:02}", month, year.rem_euclid(100))
}

/// Response body returned by the acquiring bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAuthorizationResult {
    pub authorized: bool,
    #[serde(default)]
    pub authorization_code: Option<String>,
}

/// What a bank call amounted to.
///
/// `Declined` is a business answer and becomes a stored payment; `Unavailable` means the
/// bank could not give an answer at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankDecision {
    Authorized { authorization_code: String },
    Declined,
    Unavailable { reason: String },
}

impl From<BankAuthorizationResult> for BankDecision {
    fn from(result: BankAuthorizationResult) -> Self {
        match result {
            BankAuthorizationResult {
                authorized: true,
                authorization_code: Some(code),
            } if !code.trim().is_empty() => BankDecision::Authorized {
                authorization_code: code,
            },
            BankAuthorizationResult {
                authorized: true, ..
            } => BankDecision::Unavailable {
                reason: "bank authorized the payment without an authorization code".to_string(),
            },
            BankAuthorizationResult {
                authorized: false, ..
            } => BankDecision::Declined,
        }
    }
}
