use super::validator::ValidationError;
use crate::error::{PaymentError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Authorization code recorded on payments that never reached the bank.
pub const NOT_AUTHORIZED_CODE: &str = "NA";

/// A card payment as submitted by a merchant.
///
/// Amounts are expressed in minor currency units (e.g. cents for USD, so $10.50 is `1050`).
/// Missing or `null` fields fall back to their defaults so that validation, rather than
/// decoding, reports what is wrong with the request.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub card_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub expiry_month: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub expiry_year: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub cvv: u32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl PaymentRequest {
    /// The last four characters of the card number, or an empty string for shorter input.
    pub fn card_number_last_four(&self) -> String {
        last_four(&self.card_number)
    }
}

pub(crate) fn last_four(card_number: &str) -> String {
    let len = card_number.chars().count();
    if len < 4 {
        return String::new();
    }
    card_number.chars().skip(len - 4).collect()
}

pub(crate) fn mask_card_number(card_number: &str) -> String {
    let len = card_number.chars().count();
    if len < 4 {
        return "*".repeat(len);
    }
    format!("{}{}", "*".repeat(len - 4), last_four(card_number))
}

impl fmt::Debug for PaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentRequest")
            .field("card_number", &mask_card_number(&self.card_number))
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("cvv", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Authorized,
    Declined,
    Rejected,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentStatus::Authorized => "Authorized",
            PaymentStatus::Declined => "Declined",
            PaymentStatus::Rejected => "Rejected",
        };
        f.write_str(name)
    }
}

/// The recorded result of one processing attempt.
///
/// Outcomes are immutable: they can only be built through [`PaymentOutcome::authorized`],
/// [`PaymentOutcome::declined`] and [`PaymentOutcome::rejected`], each of which assigns a
/// fresh identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome {
    id: Uuid,
    authorization_code: Option<String>,
    status: PaymentStatus,
    card_number_last_four: String,
    expiry_month: i32,
    expiry_year: i32,
    currency: String,
    amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection_reason: Option<String>,
}

impl PaymentOutcome {
    /// Records a payment the bank authorized. Fails if the bank's code is empty.
    pub fn authorized(request: &PaymentRequest, authorization_code: String) -> Result<Self> {
        if authorization_code.trim().is_empty() {
            return Err(PaymentError::IncompleteOutcome(
                "an authorized payment requires an authorization code".to_string(),
            ));
        }
        Ok(Self::from_request(
            request,
            PaymentStatus::Authorized,
            Some(authorization_code),
            None,
        ))
    }

    /// Records a payment the bank declined.
    pub fn declined(request: &PaymentRequest) -> Self {
        Self::from_request(request, PaymentStatus::Declined, None, None)
    }

    /// Records a payment that failed validation and was never sent to the bank.
    pub fn rejected(request: &PaymentRequest, reason: &ValidationError) -> Self {
        Self::from_request(
            request,
            PaymentStatus::Rejected,
            Some(NOT_AUTHORIZED_CODE.to_string()),
            Some(reason.to_string()),
        )
    }

    fn from_request(
        request: &PaymentRequest,
        status: PaymentStatus,
        authorization_code: Option<String>,
        rejection_reason: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            authorization_code,
            status,
            card_number_last_four: request.card_number_last_four(),
            expiry_month: request.expiry_month,
            expiry_year: request.expiry_year,
            currency: request.currency.clone(),
            amount: request.amount,
            rejection_reason,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn authorization_code(&self) -> Option<&str> {
        self.authorization_code.as_deref()
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn card_number_last_four(&self) -> &str {
        &self.card_number_last_four
    }

    pub fn expiry_month(&self) -> i32 {
        self.expiry_month
    }

    pub fn expiry_year(&self) -> i32 {
        self.expiry_year
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }
}
