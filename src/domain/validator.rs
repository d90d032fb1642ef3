//! Business rules a payment must satisfy before it is sent to the bank.
//!
//! Rules are checked in a fixed order and the first failure wins, so the error a merchant
//! sees always points at the earliest offending field.

use super::payment::PaymentRequest;
use chrono::{DateTime, Datelike, Utc};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const SUPPORTED_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

const CARD_NUMBER_LENGTH: RangeInclusive<usize> = 14..=19;
const CVV_LENGTH: RangeInclusive<usize> = 3..=4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Card number is required")]
    MissingCardNumber,
    #[error("Card number must be 14 to 19 digits long, but got {0}")]
    CardNumberLength(usize),
    #[error("Card number must contain only numeric characters")]
    NonNumericCardNumber,
    #[error("Expiry month must be between 1 and 12, but got {0}")]
    ExpiryMonthOutOfRange(i32),
    #[error("Card expiry date {month}/{year} is in the past")]
    ExpiredCard { month: i32, year: i32 },
    #[error("Currency is required")]
    MissingCurrency,
    #[error("Currency must be a 3-character code, but got '{0}'")]
    CurrencyLength(String),
    #[error("Currency must contain only uppercase letters, but got '{0}'")]
    CurrencyNotUppercase(String),
    #[error("Currency '{0}' is not supported. Allowed currencies: {allowed}", allowed = SUPPORTED_CURRENCIES.join(", "))]
    UnsupportedCurrency(String),
    #[error("Amount must be a positive integer, but got {0}")]
    NonPositiveAmount(i64),
    #[error("CVV must be 3 to 4 digits long, but got {0}")]
    CvvLength(usize),
}

/// Checks `request` against every rule, judging expiry relative to `now`.
pub fn validate(request: &PaymentRequest, now: DateTime<Utc>) -> Result<(), ValidationError> {
    validate_card_number(&request.card_number)?;
    validate_expiry_date(request.expiry_month, request.expiry_year, now)?;
    validate_currency(&request.currency)?;
    validate_amount(request.amount)?;
    validate_cvv(request.cvv)
}

fn validate_card_number(card_number: &str) -> Result<(), ValidationError> {
    if card_number.is_empty() {
        return Err(ValidationError::MissingCardNumber);
    }

    let len = card_number.chars().count();
    if !CARD_NUMBER_LENGTH.contains(&len) {
        return Err(ValidationError::CardNumberLength(len));
    }

    if !card_number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NonNumericCardNumber);
    }
    Ok(())
}

fn validate_expiry_date(month: i32, year: i32, now: DateTime<Utc>) -> Result<(), ValidationError> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::ExpiryMonthOutOfRange(month));
    }

    // Month granularity: a card expiring this month is still valid.
    if (year, month) < (now.year(), now.month() as i32) {
        return Err(ValidationError::ExpiredCard { month, year });
    }
    Ok(())
}

fn validate_currency(currency: &str) -> Result<(), ValidationError> {
    if currency.is_empty() {
        return Err(ValidationError::MissingCurrency);
    }

    if currency.chars().count() != 3 {
        return Err(ValidationError::CurrencyLength(currency.to_string()));
    }

    if !currency.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::CurrencyNotUppercase(currency.to_string()));
    }

    if !SUPPORTED_CURRENCIES.contains(&currency) {
        return Err(ValidationError::UnsupportedCurrency(currency.to_string()));
    }
    Ok(())
}

fn validate_amount(amount: i64) -> Result<(), ValidationError> {
    if amount <= 0 {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    Ok(())
}

fn validate_cvv(cvv: u32) -> Result<(), ValidationError> {
    let len = cvv.to_string().len();
    if !CVV_LENGTH.contains(&len) {
        return Err(ValidationError::CvvLength(len));
    }
    Ok(())
}
