use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Bank service unavailable: {0}")]
    BankUnavailable(String),
    #[error("Payment {0} not found")]
    NotFound(Uuid),
    #[error("Incomplete payment outcome: {0}")]
    IncompleteOutcome(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
