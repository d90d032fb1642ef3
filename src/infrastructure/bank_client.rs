use crate::domain::bank::{BankAuthorizationRequest, BankAuthorizationResult, BankDecision};
use crate::domain::payment::PaymentRequest;
use crate::domain::ports::BankGateway;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{error, info, warn};

/// HTTP client for the acquiring bank's `POST /payments` endpoint.
pub struct HttpBankClient {
    client: Client,
    payments_url: String,
}

impl HttpBankClient {
    /// Builds a client for the bank at `base_url`.
    ///
    /// `timeout` bounds the whole call; hitting it is reported as the bank being
    /// unavailable, like any other transport failure.
    pub fn new(base_url: &str, timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            payments_url: format!("{}/payments", base_url.trim_end_matches('/')),
        })
    }

    /// The resolved authorization endpoint, logged at startup.
    pub fn payments_url(&self) -> &str {
        &self.payments_url
    }
}

#[async_trait]
impl BankGateway for HttpBankClient {
    async fn authorize(&self, request: &PaymentRequest) -> BankDecision {
        let bank_request = BankAuthorizationRequest::from(request);

        info!(url = %self.payments_url, request = ?bank_request, "Calling bank");
        let response = match self
            .client
            .post(&self.payments_url)
            .json(&bank_request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Bank call failed");
                return BankDecision::Unavailable {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status();
        // The bank answers 400 when it refuses the card details; that is a decline, not an outage.
        if status == StatusCode::BAD_REQUEST {
            warn!("Bank returned 400 Bad Request, treating as a decline");
            return BankDecision::Declined;
        }
        if !status.is_success() {
            error!(%status, "Bank returned an error status");
            return BankDecision::Unavailable {
                reason: format!("bank responded with {status}"),
            };
        }

        match response.json::<BankAuthorizationResult>().await {
            Ok(result) => {
                info!(authorized = result.authorized, "Bank responded");
                BankDecision::from(result)
            }
            Err(e) => {
                error!(error = %e, "Bank response could not be decoded");
                BankDecision::Unavailable {
                    reason: format!("malformed bank response: {e}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payments_url_ignores_trailing_slash() {
        let timeout = Duration::from_secs(1);
        let client = HttpBankClient::new("http://localhost:8080/", timeout, timeout).unwrap();
        assert_eq!(client.payments_url(), "http://localhost:8080/payments");

        let client = HttpBankClient::new("http://localhost:8080", timeout, timeout).unwrap();
        assert_eq!(client.payments_url(), "http://localhost:8080/payments");
    }
}
