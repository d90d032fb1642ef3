use crate::error::{PaymentError, Result};
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::time::Duration;

/// Card payment gateway: validates payments, authorizes them with the acquiring bank and
/// serves the recorded outcomes.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Base URL of the acquiring bank
    #[arg(long, env = "BANK_SIMULATOR_URL", default_value = "http://localhost:8080")]
    pub bank_url: String,

    /// Address the HTTP API listens on
    #[arg(long, env = "GATEWAY_LISTEN_ADDR", default_value = "0.0.0.0:8090")]
    pub listen: SocketAddr,

    /// Upper bound on a whole bank call, in seconds
    #[arg(long, env = "BANK_TIMEOUT_SECS", default_value_t = 10)]
    pub bank_timeout_secs: u64,

    /// Upper bound on establishing a bank connection, in seconds
    #[arg(long, env = "BANK_CONNECT_TIMEOUT_SECS", default_value_t = 5)]
    pub bank_connect_timeout_secs: u64,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let bank_url = self.bank_url.trim();
        if bank_url.is_empty() {
            return Err(PaymentError::Configuration(
                "bank URL cannot be empty".to_string(),
            ));
        }
        if !bank_url.starts_with("http://") && !bank_url.starts_with("https://") {
            return Err(PaymentError::Configuration(format!(
                "bank URL must use http or https, got {}",
                self.bank_url
            )));
        }

        if self.bank_timeout_secs == 0 {
            return Err(PaymentError::Configuration(
                "bank timeout must be greater than zero".to_string(),
            ));
        }
        if self.bank_connect_timeout_secs == 0 {
            return Err(PaymentError::Configuration(
                "bank connect timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bank_timeout(&self) -> Duration {
        Duration::from_secs(self.bank_timeout_secs)
    }

    pub fn bank_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.bank_connect_timeout_secs)
    }
}
