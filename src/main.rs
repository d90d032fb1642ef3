use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_gateway::application::processor::PaymentProcessor;
use payment_gateway::config::{Config, LogFormat};
use payment_gateway::domain::ports::{BankGatewayBox, PaymentStoreBox};
use payment_gateway::infrastructure::bank_client::HttpBankClient;
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use payment_gateway::interfaces::http::router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().into_diagnostic()?;
    init_tracing(config.log_format);

    let payment_store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let bank_client = HttpBankClient::new(
        &config.bank_url,
        config.bank_timeout(),
        config.bank_connect_timeout(),
    )
    .into_diagnostic()?;
    let bank_endpoint = bank_client.payments_url().to_string();
    let bank_gateway: BankGatewayBox = Box::new(bank_client);
    let processor = Arc::new(PaymentProcessor::new(payment_store, bank_gateway));

    let listener = TcpListener::bind(config.listen).await.into_diagnostic()?;
    tracing::info!(addr = %config.listen, bank = %bank_endpoint, "Payment gateway listening");

    axum::serve(listener, router(processor))
        .await
        .into_diagnostic()?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
