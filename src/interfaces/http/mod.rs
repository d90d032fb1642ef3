//! The inbound HTTP API.

pub mod error;
pub mod handlers;

use crate::application::processor::PaymentProcessor;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// State shared by every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<PaymentProcessor>,
}

pub fn router(processor: Arc<PaymentProcessor>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/payment", post(handlers::create_payment))
        .route("/payment/:id", get(handlers::get_payment))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { processor })
}
