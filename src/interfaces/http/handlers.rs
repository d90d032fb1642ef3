//! HTTP request handlers
//!
//! Each handler extracts its input, calls the `PaymentProcessor` and turns the result
//! into a response. Errors are rendered by the `IntoResponse` impl in `error.rs`.

use super::AppState;
use crate::domain::payment::{PaymentOutcome, PaymentRequest};
use crate::error::PaymentError;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Submit a payment for authorization
///
/// Rejected payments are a normal outcome and are returned with `200 OK` like any other;
/// only an unreachable bank produces an error response.
pub async fn create_payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentOutcome>, PaymentError> {
    let outcome = state.processor.process_payment(request).await?;
    Ok(Json(outcome))
}

/// Fetch a previously processed payment
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaymentOutcome>, PaymentError> {
    let outcome = state.processor.get_payment(id).await?;
    Ok(Json(outcome))
}
