//! Health and contract placeholder endpoints

use axum::{response::Json, routing::get, Router};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Metadata for the deployed contract. Static until compiled TEAL is served.
#[derive(Debug, Serialize)]
struct ContractInfo {
    name: &'static str,
    description: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn contract() -> Json<ContractInfo> {
    Json(ContractInfo {
        name: "sample_contract",
        description: "Placeholder contract endpoint",
    })
}

pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/contract", get(contract))
}
