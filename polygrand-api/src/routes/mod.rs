//! Stub routes

mod health;

use axum::Router;

/// Create all stub routes
pub fn router() -> Router {
    health::routes()
}
