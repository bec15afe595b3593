use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::health::handlers::health_check;
use crate::features::health::services::HealthService;

/// Create routes for the health feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<HealthService>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .with_state(service)
}
