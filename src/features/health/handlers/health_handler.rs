use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::features::health::dtos::{HealthErrorDto, HealthResponseDto};
use crate::features::health::services::HealthService;

/// Liveness probe
///
/// Reports the store's current time. Unlike the other endpoints the body is
/// not wrapped in `ApiResponse`, and a failure includes the error detail.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponseDto),
        (status = 500, description = "Store unreachable", body = HealthErrorDto)
    )
)]
pub async fn health_check(State(service): State<Arc<HealthService>>) -> Response {
    match service.store_time().await {
        Ok(time) => Json(HealthResponseDto {
            status: "ok".to_string(),
            time,
        })
        .into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthErrorDto {
                    status: "error".to_string(),
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;
    use std::sync::Arc;

    use crate::features::files::repositories::InMemoryFileRepository;
    use crate::features::health::{routes, HealthService};

    fn test_server() -> (TestServer, Arc<InMemoryFileRepository>) {
        let repository = Arc::new(InMemoryFileRepository::new());
        let service = Arc::new(HealthService::new(repository.clone()));
        (TestServer::new(routes(service)).unwrap(), repository)
    }

    #[tokio::test]
    async fn test_health_ok() {
        let (server, _) = test_server();

        let response = server.get("/api/health").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["status"], "ok");
        let time = body["time"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());
    }

    #[tokio::test]
    async fn test_health_reports_store_failure() {
        let (server, repository) = test_server();
        repository.set_unavailable(true);

        let response = server.get("/api/health").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<Value>();
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().starts_with("Database error"));
    }
}
