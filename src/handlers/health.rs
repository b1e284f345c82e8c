use crate::models::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// Verifies the storage backend is reachable. Returns 200 OK if it is,
/// 503 Service Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), (StatusCode, Json<UnhealthyResponse>)> {
    match state.store.health_check().await {
        Ok(_) => {
            tracing::debug!("Health check passed");
            Ok((
                StatusCode::OK,
                Json(HealthResponse {
                    status: "healthy".to_string(),
                }),
            ))
        }
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyResponse {
                    status: "unhealthy".to_string(),
                    error: "Cannot reach storage backend".to_string(),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Backend, Config};
    use crate::models::HealthResponse;
    use crate::routes;
    use crate::state::AppState;
    use crate::store::MemoryStore;
    use axum::{body::Body, http::Request, http::StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let config = Config {
            backend: Backend::Memory,
            database_path: "./data.db".to_string(),
            service_port: 8080,
            service_host: "0.0.0.0".to_string(),
        };

        let state = AppState {
            store: Arc::new(MemoryStore::new()),
            config: Arc::new(config),
        };

        let app = routes::router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "healthy");
    }
}
