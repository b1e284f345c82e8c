use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /items/{id} handler - Remove an item
///
/// Not idempotent in status: deleting the same id twice yields 204 then
/// 404.
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Invalid ID", body = String),
        (status = 404, description = "Item not found", body = String),
        (status = 500, description = "Storage error", body = String)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = super::parse_id(&id_str)?;

    if state.store.delete(id).await? {
        tracing::info!("Deleted item with id: {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::ItemNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Backend, Config};
    use crate::routes;
    use crate::state::AppState;
    use crate::store::MemoryStore;
    use axum::{Router, body::Body, http::Request, http::StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
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

        routes::router(state)
    }

    async fn create_item(app: &Router) -> i64 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"Widget","price":9.99}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let item: crate::models::Item = serde_json::from_slice(&body).unwrap();
        item.id
    }

    #[tokio::test]
    async fn test_delete_endpoint_success_then_not_found() {
        let app = setup_test_app();
        let id = create_item(&app).await;

        // First delete: 204 with empty body
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/items/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());

        // Second delete of the same id: 404
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/items/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_endpoint_invalid_id() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/items/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Invalid ID");
    }
}
