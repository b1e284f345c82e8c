use crate::error::ApiError;
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /items handler - List all items
///
/// Always 200; the body is a JSON array, possibly empty. Ordering is
/// insertion order for the memory backend and primary-key order for
/// SQLite.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items", body = [Item]),
        (status = 500, description = "Storage error", body = String)
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Item>>), ApiError> {
    let items = state.store.list().await?;
    tracing::info!("Listed {} items", items.len());
    Ok((StatusCode::OK, Json(items)))
}

#[cfg(test)]
mod tests {
    use crate::config::{Backend, Config};
    use crate::models::Item;
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

    #[tokio::test]
    async fn test_list_endpoint_empty() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/items")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let items: Vec<Item> = serde_json::from_slice(&body).unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_list_endpoint_returns_all_created_items() {
        let app = setup_test_app();

        for (name, price) in [("apple", 1.0), ("banana", 2.0), ("carrot", 3.0)] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/items")
                        .header("content-type", "application/json")
                        .body(Body::from(
                            serde_json::json!({"name": name, "price": price}).to_string(),
                        ))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/items")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let items: Vec<Item> = serde_json::from_slice(&body).unwrap();
        assert_eq!(items.len(), 3);

        // Ids are pairwise distinct
        let mut ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
