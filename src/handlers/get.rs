use crate::error::ApiError;
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// GET /items/{id} handler - Retrieve a single item by id
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Invalid ID", body = String),
        (status = 404, description = "Item not found", body = String),
        (status = 500, description = "Storage error", body = String)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let id = super::parse_id(&id_str)?;

    match state.store.get(id).await? {
        Some(item) => {
            tracing::info!("Retrieved item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => Err(ApiError::ItemNotFound(id)),
    }
}
