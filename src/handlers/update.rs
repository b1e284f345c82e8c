use crate::error::ApiError;
use crate::models::{Item, NewItem};
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::Path,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
};

/// PUT /items/{id} handler - Replace an existing item's name and price
///
/// The id is taken from the path and preserved; it cannot be changed by
/// the body. Body validation follows the same strict rules as create.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    request_body = NewItem,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, description = "Invalid ID or invalid input", body = String),
        (status = 404, description = "Item not found", body = String),
        (status = 500, description = "Storage error", body = String)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let id = super::parse_id(&id_str)?;
    let Json(new) = payload?;

    match state.store.update(id, new).await? {
        Some(item) => {
            tracing::info!("Updated item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => Err(ApiError::ItemNotFound(id)),
    }
}
