use crate::error::ApiError;
use crate::models::{Item, NewItem};
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
};

/// POST /items handler - Create a new item
///
/// The body must deserialize into {name, price}; anything else is
/// rejected with 400 "Invalid input". Both backends apply the same
/// strict policy. The backend assigns the id.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = NewItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Invalid input", body = String),
        (status = 500, description = "Storage error", body = String)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(new) = payload?;

    let item = state.store.create(new).await?;
    tracing::info!("Created item with id: {}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}
