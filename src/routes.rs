// Route path constants - single source of truth for all API paths

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const ITEMS: &str = "/items";
pub const ITEM: &str = "/items/{id}";

/// Build the application router, shared between main and the tests
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            ITEMS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .route(HEALTH, get(handlers::health_handler))
        .merge(SwaggerUi::new("/swagger").url("/swagger/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
