use utoipa::OpenApi;

use crate::handlers;
use crate::models::{HealthResponse, Item, NewItem, UnhealthyResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "items-api",
        version = "1.0.0",
        description = "A simple API for managing items backed by SQLite or an in-memory store"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(schemas(Item, NewItem, HealthResponse, UnhealthyResponse)),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item CRUD operations")
    )
)]
pub struct ApiDoc;
