use serde::{Deserialize, Serialize};

/// A single item as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Request body for create and update operations
///
/// The id is never client-supplied; it is assigned by the storage
/// backend on create and taken from the path on update.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
}

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}
