pub mod create;
pub mod delete;
pub mod get;
pub mod health;
pub mod list;
pub mod update;

pub use create::create_handler;
pub use delete::delete_handler;
pub use get::get_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use update::update_handler;

use crate::error::ApiError;

/// Parse an item id path segment
///
/// Anything that is not a non-negative `i64` (non-numeric text, negative
/// values, overflow) is rejected with 400 "Invalid ID".
pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| ApiError::InvalidId(raw.to_string()))
}
