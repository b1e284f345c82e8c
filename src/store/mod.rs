pub mod memory;
pub mod sqlite;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{Backend, Config};
use crate::models::{Item, NewItem};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Storage backend contract shared by the ephemeral and persistent variants
///
/// `Ok(None)` / `Ok(false)` signal that no item with the given id exists;
/// `Err` signals a backend failure (persistent variant only under normal
/// operation).
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, in insertion order (memory) or primary-key order (sqlite)
    async fn list(&self) -> Result<Vec<Item>>;

    async fn get(&self, id: i64) -> Result<Option<Item>>;

    /// Store a new item, assigning the next available id
    async fn create(&self, new: NewItem) -> Result<Item>;

    /// Replace name and price for the item with the given id, preserving it
    async fn update(&self, id: i64, new: NewItem) -> Result<Option<Item>>;

    /// Remove the item with the given id; returns whether it existed
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Verify the backend is reachable and responsive
    async fn health_check(&self) -> Result<()>;
}

/// Construct the backend selected by configuration
///
/// The choice is made once at process start; it is not runtime-switchable.
pub async fn from_config(config: &Config) -> Result<Arc<dyn ItemStore>> {
    match config.backend {
        Backend::Memory => {
            tracing::info!("Using in-memory item store (state is lost on restart)");
            Ok(Arc::new(MemoryStore::new()))
        }
        Backend::Sqlite => {
            let store = SqliteStore::open(&config.database_path).await?;
            tracing::info!("Using SQLite item store at: {}", config.database_path);
            Ok(Arc::new(store))
        }
    }
}
