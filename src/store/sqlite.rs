use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::ItemStore;
use crate::models::{Item, NewItem};

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL NOT NULL
)";

/// Persistent item store backed by a file-backed SQLite database
///
/// Id assignment and uniqueness are delegated to the engine's
/// AUTOINCREMENT primary key; write serialization is delegated to SQLite.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database file and ensure the items
    /// table exists. Schema creation is idempotent.
    pub async fn open(path: &str) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open SQLite database at {path}"))?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(CREATE_TABLE)
            .execute(&pool)
            .await
            .context("Failed to create items table")?;

        Ok(Self { pool })
    }

    #[cfg(test)]
    pub async fn open_in_memory() -> Result<Self> {
        // A single connection keeps every query on the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory SQLite database")?;

        Self::from_pool(pool).await
    }
}

fn row_to_item(row: &sqlx::sqlite::SqliteRow) -> Result<Item> {
    Ok(Item {
        id: row.try_get("id").context("Failed to read id column")?,
        name: row.try_get("name").context("Failed to read name column")?,
        price: row.try_get("price").context("Failed to read price column")?,
    })
}

#[async_trait]
impl ItemStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Item>> {
        let rows = sqlx::query("SELECT id, name, price FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to query items")?;

        rows.iter().map(row_to_item).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<Item>> {
        let row = sqlx::query("SELECT id, name, price FROM items WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to query item")?;

        row.as_ref().map(row_to_item).transpose()
    }

    async fn create(&self, new: NewItem) -> Result<Item> {
        let result = sqlx::query("INSERT INTO items (name, price) VALUES (?1, ?2)")
            .bind(&new.name)
            .bind(new.price)
            .execute(&self.pool)
            .await
            .context("Failed to insert item")?;

        let id = result.last_insert_rowid();
        tracing::debug!("created item with id: {}", id);

        Ok(Item {
            id,
            name: new.name,
            price: new.price,
        })
    }

    async fn update(&self, id: i64, new: NewItem) -> Result<Option<Item>> {
        let result = sqlx::query("UPDATE items SET name = ?1, price = ?2 WHERE id = ?3")
            .bind(&new.name)
            .bind(new.price)
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to update item")?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        tracing::debug!("updated item with id: {}", id);
        Ok(Some(Item {
            id,
            name: new.name,
            price: new.price,
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete item")?;

        let removed = result.rows_affected() > 0;
        if removed {
            tracing::debug!("deleted item with id: {}", id);
        }
        Ok(removed)
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("Health check query failed")?;
        Ok(())
    }
}
