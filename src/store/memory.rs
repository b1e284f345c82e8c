use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;

use super::ItemStore;
use crate::models::{Item, NewItem};

/// Ephemeral in-memory item store
///
/// Items live in a `Vec` behind a single mutex, which also guards the id
/// counter so concurrent creates can never observe a stale counter and
/// hand out duplicate ids. Ids are monotonic for the store's lifetime and
/// never reused after a delete. All state is lost on restart.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    items: Vec<Item>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Poisoning is unreachable: no code path panics while holding the lock
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Item>> {
        Ok(self.lock().items.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<Item>> {
        Ok(self.lock().items.iter().find(|item| item.id == id).cloned())
    }

    async fn create(&self, new: NewItem) -> Result<Item> {
        let mut inner = self.lock();
        let item = Item {
            id: inner.next_id,
            name: new.name,
            price: new.price,
        };
        inner.next_id += 1;
        inner.items.push(item.clone());
        tracing::debug!("created item with id: {}", item.id);
        Ok(item)
    }

    async fn update(&self, id: i64, new: NewItem) -> Result<Option<Item>> {
        let mut inner = self.lock();
        match inner.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.name = new.name;
                item.price = new.price;
                tracing::debug!("updated item with id: {}", id);
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut inner = self.lock();
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);
        let removed = inner.items.len() < before;
        if removed {
            tracing::debug!("deleted item with id: {}", id);
        }
        Ok(removed)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
