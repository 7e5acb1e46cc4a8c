use crate::{
    Error, Result,
    item::{Item, ItemPatch, Timestamp},
    store::Store,
};

use async_trait::async_trait;
use std::{collections::HashMap, sync::Mutex};

/// In-memory [`Store`] for handler tests.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    items: Mutex<HashMap<String, Item>>,
    unavailable: bool,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, as if the table were unreachable.
    pub(crate) fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(Error::Store("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_item(&self, id: &str) -> Result<Option<Item>> {
        self.check()?;
        Ok(self.items.lock().unwrap().get(id).cloned())
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        self.check()?;
        self.items
            .lock()
            .unwrap()
            .insert(item.id.clone(), item.clone());
        Ok(())
    }

    // Absent ids are left alone; only the handlers' existence check guards this.
    async fn update_item(&self, id: &str, patch: &ItemPatch, updated_at: Timestamp) -> Result<()> {
        self.check()?;
        if let Some(item) = self.items.lock().unwrap().get_mut(id) {
            patch.apply(item, updated_at);
        }
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<()> {
        self.check()?;
        self.items.lock().unwrap().remove(id);
        Ok(())
    }

    async fn scan_items(&self) -> Result<Vec<Item>> {
        self.check()?;
        Ok(self.items.lock().unwrap().values().cloned().collect())
    }
}
