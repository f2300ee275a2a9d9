use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use super::NewsStore;
use crate::models::news::{ActiveNews, NewsArtEntry};

/// In-memory store for tests and database-less local runs.
pub struct MemNewsStore {
    entries: Mutex<Vec<NewsArtEntry>>,
}

impl MemNewsStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_entries(entries: Vec<NewsArtEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    pub fn push(&self, entry: NewsArtEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}

impl Default for MemNewsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsStore for MemNewsStore {
    async fn active_entry(&self) -> Result<Option<ActiveNews>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .find(|entry| entry.is_active)
            .cloned()
            .map(ActiveNews::from))
    }
}
