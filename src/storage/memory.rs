//! In-memory seen-set storage for tests and dry runs.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::Result;
use crate::models::SeenSet;
use crate::storage::SeenStore;

/// Seen set held in process memory.
#[derive(Debug, Default)]
pub struct MemorySeenStore {
    seen: Mutex<SeenSet>,
    saves: AtomicUsize,
}

impl MemorySeenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of identifiers.
    pub fn with_seen<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            seen: Mutex::new(ids.into_iter().map(Into::into).collect()),
            saves: AtomicUsize::new(0),
        }
    }

    /// Snapshot of the current contents.
    pub fn snapshot(&self) -> SeenSet {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SeenStore for MemorySeenStore {
    async fn load(&self) -> Result<SeenSet> {
        Ok(self.snapshot())
    }

    async fn save(&self, seen: &SeenSet) -> Result<()> {
        *self.seen.lock().unwrap_or_else(|e| e.into_inner()) = seen.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
