pub mod models;
pub mod queries;

use anyhow::Result;
use std::sync::Mutex;
use tracing::info;

use crate::models::Store;

/// In-memory store for users, portfolios and contact messages.
///
/// State lives for the lifetime of the value; nothing is written to disk.
/// All three collections sit behind one lock so that taking the next id and
/// inserting the record happen as a single step.
pub struct Database {
    store: Mutex<Store>,
}

impl Database {
    pub fn new() -> Self {
        info!("In-memory store initialised");
        Self {
            store: Mutex::new(Store::default()),
        }
    }

    pub(crate) fn with_store<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Store) -> Result<T>,
    {
        let store = self.store.lock().map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))?;
        f(&store)
    }

    pub(crate) fn with_store_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Store) -> Result<T>,
    {
        let mut store = self.store.lock().map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))?;
        f(&mut store)
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
