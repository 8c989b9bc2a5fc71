/// Shared application state
use crate::config::{StorageBackend, StorageSettings};
use roster_core::UserStore;
use roster_storage::MemoryStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Open the configured store and wrap it
    ///
    /// Never fails: an unreachable database is logged by the connector and
    /// surfaces later as per-request errors.
    pub async fn from_settings(settings: &StorageSettings) -> Self {
        let store: Arc<dyn UserStore> = match settings.backend {
            StorageBackend::Mongodb => roster_storage::connect(&settings.mongo()).await,
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory store, records are lost on shutdown");
                Arc::new(MemoryStore::new())
            }
        };

        Self::new(store)
    }
}
