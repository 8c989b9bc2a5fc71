//! Roster Storage
//!
//! MongoDB persistence for Roster user records, plus an in-process store for
//! tests and throwaway runs.
//!
//! # Architecture
//!
//! - **Connector**: [`connect`] builds one long-lived client at startup and
//!   logs whether the database answered. It never fails the process.
//! - **Vertical Slicing**: document mapping and queries for users live in
//!   [`users`]
//! - **Stores**: [`MongoStore`], [`MemoryStore`] and [`DisconnectedStore`]
//!   all implement [`roster_core::UserStore`]
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_storage::{connect, MongoSettings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = connect(&MongoSettings::default()).await;
//! let users = store.list_users().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod disconnected;
mod error;
mod memory;

// Vertical slices
pub mod users;

pub use context::MongoStore;
pub use disconnected::DisconnectedStore;
pub use error::StorageError;
pub use memory::MemoryStore;

use roster_core::UserStore;
use std::sync::Arc;

/// Where the user documents live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoSettings {
    /// Connection string, e.g. `mongodb://mongodb:27017/users`
    pub url: String,

    /// Database used when the connection string names none
    pub database: String,

    /// Collection holding user documents
    pub collection: String,
}

impl Default for MongoSettings {
    fn default() -> Self {
        Self {
            url: "mongodb://mongodb:27017/users".to_string(),
            database: "users".to_string(),
            collection: users::COLLECTION_NAME.to_string(),
        }
    }
}

/// Open the shared store handle
///
/// The driver connects lazily, so the returned handle is usable even when
/// MongoDB is down; a background ping reports the outcome in the logs.
/// When the client cannot be built at all the process keeps running on a
/// [`DisconnectedStore`] and every data operation fails on its own.
pub async fn connect(settings: &MongoSettings) -> Arc<dyn UserStore> {
    match MongoStore::connect(settings).await {
        Ok(store) => {
            let probe = store.clone();
            tokio::spawn(async move {
                match probe.ping().await {
                    Ok(()) => tracing::info!(
                        database = %probe.database_name(),
                        "Successfully connected to MongoDB"
                    ),
                    Err(e) => tracing::error!("Error connecting to MongoDB: {}", e),
                }
            });
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!("Error connecting to MongoDB: {}", e);
            Arc::new(DisconnectedStore::new(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::RosterError;

    #[tokio::test]
    async fn unparseable_url_leaves_a_disconnected_handle() {
        let settings = MongoSettings {
            url: "not-a-url".to_string(),
            ..MongoSettings::default()
        };

        let store = connect(&settings).await;

        assert!(matches!(
            store.list_users().await,
            Err(RosterError::Connection(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_server_still_yields_a_handle() {
        let settings = MongoSettings {
            url: "mongodb://127.0.0.1:1/x?serverSelectionTimeoutMS=300".to_string(),
            ..MongoSettings::default()
        };

        let store = connect(&settings).await;

        assert!(matches!(
            store.list_users().await,
            Err(RosterError::Connection(_))
        ));
    }
}
