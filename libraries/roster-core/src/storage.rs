//! Store trait for user records

use crate::error::Result;
use crate::types::{NewUser, User};
use async_trait::async_trait;

/// Document store holding user records
///
/// Implementations own durable storage; callers only ever see transient
/// copies of the records. There is no transaction boundary: each call is a
/// single operation against the store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert exactly one record and return it with its store-assigned id
    async fn insert_user(&self, user: NewUser) -> Result<User>;

    /// Get every stored record in the store's natural order
    async fn list_users(&self) -> Result<Vec<User>>;
}
