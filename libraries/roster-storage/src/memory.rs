use async_trait::async_trait;
use roster_core::{NewUser, Result, User, UserId, UserStore};
use tokio::sync::RwLock;

/// In-process user store
///
/// Keeps records in insertion order and hands out UUID identifiers.
/// Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User> {
        let user = user.into_user(UserId::generate());
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}
