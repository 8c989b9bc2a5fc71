use async_trait::async_trait;
use roster_core::{NewUser, Result, RosterError, User, UserStore};

/// Store handle left behind when the startup connection could not be set up
///
/// Every operation fails with [`RosterError::Connection`] carrying the
/// original startup error. Nothing is retried.
#[derive(Debug, Clone)]
pub struct DisconnectedStore {
    reason: String,
}

impl DisconnectedStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl UserStore for DisconnectedStore {
    async fn insert_user(&self, _user: NewUser) -> Result<User> {
        Err(RosterError::connection(self.reason.clone()))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Err(RosterError::connection(self.reason.clone()))
    }
}
