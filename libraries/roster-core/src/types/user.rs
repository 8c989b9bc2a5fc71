/// User domain types
use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored user record
///
/// Every domain field is optional: the store keeps whatever subset the
/// caller supplied. `created_at` is always set by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: UserId,

    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Email address, not checked for format or uniqueness
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Password as submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Server time at insertion
    pub created_at: DateTime<Utc>,
}

/// Input contract for creating a user
///
/// Unknown fields are rejected. A `created_at` value is tolerated on input
/// but never read; the server stamps its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUser {
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Accepted so clients echoing a record back are not rejected; the
    /// server never reads it
    #[serde(default, skip_serializing)]
    pub created_at: Option<serde_json::Value>,
}

/// Record ready for insertion, not yet identified by the store
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct NewUser {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Attach the server-side creation time to a create request
    pub fn stamped(input: CreateUser, created_at: DateTime<Utc>) -> Self {
        Self {
            name: input.name,
            last_name: input.last_name,
            city: input.city,
            email: input.email,
            password: input.password,
            created_at,
        }
    }

    /// Turn into a stored record once the store has picked an id
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            last_name: self.last_name,
            city: self.city,
            email: self.email,
            password: self.password,
            created_at: self.created_at,
        }
    }
}
