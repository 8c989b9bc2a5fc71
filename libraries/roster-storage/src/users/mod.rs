//! User document mapping and queries

use crate::error::{Result, StorageError};
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Bson, Document};
use mongodb::Collection;
use roster_core::types::{NewUser, User, UserId};
use serde::{Deserialize, Serialize};

/// Collection name the documents are written to by default
pub const COLLECTION_NAME: &str = "users";

/// User record as stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<bson::DateTime>,
}

impl From<NewUser> for UserDocument {
    fn from(user: NewUser) -> Self {
        Self {
            id: None,
            name: user.name,
            last_name: user.last_name,
            city: user.city,
            email: user.email,
            password: user.password,
            created_at: Some(bson::DateTime::from_chrono(user.created_at)),
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = StorageError;

    fn try_from(document: UserDocument) -> Result<Self> {
        let id = document.id.ok_or_else(|| {
            StorageError::SerializationError("user document has no _id".to_string())
        })?;

        // Documents written before created_at existed fall back to the id's timestamp
        let created_at = document.created_at.unwrap_or_else(|| id.timestamp());

        Ok(User {
            id: UserId::new(id.to_hex()),
            name: document.name,
            last_name: document.last_name,
            city: document.city,
            email: document.email,
            password: document.password,
            created_at: created_at.to_chrono(),
        })
    }
}

/// Insert one user document
///
/// # Returns
///
/// The stored record as it will be read back, including the driver-assigned
/// `_id` and `created_at` truncated to MongoDB's millisecond precision
pub async fn insert(collection: &Collection<UserDocument>, user: NewUser) -> Result<User> {
    let mut document = UserDocument::from(user);
    let result = collection.insert_one(&document).await?;

    let id = result.inserted_id.as_object_id().ok_or_else(|| {
        StorageError::SerializationError(format!(
            "unexpected inserted id: {}",
            result.inserted_id
        ))
    })?;
    document.id = Some(id);

    tracing::debug!(id = %id, "Inserted user document");

    User::try_from(document)
}

/// Get all user documents in natural order
///
/// Documents are read untyped so that one written by another client with an
/// odd field does not fail the whole listing.
pub async fn get_all(collection: &Collection<UserDocument>) -> Result<Vec<User>> {
    let documents: Vec<Document> = collection
        .clone_with_type::<Document>()
        .find(doc! {})
        .await?
        .try_collect()
        .await?;

    documents.iter().map(user_from_document).collect()
}

/// Map a raw stored document onto a user record
///
/// Scalar text fields stored as numbers or booleans are read in their string
/// form; anything else becomes absent. A `created_at` that is missing or not
/// a date falls back to the id's timestamp.
pub fn user_from_document(document: &Document) -> Result<User> {
    let id = match document.get("_id") {
        Some(Bson::ObjectId(id)) => *id,
        Some(other) => {
            return Err(StorageError::SerializationError(format!(
                "unexpected _id: {}",
                other
            )))
        }
        None => {
            return Err(StorageError::SerializationError(
                "user document has no _id".to_string(),
            ))
        }
    };

    let created_at = match document.get("created_at") {
        Some(Bson::DateTime(created_at)) => Some(*created_at),
        Some(Bson::String(text)) => bson::DateTime::parse_rfc3339_str(text).ok(),
        _ => None,
    };

    if document.get("created_at").is_some() && created_at.is_none() {
        tracing::warn!(id = %id, "Unreadable created_at, using id timestamp");
    }

    Ok(User {
        id: UserId::new(id.to_hex()),
        name: text_field(document, "name"),
        last_name: text_field(document, "last_name"),
        city: text_field(document, "city"),
        email: text_field(document, "email"),
        password: text_field(document, "password"),
        created_at: created_at.unwrap_or_else(|| id.timestamp()).to_chrono(),
    })
}

fn text_field(document: &Document, key: &str) -> Option<String> {
    match document.get(key)? {
        Bson::String(text) => Some(text.clone()),
        Bson::Int32(n) => Some(n.to_string()),
        Bson::Int64(n) => Some(n.to_string()),
        Bson::Double(n) => Some(n.to_string()),
        Bson::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}
