use crate::error::{Result, StorageError};
use crate::{users, MongoSettings};
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use roster_core::{error::Result as CoreResult, NewUser, User, UserStore};

/// MongoDB-backed user store
///
/// Cloning is cheap: the driver client is a handle onto a shared pool.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
    collection: Collection<users::UserDocument>,
}

impl MongoStore {
    /// Build the driver client for the given connection string
    ///
    /// No network round-trip happens here; see [`MongoStore::ping`].
    pub async fn connect(settings: &MongoSettings) -> Result<Self> {
        let mut options = ClientOptions::parse(&settings.url).await?;
        if options.app_name.is_none() {
            options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        }

        let database_name = options
            .default_database
            .clone()
            .unwrap_or_else(|| settings.database.clone());

        if settings.collection.is_empty() {
            return Err(StorageError::Connection(
                "collection name cannot be empty".to_string(),
            ));
        }

        let client = Client::with_options(options)?;
        let database = client.database(&database_name);
        let collection = database.collection::<users::UserDocument>(&settings.collection);

        Ok(Self {
            database,
            collection,
        })
    }

    /// Ask the server to answer a `ping`
    pub async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

#[async_trait]
impl UserStore for MongoStore {
    async fn insert_user(&self, user: NewUser) -> CoreResult<User> {
        Ok(users::insert(&self.collection, user).await?)
    }

    async fn list_users(&self) -> CoreResult<Vec<User>> {
        Ok(users::get_all(&self.collection).await?)
    }
}
