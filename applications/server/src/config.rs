/// Server configuration
use crate::error::{Result, ServerError};
use roster_storage::MongoSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Runtime mode, reported in the startup log only
    #[serde(default = "default_mode")]
    pub mode: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,

    #[serde(default = "default_mongo_url")]
    pub mongo_url: String,

    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default = "default_collection")]
    pub collection: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Mongodb,
    Memory,
}

impl StorageSettings {
    pub fn mongo(&self) -> MongoSettings {
        MongoSettings {
            url: self.mongo_url.clone(),
            database: self.database.clone(),
            collection: self.collection.clone(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `config.toml` and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from the given file (if it exists) and environment
    ///
    /// Environment variables are prefixed with `ROSTER_` and nest with `__`
    /// (`ROSTER_STORAGE__MONGO_URL`). `PORT` overrides the listening port and
    /// `APP_ENV` (or `NODE_ENV` when unset) the runtime mode.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = path.map_or_else(|| PathBuf::from("config.toml"), Path::to_path_buf);
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        } else if path.is_some() {
            return Err(ServerError::Config(format!(
                "config file not found: {}",
                config_path.display()
            )));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mode = std::env::var("APP_ENV")
            .or_else(|_| std::env::var("NODE_ENV"))
            .ok();

        settings = settings
            .set_override_option("server.port", std::env::var("PORT").ok())
            .and_then(|s| s.set_override_option("server.mode", mode))
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "server port must be non-zero (set PORT or ROSTER_SERVER__PORT)".to_string(),
            ));
        }

        if self.storage.backend == StorageBackend::Mongodb && self.storage.collection.is_empty() {
            return Err(ServerError::Config(
                "collection name is required (set ROSTER_STORAGE__COLLECTION)".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        mode: default_mode(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_mode() -> String {
    "development".to_string()
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        backend: default_backend(),
        mongo_url: default_mongo_url(),
        database: default_database(),
        collection: default_collection(),
    }
}

fn default_backend() -> StorageBackend {
    StorageBackend::Mongodb
}

fn default_mongo_url() -> String {
    MongoSettings::default().url
}

fn default_database() -> String {
    MongoSettings::default().database
}

fn default_collection() -> String {
    MongoSettings::default().collection
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
        }
    }
}
