//! Roster Core
//!
//! Domain types, the store abstraction, and error handling shared by the
//! Roster server, storage backends, and client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `CreateUser`, `NewUser`, `UserId`
//! - **Store Trait**: `UserStore`, implemented by the storage backends
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use roster_core::types::{CreateUser, NewUser};
//!
//! let input = CreateUser {
//!     name: Some("Ann".to_string()),
//!     ..CreateUser::default()
//! };
//!
//! let record = NewUser::stamped(input, Utc::now());
//! assert_eq!(record.name.as_deref(), Some("Ann"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use storage::UserStore;
pub use types::{CreateUser, NewUser, User, UserId};
