//! Roster Client
//!
//! HTTP client and registration form for the Roster API.
//!
//! # Features
//!
//! - **Client**: create and list users, check server health
//! - **Form**: controlled form state that submits one create-user request
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{ClientConfig, FormField, RegistrationForm, RosterClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RosterClient::new(ClientConfig::default())?;
//!     let mut form = RegistrationForm::new(client);
//!
//!     form.state_mut().change("name", "Ann");
//!     form.state_mut().input(FormField::City, "Reno");
//!
//!     let outcome = form.submit().await;
//!     println!("{:?}", outcome);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod form;
mod types;

// Re-export main types
pub use client::RosterClient;
pub use error::{ClientError, Result};
pub use form::{FormField, FormState, RegistrationForm, SubmitOutcome};
pub use types::{ClientConfig, HealthInfo, DEFAULT_SERVER_URL};
