//! Registration form state and submission.
//!
//! The form is controlled: every displayed value lives in [`FormState`] and
//! changes only through [`FormState::change`] or [`FormState::input`].
//! Submitting sends one create-user request with the full current state and
//! logs the outcome. Nothing is validated, retried or reset.

use crate::client::RosterClient;
use crate::error::ClientError;
use roster_core::{CreateUser, User};
use std::fmt;
use tracing::{error, info};

/// One input of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    LastName,
    City,
    Email,
    Password,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::LastName,
        FormField::City,
        FormField::Email,
        FormField::Password,
    ];

    /// Input identifier, also the JSON key sent to the server.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::LastName => "last_name",
            FormField::City => "city",
            FormField::Email => "email",
            FormField::Password => "password",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::LastName => "Last Name",
            FormField::City => "City",
            FormField::Email => "Email",
            FormField::Password => "Password",
        }
    }

    /// Look a field up by its input identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Whether the input should be masked.
    pub fn is_secret(self) -> bool {
        self == FormField::Password
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current values of the five inputs, all empty initially.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub last_name: String,
    pub city: String,
    pub email: String,
    pub password: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::LastName => &self.last_name,
            FormField::City => &self.city,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::LastName => &mut self.last_name,
            FormField::City => &mut self.city,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        }
    }

    /// Replace the value of the input named `name`.
    ///
    /// Returns the updated field, or `None` (leaving the state untouched)
    /// when no input has that identifier.
    pub fn change(&mut self, name: &str, value: impl Into<String>) -> Option<FormField> {
        let field = FormField::from_name(name)?;
        self.set(field, value);
        Some(field)
    }

    /// Replace the value of one field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Append typed text to one field.
    pub fn input(&mut self, field: FormField, text: &str) {
        self.slot(field).push_str(text);
    }

    /// Request body carrying every field, empty ones included.
    pub fn to_request(&self) -> CreateUser {
        CreateUser {
            name: Some(self.name.clone()),
            last_name: Some(self.last_name.clone()),
            city: Some(self.city.clone()),
            email: Some(self.email.clone()),
            password: Some(self.password.clone()),
            created_at: None,
        }
    }
}

/// Result of one form submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The server stored the user
    Created(User),
    /// The server answered with a non-success status
    Rejected { status: u16, message: String },
    /// No usable answer from the server
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }
}

/// Registration form bound to a server.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    state: FormState,
    client: RosterClient,
}

impl RegistrationForm {
    pub fn new(client: RosterClient) -> Self {
        Self {
            state: FormState::new(),
            client,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Send the current state as one create-user request.
    ///
    /// Logs a success or failure message. The fields keep their values
    /// either way.
    pub async fn submit(&self) -> SubmitOutcome {
        match self.client.create_user(&self.state.to_request()).await {
            Ok(user) => {
                info!(id = %user.id, "User created successfully");
                SubmitOutcome::Created(user)
            }
            Err(ClientError::ServerError { status, message }) => {
                error!(status, error = %message, "Failed to create user");
                SubmitOutcome::Rejected { status, message }
            }
            Err(e) => {
                error!("Error: {}", e);
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}
