/// User domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned user identifier
///
/// Signed so that malformed ids coming off the wire (`0`, `-1`) can be
/// represented and rejected by the HTTP layer.
pub type UserId = i64;

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: Option<String>,

    /// Contact email
    pub email: String,

    /// Whether the account is active
    pub is_active: bool,

    /// Creation timestamp
    pub created_date: DateTime<Utc>,
}

impl User {
    /// Create a user record with server-assigned fields already known
    pub fn with_id(
        id: UserId,
        input: UserInput,
        created_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email.unwrap_or_default(),
            is_active: input.is_active,
            created_date,
        }
    }

    /// Overwrite the mutable fields from a payload
    ///
    /// `id` and `created_date` are never touched.
    pub fn apply(&mut self, input: UserInput) {
        self.name = input.name;
        self.email = input.email.unwrap_or_default();
        self.is_active = input.is_active;
    }
}

/// Create/update payload
///
/// Server-assigned fields (`id`, `createdDate`) are ignored if a client sends
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Contact email
    #[serde(default)]
    pub email: Option<String>,

    /// Whether the account is active
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl UserInput {
    /// Create an active user payload
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            is_active: true,
        }
    }

    /// Set the active flag
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Check field constraints
    ///
    /// Returns every failing field; an empty vector means the payload is valid.
    /// Only email is constrained: it must be present and not blank. Its format
    /// is not checked.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let has_email = self.email.as_deref().is_some_and(|e| !e.trim().is_empty());
        if !has_email {
            errors.push(FieldError::new("email", "Email is required"));
        }

        errors
    }
}

impl Default for UserInput {
    fn default() -> Self {
        Self {
            name: None,
            email: None,
            is_active: default_active(),
        }
    }
}

/// A single failed field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name as it appears in JSON
    pub field: String,

    /// Reason the field was rejected
    pub message: String,
}

impl FieldError {
    /// Create a field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
