use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Status shown for tasks the server returned without one.
///
pub const DEFAULT_STATUS: &str = "New";

/// Defines user data structure.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Defines task data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>, // RFC 3339
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>, // RFC 3339
}

impl Task {
    /// Return the status label, falling back to the default status.
    ///
    pub fn status_label(&self) -> &str {
        match self.status.as_deref() {
            Some(status) if !status.is_empty() => status,
            _ => DEFAULT_STATUS,
        }
    }

    /// Return the description or an empty string.
    ///
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Returns true if the task carries an update timestamp that differs
    /// from its creation timestamp.
    ///
    pub fn was_updated(&self) -> bool {
        match (&self.created_at, &self.updated_at) {
            (Some(created), Some(updated)) => created != updated,
            (None, Some(_)) => true,
            _ => false,
        }
    }
}

/// Defines the payload returned by signup and login.
///
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Defines the body for task creation.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
}

/// Defines the body for task updates.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaskChanges {
    pub title: String,
    pub description: String,
}
