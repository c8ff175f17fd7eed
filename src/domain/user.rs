//! Account types returned by the auth endpoints

use serde::{Deserialize, Serialize};

/// A site account as the backend reports it
///
/// The auth endpoints and the inquiry serializers return slightly
/// different subsets of these fields; only `email` is always present.
/// The login response omits `id`, which then reads as 0 until the
/// profile is fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub date_joined: Option<String>,
}

impl User {
    /// Best available name for headers and board rows
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .filter(|s| !s.is_empty())
            .or_else(|| Some(self.username.as_str()).filter(|s| !s.is_empty()))
            .unwrap_or(&self.email)
    }
}
