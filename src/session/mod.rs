//! Login session and auth context
//!
//! One [`AuthContext`] per process owns the current [`Session`] and its
//! persistence. The HTTP client reads tokens only through it, and a
//! failed refresh or an explicit logout clears memory and disk together.

mod context;
mod store;

pub use context::AuthContext;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::User;

/// Tokens and profile of a logged-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
            user: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }
}

/// Session persistence errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to access session file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Corrupt session file {path:?}: {error}")]
    Corrupt { path: PathBuf, error: String },

    #[error("Failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}
