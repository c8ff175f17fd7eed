use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{MemorySessionStore, Session, SessionError, SessionStore};
use crate::domain::User;

/// Shared handle to the current login session
///
/// Cloning is cheap; every clone sees the same session.
#[derive(Clone)]
pub struct AuthContext {
    inner: Arc<Inner>,
}

struct Inner {
    store: Box<dyn SessionStore>,
    current: RwLock<Option<Session>>,
}

impl AuthContext {
    /// Open a context over `store`, restoring any saved session
    ///
    /// A corrupt session file is discarded and the user starts logged out.
    /// A file that cannot be read at all is an error, and is left in place.
    pub fn new(store: impl SessionStore + 'static) -> Result<Self, SessionError> {
        let current = match store.load() {
            Ok(session) => session,
            Err(e @ SessionError::Corrupt { .. }) => {
                tracing::warn!("Discarding saved session: {}", e);
                if let Err(e) = store.clear() {
                    tracing::warn!("Failed to remove saved session: {}", e);
                }
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Self::with_session(store, current))
    }

    fn with_session(store: impl SessionStore + 'static, current: Option<Session>) -> Self {
        Self {
            inner: Arc::new(Inner {
                store: Box::new(store),
                current: RwLock::new(current),
            }),
        }
    }

    /// Context that never touches the disk
    pub fn in_memory() -> Self {
        Self::with_session(MemorySessionStore::new(), None)
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Session>> {
        self.inner.current.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Session>> {
        self.inner.current.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn current(&self) -> Option<Session> {
        self.read().clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.access_token.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read().as_ref().and_then(|s| s.refresh_token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    pub fn user(&self) -> Option<User> {
        self.read().as_ref().and_then(|s| s.user.clone())
    }

    /// Replace the session and persist it
    pub fn establish(&self, session: Session) -> Result<(), SessionError> {
        self.inner.store.save(&session)?;
        tracing::info!(
            user = session.user.as_ref().map(|u| u.email.as_str()).unwrap_or(""),
            "Session established"
        );
        *self.write() = Some(session);
        Ok(())
    }

    /// Store a refreshed access token, keeping everything else
    pub fn update_access_token(&self, access_token: String) -> Result<(), SessionError> {
        let updated = {
            let mut guard = self.write();
            match guard.as_mut() {
                Some(session) => {
                    session.access_token = access_token;
                    session.clone()
                }
                None => return Ok(()),
            }
        };
        self.inner.store.save(&updated)
    }

    /// Attach the profile fetched after login
    pub fn update_user(&self, user: User) -> Result<(), SessionError> {
        let updated = {
            let mut guard = self.write();
            match guard.as_mut() {
                Some(session) => {
                    session.user = Some(user);
                    session.clone()
                }
                None => return Ok(()),
            }
        };
        self.inner.store.save(&updated)
    }

    /// Drop the session from memory and from the store
    pub fn invalidate(&self) {
        let had_session = self.write().take().is_some();
        if let Err(e) = self.inner.store.clear() {
            tracing::warn!("Failed to clear saved session: {}", e);
        }
        if had_session {
            tracing::info!("Session invalidated");
        }
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
