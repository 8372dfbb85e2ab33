//! Shared read view of the active session.
//!
//! The handle is the piece every component can hold cheaply: the access
//! guard reads it, the HTTP adapter reads the credential from it and may
//! force-clear it on a 401, and the `SessionManager` owns every ordinary
//! mutation. Snapshots are taken under a short-lived lock; nothing holds
//! the lock across an await point.

use std::sync::{Arc, RwLock};

use crate::models::{Identity, Session};

use super::store::SessionStore;

/// Where the client is in the session lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Startup, before `restore` has run.
    Restoring,
    /// Restore finished, nobody is logged in.
    Anonymous,
    /// A credential and identity are active.
    Active(Session),
}

struct SessionShared {
    state: RwLock<SessionState>,
    store: Arc<dyn SessionStore>,
}

#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<SessionShared>,
}

impl SessionHandle {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            inner: Arc::new(SessionShared {
                state: RwLock::new(SessionState::Restoring),
                store,
            }),
        }
    }

    pub fn state(&self) -> SessionState {
        self.inner.state.read().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state(), SessionState::Active(_))
    }

    pub fn credential(&self) -> Option<String> {
        match &*self.inner.state.read().unwrap() {
            SessionState::Active(session) => Some(session.token.clone()),
            _ => None,
        }
    }

    pub fn identity(&self) -> Option<Identity> {
        match &*self.inner.state.read().unwrap() {
            SessionState::Active(session) => Some(session.identity.clone()),
            _ => None,
        }
    }

    pub(crate) fn store(&self) -> &dyn SessionStore {
        self.inner.store.as_ref()
    }

    pub(crate) fn set_active(&self, session: Session) {
        *self.inner.state.write().unwrap() = SessionState::Active(session);
    }

    pub(crate) fn set_anonymous(&self) {
        *self.inner.state.write().unwrap() = SessionState::Anonymous;
    }

    /// Drop the session from memory and durable storage. Used by `logout`
    /// and by the adapter's 401 policy; safe to call in any state.
    pub(crate) fn force_clear(&self) {
        self.set_anonymous();
        if let Err(err) = self.inner.store.clear() {
            tracing::warn!("failed to clear persisted session: {err}");
        }
    }
}
