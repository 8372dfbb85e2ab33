//! Durable persistence of the session record.
//!
//! The store is the only shared mutable resource in the SDK: it is read
//! once at startup by `SessionManager::restore` and written only by the
//! session mutators (and the adapter's forced clear). Implementations keep
//! the whole record — token and identity — as one JSON document so the two
//! can never be persisted half-updated.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::models::Session;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access session storage: {0}")]
    Io(#[from] std::io::Error),

    #[error("persisted session is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub trait SessionStore: Send + Sync {
    /// Read the persisted session. `Ok(None)` means nothing is stored;
    /// errors mean the stored data is unreadable and should be discarded.
    fn load(&self) -> Result<Option<Session>, StoreError>;

    fn save(&self, session: &Session) -> Result<(), StoreError>;

    fn clear(&self) -> Result<(), StoreError>;
}

/// JSON-file-backed store, the durable analogue of the browser client's
/// local storage.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let session = serde_json::from_slice(&contents)?;
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_vec_pretty(session)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store for tests and persistence-less configurations.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        Ok(self.inner.lock().unwrap().clone())
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        *self.inner.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.inner.lock().unwrap() = None;
        Ok(())
    }
}
