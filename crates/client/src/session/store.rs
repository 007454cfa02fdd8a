//! Durable session storage.
//!
//! The original client kept two browser-storage keys: the serialized user
//! and the bearer token. Here both live in one JSON snapshot record behind
//! the [`SessionStore`] trait, with a file-backed implementation for real
//! use and an in-memory one for tests.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::User;

/// Errors from reading or writing the session snapshot.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Storage I/O failed.
    #[error("session storage error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored snapshot did not parse.
    #[error("corrupt session snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The durable session record: authenticated user plus bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    /// The authenticated user as returned by login.
    pub user: User,
    /// The bearer token for authenticated calls.
    pub token: String,
}

/// Durable key-value storage for the session snapshot.
///
/// Written on login/register, cleared on logout, read once at startup.
pub trait SessionStore: Send + Sync {
    /// Read the stored snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or the snapshot is corrupt.
    fn load(&self) -> Result<Option<SessionSnapshot>, SessionError>;

    /// Persist a snapshot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionError>;

    /// Remove any stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    fn clear(&self) -> Result<(), SessionError>;
}

/// File-backed session store serializing the snapshot as JSON.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store at the given path. The file need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<SessionSnapshot>, SessionError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot = serde_json::from_str(&contents)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory session store for tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    snapshot: Mutex<Option<SessionSnapshot>>,
}

impl MemorySessionStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<SessionSnapshot>, SessionError> {
        Ok(self
            .snapshot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionError> {
        *self
            .snapshot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self
            .snapshot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}
