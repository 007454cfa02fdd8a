//! Authenticated session context.
//!
//! The session is an explicit object handed to whatever needs it, not
//! ambient global state: it is restored from durable storage once at
//! startup, written through on login/register, and torn down on logout.

mod store;

pub use store::{FileSessionStore, MemorySessionStore, SessionError, SessionSnapshot, SessionStore};

use std::sync::{Arc, PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::models::User;

struct ActiveSession {
    user: User,
    token: SecretString,
}

struct SessionInner {
    store: Box<dyn SessionStore>,
    state: RwLock<Option<ActiveSession>>,
}

/// The current authentication state, shared by clones.
///
/// Cheap to clone; all clones observe the same login/logout transitions.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    /// Restore a session from durable storage.
    ///
    /// Reads the snapshot once; an absent snapshot yields an anonymous
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn restore(store: impl SessionStore + 'static) -> Result<Self, SessionError> {
        let state = store.load()?.map(|snapshot| {
            debug!(user = %snapshot.user.id, "restored session from storage");
            ActiveSession {
                user: snapshot.user,
                token: SecretString::from(snapshot.token),
            }
        });

        Ok(Self {
            inner: Arc::new(SessionInner {
                store: Box::new(store),
                state: RwLock::new(state),
            }),
        })
    }

    /// Start an anonymous session with no durable backing reads.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read (kept for signature
    /// parity with [`Session::restore`] via `MemorySessionStore`).
    pub fn anonymous() -> Result<Self, SessionError> {
        Self::restore(MemorySessionStore::new())
    }

    /// The authenticated user, if any.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read(|state| state.as_ref().map(|active| active.user.clone()))
    }

    /// The bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.read(|state| {
            state
                .as_ref()
                .map(|active| SecretString::from(active.token.expose_secret()))
        })
    }

    /// Whether a user is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read(Option::is_some)
    }

    /// Record a successful login: update memory and write through to the
    /// durable store.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted; memory state is
    /// updated regardless so the running process stays logged in.
    pub fn establish(&self, user: User, token: SecretString) -> Result<(), SessionError> {
        let snapshot = SessionSnapshot {
            user: user.clone(),
            token: token.expose_secret().to_string(),
        };

        {
            let mut state = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *state = Some(ActiveSession { user, token });
        }

        self.inner.store.save(&snapshot)
    }

    /// Tear down the session: drop memory state and clear durable storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be cleared; memory state is
    /// dropped regardless.
    pub fn terminate(&self) -> Result<(), SessionError> {
        {
            let mut state = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *state = None;
        }
        debug!("session terminated");
        self.inner.store.clear()
    }

    fn read<R>(&self, f: impl FnOnce(&Option<ActiveSession>) -> R) -> R {
        let state = self
            .inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}
