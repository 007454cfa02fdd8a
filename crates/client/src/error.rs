//! Error types for the Craftica API client.
//!
//! The taxonomy mirrors what pages actually have to distinguish:
//! transport failures (no response obtained), HTTP failures (non-2xx with an
//! optional backend message), and domain failures (2xx responses that signal
//! failure through a status-phrase mismatch or a missing identity field).

use core::fmt;

use thiserror::Error;

/// The entity a request was about, used in not-found errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Store,
    Product,
    Post,
    Comment,
    Reaction,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::User => "user",
            Self::Store => "store",
            Self::Product => "product",
            Self::Post => "post",
            Self::Comment => "comment",
            Self::Reaction => "reaction",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when talking to the Craftica backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: the request never produced a response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{}", format_status(*.status, .message.as_deref()))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the JSON body, when one was present.
        message: Option<String>,
    },

    /// The response body was not the JSON we expected.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A 2xx single-entity response without the identity field.
    #[error("{0} not found")]
    NotFound(EntityKind),

    /// A 2xx response whose status phrase did not match the expected
    /// success phrase. Carries the backend's phrase verbatim.
    #[error("{0}")]
    Rejected(String),

    /// Durable session storage failed during login or logout.
    #[error("session error: {0}")]
    Session(#[from] crate::session::SessionError),
}

impl ApiError {
    /// Whether this error is the domain-level "not found" condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

fn format_status(status: u16, message: Option<&str>) -> String {
    message.map_or_else(|| format!("HTTP error! status: {status}"), String::from)
}
