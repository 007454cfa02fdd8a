//! Snapshot of one resource as a page sees it.

use std::sync::Arc;

use crate::error::ApiError;

/// The loading/ready/failed view a page renders from.
///
/// `is_loading` is true exactly when neither a value nor an error has
/// arrived yet, which includes a detail fetch sitting on a null key.
#[derive(Debug, Clone, Default)]
pub enum ResourceState<T> {
    /// Nothing has arrived for the current key.
    #[default]
    Pending,
    /// The fetch resolved.
    Ready(T),
    /// The fetch failed. Shared because cached reads clone it.
    Failed(Arc<ApiError>),
}

impl<T> ResourceState<T> {
    /// Settle from a fetch result.
    pub fn from_result(result: Result<T, Arc<ApiError>>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }

    /// Settle from a guarded detail fetch, where `Ok(None)` means the key
    /// was null and no request was made.
    pub fn from_guarded(result: Result<Option<T>, Arc<ApiError>>) -> Self {
        match result {
            Ok(Some(value)) => Self::Ready(value),
            Ok(None) => Self::Pending,
            Err(err) => Self::Failed(err),
        }
    }

    /// True while neither data nor an error has arrived.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The resolved value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&Arc<ApiError>> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}
