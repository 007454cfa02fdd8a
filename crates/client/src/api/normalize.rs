//! Response normalization.
//!
//! The backend is inconsistent: lists may arrive as bare arrays, as
//! error-flagged objects, or (in principle) as ready-made page envelopes;
//! writes may be wrapped behind operation-specific human-readable status
//! phrases. Everything is decoded once here into a tagged outcome so the
//! rest of the crate never inspects raw shapes.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, EntityKind};
use crate::models::Page;

/// What a list endpoint actually sent.
pub(crate) enum ListOutcome<T> {
    /// A bare JSON array of items.
    Items(Vec<T>),
    /// A ready-made page envelope.
    Page(Page<T>),
    /// An error-flagged object; list calls degrade this to an empty page.
    Rejected(String),
}

/// The phrase contract of a status-wrapped write operation.
///
/// The backend signals success with an exact human-readable phrase instead
/// of a uniform code. Brittle by construction; all phrases live here so a
/// future versioned contract replaces one table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusContract {
    /// Exact phrase meaning success.
    pub phrase: &'static str,
    /// Key the created entity is nested under, for create operations.
    pub entity_key: &'static str,
    /// Message to raise when the response carries no status at all.
    pub fallback: &'static str,
}

/// Resolve a list response into a page, degrading backend-signaled list
/// failures to an empty page instead of raising.
pub(crate) fn resolve_page<T: DeserializeOwned>(
    raw: Value,
    page: u32,
    limit: u32,
) -> Result<Page<T>, ApiError> {
    match decode_list(raw)? {
        ListOutcome::Items(items) => Ok(Page::from_items(items, page, limit)),
        ListOutcome::Page(page) => Ok(page),
        ListOutcome::Rejected(reason) => {
            tracing::debug!(%reason, "list failure degraded to empty page");
            Ok(Page::empty(page, limit))
        }
    }
}

/// Decode a list response into its outcome.
pub(crate) fn decode_list<T: DeserializeOwned>(raw: Value) -> Result<ListOutcome<T>, ApiError> {
    match raw {
        Value::Array(_) => Ok(ListOutcome::Items(serde_json::from_value(raw)?)),
        Value::Object(ref map) if map.contains_key("error") => {
            let message = map
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Ok(ListOutcome::Rejected(message))
        }
        other => Ok(ListOutcome::Page(serde_json::from_value(other)?)),
    }
}

/// Decode a `{data: [...]}` or bare-array item list (comments, reactions).
///
/// An error-flagged object degrades to no items, matching how the original
/// screens rendered these endpoints.
pub(crate) fn decode_items<T: DeserializeOwned>(raw: Value) -> Result<Vec<T>, ApiError> {
    match raw {
        Value::Array(_) => Ok(serde_json::from_value(raw)?),
        Value::Object(ref map) if map.contains_key("error") => Ok(Vec::new()),
        Value::Object(mut map) => {
            let data = map.remove("data").unwrap_or(Value::Array(Vec::new()));
            Ok(serde_json::from_value(data)?)
        }
        other => Ok(serde_json::from_value(other)?),
    }
}

/// Decode a single-entity response.
///
/// The backend returns the entity object directly; absence of the `_id`
/// identity field means "not found".
pub(crate) fn decode_entity<T: DeserializeOwned>(
    raw: Value,
    kind: EntityKind,
) -> Result<T, ApiError> {
    match raw {
        Value::Object(ref map) if map.contains_key("_id") => Ok(serde_json::from_value(raw)?),
        _ => Err(ApiError::NotFound(kind)),
    }
}

/// Decode a status-wrapped create response, extracting the nested entity.
pub(crate) fn decode_created<T: DeserializeOwned>(
    raw: Value,
    contract: StatusContract,
) -> Result<T, ApiError> {
    match check_status(&raw, contract) {
        Ok(()) => {
            let entity = raw.get(contract.entity_key).cloned().unwrap_or(Value::Null);
            Ok(serde_json::from_value(entity)?)
        }
        Err(err) => Err(err),
    }
}

/// Decode a status-wrapped update/delete response (no entity to extract).
pub(crate) fn decode_status(raw: Value, contract: StatusContract) -> Result<(), ApiError> {
    check_status(&raw, contract)
}

fn check_status(raw: &Value, contract: StatusContract) -> Result<(), ApiError> {
    let phrase = raw.get("status").and_then(Value::as_str);
    match phrase {
        Some(phrase) if phrase == contract.phrase => Ok(()),
        Some(phrase) => Err(ApiError::Rejected(phrase.to_string())),
        None => Err(ApiError::Rejected(contract.fallback.to_string())),
    }
}
