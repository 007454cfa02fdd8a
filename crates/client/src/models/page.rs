//! The normalized list envelope.

use serde::{Deserialize, Serialize};

/// One page of list results, regardless of how the backend shaped them.
///
/// The adapter normalizes bare arrays and error-flagged objects into this
/// envelope; a backend that one day paginates server-side can send it
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Total number of items known to the backend.
    pub total: usize,
    /// 1-based page number.
    pub page: u32,
    /// Page size the totals were computed against.
    pub limit: u32,
    /// Number of pages at this limit.
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Build a page from a bare array of items.
    #[must_use]
    pub fn from_items(data: Vec<T>, page: u32, limit: u32) -> Self {
        let total = data.len();
        Self {
            data,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        }
    }

    /// The empty page list failures degrade to.
    #[must_use]
    pub const fn empty(page: u32, limit: u32) -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page,
            limit,
            total_pages: 0,
        }
    }

    /// Whether this page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn total_pages(total: usize, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(limit as usize)).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_items_computes_totals() {
        let page = Page::from_items(vec![1, 2, 3, 4, 5], 1, 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_exact_multiple_of_limit() {
        let page = Page::from_items(vec![1, 2, 3, 4], 1, 2);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_empty_page() {
        let page: Page<i32> = Page::empty(1, 10);
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let page = Page::from_items(vec![1], 1, 10);
        let value = serde_json::to_value(&page).unwrap();
        assert!(value.get("totalPages").is_some());
    }
}
