//! Cache keys for resource fetches.

use craftica_core::{PostId, ProductId, StoreId};

use crate::models::{PostFilter, ProductFilter, StoreFilter};

/// Explicit cache key: entity tag plus canonicalized parameters.
///
/// Filters canonicalize unset parameters as `None`, so two differently
/// constructed but equal parameter sets land on the same key by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Stores(StoreFilter),
    Store(StoreId),
    Products(ProductFilter),
    Product(ProductId),
    Posts(PostFilter),
    Post(PostId),
    Comments(PostId),
    Reactions(PostId),
}

/// The null-key guard for detail fetches.
///
/// Routing occasionally hands over the literal string `"undefined"` instead
/// of nothing; treat it, like an absent or empty id, as "no key yet".
pub(crate) fn valid_id(id: Option<&str>) -> Option<&str> {
    match id {
        Some(id) if !id.is_empty() && id != "undefined" => Some(id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_id_accepts_real_ids() {
        assert_eq!(valid_id(Some("42")), Some("42"));
        assert_eq!(valid_id(Some("6650a1")), Some("6650a1"));
    }

    #[test]
    fn test_valid_id_rejects_absent_forms() {
        assert_eq!(valid_id(None), None);
        assert_eq!(valid_id(Some("")), None);
        assert_eq!(valid_id(Some("undefined")), None);
    }

    #[test]
    fn test_equal_filters_collide_on_one_key() {
        let a = ResourceKey::Stores(StoreFilter {
            page: Some(1),
            limit: Some(12),
            city: Some("Madrid".to_string()),
            country: None,
        });
        let b = ResourceKey::Stores(StoreFilter {
            country: None,
            city: Some("Madrid".to_string()),
            limit: Some(12),
            page: Some(1),
        });
        assert_eq!(a, b);
    }
}
