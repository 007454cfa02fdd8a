//! Newtype IDs for type-safe entity references.
//!
//! The Craftica backend is inconsistent about identifier representation:
//! depending on the endpoint the same `_id` arrives as a JSON number or a
//! JSON string. [`EntityId`] accepts either form and preserves it on
//! re-serialization, while comparing and hashing by the canonical string
//! form so that `1` and `"1"` name the same entity.
//!
//! Use the `define_id!` macro to create type-safe wrappers that prevent
//! accidentally mixing IDs from different entity types.

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque entity identifier.
///
/// Holds the canonical string form plus a flag recording whether the backend
/// sent it as a JSON number, so round-tripping does not change the wire
/// representation.
#[derive(Debug, Clone)]
pub struct EntityId {
    value: String,
    numeric: bool,
}

impl EntityId {
    /// Create an ID from its string form.
    #[must_use]
    pub fn from_string(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            numeric: false,
        }
    }

    /// Create an ID from a numeric form.
    #[must_use]
    pub fn from_number(value: i64) -> Self {
        Self {
            value: value.to_string(),
            numeric: true,
        }
    }

    /// The canonical string form of the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// Identity is the canonical string form; the numeric flag only matters for
// re-serialization.
impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for EntityId {}

impl std::hash::Hash for EntityId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self::from_number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::from_string(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.numeric
            && let Ok(n) = self.value.parse::<i64>()
        {
            return serializer.serialize_i64(n);
        }
        serializer.serialize_str(&self.value)
    }
}

struct EntityIdVisitor;

impl Visitor<'_> for EntityIdVisitor {
    type Value = EntityId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or integer identifier")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(EntityId::from_number(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(EntityId::from_number)
            .map_err(|_| E::custom("identifier out of range"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(EntityId::from_string(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(EntityId::from_string(v))
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntityIdVisitor)
    }
}

/// Macro to define a type-safe ID wrapper around [`EntityId`].
///
/// Creates a newtype with `Serialize`/`Deserialize` (`#[serde(transparent)]`),
/// the usual derives, `new()`, `as_str()`, and `From` conversions from the
/// representations the backend uses.
///
/// # Example
///
/// ```rust
/// # use craftica_core::define_id;
/// define_id!(UserId);
/// define_id!(StoreId);
///
/// let user_id = UserId::new("42");
/// let store_id = StoreId::new(7i64);
///
/// // These are different types, so this won't compile:
/// // let _: UserId = store_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name($crate::EntityId);

        impl $name {
            /// Create a new ID from any accepted representation.
            #[must_use]
            pub fn new(id: impl Into<$crate::EntityId>) -> Self {
                Self(id.into())
            }

            /// The canonical string form of the identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$crate::EntityId> for $name {
            fn from(id: $crate::EntityId) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $crate::EntityId {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId);
define_id!(StoreId);
define_id!(ProductId);
define_id!(PostId);
define_id!(CommentId);
define_id!(ReactionId);
