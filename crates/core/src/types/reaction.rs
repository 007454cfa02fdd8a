//! Reaction discriminator.

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The kind of a post reaction.
///
/// Wire format is the bare number `1` (like) or `0` (dislike) under the
/// `reaccion` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// The wire value for this kind.
    #[must_use]
    pub const fn as_wire(self) -> u8 {
        match self {
            Self::Like => 1,
            Self::Dislike => 0,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Like => f.write_str("like"),
            Self::Dislike => f.write_str("dislike"),
        }
    }
}

impl Serialize for ReactionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_wire())
    }
}

struct ReactionKindVisitor;

impl Visitor<'_> for ReactionKindVisitor {
    type Value = ReactionKind;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("0 (dislike) or 1 (like)")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(ReactionKind::Dislike),
            1 => Ok(ReactionKind::Like),
            other => Err(E::custom(format!("unknown reaction value: {other}"))),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map_err(|_| E::custom(format!("unknown reaction value: {v}")))
            .and_then(|v| self.visit_u64(v))
    }
}

impl<'de> Deserialize<'de> for ReactionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_u64(ReactionKindVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_round_trip() {
        let like: ReactionKind = serde_json::from_str("1").unwrap();
        let dislike: ReactionKind = serde_json::from_str("0").unwrap();
        assert_eq!(like, ReactionKind::Like);
        assert_eq!(dislike, ReactionKind::Dislike);
        assert_eq!(serde_json::to_string(&like).unwrap(), "1");
        assert_eq!(serde_json::to_string(&dislike).unwrap(), "0");
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert!(serde_json::from_str::<ReactionKind>("2").is_err());
    }
}
