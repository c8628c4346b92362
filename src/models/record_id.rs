//! Identifier of a backend record

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Opaque record identifier.
///
/// The API emits identifiers either as strings or as numbers; both are kept
/// as text so they round-trip through URLs and form fields unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier percent-encoded for use as a URL path segment
    pub fn path_segment(&self) -> String {
        crate::utils::helpers::encode_path_segment(&self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordIdVisitor;

        impl<'de> Visitor<'de> for RecordIdVisitor {
            type Value = RecordId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer record id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RecordId, E> {
                Ok(RecordId::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<RecordId, E> {
                Ok(RecordId(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RecordId, E> {
                Ok(RecordId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RecordId, E> {
                Ok(RecordId(v.to_string()))
            }
        }

        deserializer.deserialize_any(RecordIdVisitor)
    }
}

/// Deserialize an optional reference, treating `null` and `""` as absent
pub(crate) fn deserialize_optional<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<RecordId>, D::Error> {
    let id = Option::<RecordId>::deserialize(deserializer)?;
    Ok(id.filter(|id| !id.as_str().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_strings_and_numbers() {
        let from_number: RecordId = serde_json::from_str("42").unwrap();
        let from_string: RecordId = serde_json::from_str("\"5f3a\"").unwrap();
        assert_eq!(from_number.as_str(), "42");
        assert_eq!(from_string.as_str(), "5f3a");
        assert!(serde_json::from_str::<RecordId>("true").is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        assert_eq!(serde_json::to_string(&RecordId::new("7")).unwrap(), "\"7\"");
    }
}
