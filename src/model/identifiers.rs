//! Core identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.
//! Deserialization goes through the same validation via `try_from`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rejected identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIdentifier {
    /// The raw string was empty.
    #[error("{kind} cannot be empty")]
    Empty {
        /// Human-readable identifier kind, e.g. "Widget ID".
        kind: &'static str,
    },
}

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Smart constructor: validates non-empty identifier.
            pub fn new(raw: impl Into<String>) -> Result<Self, InvalidIdentifier> {
                let raw = raw.into();
                if raw.is_empty() {
                    return Err(InvalidIdentifier::Empty { kind: $kind });
                }
                Ok(Self(raw))
            }

            /// Borrow the raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidIdentifier;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

identifier!(
    /// Identifier of a saved or ad-hoc view.
    ViewId,
    "View ID"
);

identifier!(
    /// Identifier of the search backing a view.
    SearchId,
    "Search ID"
);

identifier!(
    /// Identifier of a single query within a search.
    QueryId,
    "Query ID"
);

identifier!(
    /// Identifier of a widget placed in a view state.
    WidgetId,
    "Widget ID"
);

identifier!(
    /// Identifier of a search type (one executed result set of a query).
    SearchTypeId,
    "Search type ID"
);

identifier!(
    /// Identifier of a message stream used in query filters.
    StreamId,
    "Stream ID"
);

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_id_accepts_uuid_like_string() {
        let id = WidgetId::new("a1b2c3d4-0000-4000-8000-000000000001");
        assert!(id.is_ok(), "Valid widget ID should be accepted");
    }

    #[test]
    fn widget_id_rejects_empty_string() {
        let id = WidgetId::new("");
        assert_eq!(id, Err(InvalidIdentifier::Empty { kind: "Widget ID" }));
    }

    #[test]
    fn empty_error_names_the_identifier_kind() {
        let err = SearchTypeId::new("").unwrap_err();
        assert_eq!(err.to_string(), "Search type ID cannot be empty");
    }

    #[test]
    fn as_str_and_display_return_original() {
        let id = StreamId::new("000000000000000000000001").unwrap();
        assert_eq!(id.as_str(), "000000000000000000000001");
        assert_eq!(id.to_string(), "000000000000000000000001");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = QueryId::new("query-1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"query-1\"");
    }

    #[test]
    fn deserialization_rejects_empty_string() {
        let result: Result<SearchId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err(), "Empty search ID must not deserialize");
    }

    #[test]
    fn deserialization_accepts_non_empty_string() {
        let id: ViewId = serde_json::from_str("\"view-9\"").unwrap();
        assert_eq!(id.as_str(), "view-9");
    }
}
