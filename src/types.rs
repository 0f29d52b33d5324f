//! NewType wrappers for the identifiers that flow through the desk.
//!
//! Tool names, ticker symbols, section ids and annotation ids are all plain
//! strings on the wire; wrapping them keeps a ticker from being passed where a
//! section id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate a NewType wrapper with standard trait implementations.
macro_rules! newtype_string {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new instance.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Get the inner value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner String.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

newtype_string!(
    /// Registered name of a tool (e.g., "addToWatchlist").
    ///
    /// Lookup is by exact, case-sensitive match.
    ToolName
);

newtype_string!(
    /// Watchlist / chart symbol as supplied by the caller (e.g., "NVDA").
    ///
    /// Symbols are compared exactly; "nvda" and "NVDA" are different entries.
    Ticker
);

newtype_string!(
    /// Anchor id of an article section (e.g., "executive-summary").
    SectionId
);

newtype_string!(
    /// Identifier of an annotation attached to an article passage.
    AnnotationId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_name_creation() {
        let name = ToolName::new("changeTitle");
        assert_eq!(name.as_str(), "changeTitle");
        assert_eq!(name.to_string(), "changeTitle");
    }

    #[test]
    fn test_ticker_from_string() {
        let ticker: Ticker = "NVDA".into();
        assert_eq!(ticker.as_str(), "NVDA");

        let ticker: Ticker = String::from("ORCL").into();
        assert_eq!(ticker.into_inner(), "ORCL");
    }

    #[test]
    fn test_ticker_is_case_sensitive() {
        assert_ne!(Ticker::new("nvda"), Ticker::new("NVDA"));
    }

    #[test]
    fn test_section_id_serde() {
        let id = SectionId::new("risks-challenges");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"risks-challenges\"");

        let parsed: SectionId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_borrow_for_map_lookup() {
        use std::collections::BTreeMap;

        let mut map = BTreeMap::new();
        map.insert(AnnotationId::new("annotation-1"), 1);
        assert_eq!(map.get("annotation-1"), Some(&1));
        assert!(map.get("annotation-2").is_none());
    }
}
