//! ID wrapper types for type-safe identifiers.
//!
//! Ids are opaque strings. New entities mint a ULID, but any externally
//! supplied unique string round-trips unchanged, so durable stores can keep
//! their own id scheme.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a fresh ULID-backed id.
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Wrap an existing id string.
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from_string(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

string_id!(
    /// Workspace identifier.
    WorkspaceId
);
string_id!(
    /// Board identifier.
    BoardId
);
string_id!(
    /// Column identifier.
    ColumnId
);
string_id!(
    /// Card identifier.
    CardId
);
string_id!(
    /// User identifier. Users live outside this crate (authentication is an
    /// external collaborator); operations receive an already-resolved id.
    UserId
);
