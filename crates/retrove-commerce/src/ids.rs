//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a CategoryId where a ProductId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate numeric newtype ID structs.
///
/// Numeric IDs are allocated by the collection that owns them
/// (max existing + 1), so there is no `generate()` here.
macro_rules! define_numeric_id {
    ($name:ident) => {
        /// A unique numeric identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from a raw number.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the raw number.
            pub const fn get(&self) -> u64 {
                self.0
            }

            /// The ID following this one.
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }

            /// Allocate the next ID after the highest of `existing`.
            ///
            /// An empty set starts from a baseline of 0, so the first ID is 1.
            pub fn next_after<I>(existing: I) -> Self
            where
                I: IntoIterator<Item = $name>,
            {
                existing
                    .into_iter()
                    .max()
                    .unwrap_or(Self(0))
                    .next()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u64>().map(Self)
            }
        }
    };
}

/// Macro to generate string newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
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
    };
}

define_numeric_id!(ProductId);
define_numeric_id!(CategoryId);
define_numeric_id!(ReviewId);

define_id!(OrderId);

impl OrderId {
    /// Build a sequential order id, e.g. `RTV-1001`.
    pub fn sequential(prefix: &str, number: u64) -> Self {
        Self(format!("{}-{}", prefix, number))
    }

    /// Case-insensitive comparison against free-form user input.
    ///
    /// Surrounding whitespace in `input` is ignored.
    pub fn matches_input(&self, input: &str) -> bool {
        self.0.eq_ignore_ascii_case(input.trim())
    }
}
