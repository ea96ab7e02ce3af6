//! Strongly-typed ID wrappers for all entity types
//!
//! Identifiers are positive integers assigned by the backing store. Using
//! newtype wrappers prevents accidentally mixing up IDs from different entity
//! types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when an identifier cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    Invalid(String),
    NotPositive(i64),
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(s) => write!(f, "Invalid identifier: {}", s),
            Self::NotPositive(n) => write!(f, "Identifier must be positive, got {}", n),
        }
    }
}

impl std::error::Error for IdParseError {}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw identifier
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the raw integer value
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Parse an ID from a string (bare number or prefixed form)
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                s.parse()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                let raw = trimmed.strip_prefix($display_prefix).unwrap_or(trimmed);
                let value: i64 = raw
                    .parse()
                    .map_err(|_| IdParseError::Invalid(s.to_string()))?;
                if value <= 0 {
                    return Err(IdParseError::NotPositive(value));
                }
                Ok(Self(value))
            }
        }
    };
}

define_id!(EventId, "evt-");
define_id!(TaskId, "task-");
define_id!(ExpenseId, "exp-");
