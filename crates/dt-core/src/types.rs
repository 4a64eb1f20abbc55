//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The identifier was not a UUID.
    #[error("invalid {field}: {value}")]
    InvalidId { field: &'static str, value: String },

    /// The email address was malformed.
    #[error("invalid email address: {value}")]
    InvalidEmail { value: String },
}

/// Generates a validated UUID-backed ID newtype with common trait implementations.
macro_rules! define_uuid_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates an ID from an existing value after validation.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                let trimmed = id.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                let parsed = Uuid::parse_str(trimmed).map_err(|_| ValidationError::InvalidId {
                    field: $field_name,
                    value: id.clone(),
                })?;
                Ok(Self(parsed.hyphenated().to_string()))
            }

            /// Generates a fresh random ID.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4().hyphenated().to_string())
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_uuid_id!(
    /// A validated meal identifier.
    ///
    /// Meal IDs are UUIDs, normalized to lowercase hyphenated form. They are
    /// assigned once at creation and never change.
    MealId, "meal ID"
);

define_uuid_id!(
    /// A validated user identifier.
    ///
    /// Every meal carries the ID of the user that owns it.
    UserId, "user ID"
);
