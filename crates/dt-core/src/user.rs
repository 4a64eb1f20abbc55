//! User accounts that own meals.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{UserId, ValidationError};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Validates the name and email.
    ///
    /// The email check is shallow: one `@` with text on both sides and a dot
    /// in the domain.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "user name" });
        }

        let email = email.into().trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            });
        if !valid {
            return Err(ValidationError::InvalidEmail { value: email });
        }

        Ok(Self { name, email })
    }
}

impl User {
    /// Creates a user with a freshly generated ID.
    pub fn new(input: NewUser, now: DateTime<Utc>) -> Self {
        Self {
            id: UserId::generate(),
            name: input.name,
            email: input.email,
            created_at: now.trunc_subsecs(3),
        }
    }
}
