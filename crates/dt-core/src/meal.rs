//! Meals recorded by a user.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{MealId, UserId, ValidationError};

/// A meal owned by a single user.
///
/// `id` and `user_id` are fixed at creation. Everything else is replaced
/// wholesale by [`Meal::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    /// When the meal was eaten, millisecond precision.
    pub eaten_at: DateTime<Utc>,
    /// Whether the meal followed the user's diet plan.
    pub on_diet: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The user-editable fields of a meal.
///
/// Only [`MealDraft::new`] builds one, so a draft always carries a trimmed,
/// non-blank name:
///
/// ```compile_fail
/// use chrono::Utc;
/// use dt_core::MealDraft;
///
/// let draft = MealDraft {
///     name: "   ".to_string(),
///     description: String::new(),
///     on_diet: true,
///     eaten_at: Utc::now(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDraft {
    name: String,
    description: String,
    on_diet: bool,
    eaten_at: DateTime<Utc>,
}

impl MealDraft {
    /// Builds a draft, trimming the name and rejecting it if blank.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        on_diet: bool,
        eaten_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "meal name" });
        }
        Ok(Self {
            name,
            description: description.into(),
            on_diet,
            eaten_at: eaten_at.trunc_subsecs(3),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn on_diet(&self) -> bool {
        self.on_diet
    }

    pub const fn eaten_at(&self) -> DateTime<Utc> {
        self.eaten_at
    }
}

impl Meal {
    /// Creates a new meal for `user_id` with a freshly generated ID.
    pub fn new(user_id: UserId, draft: MealDraft, now: DateTime<Utc>) -> Self {
        let now = now.trunc_subsecs(3);
        Self {
            id: MealId::generate(),
            user_id,
            name: draft.name,
            description: draft.description,
            eaten_at: draft.eaten_at.trunc_subsecs(3),
            on_diet: draft.on_diet,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the editable fields and bumps `updated_at`.
    pub fn apply(&mut self, draft: MealDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.description = draft.description;
        self.on_diet = draft.on_diet;
        self.eaten_at = draft.eaten_at.trunc_subsecs(3);
        self.updated_at = now.trunc_subsecs(3);
    }

    /// Returns the editable fields as a draft.
    pub fn draft(&self) -> MealDraft {
        MealDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            on_diet: self.on_diet,
            eaten_at: self.eaten_at,
        }
    }
}
