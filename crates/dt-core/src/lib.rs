//! Core domain logic for the diet tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Meals and the users that own them
//! - Validated identifiers and inputs
//! - Metrics: meal counts and the best on-diet streak

mod meal;
mod metrics;
mod types;
mod user;

pub use meal::{Meal, MealDraft};
pub use metrics::{DietEntry, MealMetrics, compute_metrics};
pub use types::{MealId, UserId, ValidationError};
pub use user::{NewUser, User};
