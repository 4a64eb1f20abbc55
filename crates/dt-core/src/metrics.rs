//! Diet adherence metrics.
//!
//! Computes meal counts and the longest on-diet streak for one user.
//!
//! # Ordering
//!
//! Counts do not depend on input order, but the streak does. Callers pass
//! meals in the order the store returns them (most recent first). Meals
//! sharing a timestamp keep whatever relative order the store gave them.

use serde::Serialize;

use crate::meal::Meal;

/// Anything that can be classified as on or off diet.
///
/// This lets the aggregation run over stored meals or plain flags.
pub trait DietEntry {
    /// Returns true if the entry followed the diet plan.
    fn is_on_diet(&self) -> bool;
}

impl DietEntry for Meal {
    fn is_on_diet(&self) -> bool {
        self.on_diet
    }
}

impl DietEntry for bool {
    fn is_on_diet(&self) -> bool {
        *self
    }
}

impl<T: DietEntry + ?Sized> DietEntry for &T {
    fn is_on_diet(&self) -> bool {
        (**self).is_on_diet()
    }
}

/// Aggregate metrics over a user's meals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MealMetrics {
    /// Number of meals.
    pub total_count: usize,
    /// Meals with the on-diet flag set.
    pub on_diet_count: usize,
    /// Meals with the on-diet flag cleared.
    pub off_diet_count: usize,
    /// Longest run of consecutive on-diet meals in traversal order.
    pub best_streak: usize,
}

/// Running state of the aggregation.
#[derive(Debug, Clone, Copy, Default)]
struct StreakState {
    current_streak: usize,
    metrics: MealMetrics,
}

impl StreakState {
    fn step(self, on_diet: bool) -> Self {
        let Self {
            current_streak,
            metrics,
        } = self;

        if on_diet {
            let current_streak = current_streak + 1;
            Self {
                current_streak,
                metrics: MealMetrics {
                    total_count: metrics.total_count + 1,
                    on_diet_count: metrics.on_diet_count + 1,
                    best_streak: metrics.best_streak.max(current_streak),
                    ..metrics
                },
            }
        } else {
            Self {
                current_streak: 0,
                metrics: MealMetrics {
                    total_count: metrics.total_count + 1,
                    off_diet_count: metrics.off_diet_count + 1,
                    ..metrics
                },
            }
        }
    }
}

/// Computes counts and the best on-diet streak in a single pass.
///
/// Total over any input: an empty slice yields all zeros.
pub fn compute_metrics<T: DietEntry>(entries: &[T]) -> MealMetrics {
    entries
        .iter()
        .fold(StreakState::default(), |state, entry| {
            state.step(entry.is_on_diet())
        })
        .metrics
}
