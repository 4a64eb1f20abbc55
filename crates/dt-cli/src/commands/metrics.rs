//! Metrics command for diet adherence.
//!
//! Reports total, on-diet and off-diet meal counts plus the best on-diet
//! streak, walking meals from most recent to oldest.

use std::io::Write;

use anyhow::Result;
use dt_core::{MealMetrics, UserId};
use dt_db::Database;

/// Format metrics for human-readable output.
fn format_metrics<W: Write>(writer: &mut W, metrics: &MealMetrics) -> Result<()> {
    writeln!(writer, "Diet metrics")?;
    writeln!(writer, "Total meals:  {}", metrics.total_count)?;
    writeln!(writer, "On diet:      {}", metrics.on_diet_count)?;
    writeln!(writer, "Off diet:     {}", metrics.off_diet_count)?;
    writeln!(writer, "Best streak:  {}", metrics.best_streak)?;
    Ok(())
}

/// Runs the metrics command.
pub fn run<W: Write>(writer: &mut W, db: &Database, user_id: &UserId, json: bool) -> Result<()> {
    let metrics = db.meal_metrics(user_id)?;
    tracing::debug!(?metrics, "computed meal metrics");

    if json {
        let output = serde_json::to_string_pretty(&metrics)?;
        writeln!(writer, "{output}")?;
    } else {
        format_metrics(writer, &metrics)?;
    }

    Ok(())
}
