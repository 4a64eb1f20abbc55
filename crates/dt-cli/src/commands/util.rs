//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::{Context, bail};
use chrono::{DateTime, Duration, Utc};
use dt_core::{MealId, UserId};
use dt_db::Database;
use regex::Regex;

use crate::Config;

/// Pre-compiled regex for relative time parsing.
static RELATIVE_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(minute|hour|day|week)s?\s+ago$").unwrap());

/// Conservative bounds for relative time parsing (~1000 years in minutes).
const MAX_RELATIVE_MINUTES: i64 = 1000 * 365 * 24 * 60;

/// Parse a datetime string as either ISO 8601 or relative to `now`.
///
/// Supports:
/// - ISO 8601: "2026-01-15T10:30:00Z"
/// - Relative: "now", "2 hours ago", "30 minutes ago", "1 day ago", "1 week ago"
pub fn parse_datetime(s: &str, now: DateTime<Utc>) -> anyhow::Result<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if s.eq_ignore_ascii_case("now") {
        return Ok(now);
    }

    let Some(caps) = RELATIVE_TIME_RE.captures(s) else {
        bail!(
            "Invalid datetime: {s}. Use ISO 8601 (e.g., 2026-01-15T10:30:00Z) or relative (e.g., '2 hours ago')"
        );
    };

    let n: i64 = caps[1]
        .parse()
        .context("failed to parse number in relative time")?;

    let (max_for_unit, minutes_per_unit) = match &caps[2] {
        "minute" => (MAX_RELATIVE_MINUTES, 1),
        "hour" => (MAX_RELATIVE_MINUTES / 60, 60),
        "day" => (MAX_RELATIVE_MINUTES / (60 * 24), 60 * 24),
        "week" => (MAX_RELATIVE_MINUTES / (60 * 24 * 7), 60 * 24 * 7),
        unit => bail!("Unknown time unit: {unit}"),
    };

    if n > max_for_unit {
        bail!("Relative time value too large: {n} {}", &caps[2]);
    }

    Ok(now - Duration::minutes(n * minutes_per_unit))
}

/// Parses a meal ID given on the command line.
pub fn parse_meal_id(s: &str) -> anyhow::Result<MealId> {
    MealId::new(s).with_context(|| format!("invalid meal ID: {s}"))
}

/// Resolves the user that meal commands act on.
///
/// The `--user` flag wins over `user_id` in the config. The user must exist.
pub fn resolve_user(db: &Database, flag: Option<&str>, config: &Config) -> anyhow::Result<UserId> {
    let Some(raw) = flag.or(config.user_id.as_deref()) else {
        bail!("no user selected: pass --user <id> or set user_id in the config file");
    };
    let user_id = UserId::new(raw).with_context(|| format!("invalid user ID: {raw}"))?;
    if db.get_user(&user_id)?.is_none() {
        bail!("user not found: {user_id}");
    }
    tracing::debug!(%user_id, "resolved current user");
    Ok(user_id)
}

/// Returns the first eight characters of an ID for table display.
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Truncates by characters, not bytes, to avoid panics on multi-byte UTF-8.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max.saturating_sub(3)).collect::<String>())
    } else {
        s.to_string()
    }
}
