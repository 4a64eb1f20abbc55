//! Users command for registering and listing accounts.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use dt_core::{NewUser, User, UserId};
use dt_db::Database;
use serde::Serialize;

/// Registers a user and prints its ID to stdout.
pub fn create<W: Write>(
    writer: &mut W,
    db: &Database,
    name: &str,
    email: &str,
    now: DateTime<Utc>,
) -> Result<UserId> {
    let input = NewUser::new(name, email)?;
    let user = User::new(input, now);
    db.insert_user(&user).context("failed to create user")?;
    tracing::info!(user_id = %user.id, "created user");

    writeln!(writer, "{}", user.id)?;
    Ok(user.id)
}

#[derive(Debug, Serialize)]
struct JsonUsers<'a> {
    users: &'a [User],
}

/// Lists registered users.
pub fn list<W: Write>(writer: &mut W, db: &Database, json: bool) -> Result<()> {
    let users = db.list_users()?;

    if json {
        let output = serde_json::to_string_pretty(&JsonUsers { users: &users })?;
        writeln!(writer, "{output}")?;
        return Ok(());
    }

    if users.is_empty() {
        writeln!(
            writer,
            "No users yet. Run 'dt users create --name <name> --email <email>' to add one."
        )?;
        return Ok(());
    }

    writeln!(writer, "{:<36}  {:<20}  EMAIL", "USER ID", "NAME")?;
    for user in &users {
        writeln!(
            writer,
            "{:<36}  {:<20}  {}",
            user.id,
            super::util::truncate(&user.name, 20),
            user.email
        )?;
    }

    Ok(())
}
