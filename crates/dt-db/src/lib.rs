//! Storage layer for the diet tracker.
//!
//! Provides persistence for users and meals using `rusqlite`.
//!
//! # Thread Safety
//!
//! The [`Database`] type wraps a `rusqlite::Connection`, which is `Send` but not `Sync`.
//! A `Database` instance can be moved between threads but cannot be shared
//! across threads without external synchronization.
//!
//! # Schema
//!
//! ## Timestamp Format
//!
//! `eaten_at` is stored as INTEGER milliseconds since the Unix epoch so that
//! ordering is numeric and precision is exactly one millisecond.
//!
//! `created_at` and `updated_at` are stored as TEXT in RFC 3339 with millisecond
//! precision (e.g., `2024-01-15T10:30:00.000Z`).
//!
//! ## Ownership
//!
//! Every meal query that targets a single meal is scoped by the owning user.
//! A meal belonging to another user is reported as missing, never returned.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use dt_core::{Meal, MealDraft, MealId, MealMetrics, User, UserId, ValidationError, compute_metrics};
use rusqlite::{Connection, ErrorCode, OptionalExtension, Row, params};
use thiserror::Error;

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A stored identifier failed validation.
    #[error("invalid stored value: {0}")]
    Validation(#[from] ValidationError),
    /// Failed to parse a stored timestamp.
    #[error("invalid {column} for {id}: {timestamp}")]
    TimestampParse {
        id: String,
        column: &'static str,
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },
    /// A stored millisecond timestamp is out of range.
    #[error("invalid eaten_at for meal {id}: {millis}")]
    InvalidMillis { id: String, millis: i64 },
    /// Another user already registered this email.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),
    /// The referenced user does not exist.
    #[error("user not found: {0}")]
    UnknownUser(String),
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
}

/// A meal row as stored, before validation.
struct MealRow {
    id: String,
    user_id: String,
    name: String,
    description: String,
    eaten_at: i64,
    on_diet: bool,
    created_at: String,
    updated_at: String,
}

impl MealRow {
    const COLUMNS: &'static str =
        "id, user_id, name, description, eaten_at, on_diet, created_at, updated_at";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user_id: row.get(1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            eaten_at: row.get(4)?,
            on_diet: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }

    fn into_meal(self) -> Result<Meal, DbError> {
        let eaten_at =
            DateTime::from_timestamp_millis(self.eaten_at).ok_or_else(|| DbError::InvalidMillis {
                id: self.id.clone(),
                millis: self.eaten_at,
            })?;
        let created_at = parse_timestamp(&self.id, "created_at", &self.created_at)?;
        let updated_at = parse_timestamp(&self.id, "updated_at", &self.updated_at)?;
        Ok(Meal {
            id: MealId::new(self.id)?,
            user_id: UserId::new(self.user_id)?,
            name: self.name,
            description: self.description,
            eaten_at,
            on_diet: self.on_diet,
            created_at,
            updated_at,
        })
    }
}

/// A user row as stored, before validation.
struct UserRow {
    id: String,
    name: String,
    email: String,
    created_at: String,
}

impl UserRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            created_at: row.get(3)?,
        })
    }

    fn into_user(self) -> Result<User, DbError> {
        let created_at = parse_timestamp(&self.id, "created_at", &self.created_at)?;
        Ok(User {
            id: UserId::new(self.id)?,
            name: self.name,
            email: self.email,
            created_at,
        })
    }
}

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The database schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        tracing::debug!(path = %path.display(), "opened database");
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the database schema.
    ///
    /// This is idempotent - safe to call on an already-initialized database.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL
            );

            -- Meals table: one row per recorded meal
            -- eaten_at: milliseconds since the Unix epoch
            -- on_diet: 0 or 1
            CREATE TABLE IF NOT EXISTS meals (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                eaten_at INTEGER NOT NULL,
                on_diet INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
            );

            CREATE INDEX IF NOT EXISTS idx_meals_user_eaten ON meals(user_id, eaten_at);
            ",
        )?;
        Ok(())
    }

    // ========== Users ==========

    /// Inserts a new user.
    pub fn insert_user(&self, user: &User) -> Result<(), DbError> {
        let result = self.conn.execute(
            "INSERT INTO users (id, name, email, created_at) VALUES (?, ?, ?, ?)",
            params![
                user.id.as_str(),
                user.name,
                user.email,
                format_timestamp(user.created_at),
            ],
        );
        match result {
            Ok(_) => {
                tracing::debug!(user_id = %user.id, "inserted user");
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(err, msg))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                if self.email_exists(&user.email)? {
                    Err(DbError::DuplicateEmail(user.email.clone()))
                } else {
                    Err(rusqlite::Error::SqliteFailure(err, msg).into())
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    fn email_exists(&self, email: &str) -> Result<bool, DbError> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM users WHERE email = ?", [email], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    /// Fetches a user by ID.
    pub fn get_user(&self, id: &UserId) -> Result<Option<User>, DbError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, email, created_at FROM users WHERE id = ?",
                [id.as_str()],
                UserRow::from_row,
            )
            .optional()?;
        row.map(UserRow::into_user).transpose()
    }

    /// Lists users ordered by creation time then ID.
    pub fn list_users(&self) -> Result<Vec<User>, DbError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, email, created_at FROM users ORDER BY created_at ASC, id ASC",
        )?;
        let rows = stmt.query_map([], UserRow::from_row)?;
        let mut users = Vec::new();
        for row in rows {
            users.push(row?.into_user()?);
        }
        Ok(users)
    }

    // ========== Meals ==========

    /// Inserts a new meal.
    ///
    /// Fails with [`DbError::UnknownUser`] if the owner is not registered.
    pub fn insert_meal(&self, meal: &Meal) -> Result<(), DbError> {
        if self.get_user(&meal.user_id)?.is_none() {
            return Err(DbError::UnknownUser(meal.user_id.to_string()));
        }
        self.conn.execute(
            &format!(
                "INSERT INTO meals ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                MealRow::COLUMNS
            ),
            params![
                meal.id.as_str(),
                meal.user_id.as_str(),
                meal.name,
                meal.description,
                meal.eaten_at.timestamp_millis(),
                meal.on_diet,
                format_timestamp(meal.created_at),
                format_timestamp(meal.updated_at),
            ],
        )?;
        tracing::debug!(meal_id = %meal.id, user_id = %meal.user_id, "inserted meal");
        Ok(())
    }

    /// Lists a user's meals, most recently eaten first.
    ///
    /// Meals with identical `eaten_at` come back in whatever order `SQLite` yields.
    pub fn list_meals(&self, user_id: &UserId) -> Result<Vec<Meal>, DbError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM meals WHERE user_id = ? ORDER BY eaten_at DESC",
            MealRow::COLUMNS
        ))?;
        let rows = stmt.query_map([user_id.as_str()], MealRow::from_row)?;
        let mut meals = Vec::new();
        for row in rows {
            meals.push(row?.into_meal()?);
        }
        Ok(meals)
    }

    /// Fetches one of the user's meals.
    ///
    /// Returns `None` if the meal does not exist or belongs to someone else.
    pub fn get_meal(&self, user_id: &UserId, meal_id: &MealId) -> Result<Option<Meal>, DbError> {
        let row = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM meals WHERE id = ? AND user_id = ?",
                    MealRow::COLUMNS
                ),
                [meal_id.as_str(), user_id.as_str()],
                MealRow::from_row,
            )
            .optional()?;
        row.map(MealRow::into_meal).transpose()
    }

    /// Replaces the editable fields of one of the user's meals.
    ///
    /// Returns false if no matching meal was found.
    pub fn update_meal(
        &self,
        user_id: &UserId,
        meal_id: &MealId,
        draft: &MealDraft,
        now: DateTime<Utc>,
    ) -> Result<bool, DbError> {
        let changed = self.conn.execute(
            "
            UPDATE meals
            SET name = ?, description = ?, on_diet = ?, eaten_at = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            ",
            params![
                draft.name(),
                draft.description(),
                draft.on_diet(),
                draft.eaten_at().timestamp_millis(),
                format_timestamp(now),
                meal_id.as_str(),
                user_id.as_str(),
            ],
        )?;
        tracing::debug!(%meal_id, changed, "updated meal");
        Ok(changed > 0)
    }

    /// Deletes one of the user's meals.
    ///
    /// Returns false if no matching meal was found.
    pub fn delete_meal(&self, user_id: &UserId, meal_id: &MealId) -> Result<bool, DbError> {
        let deleted = self.conn.execute(
            "DELETE FROM meals WHERE id = ? AND user_id = ?",
            [meal_id.as_str(), user_id.as_str()],
        )?;
        tracing::debug!(%meal_id, deleted, "deleted meal");
        Ok(deleted > 0)
    }

    /// Computes metrics over the user's meals in descending `eaten_at` order.
    pub fn meal_metrics(&self, user_id: &UserId) -> Result<MealMetrics, DbError> {
        let meals = self.list_meals(user_id)?;
        Ok(compute_metrics(&meals))
    }
}

/// Formats a timestamp for TEXT columns.
fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(id: &str, column: &'static str, value: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| DbError::TimestampParse {
            id: id.to_string(),
            column,
            timestamp: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use chrono::{Duration, TimeZone};
    use dt_core::NewUser;

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()
    }

    fn create_user(db: &Database, email: &str) -> User {
        let user = User::new(NewUser::new("John Doe", email).unwrap(), base_time());
        db.insert_user(&user).unwrap();
        user
    }

    fn create_meal(db: &Database, user: &User, name: &str, hours: i64, on_diet: bool) -> Meal {
        let at = base_time() + Duration::hours(hours);
        let draft = MealDraft::new(name, format!("{name} description"), on_diet, at).unwrap();
        let meal = Meal::new(user.id.clone(), draft, base_time());
        db.insert_meal(&meal).unwrap();
        meal
    }

    fn table_columns(conn: &Connection, table: &str) -> Vec<String> {
        let mut stmt = conn
            .prepare(&format!("PRAGMA table_info({table})"))
            .unwrap();
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .map(Result::unwrap)
            .collect();
        columns
    }

    fn index_names(conn: &Connection, table: &str) -> HashSet<String> {
        let mut stmt = conn
            .prepare(&format!("PRAGMA index_list({table})"))
            .unwrap();
        let names = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .map(Result::unwrap)
            .collect();
        names
    }

    #[test]
    fn open_in_memory_database() {
        let db = Database::open_in_memory();
        assert!(db.is_ok());
    }

    #[test]
    fn open_is_idempotent_on_disk() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("dt.db");
        {
            let db = Database::open(&path).unwrap();
            create_user(&db, "john@example.com");
        }
        let db = Database::open(&path).unwrap();
        assert_eq!(db.list_users().unwrap().len(), 1);
    }

    #[test]
    fn schema_matches_data_model() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(
            table_columns(&db.conn, "meals"),
            vec![
                "id",
                "user_id",
                "name",
                "description",
                "eaten_at",
                "on_diet",
                "created_at",
                "updated_at",
            ]
        );
        assert_eq!(
            table_columns(&db.conn, "users"),
            vec!["id", "name", "email", "created_at"]
        );
        assert!(index_names(&db.conn, "meals").contains("idx_meals_user_eaten"));
    }

    #[test]
    fn insert_user_rejects_duplicate_email() {
        let db = Database::open_in_memory().unwrap();
        create_user(&db, "john@example.com");

        let dup = User::new(
            NewUser::new("Other John", "john@example.com").unwrap(),
            base_time(),
        );
        let err = db.insert_user(&dup).unwrap_err();
        assert!(matches!(err, DbError::DuplicateEmail(ref email) if email == "john@example.com"));
    }

    #[test]
    fn get_user_round_trips() {
        let db = Database::open_in_memory().unwrap();
        let user = create_user(&db, "john@example.com");

        assert_eq!(db.get_user(&user.id).unwrap(), Some(user));
        assert_eq!(db.get_user(&UserId::generate()).unwrap(), None);
    }

    #[test]
    fn insert_meal_requires_known_user() {
        let db = Database::open_in_memory().unwrap();
        let draft = MealDraft::new("Breakfast", "", true, base_time()).unwrap();
        let meal = Meal::new(UserId::generate(), draft, base_time());

        let err = db.insert_meal(&meal).unwrap_err();
        assert!(matches!(err, DbError::UnknownUser(_)));
    }

    #[test]
    fn list_meals_is_descending_and_scoped_to_owner() {
        let db = Database::open_in_memory().unwrap();
        let john = create_user(&db, "john@example.com");
        let jane = create_user(&db, "jane@example.com");

        create_meal(&db, &john, "Breakfast", 0, true);
        create_meal(&db, &john, "Dinner", 10, false);
        create_meal(&db, &john, "Lunch", 4, true);
        create_meal(&db, &jane, "Snack", 5, true);

        let meals = db.list_meals(&john.id).unwrap();
        let names: Vec<&str> = meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Dinner", "Lunch", "Breakfast"]);
        assert!(meals.iter().all(|m| m.user_id == john.id));

        assert_eq!(db.list_meals(&jane.id).unwrap().len(), 1);
    }

    #[test]
    fn stored_meal_round_trips_with_millisecond_precision() {
        let db = Database::open_in_memory().unwrap();
        let user = create_user(&db, "john@example.com");
        let at = base_time() + Duration::milliseconds(1_234);
        let draft = MealDraft::new("Breakfast", "oats", true, at).unwrap();
        let meal = Meal::new(user.id.clone(), draft, at);
        db.insert_meal(&meal).unwrap();

        let stored = db.get_meal(&user.id, &meal.id).unwrap().unwrap();
        assert_eq!(stored, meal);
        assert_eq!(stored.eaten_at.timestamp_millis() % 1_000, 234);
    }

    #[test]
    fn get_meal_hides_other_users_meals() {
        let db = Database::open_in_memory().unwrap();
        let john = create_user(&db, "john@example.com");
        let jane = create_user(&db, "jane@example.com");
        let meal = create_meal(&db, &john, "Breakfast", 0, true);

        assert!(db.get_meal(&john.id, &meal.id).unwrap().is_some());
        assert!(db.get_meal(&jane.id, &meal.id).unwrap().is_none());
        assert!(db.get_meal(&john.id, &MealId::generate()).unwrap().is_none());
    }

    #[test]
    fn update_meal_replaces_fields_and_keeps_identity() {
        let db = Database::open_in_memory().unwrap();
        let user = create_user(&db, "john@example.com");
        let meal = create_meal(&db, &user, "Breakfast", 0, true);

        let later = base_time() + Duration::hours(3);
        let draft = MealDraft::new("Brunch", "waffles", false, later).unwrap();
        assert!(db.update_meal(&user.id, &meal.id, &draft, later).unwrap());

        let stored = db.get_meal(&user.id, &meal.id).unwrap().unwrap();
        assert_eq!(stored.id, meal.id);
        assert_eq!(stored.user_id, meal.user_id);
        assert_eq!(stored.created_at, meal.created_at);
        assert_eq!(stored.updated_at, later);
        assert_eq!(stored.name, "Brunch");
        assert_eq!(stored.description, "waffles");
        assert!(!stored.on_diet);
        assert_eq!(stored.eaten_at, later);
    }

    #[test]
    fn update_meal_never_stores_a_blank_name() {
        let db = Database::open_in_memory().unwrap();
        let user = create_user(&db, "john@example.com");
        let meal = create_meal(&db, &user, "Breakfast", 0, true);

        let blank = MealDraft::new("   ", "nothing", false, base_time());
        assert!(matches!(blank, Err(ValidationError::Empty { .. })));

        let padded = MealDraft::new("  Brunch  ", "", true, base_time()).unwrap();
        assert!(db.update_meal(&user.id, &meal.id, &padded, base_time()).unwrap());
        let stored = db.get_meal(&user.id, &meal.id).unwrap().unwrap();
        assert_eq!(stored.name, "Brunch");
    }

    #[test]
    fn update_and_delete_ignore_other_users_meals() {
        let db = Database::open_in_memory().unwrap();
        let john = create_user(&db, "john@example.com");
        let jane = create_user(&db, "jane@example.com");
        let meal = create_meal(&db, &john, "Breakfast", 0, true);

        let draft = MealDraft::new("Hijacked", "", false, base_time()).unwrap();
        assert!(!db.update_meal(&jane.id, &meal.id, &draft, base_time()).unwrap());
        assert!(!db.delete_meal(&jane.id, &meal.id).unwrap());

        let stored = db.get_meal(&john.id, &meal.id).unwrap().unwrap();
        assert_eq!(stored.name, "Breakfast");
    }

    #[test]
    fn delete_meal_removes_row() {
        let db = Database::open_in_memory().unwrap();
        let user = create_user(&db, "john@example.com");
        let meal = create_meal(&db, &user, "Breakfast", 0, true);

        assert!(db.delete_meal(&user.id, &meal.id).unwrap());
        assert!(db.get_meal(&user.id, &meal.id).unwrap().is_none());
        assert!(!db.delete_meal(&user.id, &meal.id).unwrap());
    }

    #[test]
    fn meal_metrics_walks_most_recent_first() {
        let db = Database::open_in_memory().unwrap();
        let user = create_user(&db, "john@example.com");

        // Chronological: on, on, off, on, on, on
        create_meal(&db, &user, "m0", 0, true);
        create_meal(&db, &user, "m1", 1, true);
        create_meal(&db, &user, "m2", 2, false);
        create_meal(&db, &user, "m3", 3, true);
        create_meal(&db, &user, "m4", 4, true);
        create_meal(&db, &user, "m5", 5, true);

        let metrics = db.meal_metrics(&user.id).unwrap();
        assert_eq!(
            metrics,
            MealMetrics {
                total_count: 6,
                on_diet_count: 5,
                off_diet_count: 1,
                best_streak: 3,
            }
        );
    }

    #[test]
    fn meal_metrics_for_user_without_meals_is_zero() {
        let db = Database::open_in_memory().unwrap();
        let user = create_user(&db, "john@example.com");
        assert_eq!(db.meal_metrics(&user.id).unwrap(), MealMetrics::default());
    }

    #[test]
    fn corrupt_timestamp_surfaces_as_error() {
        let db = Database::open_in_memory().unwrap();
        let user = create_user(&db, "john@example.com");
        let meal = create_meal(&db, &user, "Breakfast", 0, true);
        db.conn
            .execute(
                "UPDATE meals SET created_at = 'yesterday' WHERE id = ?",
                [meal.id.as_str()],
            )
            .unwrap();

        let err = db.list_meals(&user.id).unwrap_err();
        assert!(matches!(
            err,
            DbError::TimestampParse {
                column: "created_at",
                ..
            }
        ));
    }

    #[test]
    fn corrupt_meal_id_surfaces_as_validation_error() {
        let db = Database::open_in_memory().unwrap();
        let user = create_user(&db, "john@example.com");
        let meal = create_meal(&db, &user, "Breakfast", 0, true);
        db.conn
            .execute(
                "UPDATE meals SET id = 'meal-1' WHERE id = ?",
                [meal.id.as_str()],
            )
            .unwrap();

        let err = db.list_meals(&user.id).unwrap_err();
        assert!(matches!(
            err,
            DbError::Validation(ValidationError::InvalidId { ref value, .. }) if value == "meal-1"
        ));
    }

    #[test]
    fn corrupt_user_id_surfaces_as_validation_error() {
        let db = Database::open_in_memory().unwrap();
        let user = create_user(&db, "john@example.com");
        db.conn
            .execute(
                "UPDATE users SET id = 'user-1' WHERE id = ?",
                [user.id.as_str()],
            )
            .unwrap();

        let err = db.list_users().unwrap_err();
        assert!(matches!(
            err,
            DbError::Validation(ValidationError::InvalidId { ref value, .. }) if value == "user-1"
        ));
    }

    #[test]
    fn out_of_range_eaten_at_surfaces_as_error() {
        let db = Database::open_in_memory().unwrap();
        let user = create_user(&db, "john@example.com");
        let meal = create_meal(&db, &user, "Breakfast", 0, true);
        db.conn
            .execute(
                "UPDATE meals SET eaten_at = ? WHERE id = ?",
                params![i64::MAX, meal.id.as_str()],
            )
            .unwrap();

        let err = db.get_meal(&user.id, &meal.id).unwrap_err();
        assert!(matches!(
            err,
            DbError::InvalidMillis { millis: i64::MAX, ref id } if *id == meal.id.as_str()
        ));
        assert!(matches!(
            db.meal_metrics(&user.id),
            Err(DbError::InvalidMillis { .. })
        ));
    }

    #[test]
    fn deleting_user_cascades_to_meals() {
        let db = Database::open_in_memory().unwrap();
        let user = create_user(&db, "john@example.com");
        create_meal(&db, &user, "Breakfast", 0, true);

        db.conn
            .execute("DELETE FROM users WHERE id = ?", [user.id.as_str()])
            .unwrap();
        let count: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM meals", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
