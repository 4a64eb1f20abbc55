//! Meals command for recording and managing a user's meals.
//!
//! Every operation is scoped to the current user: a meal owned by someone
//! else is reported as not found.

use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::Args;
use dt_core::{Meal, MealDraft, MealId, UserId};
use dt_db::Database;
use serde::Serialize;

use super::util::{parse_datetime, parse_meal_id, short_id, truncate};

const LIST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DETAIL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f UTC";

/// Diet flag that must be given exactly once.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct DietFlag {
    /// The meal followed the diet plan.
    #[arg(long)]
    pub on_diet: bool,

    /// The meal did not follow the diet plan.
    #[arg(long)]
    pub off_diet: bool,
}

/// Diet flag that may be omitted to keep the current value.
#[derive(Debug, Args)]
#[group(required = false, multiple = false)]
pub struct DietChange {
    /// Mark the meal as on diet.
    #[arg(long)]
    pub on_diet: bool,

    /// Mark the meal as off diet.
    #[arg(long)]
    pub off_diet: bool,
}

impl DietChange {
    const fn value(&self) -> Option<bool> {
        match (self.on_diet, self.off_diet) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Meal name.
    #[arg(long)]
    pub name: String,

    /// Free-form description.
    #[arg(long, default_value = "")]
    pub description: String,

    #[command(flatten)]
    pub diet: DietFlag,

    /// When the meal was eaten: ISO 8601 or relative (e.g., '2 hours ago'). Defaults to now.
    #[arg(long)]
    pub at: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Meal ID.
    pub id: String,

    /// New name.
    #[arg(long)]
    pub name: Option<String>,

    /// New description.
    #[arg(long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub diet: DietChange,

    /// New time the meal was eaten.
    #[arg(long)]
    pub at: Option<String>,
}

impl EditArgs {
    const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.diet.value().is_none()
            && self.at.is_none()
    }
}

/// Records a meal and prints its ID.
pub fn add<W: Write>(
    writer: &mut W,
    db: &Database,
    user_id: &UserId,
    args: &AddArgs,
    now: DateTime<Utc>,
) -> Result<MealId> {
    let eaten_at = match &args.at {
        Some(at) => parse_datetime(at, now)?,
        None => now,
    };
    let draft = MealDraft::new(&args.name, &args.description, args.diet.on_diet, eaten_at)?;
    let meal = Meal::new(user_id.clone(), draft, now);

    db.insert_meal(&meal).context("failed to record meal")?;
    tracing::info!(meal_id = %meal.id, on_diet = meal.on_diet, "recorded meal");

    writeln!(writer, "{}", meal.id)?;
    Ok(meal.id)
}

#[derive(Debug, Serialize)]
struct JsonMeals<'a> {
    meals: &'a [Meal],
}

#[derive(Debug, Serialize)]
struct JsonMeal<'a> {
    meal: &'a Meal,
}

/// Lists the user's meals, most recent first.
pub fn list<W: Write>(writer: &mut W, db: &Database, user_id: &UserId, json: bool) -> Result<()> {
    let meals = db.list_meals(user_id)?;

    if json {
        let output = serde_json::to_string_pretty(&JsonMeals { meals: &meals })?;
        writeln!(writer, "{output}")?;
        return Ok(());
    }

    if meals.is_empty() {
        writeln!(writer, "No meals recorded yet.")?;
        writeln!(
            writer,
            "Hint: Run 'dt meals add --name <name> --on-diet' to record one."
        )?;
        return Ok(());
    }

    writeln!(writer, "MEALS ({})", meals.len())?;
    writeln!(writer)?;
    writeln!(
        writer,
        "{:<8}  {:<16}  {:<4}  NAME",
        "ID", "WHEN (UTC)", "DIET"
    )?;
    for meal in &meals {
        let when = meal.eaten_at.format(LIST_TIME_FORMAT).to_string();
        writeln!(
            writer,
            "{:<8}  {:<16}  {:<4}  {}",
            short_id(meal.id.as_str()),
            when,
            yes_no(meal.on_diet),
            truncate(&meal.name, 40)
        )?;
    }

    Ok(())
}

/// Shows a single meal.
pub fn show<W: Write>(
    writer: &mut W,
    db: &Database,
    user_id: &UserId,
    id: &str,
    json: bool,
) -> Result<()> {
    let meal = find_meal(db, user_id, id)?;

    if json {
        let output = serde_json::to_string_pretty(&JsonMeal { meal: &meal })?;
        writeln!(writer, "{output}")?;
        return Ok(());
    }

    let description = if meal.description.is_empty() {
        "(none)"
    } else {
        meal.description.as_str()
    };
    writeln!(writer, "Meal:        {}", meal.id)?;
    writeln!(writer, "Name:        {}", meal.name)?;
    writeln!(writer, "Description: {description}")?;
    writeln!(
        writer,
        "Eaten at:    {}",
        meal.eaten_at.format(DETAIL_TIME_FORMAT)
    )?;
    writeln!(writer, "On diet:     {}", yes_no(meal.on_diet))?;
    writeln!(
        writer,
        "Created:     {}",
        meal.created_at.format(DETAIL_TIME_FORMAT)
    )?;
    writeln!(
        writer,
        "Updated:     {}",
        meal.updated_at.format(DETAIL_TIME_FORMAT)
    )?;

    Ok(())
}

/// Updates the given fields of a meal, keeping the rest.
pub fn edit<W: Write>(
    writer: &mut W,
    db: &Database,
    user_id: &UserId,
    args: &EditArgs,
    now: DateTime<Utc>,
) -> Result<()> {
    if args.is_empty() {
        bail!("nothing to update: pass at least one of --name, --description, --on-diet, --off-diet, --at");
    }

    let meal = find_meal(db, user_id, &args.id)?;
    let current = meal.draft();
    let eaten_at = match &args.at {
        Some(at) => parse_datetime(at, now)?,
        None => current.eaten_at(),
    };
    let draft = MealDraft::new(
        args.name.as_deref().unwrap_or(current.name()),
        args.description.as_deref().unwrap_or(current.description()),
        args.diet.value().unwrap_or(current.on_diet()),
        eaten_at,
    )?;

    if !db.update_meal(user_id, &meal.id, &draft, now)? {
        bail!("meal not found: {}", meal.id);
    }
    tracing::info!(meal_id = %meal.id, "updated meal");

    writeln!(writer, "Updated meal {}", meal.id)?;
    Ok(())
}

/// Deletes a meal.
pub fn delete<W: Write>(writer: &mut W, db: &Database, user_id: &UserId, id: &str) -> Result<()> {
    let meal_id = parse_meal_id(id)?;
    if !db.delete_meal(user_id, &meal_id)? {
        bail!("meal not found: {meal_id}");
    }
    tracing::info!(%meal_id, "deleted meal");

    writeln!(writer, "Deleted meal {meal_id}")?;
    Ok(())
}

fn find_meal(db: &Database, user_id: &UserId, id: &str) -> Result<Meal> {
    let meal_id = parse_meal_id(id)?;
    match db.get_meal(user_id, &meal_id)? {
        Some(meal) => Ok(meal),
        None => bail!("meal not found: {meal_id}"),
    }
}

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
