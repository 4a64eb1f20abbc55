//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::meals::{AddArgs, EditArgs};

/// Personal diet tracker.
///
/// Records meals, flags whether each one followed the diet plan, and reports
/// adherence metrics such as the best on-diet streak.
#[derive(Debug, Parser)]
#[command(name = "dt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// User ID to act as (overrides `user_id` in the config).
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage user accounts.
    #[command(subcommand)]
    Users(UsersAction),

    /// Record and manage meals for the current user.
    #[command(subcommand)]
    Meals(MealsAction),

    /// Show diet adherence metrics for the current user.
    Metrics {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// User subcommands.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// Register a user and print its ID.
    Create {
        /// Display name.
        #[arg(long)]
        name: String,

        /// Email address (must be unique).
        #[arg(long)]
        email: String,
    },

    /// List registered users.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Meal subcommands.
#[derive(Debug, Subcommand)]
pub enum MealsAction {
    /// Record a meal and print its ID.
    Add(AddArgs),

    /// List meals, most recent first.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show a single meal.
    Show {
        /// Meal ID.
        id: String,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Change fields of a meal.
    Edit(EditArgs),

    /// Delete a meal.
    Delete {
        /// Meal ID.
        id: String,
    },
}
