use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dt_cli::commands::{meals, metrics, users, util};
use dt_cli::{Cli, Commands, Config, MealsAction, UsersAction};

/// Load config and open database, ensuring the parent directory exists.
fn open_database(config_path: Option<&Path>) -> Result<(dt_db::Database, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    let db = dt_db::Database::open(&config.database_path).context("failed to open database")?;
    Ok((db, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout stays parseable (IDs, JSON)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout().lock();
    let now = Utc::now();

    match &cli.command {
        Some(Commands::Users(action)) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            match action {
                UsersAction::Create { name, email } => {
                    users::create(&mut stdout, &db, name, email, now)?;
                }
                UsersAction::List { json } => users::list(&mut stdout, &db, *json)?,
            }
        }
        Some(Commands::Meals(action)) => {
            let (db, config) = open_database(cli.config.as_deref())?;
            let user_id = util::resolve_user(&db, cli.user.as_deref(), &config)?;
            match action {
                MealsAction::Add(args) => {
                    meals::add(&mut stdout, &db, &user_id, args, now)?;
                }
                MealsAction::List { json } => meals::list(&mut stdout, &db, &user_id, *json)?,
                MealsAction::Show { id, json } => {
                    meals::show(&mut stdout, &db, &user_id, id, *json)?;
                }
                MealsAction::Edit(args) => meals::edit(&mut stdout, &db, &user_id, args, now)?,
                MealsAction::Delete { id } => meals::delete(&mut stdout, &db, &user_id, id)?,
            }
        }
        Some(Commands::Metrics { json }) => {
            let (db, config) = open_database(cli.config.as_deref())?;
            let user_id = util::resolve_user(&db, cli.user.as_deref(), &config)?;
            metrics::run(&mut stdout, &db, &user_id, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
