//! Diet tracker CLI library.
//!
//! This crate provides the CLI interface for the diet tracker.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, MealsAction, UsersAction};
pub use config::Config;
