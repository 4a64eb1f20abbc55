//! CLI subcommand implementations.

pub mod meals;
pub mod metrics;
pub mod users;
pub mod util;
