//! Handler for the `init` command.

use anyhow::Result;
use colored::Colorize;
use taskboard::config::Config;
use taskboard::engine::db::Db;

/// Creates the data directory and task store.
///
/// # Errors
/// Returns error if database initialization fails.
pub fn handle(config: &Config) -> Result<()> {
    let path = Db::init(&config.data_dir)?;
    println!("{} Initialized {}", "✓".green(), path.display());
    Ok(())
}
