//! Handler for the `import` command.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use taskboard::config::Config;
use taskboard::engine::db::Db;
use taskboard::engine::repo::TaskRepo;
use taskboard::engine::snapshot::read_snapshot;

/// Loads a JSON snapshot into the store, keeping task ids.
///
/// # Errors
/// Returns error if the snapshot is invalid or the store cannot be written.
pub fn handle(config: &Config, path: &Path) -> Result<()> {
    let tasks = read_snapshot(path)?;

    let mut conn = Db::connect(&config.data_dir)?;
    let tx = conn.transaction()?;
    let imported = TaskRepo::new(&tx).import(&tasks)?;
    tx.commit()?;

    println!(
        "{} Imported {} tasks from {}",
        "✓".green(),
        imported,
        path.display().to_string().dimmed()
    );
    Ok(())
}
