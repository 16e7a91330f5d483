//! Handler for the `delete` command.

use anyhow::Result;
use colored::Colorize;
use taskboard::config::Config;
use taskboard::engine::db::Db;
use taskboard::engine::repo::TaskRepo;
use taskboard::engine::types::TaskId;

/// Deletes a task.
///
/// # Errors
/// Returns error if the task does not exist.
pub fn handle(config: &Config, id: i64) -> Result<()> {
    let conn = Db::connect(&config.data_dir)?;
    TaskRepo::new(&conn).delete(TaskId(id))?;
    println!("{} Deleted task [{}]", "✗".red(), id);
    Ok(())
}
