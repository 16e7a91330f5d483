//! Handler for the `toggle` command.

use anyhow::Result;
use colored::Colorize;
use taskboard::config::Config;
use taskboard::engine::db::Db;
use taskboard::engine::repo::TaskRepo;
use taskboard::engine::types::TaskId;

/// Marks a task completed, or back to pending if it already was.
///
/// # Errors
/// Returns error if the task does not exist or the store cannot be written.
pub fn handle(config: &Config, id: i64) -> Result<()> {
    let conn = Db::connect(&config.data_dir)?;
    let task = TaskRepo::new(&conn).toggle(TaskId(id))?;

    if task.completed {
        println!("{} [{}] {} completada", "✓".green(), task.id, task.title);
    } else {
        println!("{} [{}] {} pendiente", "↺".yellow(), task.id, task.title);
    }
    Ok(())
}
