//! Handler for the `completed` command.

use super::render;
use anyhow::Result;
use colored::Colorize;
use taskboard::config::Config;
use taskboard::engine::db::Db;
use taskboard::engine::repo::TaskRepo;
use taskboard::engine::view::completed_view;

/// Lists finished tasks in due order.
///
/// # Errors
/// Returns error if database query fails.
pub fn handle(config: &Config, json: bool) -> Result<()> {
    let conn = Db::connect(&config.data_dir)?;
    let tasks = completed_view(TaskRepo::new(&conn).get_all()?);
    let now = config.clock().now();

    if json {
        return render::print_json(&tasks, now);
    }

    println!("{} Tareas Completadas ({})", "✓".green(), tasks.len());
    println!();

    if tasks.is_empty() {
        println!("   No tienes tareas completadas aún.");
        return Ok(());
    }

    for task in &tasks {
        render::print_task(task, now, false);
    }
    Ok(())
}
