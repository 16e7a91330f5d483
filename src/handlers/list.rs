//! Handler for the `list` command.

use super::render;
use anyhow::Result;
use chrono::NaiveDateTime;
use colored::Colorize;
use taskboard::config::Config;
use taskboard::engine::db::Db;
use taskboard::engine::repo::{SessionRepo, TaskRepo};
use taskboard::engine::types::{Session, Task};
use taskboard::engine::view::{home_view, CategoryFilter};

/// Lists tasks in due order, optionally narrowed to one category.
///
/// # Errors
/// Returns error if database query fails.
pub fn handle(config: &Config, category: Option<&str>, expand: bool, json: bool) -> Result<()> {
    let conn = Db::connect(&config.data_dir)?;
    let session = SessionRepo::new(&conn).current()?;
    let tasks = TaskRepo::new(&conn).get_all()?;
    let now = config.clock().now();

    let filter = category.map(CategoryFilter::parse).unwrap_or_default();
    let tasks = home_view(tasks, &filter);
    tracing::debug!(shown = tasks.len(), ?filter, "list view built");

    if json {
        return render::print_json(&tasks, now);
    }

    print_human(session.as_ref(), &tasks, &filter, now, expand);
    Ok(())
}

fn print_human(
    session: Option<&Session>,
    tasks: &[Task],
    filter: &CategoryFilter,
    now: NaiveDateTime,
    expand: bool,
) {
    println!(
        "{} Bienvenido, {}",
        "📋".cyan(),
        Session::display_name(session).bold()
    );
    if let CategoryFilter::Only(category) = filter {
        println!("   {}", format!("Categoría: {category}").dimmed());
    }
    println!();

    if tasks.is_empty() {
        println!("   No hay tareas aún ✨");
        return;
    }

    for task in tasks {
        render::print_task(task, now, expand);
    }
}
