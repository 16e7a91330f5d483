//! Handler for the `stats` command.

use anyhow::Result;
use colored::{Color, Colorize};
use std::path::Path;
use taskboard::config::Config;
use taskboard::engine::aggregate::Dashboard;
use taskboard::engine::db::Db;
use taskboard::engine::repo::TaskRepo;
use taskboard::engine::snapshot::read_snapshot;
use taskboard::engine::types::{display_due_date, Task};

const BAR: &str = "█";
const LABEL_WIDTH: usize = 14;

/// Shows the statistics dashboard for the store, or for a snapshot file.
///
/// # Errors
/// Returns error if the tasks cannot be loaded.
pub fn handle(config: &Config, from: Option<&Path>, json: bool) -> Result<()> {
    let tasks = load_tasks(config, from)?;
    let dashboard = Dashboard::build(&tasks, config.clock().now());
    tracing::debug!(
        total = dashboard.summary.total,
        overdue = dashboard.summary.overdue,
        "dashboard built"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    print_human(&dashboard);
    Ok(())
}

fn load_tasks(config: &Config, from: Option<&Path>) -> Result<Vec<Task>> {
    if let Some(path) = from {
        return read_snapshot(path);
    }
    let conn = Db::connect(&config.data_dir)?;
    TaskRepo::new(&conn).get_all()
}

fn print_human(dashboard: &Dashboard) {
    println!("{} Dashboard de estadísticas", "📊".cyan());

    let s = &dashboard.summary;
    if s.total == 0 {
        println!("   No hay tareas registradas todavía.");
        return;
    }
    println!(
        "   Total: {} ({} completadas / {} pendientes / {} vencidas)",
        s.total.to_string().bold(),
        s.completed,
        s.pending,
        s.overdue
    );

    println!("\n   {}", "Estado general".green().bold());
    let colors = [Color::Green, Color::Blue, Color::Red];
    for ((label, count), color) in dashboard.status_rows().into_iter().zip(colors) {
        print_bar(label, count, color);
    }

    println!("\n   {}", "Tareas por categoría".blue().bold());
    for entry in &dashboard.categories {
        print_bar(entry.category.label(), entry.count, Color::Blue);
    }

    println!("\n   {}", "Próximas tareas (7 días)".yellow().bold());
    for (label, count) in dashboard.upcoming_rows() {
        print_bar(label, count, Color::Yellow);
    }

    if !dashboard.recent_overdue.is_empty() {
        println!("\n   {}", "Tareas vencidas recientes".red().bold());
        for task in &dashboard.recent_overdue {
            let due = task.due_date.map(display_due_date).unwrap_or_default();
            println!(
                "     [{}] {}  {}  {}",
                task.id.to_string().dimmed(),
                task.title,
                format!("{} • {}", task.category, due).dimmed(),
                "Vencida".red()
            );
        }
    }
}

fn print_bar(label: &str, count: usize, color: Color) {
    println!(
        "     {:<width$} {} {}",
        label,
        BAR.repeat(count).color(color),
        count,
        width = LABEL_WIDTH
    );
}
