//! Handler for the `add` command.

use anyhow::Result;
use colored::Colorize;
use taskboard::config::Config;
use taskboard::engine::db::Db;
use taskboard::engine::repo::TaskRepo;
use taskboard::engine::types::{parse_due_date, Category, NewTask};

/// Creates a new task.
///
/// # Errors
/// Returns error if the title is blank, the due date does not parse, or the
/// store cannot be written.
pub fn handle(
    config: &Config,
    title: &str,
    category: Option<&str>,
    due: Option<&str>,
    description: Option<&str>,
) -> Result<()> {
    let mut new = NewTask::new(title);
    if let Some(label) = category {
        new.category = Category::from_label(label);
    }
    new.due_date = due.map(parse_due_date).transpose()?;
    new.description = description.unwrap_or_default().to_string();
    new.validate()?;

    let conn = Db::connect(&config.data_dir)?;
    let task = TaskRepo::new(&conn).add(&new)?;

    println!(
        "{} Added task [{}] {} ({})",
        "✓".green(),
        task.id.to_string().yellow(),
        task.title,
        task.category.to_string().dimmed()
    );
    if let Category::Custom(label) = &task.category {
        println!(
            "   {}",
            format!("Categoría personalizada \"{label}\" (conocidas: {})", known_labels()).dimmed()
        );
    }
    Ok(())
}

fn known_labels() -> String {
    Category::known()
        .map(Category::label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_in_menu_order() {
        assert_eq!(known_labels(), "General, Trabajo, Estudio, Personal, Otros");
    }
}
