//! Handler for the `export` command.

use anyhow::Result;
use taskboard::config::Config;
use taskboard::engine::db::Db;
use taskboard::engine::repo::TaskRepo;
use taskboard::engine::snapshot::to_json;

/// Prints every stored task as a JSON snapshot.
///
/// # Errors
/// Returns error if database query fails.
pub fn handle(config: &Config) -> Result<()> {
    let conn = Db::connect(&config.data_dir)?;
    let tasks = TaskRepo::new(&conn).get_all()?;
    println!("{}", to_json(&tasks)?);
    Ok(())
}
