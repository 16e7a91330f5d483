//! Handler for the `logout` command.

use anyhow::Result;
use colored::Colorize;
use taskboard::config::Config;
use taskboard::engine::db::Db;
use taskboard::engine::repo::SessionRepo;

/// Ends the current session.
///
/// # Errors
/// Returns error if the store cannot be written.
pub fn handle(config: &Config) -> Result<()> {
    let conn = Db::connect(&config.data_dir)?;
    match SessionRepo::new(&conn).logout()? {
        Some(session) => println!("{} Sesión cerrada ({})", "←".yellow(), session.username),
        None => println!("   (No active session)"),
    }
    Ok(())
}
