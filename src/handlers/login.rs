//! Handler for the `login` command.

use anyhow::Result;
use colored::Colorize;
use taskboard::config::Config;
use taskboard::engine::db::Db;
use taskboard::engine::repo::SessionRepo;

/// Starts a session for `username`.
///
/// # Errors
/// Returns error if the username is blank or the store cannot be written.
pub fn handle(config: &Config, username: &str) -> Result<()> {
    let mut conn = Db::connect(&config.data_dir)?;
    let tx = conn.transaction()?;
    let session = SessionRepo::new(&tx).login(username, config.clock().now())?;
    tx.commit()?;

    println!("{} Sesión iniciada como {}", "→".yellow(), session.username.bold());
    Ok(())
}
