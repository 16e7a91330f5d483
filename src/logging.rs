//! Logging bootstrap.
//!
//! Diagnostics go to stderr through `tracing`, so command output on stdout
//! (including `--json`) stays clean.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Level used when neither the flag nor the environment sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs the global subscriber with the given filter directive
/// (`warn`, `debug`, `taskboard=trace`, ...).
///
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Errors
/// Returns an error if `level` is not a valid filter directive.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level.trim())
        .with_context(|| format!("Invalid log level `{level}`"))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            level = level,
            version = env!("CARGO_PKG_VERSION"),
            "logging initialized"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        assert!(init_logging("debug").is_ok());
        assert!(init_logging("info").is_ok());
    }

    #[test]
    fn test_accepts_target_directive() {
        assert!(init_logging("taskboard=trace,warn").is_ok());
    }
}
