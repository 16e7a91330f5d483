//! Runtime configuration.
//!
//! Each setting is resolved with the same precedence: command-line flag,
//! then environment variable, then built-in default.

use crate::engine::context::Clock;
use crate::engine::types::parse_due_date;
use crate::logging::DEFAULT_LOG_LEVEL;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = ".taskboard";

pub const ENV_DATA_DIR: &str = "TASKBOARD_DIR";
pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG";
pub const ENV_NOW: &str = "TASKBOARD_NOW";

/// Values given on the command line; `None` means "not set".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub now: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the task store.
    pub data_dir: PathBuf,
    /// `tracing` filter directive.
    pub log_level: String,
    /// Pinned evaluation instant; the wall clock is used when absent.
    pub now: Option<NaiveDateTime>,
}

impl Config {
    /// Resolves configuration from flags and the process environment.
    ///
    /// # Errors
    /// Returns an error if a pinned instant does not parse.
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolves configuration with an explicit environment lookup.
    ///
    /// # Errors
    /// Returns an error if a pinned instant does not parse.
    pub fn resolve_with<F>(overrides: Overrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let data_dir = overrides
            .data_dir
            .or_else(|| env(ENV_DATA_DIR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let log_level = overrides
            .log_level
            .or_else(|| env(ENV_LOG_LEVEL))
            .or_else(|| env("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let now = overrides
            .now
            .or_else(|| env(ENV_NOW))
            .map(|raw| parse_due_date(&raw).context("Invalid --now instant"))
            .transpose()?;

        Ok(Self {
            data_dir,
            log_level,
            now,
        })
    }

    /// The clock every command evaluates against.
    #[must_use]
    pub fn clock(&self) -> Clock {
        Clock::from_override(self.now)
    }
}
