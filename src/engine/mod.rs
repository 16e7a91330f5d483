//! Core engine modules for taskboard.

pub mod aggregate;
pub mod classify;
pub mod context;
pub mod db;
pub mod error;
pub mod order;
pub mod repo;
pub mod snapshot;
pub mod types;
pub mod view;
