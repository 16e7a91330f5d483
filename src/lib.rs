//! taskboard: a to-do list engine.
//!
//! The engine classifies tasks by due date, orders them, and computes the
//! dashboard statistics. The CLI in `main.rs` wires it to a SQLite store.

pub mod config;
pub mod engine;
pub mod logging;
