//! Command handlers, one module per subcommand.

pub mod add;
pub mod completed;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod render;
pub mod stats;
pub mod toggle;
