//! Repositories over the SQLite task store.

mod session;
mod tasks;

pub use session::SessionRepo;
pub use tasks::TaskRepo;
