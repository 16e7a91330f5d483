//! Engine error taxonomy.
//!
//! Classification, ordering and aggregation never fail on a well-formed
//! snapshot. These errors come from validating input before it reaches them.

use super::types::TaskId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// A record is missing a required field or breaks a snapshot invariant.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A due date that does not parse as a calendar date.
    #[error("invalid date `{0}`: expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]")]
    InvalidDate(String),

    #[error("task {0} not found")]
    NotFound(TaskId),
}
