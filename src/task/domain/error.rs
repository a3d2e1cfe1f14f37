//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title is required")]
    EmptyTitle,

    /// The task title exceeds the configured limit.
    #[error("task title is {length} characters long, the limit is {max}")]
    TitleTooLong {
        /// Title length in characters.
        length: usize,
        /// Configured maximum length.
        max: usize,
    },

    /// The position is not a positive rank.
    #[error("invalid position {0}, expected a positive rank")]
    InvalidPosition(i64),

    /// The column already holds the largest representable position.
    #[error("no position is left after the last task in the column")]
    PositionOverflow,

    /// The assignee display name is empty after trimming.
    #[error("assignee name is required")]
    EmptyAssigneeName,
}

/// Error returned while parsing task statuses from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
