//! Error types for project domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing project values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name is required")]
    EmptyName,

    /// The project description is empty after trimming.
    #[error("project description is required")]
    EmptyDescription,

    /// The project has no team members.
    #[error("a project needs at least one team member")]
    NoTeamMembers,

    /// The progress percentage is outside `0..=100`.
    #[error("invalid progress {0}, expected a percentage between 0 and 100")]
    InvalidProgress(i64),

    /// The project template is not supported.
    #[error("unknown project template: {0}")]
    UnknownTemplate(String),
}

/// Error returned while parsing project statuses from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
