//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Wraps a store-assigned identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rank of a task within its (project, status) partition.
///
/// Lower positions are displayed first. Values need not be contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Position(i64);

impl Position {
    /// Position given to the first task of an empty partition.
    pub const FIRST: Self = Self(1);

    /// Creates a validated position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPosition`] when `value` is below 1.
    pub const fn new(value: i64) -> Result<Self, TaskDomainError> {
        if value < 1 {
            return Err(TaskDomainError::InvalidPosition(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw rank.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns the position directly after this one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PositionOverflow`] when this is already the
    /// largest representable rank.
    pub const fn next(self) -> Result<Self, TaskDomainError> {
        match self.0.checked_add(1) {
            Some(value) => Ok(Self(value)),
            None => Err(TaskDomainError::PositionOverflow),
        }
    }

    /// Returns the position that appends after `positions`, or
    /// [`Position::FIRST`] when there are none.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PositionOverflow`] when the largest
    /// position has no successor.
    pub fn after_last(positions: impl IntoIterator<Item = Self>) -> Result<Self, TaskDomainError> {
        positions.into_iter().max().map_or(Ok(Self::FIRST), Self::next)
    }
}

impl TryFrom<i64> for Position {
    type Error = TaskDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Position> for i64 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty, trimmed task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a title, rejecting blank input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the trimmed value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Creates a title no longer than `max_chars` characters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for blank input or
    /// [`TaskDomainError::TitleTooLong`] when the trimmed value is too long.
    pub fn bounded(value: impl Into<String>, max_chars: usize) -> Result<Self, TaskDomainError> {
        let title = Self::new(value)?;
        let length = title.0.chars().count();
        if length > max_chars {
            return Err(TaskDomainError::TitleTooLong {
                length,
                max: max_chars,
            });
        }
        Ok(title)
    }

    /// Returns the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(title: TaskTitle) -> Self {
        title.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
