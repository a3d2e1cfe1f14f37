//! Project lifecycle status and creation templates.

use super::{ParseProjectStatusError, ProjectDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Work is ongoing.
    #[serde(rename = "Active")]
    Active,
    /// Work is paused.
    #[serde(rename = "On Hold")]
    OnHold,
    /// Work has finished.
    #[serde(rename = "Completed")]
    Completed,
}

impl ProjectStatus {
    /// Every status in display order.
    pub const ALL: [Self; 3] = [Self::Active, Self::OnHold, Self::Completed];

    /// Returns the canonical storage and display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized: String = value
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|ch| ch.is_ascii_alphabetic())
            .collect();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "onhold" => Ok(Self::OnHold),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Starting template chosen when a project is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectTemplate {
    /// Standard web application project.
    Web,
    /// iOS and Android mobile application.
    Mobile,
    /// Online shopping platform.
    Ecommerce,
    /// Database and system migration.
    Migration,
}

impl ProjectTemplate {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Ecommerce => "ecommerce",
            Self::Migration => "migration",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Web => "Web Development",
            Self::Mobile => "Mobile App",
            Self::Ecommerce => "E-commerce",
            Self::Migration => "Data Migration",
        }
    }
}

impl TryFrom<&str> for ProjectTemplate {
    type Error = ProjectDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "web" => Ok(Self::Web),
            "mobile" => Ok(Self::Mobile),
            "ecommerce" => Ok(Self::Ecommerce),
            "migration" => Ok(Self::Migration),
            _ => Err(ProjectDomainError::UnknownTemplate(value.to_owned())),
        }
    }
}
