//! Validation limits and display windows for the board.

use serde::{Deserialize, Serialize};

/// Board validation and display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Maximum task title length in characters.
    pub max_title_length: usize,
    /// Number of days ahead that counts as "due soon".
    pub due_soon_days: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_title_length: 200,
            due_soon_days: 3,
        }
    }
}

impl BoardConfig {
    /// Creates a configuration with short titles and a one-day soon window.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_length: 80,
            due_soon_days: 1,
        }
    }
}
