//! Port for transient user-facing board notices.
//!
//! The board raises a notice after every confirmed or failed mutation. How a
//! notice reaches the user is up to the adapter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome a notice reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// The store confirmed the mutation.
    Success,
    /// The store rejected the mutation or could not be reached.
    Failure,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardNotice {
    kind: NoticeKind,
    message: String,
}

impl BoardNotice {
    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Creates a failure notice.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }

    /// Returns the notice kind.
    #[must_use]
    pub const fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for BoardNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receiver of board notices.
pub trait BoardNotifier: Send + Sync {
    /// Delivers a notice. Delivery must not fail the board operation.
    fn notify(&self, notice: BoardNotice);
}
