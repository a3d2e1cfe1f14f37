//! Due-date badges shown on task cards.

use chrono::NaiveDate;
use std::fmt;

/// Visual weight of a due-date badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    /// Past due.
    Error,
    /// Due today.
    Warning,
    /// Due within the soon window.
    Due,
    /// Due later.
    Neutral,
}

/// Due date classified relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueBadge {
    /// The due date has passed.
    Overdue,
    /// Due today.
    Today,
    /// Due tomorrow.
    Tomorrow,
    /// Due within the soon window, more than one day out.
    DueIn(i64),
    /// Due after the soon window.
    Scheduled(NaiveDate),
}

impl DueBadge {
    /// Classifies `due` relative to `today`.
    ///
    /// Dates up to `soon_days` days ahead are reported as [`DueBadge::DueIn`].
    #[must_use]
    pub fn classify(due: NaiveDate, today: NaiveDate, soon_days: u32) -> Self {
        let days = due.signed_duration_since(today).num_days();
        match days {
            ..=-1 => Self::Overdue,
            0 => Self::Today,
            1 => Self::Tomorrow,
            _ if days <= i64::from(soon_days) => Self::DueIn(days),
            _ => Self::Scheduled(due),
        }
    }

    /// Returns the badge tone.
    #[must_use]
    pub const fn tone(self) -> BadgeTone {
        match self {
            Self::Overdue => BadgeTone::Error,
            Self::Today => BadgeTone::Warning,
            Self::Tomorrow | Self::DueIn(_) => BadgeTone::Due,
            Self::Scheduled(_) => BadgeTone::Neutral,
        }
    }
}

impl fmt::Display for DueBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue => f.write_str("Overdue"),
            Self::Today => f.write_str("Today"),
            Self::Tomorrow => f.write_str("Tomorrow"),
            Self::DueIn(days) => write!(f, "Due in {days} days"),
            Self::Scheduled(date) => write!(f, "{}", date.format("%b %d")),
        }
    }
}
