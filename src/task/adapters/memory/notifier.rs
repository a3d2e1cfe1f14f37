//! Notifier that keeps notices for a view to drain.

use std::sync::{Arc, Mutex, PoisonError};

use crate::task::ports::{BoardNotice, BoardNotifier};

/// Collects notices in arrival order.
///
/// Clones share the same buffer, so a view can hold one handle while the
/// board holds another.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<BoardNotice>>>,
}

impl RecordingNotifier {
    /// Creates an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the pending notices without removing them.
    #[must_use]
    pub fn notices(&self) -> Vec<BoardNotice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns the pending notices.
    #[must_use]
    pub fn drain(&self) -> Vec<BoardNotice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl BoardNotifier for RecordingNotifier {
    fn notify(&self, notice: BoardNotice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}
