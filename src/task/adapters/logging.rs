//! Notifier that writes notices to the `tracing` log.

use crate::task::ports::{BoardNotice, BoardNotifier, NoticeKind};

/// Logs success notices at `info` and failures at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl BoardNotifier for TracingNotifier {
    fn notify(&self, notice: BoardNotice) {
        match notice.kind() {
            NoticeKind::Success => tracing::info!(notice = notice.message(), "board notice"),
            NoticeKind::Failure => tracing::warn!(notice = notice.message(), "board notice"),
        }
    }
}
