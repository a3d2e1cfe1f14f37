//! In-memory adapters for board ports.

mod notifier;
mod task;

pub use notifier::RecordingNotifier;
pub use task::InMemoryTaskRepository;
