//! Domain model for board tasks.
//!
//! A task belongs to one project and sits in one status column. Its
//! [`Position`] ranks it within the (project, status) partition; positions
//! are compared only inside a partition, so moving a task between columns
//! never renumbers any other task.

mod due;
mod error;
mod ids;
mod status;
mod task;

pub use due::{BadgeTone, DueBadge};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{Position, TaskId, TaskTitle};
pub use status::TaskStatus;
pub use task::{Assignee, NewTask, PersistedTaskData, Task, TaskPatch};
