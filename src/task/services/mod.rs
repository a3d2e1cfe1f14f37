//! Application services for the task board.

mod assigned;
mod board;
mod columns;
mod config;
mod fields;

pub use assigned::{AssignedTask, AssignedTasks, AssignedTasksError, StatusCounts, StatusFilter};
pub use board::{
    BoardError, BoardOutcome, BoardRevision, Confirmation, LoadState, SkipReason, TaskBoard,
};
pub use columns::{BoardColumn, BoardSnapshot};
pub use config::BoardConfig;
pub use fields::{TaskEdit, TaskFields};
