//! Completion statistics and team workload reports.
//!
//! Reports are computed on read from the task, project, and user
//! repositories; nothing is cached or persisted.

mod service;
mod stats;

pub use service::{ReportError, ReportService};
pub use stats::{BoardStats, MemberWorkload, TeamWorkload, UserProductivity, completion_rate};
