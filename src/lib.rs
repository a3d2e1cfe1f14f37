//! Taskboard: kanban task board core.
//!
//! Projects contain tasks, tasks sit in status columns (To Do, In Progress,
//! Done), and team members are assigned to tasks. The centre of the crate is
//! the task ordering engine in [`task::services::TaskBoard`]: it keeps each
//! column ranked by position, turns drag-and-drop gestures into single-record
//! store updates, and applies a change only after the record store confirms
//! it.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: validated records with no infrastructure dependencies
//! - **Ports**: async repository traits and the board notifier
//! - **Adapters**: in-memory and `PostgreSQL` (Diesel) implementations
//! - **Services**: the board engine, directories, and reports
//!
//! # Modules
//!
//! - [`task`]: task board engine, assigned-task listings, due badges
//! - [`project`]: project directory and lifecycle status
//! - [`user`]: team member directory
//! - [`report`]: completion statistics and team workload
//! - [`fixtures`]: JSON seed data for the in-memory record store
//! - [`store`]: `PostgreSQL` connection configuration
//! - [`telemetry`]: tracing subscriber installation

pub mod fixtures;
pub mod project;
pub mod report;
pub mod store;
pub mod task;
pub mod telemetry;
pub mod user;
