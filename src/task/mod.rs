//! Task board.
//!
//! Tasks are partitioned into status columns per project and ranked by
//! position inside each column. [`services::TaskBoard`] is the ordering
//! engine a board view drives: it loads a project's tasks, exposes the
//! sorted columns, and turns drag-and-drop gestures into single-record store
//! updates that are applied only once the store confirms them.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
