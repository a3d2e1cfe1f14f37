//! Project catalogue.
//!
//! Projects group tasks and team members. A project owns no tasks directly;
//! tasks reference it by [`domain::ProjectId`]. The layout mirrors the other
//! bounded contexts:
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
