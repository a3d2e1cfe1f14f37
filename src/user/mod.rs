//! Team member directory.
//!
//! Users are referenced by tasks (as assignees) and by projects (as team
//! members) but never own either. The module follows the same hexagonal
//! layout as the other bounded contexts:
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
