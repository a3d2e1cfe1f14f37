//! Port contracts for the project catalogue.

pub mod repository;

pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
