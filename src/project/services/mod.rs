//! Application services for the project catalogue.

mod directory;

pub use directory::{
    CreateProjectRequest, ProjectDirectory, ProjectDirectoryError, ProjectDirectoryResult,
    StatusSummary, UpdateProjectRequest,
};
