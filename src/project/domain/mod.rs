//! Domain model for projects.
//!
//! Projects carry lifecycle status and a progress percentage. Neither has
//! derived invariants beyond range checks, so the aggregate is a plain record
//! with validated construction.

mod error;
mod ids;
mod project;
mod status;

pub use error::{ParseProjectStatusError, ProjectDomainError};
pub use ids::{Progress, ProjectId, ProjectName};
pub use project::{NewProject, PersistedProjectData, Project, ProjectPatch};
pub use status::{ProjectStatus, ProjectTemplate};
