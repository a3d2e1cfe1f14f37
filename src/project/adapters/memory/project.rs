//! In-memory repository for the project catalogue.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{NewProject, Project, ProjectId, ProjectPatch},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
///
/// Timestamps are taken from the injected clock so tests stay deterministic.
#[derive(Clone)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<BTreeMap<ProjectId, Project>>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty repository using the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::default(),
            clock,
        }
    }

    /// Replaces the stored records with `projects`.
    #[must_use]
    pub fn seeded(self, projects: impl IntoIterator<Item = Project>) -> Self {
        let records = projects
            .into_iter()
            .map(|project| (project.id(), project))
            .collect();
        Self {
            state: Arc::new(RwLock::new(records)),
            clock: self.clock,
        }
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryProjectRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryProjectRepository")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn poisoned(err: &impl fmt::Display) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(format!("lock poisoned: {err}")))
}

fn identifiers_exhausted() -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other("no project identifier is left after the largest stored one"))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.get(&id).cloned())
    }

    async fn create(&self, project: &NewProject) -> ProjectRepositoryResult<Project> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let next_id = state
            .keys()
            .next_back()
            .map_or(Some(1), |last| last.value().checked_add(1))
            .ok_or_else(identifiers_exhausted)?;
        let created = Project::from_new(ProjectId::new(next_id), project, self.clock.utc());
        state.insert(created.id(), created.clone());
        Ok(created)
    }

    async fn update(&self, id: ProjectId, patch: &ProjectPatch) -> ProjectRepositoryResult<Project> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let project = state
            .get_mut(&id)
            .ok_or(ProjectRepositoryError::NotFound(id))?;
        project.apply(patch, self.clock.utc());
        Ok(project.clone())
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        Ok(state.remove(&id).is_some())
    }
}
