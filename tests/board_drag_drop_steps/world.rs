//! Shared world state for board drag-and-drop BDD scenarios.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rstest::fixture;
use taskboard::project::domain::ProjectId;
use taskboard::task::{
    adapters::memory::{InMemoryTaskRepository, RecordingNotifier},
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    services::{BoardError, BoardOutcome, TaskBoard},
};
use taskboard::user::domain::UserId;

/// Project every scenario works in.
pub const PROJECT: ProjectId = ProjectId::new(1);

/// In-memory store that can be taken offline and counts board writes.
#[derive(Debug, Default)]
pub struct SwitchableStore {
    inner: InMemoryTaskRepository,
    offline: AtomicBool,
    updates: AtomicUsize,
    deletes: Mutex<Vec<TaskId>>,
}

impl SwitchableStore {
    /// Returns the wrapped store, bypassing the switch and counters.
    pub const fn inner(&self) -> &InMemoryTaskRepository {
        &self.inner
    }

    /// Makes every later call fail with a persistence error.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    /// Number of update calls received.
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    /// Identifiers of the delete calls received.
    pub fn deleted_ids(&self) -> Vec<TaskId> {
        self.deletes
            .lock()
            .map(|ids| ids.clone())
            .unwrap_or_default()
    }

    fn check_online(&self) -> TaskRepositoryResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(TaskRepositoryError::persistence(std::io::Error::other(
                "store offline",
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for SwitchableStore {
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.check_online()?;
        self.inner.list_all().await
    }

    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        self.check_online()?;
        self.inner.list_by_project(project_id).await
    }

    async fn list_by_assignee(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.check_online()?;
        self.inner.list_by_assignee(user_id).await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.check_online()?;
        self.inner.find_by_id(id).await
    }

    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        self.check_online()?;
        self.inner.create(task).await
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Task> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        if let Ok(mut ids) = self.deletes.lock() {
            ids.push(id);
        }
        self.check_online()?;
        self.inner.delete(id).await
    }
}

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub store: Arc<SwitchableStore>,
    pub notifier: RecordingNotifier,
    pub board: TaskBoard<SwitchableStore>,
    pub names: HashMap<String, TaskId>,
    pub before: Vec<Task>,
    pub last_outcome: Option<Result<BoardOutcome, BoardError>>,
}

impl BoardWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(SwitchableStore::default());
        let notifier = RecordingNotifier::new();
        let board = TaskBoard::new(Arc::clone(&store), Arc::new(notifier.clone()));
        Self {
            store,
            notifier,
            board,
            names: HashMap::new(),
            before: Vec::new(),
            last_outcome: None,
        }
    }

    /// Resolves a scenario task name to its store identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when the scenario never created the task.
    pub fn id_of(&self, name: &str) -> Result<TaskId, eyre::Report> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("scenario never created task {name:?}"))
    }

    /// Records a gesture result along with the board it started from.
    pub fn record(&mut self, before: Vec<Task>, outcome: Result<BoardOutcome, BoardError>) {
        self.before = before;
        self.last_outcome = Some(outcome);
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
