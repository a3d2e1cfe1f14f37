//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use taskboard::fixtures::BoardFixture;
use taskboard::project::adapters::memory::InMemoryProjectRepository;
use taskboard::task::adapters::memory::{InMemoryTaskRepository, RecordingNotifier};
use taskboard::task::services::TaskBoard;
use taskboard::user::adapters::memory::InMemoryUserRepository;

/// Path of the seed data shared by the integration tests.
pub const BOARD_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/board.json");

/// Clock pinned to noon UTC on one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock reading noon on `date`.
    ///
    /// # Panics
    ///
    /// Panics if noon cannot be represented, which never happens for valid
    /// dates.
    #[must_use]
    pub fn at_noon(date: NaiveDate) -> Self {
        let instant = date
            .and_hms_opt(12, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive))
            .expect("valid noon");
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a calendar date.
///
/// # Panics
///
/// Panics for an invalid date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Day the fixture data is evaluated against.
#[must_use]
pub fn today() -> NaiveDate {
    date(2026, 10, 19)
}

/// Provides the clock shared by the in-memory stores.
#[fixture]
pub fn clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock::at_noon(today()))
}

/// Provides the parsed seed data.
#[fixture]
pub fn board_fixture() -> BoardFixture {
    BoardFixture::from_path(BOARD_FIXTURE).expect("fixture should load")
}

/// In-memory stores seeded from the fixture.
pub struct SeededStore {
    /// Task records.
    pub tasks: Arc<InMemoryTaskRepository>,
    /// Project records.
    pub projects: Arc<InMemoryProjectRepository>,
    /// User records.
    pub users: Arc<InMemoryUserRepository>,
}

/// Provides stores seeded from the fixture.
#[fixture]
pub fn store(board_fixture: BoardFixture, clock: Arc<dyn Clock + Send + Sync>) -> SeededStore {
    SeededStore {
        tasks: Arc::new(board_fixture.task_repository(Arc::clone(&clock))),
        projects: Arc::new(board_fixture.project_repository(clock)),
        users: Arc::new(board_fixture.user_repository()),
    }
}

/// Board engine over a seeded store with a recording notifier.
pub struct SeededBoard {
    /// Engine under test.
    pub board: TaskBoard<InMemoryTaskRepository>,
    /// Store the engine writes through.
    pub tasks: Arc<InMemoryTaskRepository>,
    /// Notices raised by the engine.
    pub notifier: RecordingNotifier,
}

/// Provides a board engine over the seeded task store.
#[fixture]
pub fn seeded_board(store: SeededStore) -> SeededBoard {
    let notifier = RecordingNotifier::new();
    let board = TaskBoard::new(Arc::clone(&store.tasks), Arc::new(notifier.clone()));
    SeededBoard {
        board,
        tasks: store.tasks,
        notifier,
    }
}
