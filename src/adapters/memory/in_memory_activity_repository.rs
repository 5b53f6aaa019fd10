//! In-memory activity repository.
//!
//! Holds the roster for the lifetime of the process. Nothing is persisted;
//! a restart brings back the seed roster.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

use crate::domain::activity::{seed_roster, Activity, Roster};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ActivityChange, ActivityReader, ActivityRepository};

/// In-memory implementation of the `ActivityRepository` and `ActivityReader`
/// ports.
///
/// Thread-safe via internal `Mutex`. A `modify` holds the lock from lookup
/// through commit, and never across an `.await`.
///
/// # Example
///
/// ```ignore
/// let repo = Arc::new(InMemoryActivityRepository::seeded());
///
/// let chess = repo.snapshot()?.get("Chess Club").cloned().unwrap();
/// assert_eq!(chess.participants().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryActivityRepository {
    roster: Mutex<Roster>,
}

impl InMemoryActivityRepository {
    /// Creates a repository over the given roster.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Mutex::new(roster),
        }
    }

    /// Creates a repository holding the startup roster.
    pub fn seeded() -> Self {
        Self::new(seed_roster())
    }

    /// Returns a copy of the current roster.
    ///
    /// Useful for testing and debugging.
    pub fn snapshot(&self) -> Result<Roster, DomainError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Roster>, DomainError> {
        self.roster
            .lock()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Roster lock poisoned"))
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn modify(
        &self,
        name: &str,
        change: ActivityChange<'_>,
    ) -> Result<Activity, DomainError> {
        self.lock()?.modify(name, change)
    }
}

#[async_trait]
impl ActivityReader for InMemoryActivityRepository {
    async fn list_all(&self) -> Result<Vec<Activity>, DomainError> {
        Ok(self.lock()?.iter().cloned().collect())
    }
}
