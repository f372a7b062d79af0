//! In-memory schedule store shared by the web workers.

use crate::models::{Schedule, ScheduleId, ScheduleSummary};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors from the schedule store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A thread panicked while holding the store lock.
    #[error("lock error")]
    LockPoisoned,
}

/// Stored schedule + last activity time (for auto-cleanup).
struct StoreEntry {
    schedule: Schedule,
    last_activity: Instant,
}

/// Schedules by id. Entries not read for the configured timeout are purged.
#[derive(Default)]
pub struct ScheduleStore {
    entries: RwLock<HashMap<ScheduleId, StoreEntry>>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a schedule and return a copy of it.
    pub fn insert(&self, schedule: Schedule) -> Result<Schedule, StoreError> {
        let mut g = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        let copy = schedule.clone();
        g.insert(
            schedule.id,
            StoreEntry {
                schedule,
                last_activity: Instant::now(),
            },
        );
        Ok(copy)
    }

    /// Look up a schedule. Touching it refreshes its last activity.
    pub fn get(&self, id: ScheduleId) -> Result<Option<Schedule>, StoreError> {
        let mut g = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(g.get_mut(&id).map(|entry| {
            entry.last_activity = Instant::now();
            entry.schedule.clone()
        }))
    }

    /// Remove a schedule; `false` if it did not exist.
    pub fn remove(&self, id: ScheduleId) -> Result<bool, StoreError> {
        let mut g = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(g.remove(&id).is_some())
    }

    /// Summaries of all stored schedules, newest first.
    pub fn list(&self) -> Result<Vec<ScheduleSummary>, StoreError> {
        let g = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut summaries: Vec<_> = g.values().map(|e| e.schedule.summary()).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.name.cmp(&b.name)));
        Ok(summaries)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let g = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(g.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Drop entries idle for at least `timeout`. Returns how many were removed.
    pub fn purge_inactive(&self, timeout: Duration) -> Result<usize, StoreError> {
        let mut g = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        let before = g.len();
        g.retain(|_, entry| entry.last_activity.elapsed() < timeout);
        Ok(before - g.len())
    }
}
