//! Progress module - durable per-level outcomes and the save-store contract
//!
//! A [`ProgressRecord`] is the whole-record outcome of one terminal session
//! (completed or skipped). Records are written in full, last write wins; a
//! session that exits early writes nothing.
//!
//! The [`SaveStore`] trait is the seam between game logic and durable
//! storage. Reads degrade to "empty progress" when the underlying store is
//! missing or unreadable; only writes surface [`StoreError`], and callers are
//! expected to log and carry on rather than crash the session.

use std::collections::BTreeMap;

use thiserror::Error;

use brain_master_types::{LevelId, STARS_ON_COMPLETE, STARS_ON_SKIP};

/// Durable outcome of one level attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    pub completed: bool,
    pub skipped: bool,
    /// Star rating in 0..=3
    pub stars: u8,
    /// ISO-8601 timestamp of the terminal transition
    pub completed_at: Option<String>,
}

impl ProgressRecord {
    /// Record for a solved level (3 stars)
    pub fn completed(completed_at: String) -> Self {
        Self {
            completed: true,
            skipped: false,
            stars: STARS_ON_COMPLETE,
            completed_at: Some(completed_at),
        }
    }

    /// Record for a skipped level (1 star, not completed)
    pub fn skipped(completed_at: String) -> Self {
        Self {
            completed: false,
            skipped: true,
            stars: STARS_ON_SKIP,
            completed_at: Some(completed_at),
        }
    }
}

/// Save-layer failure
///
/// Only writes report this; reads degrade to defaults inside the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("save storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable key-value save storage for bulbs and level progress
///
/// Implementations must treat a missing or corrupt backing store as empty
/// progress on read. Writes are whole-value replacements; a failed write
/// leaves the previous durable state intact.
pub trait SaveStore {
    /// Last persisted bulb balance, if any was ever saved
    fn bulbs(&self) -> Option<u32>;

    /// Persist the bulb balance
    fn put_bulbs(&mut self, count: u32) -> Result<(), StoreError>;

    /// Record for one level, if present
    fn progress(&self, id: LevelId) -> Option<ProgressRecord>;

    /// Replace the record for one level (full replace, last write wins)
    fn put_progress(&mut self, id: LevelId, record: ProgressRecord) -> Result<(), StoreError>;

    /// Snapshot of every stored record, keyed by level id
    fn all_progress(&self) -> BTreeMap<LevelId, ProgressRecord>;
}

/// In-memory save store
///
/// Backs unit tests and any context that does not need durability (the level
/// select screen reads through the same trait).
#[derive(Debug, Default)]
pub struct MemorySaveStore {
    bulbs: Option<u32>,
    records: BTreeMap<LevelId, ProgressRecord>,
}

impl MemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the bulb balance (fresh installs leave this unset)
    pub fn with_bulbs(count: u32) -> Self {
        Self {
            bulbs: Some(count),
            records: BTreeMap::new(),
        }
    }
}

impl SaveStore for MemorySaveStore {
    fn bulbs(&self) -> Option<u32> {
        self.bulbs
    }

    fn put_bulbs(&mut self, count: u32) -> Result<(), StoreError> {
        self.bulbs = Some(count);
        Ok(())
    }

    fn progress(&self, id: LevelId) -> Option<ProgressRecord> {
        self.records.get(&id).cloned()
    }

    fn put_progress(&mut self, id: LevelId, record: ProgressRecord) -> Result<(), StoreError> {
        self.records.insert(id, record);
        Ok(())
    }

    fn all_progress(&self) -> BTreeMap<LevelId, ProgressRecord> {
        self.records.clone()
    }
}

/// Wall-clock seam
///
/// Session logic sees time only through this trait so completion timestamps
/// stay deterministic under test. The store crate provides the real
/// system-clock implementation.
pub trait Clock {
    /// Current time as an ISO-8601 string
    fn now(&self) -> String;
}

/// Clock pinned to a fixed instant, for tests
#[derive(Debug, Clone)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(timestamp: &str) -> Self {
        Self(timestamp.to_string())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
