//! JSON save file - the durable `SaveStore` implementation
//!
//! All reads are served from memory; the file is parsed once when the store
//! is opened. Every mutation rewrites the whole file through a temp-file
//! rename, so the save on disk is always one complete, consistent snapshot:
//! a crash between mutation and flush loses at most that one write.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::warn;
use serde::{Deserialize, Serialize};

use brain_master_core::{ProgressRecord, SaveStore, StoreError};
use brain_master_types::LevelId;

/// On-disk shape of the whole save file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SaveFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bulbs: Option<BulbsValue>,
    #[serde(rename = "levelProgress", default)]
    level_progress: BTreeMap<String, StoredRecord>,
}

/// The bulb balance is written as a decimal string (matching the mobile
/// build's string-valued key-value store) but an integer is accepted on
/// read.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum BulbsValue {
    Count(u32),
    Text(String),
}

impl BulbsValue {
    fn parse(&self) -> Option<u32> {
        match self {
            BulbsValue::Count(n) => Some(*n),
            BulbsValue::Text(s) => match s.trim().parse() {
                Ok(n) => Some(n),
                Err(_) => {
                    warn!("unreadable bulb balance {s:?} in save file, using default");
                    None
                }
            },
        }
    }
}

/// On-disk shape of one progress record
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    completed: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    skipped: bool,
    stars: u8,
    #[serde(
        rename = "completedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    completed_at: Option<String>,
}

impl From<&ProgressRecord> for StoredRecord {
    fn from(record: &ProgressRecord) -> Self {
        Self {
            completed: record.completed,
            skipped: record.skipped,
            stars: record.stars,
            completed_at: record.completed_at.clone(),
        }
    }
}

impl From<StoredRecord> for ProgressRecord {
    fn from(stored: StoredRecord) -> Self {
        Self {
            completed: stored.completed,
            skipped: stored.skipped,
            stars: stored.stars,
            completed_at: stored.completed_at,
        }
    }
}

/// File-backed save store
#[derive(Debug)]
pub struct JsonSaveStore {
    path: PathBuf,
    bulbs: Option<u32>,
    records: BTreeMap<LevelId, ProgressRecord>,
}

impl JsonSaveStore {
    /// Open the save file at `path`
    ///
    /// Never fails: a missing file is a fresh install, a corrupt one is
    /// treated as empty progress (with a warning) rather than an error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (bulbs, records) = load(&path);
        Self {
            path,
            bulbs,
            records,
        }
    }

    /// Path of the underlying save file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the whole save file from the in-memory state
    fn persist(&self) -> Result<(), StoreError> {
        let data = SaveFile {
            bulbs: self.bulbs.map(|count| BulbsValue::Text(count.to_string())),
            level_progress: self
                .records
                .iter()
                .map(|(id, record)| (id.to_string(), StoredRecord::from(record)))
                .collect(),
        };

        self.write_atomic(&data)
            .map_err(|err| StoreError::Unavailable(format!("{err:#}")))
    }

    fn write_atomic(&self, data: &SaveFile) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(data).context("serialize save file")?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace {}", self.path.display()))?;
        Ok(())
    }
}

impl SaveStore for JsonSaveStore {
    fn bulbs(&self) -> Option<u32> {
        self.bulbs
    }

    fn put_bulbs(&mut self, count: u32) -> Result<(), StoreError> {
        let previous = self.bulbs;
        self.bulbs = Some(count);
        self.persist().inspect_err(|_| self.bulbs = previous)
    }

    fn progress(&self, id: LevelId) -> Option<ProgressRecord> {
        self.records.get(&id).cloned()
    }

    fn put_progress(&mut self, id: LevelId, record: ProgressRecord) -> Result<(), StoreError> {
        let previous = self.records.insert(id, record);
        self.persist().inspect_err(|_| {
            match previous {
                Some(record) => {
                    self.records.insert(id, record);
                }
                None => {
                    self.records.remove(&id);
                }
            }
        })
    }

    fn all_progress(&self) -> BTreeMap<LevelId, ProgressRecord> {
        self.records.clone()
    }
}

/// Read and parse the save file, degrading to empty progress on any failure
fn load(path: &Path) -> (Option<u32>, BTreeMap<LevelId, ProgressRecord>) {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            // Fresh install
            return (None, BTreeMap::new());
        }
        Err(err) => {
            warn!("cannot read save file {}: {err}", path.display());
            return (None, BTreeMap::new());
        }
    };

    let data: SaveFile = match serde_json::from_str(&raw) {
        Ok(data) => data,
        Err(err) => {
            warn!(
                "corrupt save file {} treated as empty progress: {err}",
                path.display()
            );
            return (None, BTreeMap::new());
        }
    };

    let bulbs = data.bulbs.as_ref().and_then(BulbsValue::parse);
    let records = data
        .level_progress
        .into_iter()
        .filter_map(|(key, stored)| match key.parse::<LevelId>() {
            Ok(id) => Some((id, ProgressRecord::from(stored))),
            Err(_) => {
                warn!("ignoring progress entry with non-numeric id {key:?}");
                None
            }
        })
        .collect();

    (bulbs, records)
}
