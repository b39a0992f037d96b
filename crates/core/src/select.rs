//! Select module - decorating the level grid from stored progress
//!
//! The select screen is open world: every catalog level is shown and
//! playable, progress only decorates the entries. A stricter
//! complete-the-previous-level gate is provided as a pure function for
//! shells that want it, but is not applied to the overview.

use std::collections::BTreeMap;

use brain_master_types::{Category, Difficulty, LevelId};

use crate::catalog::Catalog;
use crate::progress::{ProgressRecord, SaveStore};

/// One row of the level-select grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEntry {
    pub id: LevelId,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub completed: bool,
    pub stars: u8,
}

/// Build the ordered select-screen listing
///
/// One entry per catalog id, ascending. Levels without a stored record show
/// as not completed with zero stars; skipped levels keep their single star
/// but do not count as completed.
pub fn level_overview(catalog: &Catalog, store: &dyn SaveStore) -> Vec<LevelEntry> {
    let progress = store.all_progress();

    catalog
        .ids()
        .filter_map(|id| catalog.level(id))
        .map(|def| {
            let record = progress.get(&def.id);
            LevelEntry {
                id: def.id,
                title: def.title.clone(),
                category: def.category,
                difficulty: def.difficulty,
                completed: record.map(|r| r.completed).unwrap_or(false),
                stars: record.map(|r| r.stars).unwrap_or(0),
            }
        })
        .collect()
}

/// Optional sequential gate: level n is playable iff n == 1 or n-1 is
/// completed
///
/// Skipped levels do not unlock their successor; only real completions
/// count. Not used by [`level_overview`] (the shipped game is open world).
pub fn strict_unlock(progress: &BTreeMap<LevelId, ProgressRecord>, id: LevelId) -> bool {
    if id <= 1 {
        return id == 1;
    }
    progress
        .get(&(id - 1))
        .map(|record| record.completed)
        .unwrap_or(false)
}
