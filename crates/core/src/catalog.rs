//! Catalog module - the static level table
//!
//! The catalog maps level ids to immutable definitions. Levels 1-3 are
//! hand-authored; the rest are generated per id from fixed per-kind text
//! pools, so a given id always yields the same definition in every run and
//! on every device. Lookups are pure and total: a missing id is `None`,
//! never a panic and never a default definition.

use std::collections::BTreeMap;

use brain_master_types::{Category, Difficulty, LevelId, PuzzleKind, LEVEL_COUNT};

use crate::puzzles::{CountingConfig, LightBulbConfig, PuzzleConfig, WordConfig};

/// Immutable definition of one level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelDefinition {
    pub id: LevelId,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    /// Prompt shown above the puzzle
    pub question: String,
    /// Progressive hints, cheapest first; never empty
    pub hints: Vec<String>,
    pub puzzle: PuzzleKind,
    /// Passed through verbatim to the puzzle module
    pub config: PuzzleConfig,
}

/// Puzzle kinds in generation order; `id % 9` selects the kind for a
/// generated level.
const KIND_ROTATION: [PuzzleKind; 9] = [
    PuzzleKind::LightBulb,
    PuzzleKind::Counting,
    PuzzleKind::Word,
    PuzzleKind::Color,
    PuzzleKind::Pattern,
    PuzzleKind::NumberSeries,
    PuzzleKind::Math,
    PuzzleKind::WordChain,
    PuzzleKind::FindObjects,
];

/// Category label for each puzzle kind
fn category_for(kind: PuzzleKind) -> Category {
    match kind {
        PuzzleKind::LightBulb => Category::Logic,
        PuzzleKind::Counting => Category::Visual,
        PuzzleKind::Word => Category::Word,
        PuzzleKind::Color => Category::Color,
        PuzzleKind::Pattern => Category::Strategy,
        PuzzleKind::NumberSeries => Category::Math,
        PuzzleKind::Math => Category::Math,
        PuzzleKind::WordChain => Category::Knowledge,
        PuzzleKind::FindObjects => Category::Visual,
    }
}

/// Prompt pool per kind; `id % 5` selects the prompt for a generated level
fn question_pool(kind: PuzzleKind) -> [&'static str; 5] {
    match kind {
        PuzzleKind::LightBulb => [
            "Find a way to illuminate the darkness!",
            "Power up the circuit to proceed!",
            "Light up the room using your creativity!",
            "Find the hidden switch mechanism!",
            "Activate the ancient light source!",
        ],
        PuzzleKind::Counting => [
            "Count all the shapes you can find!",
            "How many patterns can you spot?",
            "Find the total number of geometric forms!",
            "Calculate the sum of all visible figures!",
            "Count every shape, even the hidden ones!",
        ],
        PuzzleKind::Word => [
            "Rearrange the letters to find the solution!",
            "Transform this word into another!",
            "Solve this letter puzzle!",
            "Find the hidden word by rotating letters!",
            "Make a new word from these letters!",
        ],
        PuzzleKind::Color => [
            "Repeat the color sequence exactly!",
            "Which colors belong together, and in what order?",
            "Paint the pattern from memory!",
            "Match the rainbow's secret order!",
            "Press the colors the way the artist intended!",
        ],
        PuzzleKind::Pattern => [
            "Tap the tiles in the right order!",
            "Follow the pattern to unlock the grid!",
            "Repeat the sequence you were shown!",
            "Trace the path through the tiles!",
            "The grid remembers - do you?",
        ],
        PuzzleKind::NumberSeries => [
            "What number comes next in the series?",
            "Continue the sequence!",
            "Crack the number pattern!",
            "The series follows a rule - find it!",
            "Predict the next number!",
        ],
        PuzzleKind::Math => [
            "Combine the numbers to hit the target!",
            "Build an expression that adds up!",
            "Make the math work out exactly!",
            "Reach the target with the digits you have!",
            "Arithmetic with a twist - hit the goal!",
        ],
        PuzzleKind::WordChain => [
            "Change one letter at a time to reach the target word!",
            "Walk from word to word, one letter per step!",
            "Morph the word without leaving the dictionary!",
            "Every step must be a real word!",
            "Bridge the two words, letter by letter!",
        ],
        PuzzleKind::FindObjects => [
            "Find the hidden word in the grid!",
            "Something is hiding among the letters...",
            "Trace the secret word!",
            "Search the grid carefully!",
            "The word is in plain sight - connect it!",
        ],
    }
}

/// First-hint pool per kind; `id % 5` selects, mirroring the prompt pool
fn hint_pool(kind: PuzzleKind) -> [&'static str; 5] {
    match kind {
        PuzzleKind::LightBulb => [
            "Try interacting with different parts of the puzzle!",
            "Some elements might need multiple interactions!",
            "Think about how real lights work!",
            "Look for patterns in the behavior!",
            "Try a different approach than the obvious one!",
        ],
        PuzzleKind::Counting => [
            "Remember to look for overlapping shapes!",
            "Don't forget to count combinations!",
            "Break down the pattern into smaller parts!",
            "Look for shapes within shapes!",
            "Consider all possible formations!",
        ],
        PuzzleKind::Word => [
            "Some letters might look different when rotated!",
            "Try rotating each letter to see what happens!",
            "Think about symmetry in letters!",
            "One rotation might be all you need!",
            "Look for letters that could become others!",
        ],
        PuzzleKind::Color => [
            "The order matters as much as the colors!",
            "A wrong press clears the whole attempt!",
            "Start from the first color and commit!",
            "Three colors, one correct order!",
            "Watch which slot fills up first!",
        ],
        PuzzleKind::Pattern => [
            "The first tap sets the whole sequence up!",
            "Corners before edges? Or the other way around?",
            "A wrong tap at the end resets everything!",
            "Count the tiles before you start!",
            "The order is not left-to-right!",
        ],
        PuzzleKind::NumberSeries => [
            "Look at the gaps between the numbers!",
            "Try multiplying instead of adding!",
            "The rule applies to every step of the series!",
            "Check whether each number doubles!",
            "Differences, ratios, or something else?",
        ],
        PuzzleKind::Math => [
            "You don't have to use every number!",
            "Multiplication binds tighter than addition!",
            "Two numbers might be enough!",
            "Division only works when it's exact!",
            "Try the big numbers first!",
        ],
        PuzzleKind::WordChain => [
            "Every intermediate word must be valid!",
            "Change the letter that unlocks the next word!",
            "Work backwards from the target!",
            "The chain is shorter than you think!",
            "Don't waste attempts on made-up words!",
        ],
        PuzzleKind::FindObjects => [
            "The word might run in any direction!",
            "Check the diagonals too!",
            "Start from an unusual corner!",
            "The trace must be a straight line!",
            "Look for the word's first letter everywhere!",
        ],
    }
}

/// Escalation hint per kind, offered after the first hint is spent
fn final_hint(kind: PuzzleKind) -> &'static str {
    match kind {
        PuzzleKind::LightBulb => "Keep tapping the bulb itself - persistence pays.",
        PuzzleKind::Counting => "The answer is one of the middle options.",
        PuzzleKind::Word => "Swapping two letters changes everything.",
        PuzzleKind::Color => "The sequence starts with the first palette color.",
        PuzzleKind::Pattern => "The second tap is in the bottom row.",
        PuzzleKind::NumberSeries => "Each number is double the one before it.",
        PuzzleKind::Math => "A single addition can reach the target.",
        PuzzleKind::WordChain => "The second letter is the last to change.",
        PuzzleKind::FindObjects => "Start tracing from the top-left region.",
    }
}

/// The full level table
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    levels: BTreeMap<LevelId, LevelDefinition>,
}

impl Catalog {
    /// Build the shipped catalog (levels 1..=100), deterministically
    pub fn new() -> Self {
        let mut levels = BTreeMap::new();
        for def in authored_levels() {
            levels.insert(def.id, def);
        }
        for id in 4..=LEVEL_COUNT {
            let def = generated_level(id);
            levels.insert(def.id, def);
        }
        Self { levels }
    }

    /// Look up a level definition
    ///
    /// Pure and total over all ids: absence is `None`, never a panic.
    pub fn level(&self, id: LevelId) -> Option<&LevelDefinition> {
        self.levels.get(&id)
    }

    /// Ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = LevelId> + '_ {
        self.levels.keys().copied()
    }

    /// Highest defined id, or 0 for an empty catalog
    pub fn last_id(&self) -> LevelId {
        self.levels.keys().next_back().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// The hand-authored opening levels
fn authored_levels() -> Vec<LevelDefinition> {
    vec![
        LevelDefinition {
            id: 1,
            title: "Level 1".to_string(),
            category: Category::Logic,
            difficulty: Difficulty::Easy,
            question: "Turn on the light! But remember... sometimes the obvious solution \
                       isn't the right one."
                .to_string(),
            hints: vec![
                "Try tapping the bulb multiple times to warm it up!".to_string(),
                "The third tap is the charm.".to_string(),
            ],
            puzzle: PuzzleKind::LightBulb,
            config: PuzzleConfig::LightBulb(LightBulbConfig {
                presses_required: 3,
            }),
        },
        LevelDefinition {
            id: 2,
            title: "Level 2".to_string(),
            category: Category::Visual,
            difficulty: Difficulty::Easy,
            question: "How many triangles can you find? Count carefully!".to_string(),
            hints: vec![
                "Don't forget to count the triangles formed by smaller ones!".to_string(),
                "There are more than twelve.".to_string(),
            ],
            puzzle: PuzzleKind::Counting,
            config: PuzzleConfig::Counting(CountingConfig {
                answer: 13,
                options: vec![8, 10, 13, 15, 18],
            }),
        },
        LevelDefinition {
            id: 3,
            title: "Level 3".to_string(),
            category: Category::Word,
            difficulty: Difficulty::Easy,
            question: "Transform 'RATS' into 'STAR'!".to_string(),
            hints: vec![
                "One of these letters looks similar when rotated...".to_string(),
                "Swapping the outer letters is a good start.".to_string(),
            ],
            puzzle: PuzzleKind::Word,
            config: PuzzleConfig::Word(WordConfig {
                letters: vec!['R', 'A', 'T', 'S'],
                target: "STAR".to_string(),
            }),
        },
    ]
}

/// Generate the definition for one of the programmatic levels (4..=100)
fn generated_level(id: LevelId) -> LevelDefinition {
    let kind = KIND_ROTATION[(id as usize) % KIND_ROTATION.len()];
    let pool_index = (id as usize) % 5;

    LevelDefinition {
        id,
        title: format!("Level {id}"),
        category: category_for(kind),
        difficulty: Difficulty::for_level(id),
        question: question_pool(kind)[pool_index].to_string(),
        hints: vec![
            hint_pool(kind)[pool_index].to_string(),
            final_hint(kind).to_string(),
        ],
        puzzle: kind,
        config: PuzzleConfig::default_for(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_full_range() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), LEVEL_COUNT as usize);
        assert_eq!(catalog.last_id(), LEVEL_COUNT);
        for id in 1..=LEVEL_COUNT {
            assert!(catalog.level(id).is_some(), "missing level {id}");
        }
    }

    #[test]
    fn test_lookup_is_total() {
        let catalog = Catalog::new();
        assert!(catalog.level(0).is_none());
        assert!(catalog.level(LEVEL_COUNT + 1).is_none());
        assert!(catalog.level(u32::MAX).is_none());
    }

    #[test]
    fn test_catalog_is_deterministic() {
        let a = Catalog::new();
        let b = Catalog::new();
        for id in 1..=LEVEL_COUNT {
            assert_eq!(a.level(id), b.level(id));
        }
    }

    #[test]
    fn test_repeated_lookups_equal() {
        let catalog = Catalog::new();
        assert_eq!(catalog.level(42), catalog.level(42));
    }

    #[test]
    fn test_authored_levels() {
        let catalog = Catalog::new();

        let first = catalog.level(1).unwrap();
        assert_eq!(first.puzzle, PuzzleKind::LightBulb);
        assert!(first.question.starts_with("Turn on the light!"));

        let second = catalog.level(2).unwrap();
        assert_eq!(second.puzzle, PuzzleKind::Counting);

        let third = catalog.level(3).unwrap();
        assert_eq!(third.puzzle, PuzzleKind::Word);
        assert_eq!(third.category, Category::Word);
    }

    #[test]
    fn test_every_level_has_hints_and_matching_config() {
        let catalog = Catalog::new();
        for id in 1..=LEVEL_COUNT {
            let def = catalog.level(id).unwrap();
            assert!(!def.hints.is_empty(), "level {id} has no hints");
            assert!(!def.question.is_empty(), "level {id} has no question");
            assert_eq!(def.config.kind(), def.puzzle, "level {id} config mismatch");
        }
    }

    #[test]
    fn test_difficulty_follows_id_convention() {
        let catalog = Catalog::new();
        assert_eq!(catalog.level(10).unwrap().difficulty, Difficulty::Easy);
        assert_eq!(catalog.level(50).unwrap().difficulty, Difficulty::Medium);
        assert_eq!(catalog.level(90).unwrap().difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_generated_kinds_cycle() {
        let catalog = Catalog::new();
        // 9 consecutive generated ids cover all 9 kinds
        let kinds: Vec<PuzzleKind> = (10..19)
            .map(|id| catalog.level(id).unwrap().puzzle)
            .collect();
        for kind in KIND_ROTATION {
            assert!(kinds.contains(&kind), "{kind:?} missing from rotation");
        }
    }

    #[test]
    fn test_ids_are_sorted() {
        let catalog = Catalog::new();
        let ids: Vec<LevelId> = catalog.ids().collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
