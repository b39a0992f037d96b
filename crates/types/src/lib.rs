//! Core types module - shared data structures and tuning constants
//!
//! This module defines the fundamental types used throughout the game core.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (session logic, persistence, presentation).
//!
//! # Bulb Economy Constants
//!
//! Bulbs are the game's consumable currency, spent on hints and skips and
//! earned through completion bonuses and ad rewards:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `STARTING_BULBS` | 5 | Balance seeded on first run |
//! | `HINT_COST` | 1 | Bulbs spent per hint |
//! | `SKIP_COST` | 3 | Bulbs spent to skip a level |
//! | `NO_HINT_BONUS` | 1 | Bulbs earned for a hint-free completion |
//! | `AD_REWARD_BULBS` | 2 | Bulbs earned per watched ad |
//!
//! # Level Range Constants
//!
//! The catalog covers levels 1 through `LEVEL_COUNT`. Difficulty is derived
//! from the level id unless a definition overrides it:
//!
//! | Id range | Difficulty |
//! |----------|------------|
//! | 1..=33 | Easy |
//! | 34..=66 | Medium |
//! | 67+ | Hard |
//!
//! # Examples
//!
//! ```
//! use brain_master_types::{Difficulty, PuzzleKind, SessionPhase, STARTING_BULBS};
//!
//! // Difficulty derives from the level id
//! assert_eq!(Difficulty::for_level(1), Difficulty::Easy);
//! assert_eq!(Difficulty::for_level(50), Difficulty::Medium);
//! assert_eq!(Difficulty::for_level(99), Difficulty::Hard);
//!
//! // Parse from string (case-insensitive)
//! let kind = PuzzleKind::from_str("lightBulb").unwrap();
//! assert_eq!(kind, PuzzleKind::LightBulb);
//!
//! // Sessions start in the Playing phase
//! assert_eq!(SessionPhase::Playing.as_str(), "playing");
//! assert_eq!(STARTING_BULBS, 5);
//! ```

/// Level identifier (1-based; the catalog may be sparse)
pub type LevelId = u32;

/// Bulb balance seeded on first run (5 bulbs)
pub const STARTING_BULBS: u32 = 5;

/// Bulbs spent to reveal (or advance) a hint
pub const HINT_COST: u32 = 1;

/// Bulbs spent to skip the current level
pub const SKIP_COST: u32 = 3;

/// Bulbs credited for completing a level without using a hint
pub const NO_HINT_BONUS: u32 = 1;

/// Bulbs credited per watched ad (repeatable from the completed screen)
pub const AD_REWARD_BULBS: u32 = 2;

/// Stars recorded for a completed level
pub const STARS_ON_COMPLETE: u8 = 3;

/// Stars recorded for a skipped level
pub const STARS_ON_SKIP: u8 = 1;

/// Maximum star rating for any level
pub const MAX_STARS: u8 = 3;

/// Number of levels in the shipped catalog (ids 1..=100)
pub const LEVEL_COUNT: u32 = 100;

/// Highest level id rated Easy by the id convention
pub const EASY_MAX_LEVEL: u32 = 33;

/// Highest level id rated Medium by the id convention
pub const MEDIUM_MAX_LEVEL: u32 = 66;

/// Level difficulty rating
///
/// Derived from the level id by convention (see [`Difficulty::for_level`]),
/// unless a catalog definition overrides it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Derive the difficulty for a level id
    ///
    /// # Examples
    ///
    /// ```
    /// use brain_master_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::for_level(33), Difficulty::Easy);
    /// assert_eq!(Difficulty::for_level(34), Difficulty::Medium);
    /// assert_eq!(Difficulty::for_level(66), Difficulty::Medium);
    /// assert_eq!(Difficulty::for_level(67), Difficulty::Hard);
    /// ```
    pub fn for_level(id: LevelId) -> Self {
        if id <= EASY_MAX_LEVEL {
            Difficulty::Easy
        } else if id <= MEDIUM_MAX_LEVEL {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    /// Parse difficulty from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Level category tag shown on the select screen
///
/// Open-ended label describing what kind of thinking a level exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Math,
    Physics,
    Logic,
    Knowledge,
    Sorting,
    Strategy,
    Word,
    Visual,
    Color,
}

impl Category {
    /// Parse category from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "math" => Some(Category::Math),
            "physics" => Some(Category::Physics),
            "logic" => Some(Category::Logic),
            "knowledge" => Some(Category::Knowledge),
            "sorting" => Some(Category::Sorting),
            "strategy" => Some(Category::Strategy),
            "word" => Some(Category::Word),
            "visual" => Some(Category::Visual),
            "color" => Some(Category::Color),
            _ => None,
        }
    }

    /// Convert to display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Math => "Math",
            Category::Physics => "Physics",
            Category::Logic => "Logic",
            Category::Knowledge => "Knowledge",
            Category::Sorting => "Sorting",
            Category::Strategy => "Strategy",
            Category::Word => "Word",
            Category::Visual => "Visual",
            Category::Color => "Color",
        }
    }
}

/// Puzzle module selector
///
/// Each kind maps to one pluggable puzzle module; the session treats every
/// module as a black box that fires a single solved signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleKind {
    /// Tap the bulb enough times to light it
    LightBulb,
    /// Count shapes and pick the right total
    Counting,
    /// Rotate and swap letters to reach a target word
    Word,
    /// Reproduce a color sequence
    Color,
    /// Tap cells in a target order
    Pattern,
    /// Pick the next number in a series
    NumberSeries,
    /// Build an arithmetic expression hitting a target
    Math,
    /// Transform a word one letter at a time through a dictionary
    WordChain,
    /// Trace a hidden word in a letter grid
    FindObjects,
}

impl PuzzleKind {
    /// Parse puzzle kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use brain_master_types::PuzzleKind;
    ///
    /// assert_eq!(PuzzleKind::from_str("lightBulb"), Some(PuzzleKind::LightBulb));
    /// assert_eq!(PuzzleKind::from_str("numberseries"), Some(PuzzleKind::NumberSeries));
    /// assert_eq!(PuzzleKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lightbulb" => Some(PuzzleKind::LightBulb),
            "counting" => Some(PuzzleKind::Counting),
            "word" => Some(PuzzleKind::Word),
            "color" => Some(PuzzleKind::Color),
            "pattern" => Some(PuzzleKind::Pattern),
            "numberseries" => Some(PuzzleKind::NumberSeries),
            "math" => Some(PuzzleKind::Math),
            "wordchain" => Some(PuzzleKind::WordChain),
            "findobjects" => Some(PuzzleKind::FindObjects),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PuzzleKind::LightBulb => "lightBulb",
            PuzzleKind::Counting => "counting",
            PuzzleKind::Word => "word",
            PuzzleKind::Color => "color",
            PuzzleKind::Pattern => "pattern",
            PuzzleKind::NumberSeries => "numberSeries",
            PuzzleKind::Math => "math",
            PuzzleKind::WordChain => "wordChain",
            PuzzleKind::FindObjects => "findObjects",
        }
    }
}

/// UI phase of one level attempt
///
/// Transitions are driven exclusively by session events:
/// Playing ⇄ HintOpen (hint shown/dismissed) and Playing|HintOpen → Completed
/// (puzzle solved, terminal for the session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Puzzle interactive, no overlay
    Playing,
    /// Hint panel visible; never auto-advances the level
    HintOpen,
    /// Level solved; terminal, entered exactly once
    Completed,
}

impl SessionPhase {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Playing => "playing",
            SessionPhase::HintOpen => "hintOpen",
            SessionPhase::Completed => "completed",
        }
    }
}

/// Session events that can be applied to a level attempt
///
/// These mirror the player-facing controls plus the puzzle module's solved
/// callback. Each event maps to one guarded transition of the session state
/// machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Spend a bulb to show (or advance) the hint
    RequestHint,
    /// Close the hint panel
    DismissHint,
    /// Spend bulbs to skip the level
    RequestSkip,
    /// The puzzle module reported its win condition
    PuzzleSolved,
    /// Watch an ad for bonus bulbs (completed screen only)
    WatchAd,
    /// Move on to the next level in the catalog
    AdvanceToNext,
    /// Leave the level without writing a record
    Exit,
}

impl SessionAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "requesthint" => Some(SessionAction::RequestHint),
            "dismisshint" => Some(SessionAction::DismissHint),
            "requestskip" => Some(SessionAction::RequestSkip),
            "puzzlesolved" => Some(SessionAction::PuzzleSolved),
            "watchad" => Some(SessionAction::WatchAd),
            "advancetonext" => Some(SessionAction::AdvanceToNext),
            "exit" => Some(SessionAction::Exit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::RequestHint => "requestHint",
            SessionAction::DismissHint => "dismissHint",
            SessionAction::RequestSkip => "requestSkip",
            SessionAction::PuzzleSolved => "puzzleSolved",
            SessionAction::WatchAd => "watchAd",
            SessionAction::AdvanceToNext => "advanceToNext",
            SessionAction::Exit => "exit",
        }
    }
}
