//! Puzzle modules - pluggable win-condition logic, one module per kind
//!
//! Every level instantiates exactly one puzzle module from its catalog
//! definition. A module is pure input→state logic with a single-shot solved
//! flag: once `solved()` turns true it stays true, further input is ignored,
//! and the session absorbs any duplicate solved signal. The session never
//! inspects puzzle internals; it only consumes the solved flag.
//!
//! Modules are selected by [`PuzzleKind`] through [`Puzzle::spawn`]
//! (strategy pattern, no inheritance). Each kind carries its own config type
//! and a usable default, so a definition that omits config still yields a
//! playable module.

pub mod color;
pub mod counting;
pub mod find_objects;
pub mod light_bulb;
pub mod math;
pub mod number_series;
pub mod pattern;
pub mod word;
pub mod word_chain;

pub use color::{ColorConfig, ColorPuzzle};
pub use counting::{CountingConfig, CountingPuzzle};
pub use find_objects::{FindObjectsConfig, FindObjectsPuzzle};
pub use light_bulb::{LightBulbConfig, LightBulbPuzzle};
pub use math::{MathConfig, MathPuzzle, Operator};
pub use number_series::{NumberSeriesConfig, NumberSeriesPuzzle};
pub use pattern::{PatternConfig, PatternPuzzle};
pub use word::{WordConfig, WordPuzzle};
pub use word_chain::{SubmitOutcome, WordChainConfig, WordChainPuzzle};

use brain_master_types::PuzzleKind;

/// Upper bound on sequence lengths accepted by the bounded-input puzzles
/// (color and pattern). Configs are truncated to this on construction.
pub const MAX_SEQUENCE: usize = 16;

/// Per-kind puzzle configuration
///
/// Passed through verbatim from the catalog to the module. Opaque to the
/// session.
#[derive(Debug, Clone, PartialEq)]
pub enum PuzzleConfig {
    LightBulb(LightBulbConfig),
    Counting(CountingConfig),
    Word(WordConfig),
    Color(ColorConfig),
    Pattern(PatternConfig),
    NumberSeries(NumberSeriesConfig),
    Math(MathConfig),
    WordChain(WordChainConfig),
    FindObjects(FindObjectsConfig),
}

impl PuzzleConfig {
    /// The default configuration for a puzzle kind
    pub fn default_for(kind: PuzzleKind) -> Self {
        match kind {
            PuzzleKind::LightBulb => PuzzleConfig::LightBulb(LightBulbConfig::default()),
            PuzzleKind::Counting => PuzzleConfig::Counting(CountingConfig::default()),
            PuzzleKind::Word => PuzzleConfig::Word(WordConfig::default()),
            PuzzleKind::Color => PuzzleConfig::Color(ColorConfig::default()),
            PuzzleKind::Pattern => PuzzleConfig::Pattern(PatternConfig::default()),
            PuzzleKind::NumberSeries => {
                PuzzleConfig::NumberSeries(NumberSeriesConfig::default())
            }
            PuzzleKind::Math => PuzzleConfig::Math(MathConfig::default()),
            PuzzleKind::WordChain => PuzzleConfig::WordChain(WordChainConfig::default()),
            PuzzleKind::FindObjects => PuzzleConfig::FindObjects(FindObjectsConfig::default()),
        }
    }

    /// The kind this configuration belongs to
    pub fn kind(&self) -> PuzzleKind {
        match self {
            PuzzleConfig::LightBulb(_) => PuzzleKind::LightBulb,
            PuzzleConfig::Counting(_) => PuzzleKind::Counting,
            PuzzleConfig::Word(_) => PuzzleKind::Word,
            PuzzleConfig::Color(_) => PuzzleKind::Color,
            PuzzleConfig::Pattern(_) => PuzzleKind::Pattern,
            PuzzleConfig::NumberSeries(_) => PuzzleKind::NumberSeries,
            PuzzleConfig::Math(_) => PuzzleKind::Math,
            PuzzleConfig::WordChain(_) => PuzzleKind::WordChain,
            PuzzleConfig::FindObjects(_) => PuzzleKind::FindObjects,
        }
    }
}

/// An instantiated puzzle module
///
/// The presentation layer drives the concrete variant's input methods; the
/// session only queries [`Puzzle::solved`].
#[derive(Debug, Clone)]
pub enum Puzzle {
    LightBulb(LightBulbPuzzle),
    Counting(CountingPuzzle),
    Word(WordPuzzle),
    Color(ColorPuzzle),
    Pattern(PatternPuzzle),
    NumberSeries(NumberSeriesPuzzle),
    Math(MathPuzzle),
    WordChain(WordChainPuzzle),
    FindObjects(FindObjectsPuzzle),
}

impl Puzzle {
    /// Instantiate the module for `kind`
    ///
    /// A config of the wrong kind is tolerated by falling back to the kind's
    /// default, so a module always receives a config it can operate on.
    pub fn spawn(kind: PuzzleKind, config: &PuzzleConfig) -> Puzzle {
        let config = if config.kind() == kind {
            config.clone()
        } else {
            PuzzleConfig::default_for(kind)
        };

        match config {
            PuzzleConfig::LightBulb(c) => Puzzle::LightBulb(LightBulbPuzzle::new(c)),
            PuzzleConfig::Counting(c) => Puzzle::Counting(CountingPuzzle::new(c)),
            PuzzleConfig::Word(c) => Puzzle::Word(WordPuzzle::new(c)),
            PuzzleConfig::Color(c) => Puzzle::Color(ColorPuzzle::new(c)),
            PuzzleConfig::Pattern(c) => Puzzle::Pattern(PatternPuzzle::new(c)),
            PuzzleConfig::NumberSeries(c) => Puzzle::NumberSeries(NumberSeriesPuzzle::new(c)),
            PuzzleConfig::Math(c) => Puzzle::Math(MathPuzzle::new(c)),
            PuzzleConfig::WordChain(c) => Puzzle::WordChain(WordChainPuzzle::new(c)),
            PuzzleConfig::FindObjects(c) => Puzzle::FindObjects(FindObjectsPuzzle::new(c)),
        }
    }

    /// The kind of this module
    pub fn kind(&self) -> PuzzleKind {
        match self {
            Puzzle::LightBulb(_) => PuzzleKind::LightBulb,
            Puzzle::Counting(_) => PuzzleKind::Counting,
            Puzzle::Word(_) => PuzzleKind::Word,
            Puzzle::Color(_) => PuzzleKind::Color,
            Puzzle::Pattern(_) => PuzzleKind::Pattern,
            Puzzle::NumberSeries(_) => PuzzleKind::NumberSeries,
            Puzzle::Math(_) => PuzzleKind::Math,
            Puzzle::WordChain(_) => PuzzleKind::WordChain,
            Puzzle::FindObjects(_) => PuzzleKind::FindObjects,
        }
    }

    /// Whether the win condition has been met (single-shot, never resets)
    pub fn solved(&self) -> bool {
        match self {
            Puzzle::LightBulb(p) => p.solved(),
            Puzzle::Counting(p) => p.solved(),
            Puzzle::Word(p) => p.solved(),
            Puzzle::Color(p) => p.solved(),
            Puzzle::Pattern(p) => p.solved(),
            Puzzle::NumberSeries(p) => p.solved(),
            Puzzle::Math(p) => p.solved(),
            Puzzle::WordChain(p) => p.solved(),
            Puzzle::FindObjects(p) => p.solved(),
        }
    }
}
