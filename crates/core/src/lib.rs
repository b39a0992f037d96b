//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds all the rules of the game: the level catalog, the bulb
//! economy, the session state machine, the puzzle modules, and the level
//! select policy. It performs **no I/O**: durable storage and the wall
//! clock are injected through the [`progress::SaveStore`] and
//! [`progress::Clock`] traits, which the store crate implements against a
//! JSON save file.
//!
//! # Module Structure
//!
//! - [`catalog`]: id → level definition, generated deterministically per id
//! - [`economy`]: bulb balance with fail-closed spends
//! - [`session`]: one level attempt, from load to complete/skip/exit
//! - [`puzzles`]: pluggable win-condition modules, one per puzzle kind
//! - [`progress`]: progress records and the save-store/clock seams
//! - [`select`]: level-grid decoration and the optional sequential gate
//! - [`rng`]: seeded LCG for the completion-message pick
//!
//! # Example
//!
//! ```
//! use brain_master_core::progress::{FixedClock, MemorySaveStore, SaveStore};
//! use brain_master_core::session::GameSession;
//!
//! // Start a session on level 1 against an in-memory store
//! let mut session = GameSession::begin(
//!     Box::new(MemorySaveStore::new()),
//!     Box::new(FixedClock::new("2024-01-01T00:00:00Z")),
//!     12345,
//!     1,
//! )
//! .unwrap();
//!
//! // Fresh install: five bulbs; a hint costs one
//! assert_eq!(session.bulbs(), 5);
//! session.request_hint().unwrap();
//! assert_eq!(session.bulbs(), 4);
//!
//! // The puzzle module reports the win; the session becomes terminal
//! assert!(session.puzzle_solved());
//! assert!(session.store().progress(1).unwrap().completed);
//! ```

pub mod catalog;
pub mod economy;
pub mod progress;
pub mod puzzles;
pub mod rng;
pub mod select;
pub mod session;

pub use brain_master_types as types;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, LevelDefinition};
pub use economy::{BulbEconomy, InsufficientBulbs};
pub use progress::{Clock, FixedClock, MemorySaveStore, ProgressRecord, SaveStore, StoreError};
pub use puzzles::{Puzzle, PuzzleConfig};
pub use rng::SimpleRng;
pub use select::{level_overview, strict_unlock, LevelEntry};
pub use session::{GameSession, SessionError, MOTIVATIONAL_MESSAGES};
