//! Save layer - durable storage behind the core's persistence seams
//!
//! This crate implements the core's [`SaveStore`](brain_master_core::SaveStore)
//! and [`Clock`](brain_master_core::Clock) traits against the real world: a
//! single JSON save file and the system clock.
//!
//! # Save file layout
//!
//! One JSON object with two keys, mirroring the key-value layout of the
//! mobile build:
//!
//! ```json
//! {
//!   "bulbs": "4",
//!   "levelProgress": {
//!     "1": { "completed": true, "stars": 3, "completedAt": "2024-03-01T10:00:00Z" },
//!     "5": { "completed": false, "skipped": true, "stars": 1, "completedAt": "2024-03-02T18:30:00Z" }
//!   }
//! }
//! ```
//!
//! - `bulbs` is written as a decimal string; an integer is tolerated on read.
//! - `levelProgress` is keyed by decimal level id; `skipped` is omitted when
//!   false and `completedAt` when absent.
//!
//! # Degradation
//!
//! A missing or corrupt save file is **empty progress**, never an error:
//! reads log a warning and fall back to defaults, so a damaged save can cost
//! progress but can never crash the game. Writes replace the whole file via
//! a temp-file rename, so an interrupted write leaves the previous save
//! intact.

pub mod clock;
pub mod save_file;

pub use brain_master_core as core;
pub use brain_master_types as types;

pub use clock::SystemClock;
pub use save_file::JsonSaveStore;
