//! Brain Master (workspace facade crate).
//!
//! This package keeps a single `brain_master::{core,store,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use brain_master_core as core;
pub use brain_master_store as store;
pub use brain_master_types as types;
