//! Sync core - decision engine and batch runner
//!
//! This module provides:
//! - DesiredState / StateDiff: the three-axis comparison
//! - SyncEngine: per-record fetch, diff, push, write-back
//! - BatchRunner: sequential pass over the selected records

pub mod engine;
pub mod runner;

pub use engine::{DesiredState, StateDiff, SyncEngine, tools_equal};
pub use runner::BatchRunner;
