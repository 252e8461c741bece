//! Domain types for voxsync
//!
//! This module contains the core record types:
//! - ClientAgentConfig: one row of the clients table, the local source of truth
//! - SyncStatus: the three sync-status fields this tool writes back
//! - SyncOutcome: per-record result of a sync attempt
//! - BatchTotals: aggregated outcome counts for a whole run

pub mod client;
pub mod outcome;

pub use client::{ClientAgentConfig, DEFAULT_VOICE, SyncStatus};
pub use outcome::{BatchTotals, SkipReason, SyncOutcome};
