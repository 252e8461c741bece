//! Voxsync - keeps Ultravox agent templates in sync with the clients table
//!
//! Each client record carries a system prompt, a voice and optional corpus
//! settings; voxsync computes the tool set each agent should have from that
//! record, diffs it against the agent's current Ultravox template and pushes
//! an update when they differ.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod platform;
pub mod storage;
pub mod sync;
pub mod tools;

pub use error::{Result, VoxsyncError};
