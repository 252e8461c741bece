//! CLI module for voxsync - command-line argument parsing.
//!
//! One flat command with mutually exclusive record filters and a dry-run
//! switch.

pub mod commands;

pub use commands::Cli;
