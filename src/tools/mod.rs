//! Tool detection and desired-configuration building
//!
//! This module provides:
//! - ToolCatalog: static name → platform identifier mapping
//! - detect_tools: substring scan of prompt text
//! - build_tool_configs: the desired tool list for one client

pub mod builder;
pub mod catalog;
pub mod detect;

pub use builder::{DEFAULT_CORPUS_MAX_RESULTS, build_tool_configs};
pub use catalog::{CORPUS_QUERY_TOOL, ToolCatalog, ToolCatalogEntry};
pub use detect::detect_tools;
