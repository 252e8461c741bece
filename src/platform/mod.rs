//! Agent platform layer - Ultravox API integration
//!
//! This module provides:
//! - Wire types for agent state and update payloads
//! - AgentPlatform trait for API abstraction
//! - UltravoxClient implementation
//! - MockPlatform for tests

pub mod client;
pub mod types;
pub mod ultravox;

pub use client::{AgentPlatform, MockPlatform, remote_state};
pub use types::{AgentFetch, AgentPatch, RemoteAgentState, ToolConfiguration};
pub use ultravox::UltravoxClient;
