//! Client record types read from the clients table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback voice when a client record has none configured
pub const DEFAULT_VOICE: &str = "Jessica";

/// One row of the clients table, as served by PostgREST.
///
/// Everything except the three sync-status fields is read-only to this tool;
/// the administrative surface that edits prompts and voices lives elsewhere.
/// Unknown columns in a fetched row are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientAgentConfig {
    /// Primary key
    pub id: String,
    /// Human-readable client name
    pub name: Option<String>,
    /// Conversational system prompt for the agent
    pub system_prompt: Option<String>,
    /// Configured voice; falls back to [`DEFAULT_VOICE`] when absent or empty
    pub agent_voice: Option<String>,
    /// Remote agent identifier on the platform
    pub ultravox_agent_id: Option<String>,
    /// Knowledge-corpus identifier scoping the corpus-query tool
    pub corpus_id: Option<String>,
    /// Result-count limit for corpus queries
    pub corpus_max_results: Option<u32>,
    /// Set by the admin surface when the prompt has been edited
    #[serde(default)]
    pub prompt_needs_sync: bool,
    /// When this record was last pushed successfully
    pub prompt_last_synced: Option<DateTime<Utc>>,
    /// Last sync failure message, if any
    pub prompt_sync_error: Option<String>,
}

impl ClientAgentConfig {
    /// Name to show in progress output, falling back to the record id.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => &self.id,
        }
    }

    /// Voice the agent should be using.
    pub fn desired_voice(&self) -> &str {
        match self.agent_voice.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => DEFAULT_VOICE,
        }
    }
}

/// The three sync-status columns written back after a successful push.
///
/// Serialized field names match the table columns. `prompt_sync_error` is
/// serialized even when `None` so a previous error gets cleared to NULL.
#[derive(Debug, Clone, Serialize)]
pub struct SyncStatus {
    pub prompt_needs_sync: bool,
    pub prompt_last_synced: Option<DateTime<Utc>>,
    pub prompt_sync_error: Option<String>,
}

impl SyncStatus {
    /// Status recorded after a successful remote update: synced now, no error.
    pub fn synced_now() -> Self {
        Self {
            prompt_needs_sync: false,
            prompt_last_synced: Some(Utc::now()),
            prompt_sync_error: None,
        }
    }
}
