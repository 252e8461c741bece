//! CLI command definitions using clap.
//!
//! One flat command: pick at most one record filter, optionally dry-run.

use clap::Parser;

use crate::storage::ClientFilter;

/// Sync voice-agent templates from the clients table to Ultravox
#[derive(Parser, Debug)]
#[command(name = "voxsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sync a specific agent by ultravox_agent_id
    #[arg(long, group = "filter")]
    pub agent_id: Option<String>,

    /// Sync a specific client by name
    #[arg(long, group = "filter")]
    pub client_name: Option<String>,

    /// Sync a specific client by ID
    #[arg(long, group = "filter")]
    pub client_id: Option<String>,

    /// Preview changes without applying
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Record filter selected by the flags, defaulting to all records.
    pub fn filter(&self) -> ClientFilter {
        if let Some(agent_id) = &self.agent_id {
            ClientFilter::AgentId(agent_id.clone())
        } else if let Some(name) = &self.client_name {
            ClientFilter::Name(name.clone())
        } else if let Some(id) = &self.client_id {
            ClientFilter::ClientId(id.clone())
        } else {
            ClientFilter::All
        }
    }
}
