//! Storage trait definitions and filter types.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{ClientAgentConfig, SyncStatus};
use crate::error::Result;

/// Record selection for a sync run: everything, or one equality predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClientFilter {
    /// All client records
    #[default]
    All,
    /// Records whose ultravox_agent_id equals the value
    AgentId(String),
    /// Records whose name equals the value
    Name(String),
    /// The record with this primary key
    ClientId(String),
}

impl ClientFilter {
    /// Check if a record matches this filter.
    pub fn matches(&self, client: &ClientAgentConfig) -> bool {
        match self {
            ClientFilter::All => true,
            ClientFilter::AgentId(v) => client.ultravox_agent_id.as_deref() == Some(v.as_str()),
            ClientFilter::Name(v) => client.name.as_deref() == Some(v.as_str()),
            ClientFilter::ClientId(v) => client.id == *v,
        }
    }

    /// Human-readable description for progress output.
    pub fn describe(&self) -> String {
        match self {
            ClientFilter::All => "all clients".to_string(),
            ClientFilter::AgentId(v) => format!("agent_id = {}", v),
            ClientFilter::Name(v) => format!("client name = {}", v),
            ClientFilter::ClientId(v) => format!("client id = {}", v),
        }
    }
}

/// Client-record storage, as seen by the batch runner.
///
/// Reads a filtered collection and writes exactly the three sync-status
/// fields back by record id; nothing else is ever written.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Fetch client records matching the filter.
    async fn list_clients(&self, filter: &ClientFilter) -> Result<Vec<ClientAgentConfig>>;

    /// Write the sync-status fields on one record.
    async fn mark_synced(&self, client_id: &str, status: &SyncStatus) -> Result<()>;
}

/// In-memory store for tests: serves seeded records and records every
/// write-back it receives.
#[derive(Debug, Default)]
pub struct MockClientStore {
    clients: Mutex<Vec<ClientAgentConfig>>,
    marks: Mutex<Vec<(String, SyncStatus)>>,
    fail_marks: Mutex<bool>,
}

impl MockClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a client record.
    pub fn insert_client(&self, client: ClientAgentConfig) {
        self.clients.lock().unwrap().push(client);
    }

    /// Make every mark_synced call fail.
    pub fn fail_marks(&self) {
        *self.fail_marks.lock().unwrap() = true;
    }

    /// Write-backs received so far, in call order.
    pub fn marks(&self) -> Vec<(String, SyncStatus)> {
        self.marks.lock().unwrap().clone()
    }

    pub fn mark_count(&self) -> usize {
        self.marks.lock().unwrap().len()
    }
}

#[async_trait]
impl ClientStore for MockClientStore {
    async fn list_clients(&self, filter: &ClientFilter) -> Result<Vec<ClientAgentConfig>> {
        Ok(self
            .clients
            .lock()
            .unwrap()
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }

    async fn mark_synced(&self, client_id: &str, status: &SyncStatus) -> Result<()> {
        if *self.fail_marks.lock().unwrap() {
            return Err(crate::error::VoxsyncError::Storage(
                "write-back rejected".to_string(),
            ));
        }
        self.marks
            .lock()
            .unwrap()
            .push((client_id.to_string(), status.clone()));
        Ok(())
    }
}
