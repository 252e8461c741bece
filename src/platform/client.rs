//! Agent platform trait definition and mock implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, VoxsyncError};
use crate::platform::types::{AgentFetch, AgentPatch, RemoteAgentState, ToolConfiguration};

/// Remote agent hosting platform, as seen by the sync engine.
///
/// One read and one conditional write per record; no retries, no caching.
#[async_trait]
pub trait AgentPlatform: Send + Sync {
    /// Fetch an agent's current call-template state by id.
    async fn fetch_agent(&self, agent_id: &str) -> Result<AgentFetch>;

    /// Patch an agent with the desired prompt, voice and (optionally) tools.
    async fn update_agent(&self, agent_id: &str, patch: &AgentPatch) -> Result<()>;
}

/// In-memory platform for tests: serves seeded agents and applies patches
/// to its own state so a second sync run observes the first run's writes.
#[derive(Debug, Default)]
pub struct MockPlatform {
    agents: Mutex<HashMap<String, RemoteAgentState>>,
    updates: Mutex<Vec<(String, AgentPatch)>>,
    fail_fetch: Mutex<Option<String>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an agent the mock will serve.
    pub fn insert_agent(&self, agent_id: impl Into<String>, state: RemoteAgentState) {
        self.agents.lock().unwrap().insert(agent_id.into(), state);
    }

    /// Make every fetch fail with the given message.
    pub fn fail_fetch_with(&self, message: impl Into<String>) {
        *self.fail_fetch.lock().unwrap() = Some(message.into());
    }

    /// Patches received so far, in call order.
    pub fn updates(&self) -> Vec<(String, AgentPatch)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    /// Current state of a seeded agent.
    pub fn agent_state(&self, agent_id: &str) -> Option<RemoteAgentState> {
        self.agents.lock().unwrap().get(agent_id).cloned()
    }
}

#[async_trait]
impl AgentPlatform for MockPlatform {
    async fn fetch_agent(&self, agent_id: &str) -> Result<AgentFetch> {
        if let Some(message) = self.fail_fetch.lock().unwrap().clone() {
            return Err(VoxsyncError::Platform(message));
        }
        match self.agents.lock().unwrap().get(agent_id) {
            Some(state) => Ok(AgentFetch::Found(state.clone())),
            None => Ok(AgentFetch::NotFound),
        }
    }

    async fn update_agent(&self, agent_id: &str, patch: &AgentPatch) -> Result<()> {
        let mut agents = self.agents.lock().unwrap();
        let state = agents
            .get_mut(agent_id)
            .ok_or_else(|| VoxsyncError::Platform(format!("no such agent: {agent_id}")))?;

        state.system_prompt = patch.system_prompt.clone();
        if let Some(voice) = &patch.voice {
            state.voice = voice.clone();
        }
        if let Some(tools) = &patch.selected_tools {
            state.selected_tools = tools.clone();
        }
        drop(agents);

        self.updates
            .lock()
            .unwrap()
            .push((agent_id.to_string(), patch.clone()));
        Ok(())
    }
}

/// Convenience for seeding mock agent state in tests.
pub fn remote_state(
    prompt: &str,
    voice: &str,
    tools: Vec<ToolConfiguration>,
) -> RemoteAgentState {
    RemoteAgentState {
        system_prompt: prompt.to_string(),
        voice: voice.to_string(),
        selected_tools: tools,
    }
}
