//! Ultravox API client implementation
//!
//! This module implements the AgentPlatform trait for the Ultravox HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, VoxsyncError};
use crate::platform::client::AgentPlatform;
use crate::platform::types::{AgentFetch, AgentPatch, RemoteAgentState, ToolConfiguration};

/// API key header name
const API_KEY_HEADER: &str = "X-API-Key";

/// Request timeout; a hung call would otherwise stall the whole batch
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Agent object as returned by GET /api/agents/{id}; only the call template
/// matters here, everything else is dropped at this boundary.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AgentEnvelope {
    #[serde(default)]
    call_template: CallTemplate,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CallTemplate {
    #[serde(default)]
    system_prompt: String,
    #[serde(default)]
    voice: Option<String>,
    #[serde(default)]
    selected_tools: Vec<ToolConfiguration>,
}

impl From<AgentEnvelope> for RemoteAgentState {
    fn from(envelope: AgentEnvelope) -> Self {
        Self {
            system_prompt: envelope.call_template.system_prompt,
            voice: envelope.call_template.voice.unwrap_or_default(),
            selected_tools: envelope.call_template.selected_tools,
        }
    }
}

/// Ultravox API client
pub struct UltravoxClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl UltravoxClient {
    /// Create a new Ultravox client against the given base URL.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VoxsyncError::Platform(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    fn agent_url(&self, agent_id: &str) -> String {
        format!(
            "{}/api/agents/{}",
            self.base_url.trim_end_matches('/'),
            agent_id
        )
    }
}

#[async_trait]
impl AgentPlatform for UltravoxClient {
    async fn fetch_agent(&self, agent_id: &str) -> Result<AgentFetch> {
        let response = self
            .client
            .get(self.agent_url(agent_id))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(AgentFetch::NotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoxsyncError::Platform(format!(
                "Failed to fetch agent {}: {} {}",
                agent_id, status, body
            )));
        }

        let envelope: AgentEnvelope = response.json().await?;
        Ok(AgentFetch::Found(envelope.into()))
    }

    async fn update_agent(&self, agent_id: &str, patch: &AgentPatch) -> Result<()> {
        let response = self
            .client
            .patch(self.agent_url(agent_id))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&json!({ "callTemplate": patch }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoxsyncError::Platform(format!(
                "Failed to update agent {}: {} {}",
                agent_id, status, body
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_url_building() {
        let client = UltravoxClient::new("key", "https://api.ultravox.ai").unwrap();
        assert_eq!(
            client.agent_url("abc-123"),
            "https://api.ultravox.ai/api/agents/abc-123"
        );

        let client = UltravoxClient::new("key", "https://api.ultravox.ai/").unwrap();
        assert_eq!(
            client.agent_url("abc-123"),
            "https://api.ultravox.ai/api/agents/abc-123"
        );
    }

    #[test]
    fn test_envelope_parsing() {
        let raw = serde_json::json!({
            "agentId": "abc-123",
            "name": "triage",
            "callTemplate": {
                "systemPrompt": "You answer phones",
                "voice": "Jessica",
                "selectedTools": [
                    {"toolId": "t-1"},
                    {"toolId": "t-2", "parameterOverrides": {"corpusId": "c-9"}}
                ]
            }
        });
        let envelope: AgentEnvelope = serde_json::from_value(raw).unwrap();
        let state: RemoteAgentState = envelope.into();
        assert_eq!(state.system_prompt, "You answer phones");
        assert_eq!(state.voice, "Jessica");
        assert_eq!(state.selected_tools.len(), 2);
    }

    #[test]
    fn test_envelope_missing_call_template() {
        let raw = serde_json::json!({"agentId": "abc-123"});
        let envelope: AgentEnvelope = serde_json::from_value(raw).unwrap();
        let state: RemoteAgentState = envelope.into();
        assert_eq!(state.system_prompt, "");
        assert_eq!(state.voice, "");
        assert!(state.selected_tools.is_empty());
    }

    #[test]
    fn test_patch_wire_shape_is_nested() {
        let patch = AgentPatch {
            system_prompt: "p".to_string(),
            voice: Some("Jessica".to_string()),
            selected_tools: None,
        };
        let body = json!({ "callTemplate": patch });
        assert_eq!(
            body,
            serde_json::json!({"callTemplate": {"systemPrompt": "p", "voice": "Jessica"}})
        );
    }
}
