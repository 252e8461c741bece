//! Wire-facing types for the agent platform.
//!
//! These are the strongly typed shapes this tool exchanges with the
//! platform API; loose JSON stays at the HTTP boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One enabled tool inside an agent's call template.
///
/// `parameter_overrides` uses a BTreeMap so serialization is deterministic,
/// which keeps the canonical tool-list comparison stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfiguration {
    /// Platform-assigned durable tool identifier
    pub tool_id: String,
    /// Per-agent parameter values baked into the tool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_overrides: Option<BTreeMap<String, Value>>,
}

impl ToolConfiguration {
    /// A tool selection with no parameter overrides.
    pub fn new(tool_id: impl Into<String>) -> Self {
        Self {
            tool_id: tool_id.into(),
            parameter_overrides: None,
        }
    }

    /// Add one parameter override.
    pub fn with_override(mut self, name: impl Into<String>, value: Value) -> Self {
        self.parameter_overrides
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value);
        self
    }
}

/// Agent configuration as last fetched from the platform.
///
/// Fetched fresh per record, never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteAgentState {
    pub system_prompt: String,
    pub voice: String,
    pub selected_tools: Vec<ToolConfiguration>,
}

/// Result of fetching an agent by id.
#[derive(Debug, Clone)]
pub enum AgentFetch {
    /// Agent exists; its current call-template state
    Found(RemoteAgentState),
    /// The platform has no agent with this id
    NotFound,
}

/// Fields pushed on update, nested under the platform's call-template
/// structure on the wire.
///
/// `selected_tools` is omitted entirely when the tool list is unchanged so
/// the platform does not rewrite tool state needlessly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPatch {
    pub system_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_tools: Option<Vec<ToolConfiguration>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_tool_serializes_without_overrides() {
        let tool = ToolConfiguration::new("tool-123");
        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(value, json!({"toolId": "tool-123"}));
    }

    #[test]
    fn test_tool_with_overrides() {
        let tool = ToolConfiguration::new("tool-123")
            .with_override("corpusId", json!("corpus-9"))
            .with_override("maxResults", json!(5));
        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(
            value,
            json!({
                "toolId": "tool-123",
                "parameterOverrides": {"corpusId": "corpus-9", "maxResults": 5}
            })
        );
    }

    #[test]
    fn test_tool_deserialize_ignores_extra_fields() {
        let value = json!({
            "toolId": "tool-123",
            "toolName": "hangUp",
            "parameterOverrides": {"a": 1}
        });
        let tool: ToolConfiguration = serde_json::from_value(value).unwrap();
        assert_eq!(tool.tool_id, "tool-123");
        assert_eq!(tool.parameter_overrides.unwrap()["a"], json!(1));
    }

    #[test]
    fn test_patch_omits_unchanged_tools() {
        let patch = AgentPatch {
            system_prompt: "You are helpful".to_string(),
            voice: Some("Jessica".to_string()),
            selected_tools: None,
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            value,
            json!({"systemPrompt": "You are helpful", "voice": "Jessica"})
        );
    }
}
