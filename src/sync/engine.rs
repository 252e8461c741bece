//! Sync decision engine - compares desired against remote agent state.
//!
//! Desired state is computed locally from the client record and treated as
//! the source of truth. The engine diffs it against the platform's current
//! state along three independent axes (prompt, voice, tools) and either
//! reports, updates, or leaves the agent alone. Every failure is caught at
//! the record boundary; one bad record never aborts the batch.

use std::sync::Arc;

use colored::*;
use log::{info, warn};

use crate::domain::{ClientAgentConfig, SyncOutcome, SyncStatus};
use crate::error::Result;
use crate::platform::{AgentFetch, AgentPatch, AgentPlatform, RemoteAgentState, ToolConfiguration};
use crate::storage::ClientStore;
use crate::tools::{ToolCatalog, build_tool_configs};

/// Locally computed per-agent configuration.
#[derive(Debug, Clone)]
pub struct DesiredState {
    pub system_prompt: String,
    pub voice: String,
    pub selected_tools: Vec<ToolConfiguration>,
}

impl DesiredState {
    /// Compute the desired state for one client record.
    pub fn from_client(client: &ClientAgentConfig, catalog: &ToolCatalog) -> Self {
        Self {
            system_prompt: client.system_prompt.clone().unwrap_or_default(),
            voice: client.desired_voice().to_string(),
            selected_tools: build_tool_configs(client, catalog),
        }
    }
}

/// Which of the three axes differ between desired and remote state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateDiff {
    pub prompt: bool,
    pub voice: bool,
    pub tools: bool,
}

impl StateDiff {
    /// Compare desired against remote along all three axes.
    pub fn compute(desired: &DesiredState, remote: &RemoteAgentState) -> Self {
        Self {
            prompt: desired.system_prompt != remote.system_prompt,
            voice: desired.voice != remote.voice,
            tools: !tools_equal(&desired.selected_tools, &remote.selected_tools),
        }
    }

    pub fn any(&self) -> bool {
        self.prompt || self.voice || self.tools
    }
}

/// Canonical form of a tool list: each entry serialized (BTreeMap overrides
/// keep key order stable), then sorted, so neither entry order nor map key
/// order registers as a difference.
fn canonical_tools(tools: &[ToolConfiguration]) -> Vec<String> {
    let mut entries: Vec<String> = tools
        .iter()
        .map(|t| serde_json::to_string(t).unwrap_or_default())
        .collect();
    entries.sort();
    entries
}

/// Deep equality of two tool lists under canonicalization.
pub fn tools_equal(a: &[ToolConfiguration], b: &[ToolConfiguration]) -> bool {
    canonical_tools(a) == canonical_tools(b)
}

/// Per-record sync: fetch, diff, conditionally push and write back.
pub struct SyncEngine<P, S>
where
    P: AgentPlatform,
    S: ClientStore,
{
    platform: Arc<P>,
    store: Arc<S>,
    catalog: ToolCatalog,
    dry_run: bool,
}

impl<P, S> SyncEngine<P, S>
where
    P: AgentPlatform,
    S: ClientStore,
{
    pub fn new(platform: Arc<P>, store: Arc<S>, catalog: ToolCatalog, dry_run: bool) -> Self {
        Self {
            platform,
            store,
            catalog,
            dry_run,
        }
    }

    /// Sync one client record against its remote agent.
    ///
    /// Never returns an error: failures become `SyncOutcome::Error` so the
    /// batch can keep going.
    pub async fn sync_client(&self, client: &ClientAgentConfig, agent_id: &str) -> SyncOutcome {
        match self.try_sync(client, agent_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("{}: sync failed: {}", client.display_name(), e);
                println!("  {} {}", "❌ Error:".red(), e);
                SyncOutcome::Error(e.to_string())
            }
        }
    }

    async fn try_sync(&self, client: &ClientAgentConfig, agent_id: &str) -> Result<SyncOutcome> {
        let desired = DesiredState::from_client(client, &self.catalog);

        let remote = match self.platform.fetch_agent(agent_id).await? {
            AgentFetch::Found(state) => state,
            AgentFetch::NotFound => {
                warn!(
                    "{}: agent {} not found on platform",
                    client.display_name(),
                    agent_id
                );
                println!("  {} Agent {} not found in Ultravox", "❌".red(), agent_id);
                return Ok(SyncOutcome::Error("agent_not_found".to_string()));
            }
        };

        let diff = StateDiff::compute(&desired, &remote);
        if !diff.any() {
            println!("  {} Already in sync", "✓".green());
            return Ok(SyncOutcome::AlreadySynced);
        }

        self.report_diff(&diff, &desired, &remote);

        if self.dry_run {
            println!("  {} Would update agent template", "[DRY RUN]".cyan());
            return Ok(SyncOutcome::WouldUpdate);
        }

        // Prompt and voice are always pushed; the tool list only when it
        // actually changed, so unchanged tool state is not rewritten.
        let patch = AgentPatch {
            system_prompt: desired.system_prompt.clone(),
            voice: Some(desired.voice.clone()),
            selected_tools: diff.tools.then(|| desired.selected_tools.clone()),
        };
        self.platform.update_agent(agent_id, &patch).await?;
        info!("{}: agent {} updated", client.display_name(), agent_id);

        // The remote update already succeeded; a failed write-back is worth
        // a warning, not a record failure.
        match self
            .store
            .mark_synced(&client.id, &SyncStatus::synced_now())
            .await
        {
            Ok(()) => {
                println!(
                    "  {} Successfully synced and marked as synced in database",
                    "✅".green()
                );
            }
            Err(db_err) => {
                warn!(
                    "{}: synced to platform but write-back failed: {}",
                    client.display_name(),
                    db_err
                );
                println!(
                    "  {} Synced to Ultravox but failed to update database: {}",
                    "⚠️".yellow(),
                    db_err
                );
            }
        }

        Ok(SyncOutcome::Updated)
    }

    fn report_diff(&self, diff: &StateDiff, desired: &DesiredState, remote: &RemoteAgentState) {
        if diff.prompt {
            println!(
                "  {} Prompt changed ({} → {} chars)",
                "📝".cyan(),
                remote.system_prompt.chars().count(),
                desired.system_prompt.chars().count()
            );
        }
        if diff.voice {
            println!(
                "  {} Voice changed ({} → {})",
                "🔊".cyan(),
                remote.voice,
                desired.voice
            );
        }
        if diff.tools {
            println!(
                "  {} Tools changed ({} → {} tools)",
                "🔧".cyan(),
                remote.selected_tools.len(),
                desired.selected_tools.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tool(id: &str) -> ToolConfiguration {
        ToolConfiguration::new(id)
    }

    #[test]
    fn test_tools_equal_ignores_entry_order() {
        let a = vec![tool("t-1"), tool("t-2")];
        let b = vec![tool("t-2"), tool("t-1")];
        assert!(tools_equal(&a, &b));
    }

    #[test]
    fn test_tools_equal_compares_overrides() {
        let a = vec![tool("t-1").with_override("corpusId", json!("c-1"))];
        let b = vec![tool("t-1").with_override("corpusId", json!("c-2"))];
        assert!(!tools_equal(&a, &b));

        let c = vec![
            tool("t-1")
                .with_override("corpusId", json!("c-1"))
                .with_override("maxResults", json!(5)),
        ];
        let d = vec![
            tool("t-1")
                .with_override("maxResults", json!(5))
                .with_override("corpusId", json!("c-1")),
        ];
        assert!(tools_equal(&c, &d));
    }

    #[test]
    fn test_tools_equal_detects_missing_entry() {
        let a = vec![tool("t-1"), tool("t-2")];
        let b = vec![tool("t-1")];
        assert!(!tools_equal(&a, &b));
    }

    #[test]
    fn test_state_diff_no_changes() {
        let desired = DesiredState {
            system_prompt: "p".to_string(),
            voice: "Jessica".to_string(),
            selected_tools: vec![tool("t-1")],
        };
        let remote = RemoteAgentState {
            system_prompt: "p".to_string(),
            voice: "Jessica".to_string(),
            selected_tools: vec![tool("t-1")],
        };
        let diff = StateDiff::compute(&desired, &remote);
        assert!(!diff.any());
    }

    #[test]
    fn test_state_diff_each_axis_independent() {
        let desired = DesiredState {
            system_prompt: "new".to_string(),
            voice: "Jessica".to_string(),
            selected_tools: vec![tool("t-1")],
        };
        let remote = RemoteAgentState {
            system_prompt: "old".to_string(),
            voice: "Jessica".to_string(),
            selected_tools: vec![tool("t-1")],
        };
        let diff = StateDiff::compute(&desired, &remote);
        assert!(diff.prompt);
        assert!(!diff.voice);
        assert!(!diff.tools);
        assert!(diff.any());
    }
}
