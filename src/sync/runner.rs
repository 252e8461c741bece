//! Batch runner - one sequential pass over the selected client records.

use std::sync::Arc;

use colored::*;
use log::info;

use crate::domain::{BatchTotals, ClientAgentConfig, SkipReason, SyncOutcome};
use crate::error::{Result, VoxsyncError};
use crate::platform::AgentPlatform;
use crate::storage::{ClientFilter, ClientStore};
use crate::sync::engine::SyncEngine;
use crate::tools::ToolCatalog;

/// Runs the sync engine over every record the filter selects and tallies
/// the outcomes. Records are processed strictly one at a time; the only
/// state shared across records is the totals.
pub struct BatchRunner<P, S>
where
    P: AgentPlatform,
    S: ClientStore,
{
    store: Arc<S>,
    engine: SyncEngine<P, S>,
    dry_run: bool,
}

impl<P, S> BatchRunner<P, S>
where
    P: AgentPlatform,
    S: ClientStore,
{
    pub fn new(platform: Arc<P>, store: Arc<S>, catalog: ToolCatalog, dry_run: bool) -> Self {
        let engine = SyncEngine::new(platform, Arc::clone(&store), catalog, dry_run);
        Self {
            store,
            engine,
            dry_run,
        }
    }

    /// Run one batch. Fails up front when no records match the filter;
    /// per-record failures are tallied, never propagated.
    pub async fn run(&self, filter: &ClientFilter) -> Result<BatchTotals> {
        let clients = self.store.list_clients(filter).await?;
        if clients.is_empty() {
            println!("\n{} No clients found matching criteria", "❌".red());
            return Err(VoxsyncError::NoMatchingClients);
        }

        info!("Syncing {} client(s), filter: {}", clients.len(), filter.describe());
        println!("\nFound {} client(s) to sync", clients.len());

        let mut totals = BatchTotals::default();
        for client in &clients {
            let outcome = self.sync_one(client).await;
            totals.record(&outcome);
        }

        self.print_summary(&totals);
        Ok(totals)
    }

    async fn sync_one(&self, client: &ClientAgentConfig) -> SyncOutcome {
        let Some(agent_id) = client
            .ultravox_agent_id
            .as_deref()
            .filter(|id| !id.is_empty())
        else {
            println!(
                "{}  {}: No ultravox_agent_id configured",
                "⚠️".yellow(),
                client.display_name()
            );
            return SyncOutcome::Skipped(SkipReason::NoAgentId);
        };

        let Some(prompt) = client
            .system_prompt
            .as_deref()
            .filter(|p| !p.is_empty())
        else {
            println!(
                "{}  {}: No system_prompt in database",
                "⚠️".yellow(),
                client.display_name()
            );
            return SyncOutcome::Skipped(SkipReason::NoSystemPrompt);
        };

        let prefix = if self.dry_run { "[DRY RUN] " } else { "" };
        println!(
            "\n{}Syncing {}...",
            prefix.cyan(),
            client.display_name().bold()
        );
        println!("  Agent ID: {}", agent_id);
        println!("  Voice: {}", client.desired_voice());
        println!("  Prompt length: {} chars", prompt.chars().count());

        self.engine.sync_client(client, agent_id).await
    }

    fn print_summary(&self, totals: &BatchTotals) {
        println!("\n{}", "=".repeat(60));
        println!("SUMMARY");
        println!("{}", "=".repeat(60));

        if self.dry_run {
            println!("Would update: {}", totals.would_update);
        } else {
            println!("{} Successfully synced: {}", "✅".green(), totals.updated);
        }
        println!("{}  Already in sync: {}", "✓".green(), totals.already_synced);
        println!("{}  Skipped: {}", "⚠️".yellow(), totals.skipped);
        if totals.errors > 0 {
            println!("{} Errors: {}", "❌".red(), totals.errors);
        }
        println!();
    }
}
