//! Desired tool-configuration builder.
//!
//! Merges always-enabled tools with tools detected in the client's prompt
//! and resolves per-tool parameters into the ordered list pushed to the
//! platform. Tools whose required parameters are missing are dropped with a
//! warning rather than emitted half-configured.

use std::collections::HashSet;

use colored::*;
use log::{info, warn};
use serde_json::json;

use crate::domain::ClientAgentConfig;
use crate::platform::ToolConfiguration;
use crate::tools::catalog::{CORPUS_QUERY_TOOL, ToolCatalog};
use crate::tools::detect::detect_tools;

/// Result-count limit for corpus queries when the record carries none
pub const DEFAULT_CORPUS_MAX_RESULTS: u32 = 5;

/// Build the ordered desired tool list for one client.
///
/// Output order is catalog iteration order, never set order, so repeated
/// runs over the same record produce an identical list.
pub fn build_tool_configs(
    client: &ClientAgentConfig,
    catalog: &ToolCatalog,
) -> Vec<ToolConfiguration> {
    let prompt = client.system_prompt.as_deref().unwrap_or("");

    let mut enabled: HashSet<&str> = catalog
        .always_enabled()
        .map(|entry| entry.name.as_str())
        .collect();

    for name in detect_tools(prompt, catalog) {
        if enabled.insert(name) {
            info!(
                "{}: auto-detected tool '{}' in prompt",
                client.display_name(),
                name
            );
        }
    }

    let mut configs = Vec::new();
    for entry in catalog.entries() {
        if !enabled.remove(entry.name.as_str()) {
            continue;
        }

        if entry.name == CORPUS_QUERY_TOOL {
            match client.corpus_id.as_deref().filter(|id| !id.is_empty()) {
                Some(corpus_id) => {
                    let max_results = client
                        .corpus_max_results
                        .unwrap_or(DEFAULT_CORPUS_MAX_RESULTS);
                    configs.push(
                        ToolConfiguration::new(&entry.tool_id)
                            .with_override("corpusId", json!(corpus_id))
                            .with_override("maxResults", json!(max_results)),
                    );
                }
                None => {
                    warn!(
                        "{}: prompt references {} but no corpus_id is configured; skipping tool",
                        client.display_name(),
                        CORPUS_QUERY_TOOL
                    );
                    println!(
                        "  {}  {} referenced in prompt but no corpus_id configured, skipping",
                        "⚠️".yellow(),
                        CORPUS_QUERY_TOOL
                    );
                }
            }
        } else {
            configs.push(ToolConfiguration::new(&entry.tool_id));
        }
    }

    // Anything still in the set was enabled by a name the catalog does not
    // know. Unreachable while the enabled set is derived from the catalog,
    // but the contract is warn-and-drop, never emit.
    for name in enabled {
        warn!(
            "{}: unknown tool '{}' requested; skipping",
            client.display_name(),
            name
        );
    }

    configs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_prompt(prompt: &str) -> ClientAgentConfig {
        ClientAgentConfig {
            id: "c-1".to_string(),
            name: Some("Humber Vet".to_string()),
            system_prompt: Some(prompt.to_string()),
            agent_voice: None,
            ultravox_agent_id: Some("a-1".to_string()),
            corpus_id: None,
            corpus_max_results: None,
            prompt_needs_sync: true,
            prompt_last_synced: None,
            prompt_sync_error: None,
        }
    }

    #[test]
    fn test_always_enabled_only() {
        let catalog = ToolCatalog::builtin();
        let client = client_with_prompt("You answer the phone politely.");
        let configs = build_tool_configs(&client, &catalog);

        let expected: Vec<&str> = catalog
            .always_enabled()
            .map(|e| e.tool_id.as_str())
            .collect();
        let actual: Vec<&str> = configs.iter().map(|c| c.tool_id.as_str()).collect();
        assert_eq!(actual, expected);
        assert!(configs.iter().all(|c| c.parameter_overrides.is_none()));
    }

    #[test]
    fn test_detected_tool_added_without_overrides() {
        let catalog = ToolCatalog::builtin();
        let client = client_with_prompt("Use coldTransfer if needed");
        let configs = build_tool_configs(&client, &catalog);

        assert_eq!(configs.len(), 3);
        assert!(configs.iter().all(|c| c.parameter_overrides.is_none()));
        let cold = catalog.get("coldTransfer").unwrap();
        assert!(configs.iter().any(|c| c.tool_id == cold.tool_id));
    }

    #[test]
    fn test_corpus_tool_omitted_without_corpus_id() {
        let catalog = ToolCatalog::builtin();
        let client = client_with_prompt("Look it up with queryCorpus first.");
        let configs = build_tool_configs(&client, &catalog);

        let corpus = catalog.get(CORPUS_QUERY_TOOL).unwrap();
        assert!(configs.iter().all(|c| c.tool_id != corpus.tool_id));
        assert_eq!(configs.len(), 2);
    }

    #[test]
    fn test_corpus_tool_with_id_carries_overrides() {
        let catalog = ToolCatalog::builtin();
        let mut client = client_with_prompt("Look it up with queryCorpus first.");
        client.corpus_id = Some("corpus-9".to_string());
        let configs = build_tool_configs(&client, &catalog);

        let corpus = catalog.get(CORPUS_QUERY_TOOL).unwrap();
        let tool = configs
            .iter()
            .find(|c| c.tool_id == corpus.tool_id)
            .expect("corpus tool present");
        let overrides = tool.parameter_overrides.as_ref().unwrap();
        assert_eq!(overrides["corpusId"], json!("corpus-9"));
        assert_eq!(overrides["maxResults"], json!(DEFAULT_CORPUS_MAX_RESULTS));
    }

    #[test]
    fn test_corpus_max_results_from_record() {
        let catalog = ToolCatalog::builtin();
        let mut client = client_with_prompt("queryCorpus");
        client.corpus_id = Some("corpus-9".to_string());
        client.corpus_max_results = Some(12);
        let configs = build_tool_configs(&client, &catalog);

        let corpus = catalog.get(CORPUS_QUERY_TOOL).unwrap();
        let tool = configs.iter().find(|c| c.tool_id == corpus.tool_id).unwrap();
        let overrides = tool.parameter_overrides.as_ref().unwrap();
        assert_eq!(overrides["maxResults"], json!(12));
    }

    #[test]
    fn test_empty_corpus_id_treated_as_missing() {
        let catalog = ToolCatalog::builtin();
        let mut client = client_with_prompt("queryCorpus");
        client.corpus_id = Some(String::new());
        let configs = build_tool_configs(&client, &catalog);

        let corpus = catalog.get(CORPUS_QUERY_TOOL).unwrap();
        assert!(configs.iter().all(|c| c.tool_id != corpus.tool_id));
    }

    #[test]
    fn test_output_order_follows_catalog() {
        let catalog = ToolCatalog::builtin();
        let client = client_with_prompt("coldTransfer then hangUp");
        let configs = build_tool_configs(&client, &catalog);

        let order: Vec<usize> = configs
            .iter()
            .map(|c| {
                catalog
                    .entries()
                    .iter()
                    .position(|e| e.tool_id == c.tool_id)
                    .unwrap()
            })
            .collect();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted);
    }

    #[test]
    fn test_missing_prompt_yields_always_enabled() {
        let catalog = ToolCatalog::builtin();
        let mut client = client_with_prompt("");
        client.system_prompt = None;
        let configs = build_tool_configs(&client, &catalog);
        assert_eq!(configs.len(), 2);
    }
}
