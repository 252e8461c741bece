//! Tool catalog: canonical tool names and their platform identifiers.
//!
//! The catalog is built once at process start and passed explicitly into
//! the detector and builder. Iteration order is the declaration order of
//! the entries, which keeps builder output stable across runs.

/// Canonical name of the corpus-query tool, the one catalog entry that
/// needs per-client parameters.
pub const CORPUS_QUERY_TOOL: &str = "queryCorpus";

/// One callable capability an agent may have enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCatalogEntry {
    /// Canonical name, matched against prompt text
    pub name: String,
    /// Platform-assigned durable tool identifier
    pub tool_id: String,
    /// Enabled for every agent regardless of prompt content
    pub always_enabled: bool,
}

impl ToolCatalogEntry {
    pub fn new(name: impl Into<String>, tool_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tool_id: tool_id.into(),
            always_enabled: false,
        }
    }

    pub fn always_enabled(mut self) -> Self {
        self.always_enabled = true;
        self
    }
}

/// Ordered catalog of tool definitions.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    entries: Vec<ToolCatalogEntry>,
}

impl ToolCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The tool set every production agent is provisioned from.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.push(
            ToolCatalogEntry::new(
                "transferFromAiTriageWithMetadata",
                "7a2f1c0e-5b8d-4a3f-9c64-2d1e8b0a7f35",
            )
            .always_enabled(),
        );
        catalog.push(
            ToolCatalogEntry::new("hangUp", "c914d3b2-68a0-4e57-8d2b-f0a19c6e4d71").always_enabled(),
        );
        catalog.push(ToolCatalogEntry::new(
            "coldTransfer",
            "3e8b57a9-12cd-4f06-b83a-9d47e1c52086",
        ));
        catalog.push(ToolCatalogEntry::new(
            CORPUS_QUERY_TOOL,
            "5d06f84b-3a91-4c2e-a7d5-81b2c9e0f643",
        ));
        catalog
    }

    /// Add an entry to the catalog
    pub fn push(&mut self, entry: ToolCatalogEntry) {
        self.entries.push(entry);
    }

    /// Get an entry by canonical name
    pub fn get(&self, name: &str) -> Option<&ToolCatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[ToolCatalogEntry] {
        &self.entries
    }

    /// Entries enabled for every agent
    pub fn always_enabled(&self) -> impl Iterator<Item = &ToolCatalogEntry> {
        self.entries.iter().filter(|e| e.always_enabled)
    }

    /// Get number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
