//! Static tool detection over prompt text.

use std::collections::HashSet;

use crate::tools::catalog::ToolCatalog;

/// Catalog names whose text occurs literally in the prompt.
///
/// Detection is plain substring containment, with no tokenization or
/// word-boundary checks. A name embedded in prose ("coldTransferred the
/// caller") still counts as a reference; that looseness is intentional and
/// matches how prompt authors cite tools by name.
pub fn detect_tools<'a>(prompt: &str, catalog: &'a ToolCatalog) -> HashSet<&'a str> {
    catalog
        .entries()
        .iter()
        .filter(|entry| prompt.contains(entry.name.as_str()))
        .map(|entry| entry.name.as_str())
        .collect()
}
