//! Header records for notebook documents.
//!
//! A header node represents one markdown header together with the code cells that follow it,
//! up to the next header. Nodes are stored in document order in a single arena and refer to
//! each other by index, so two references name the same header exactly when their indices are
//! equal.

use std::collections::BTreeSet;

/// Arena indices from a root header down to a specific header.
pub type ModulePath = Vec<usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One markdown header and the code it owns.
pub struct HeaderNode {
    /// Header line as rendered for messages, for example `## Setup`.
    pub title: String,
    /// Number of leading `#` characters (1 for the document title).
    pub depth: usize,
    /// Sources of the code cells between this header and the next one.
    pub code: Vec<String>,
    /// Index of the enclosing header once the tree is built.
    pub parent_index: Option<usize>,
    /// Indices of directly nested headers, in document order.
    pub children_indices: Vec<usize>,
    /// Imported names referenced by this header's usage code.
    pub uses_imports: BTreeSet<String>,
    /// Names imported by this header's code, in the order they were found.
    pub has_imports: Vec<String>,
}

impl HeaderNode {
    #[must_use]
    /// Create a header with no code and no relations.
    pub fn new(marker: &str, text: &str) -> Self {
        Self {
            title: format!("{marker} {text}"),
            depth: marker.len(),
            code: Vec::new(),
            parent_index: None,
            children_indices: Vec::new(),
            uses_imports: BTreeSet::new(),
            has_imports: Vec::new(),
        }
    }

    #[must_use]
    /// Whether this header's code refers to `module`.
    pub fn uses(&self, module: &str) -> bool {
        self.uses_imports.contains(module)
    }

    #[must_use]
    /// Whether this header's code imports `module`.
    pub fn imports(&self, module: &str) -> bool {
        self.has_imports.iter().any(|name| name == module)
    }
}
