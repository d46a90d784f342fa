//! Import extraction and the document-wide registry of imported names.

use crate::error::Violation;
use crate::grammar::CodeGrammar;

#[must_use]
/// Names bound by every import statement in `code`, in the order they appear.
///
/// Aliased entries yield the alias, since that is the name the rest of the notebook uses.
/// Wildcard imports yield nothing because they bind no name that could be checked.
pub fn imported_modules<G: CodeGrammar + ?Sized>(grammar: &G, code: &str) -> Vec<String> {
    let mut modules = Vec::new();

    for statement in grammar.import_statement().captures_iter(code) {
        let Some(names) = statement.get(1).or_else(|| statement.get(2)) else {
            continue;
        };

        for entry in names.as_str().split(',') {
            let entry = entry.trim();
            if entry.is_empty() || entry == "*" {
                continue;
            }
            if let Some(parts) = grammar.import_entry().captures(entry) {
                if let Some(name) = parts.get(2).or_else(|| parts.get(1)) {
                    modules.push(name.as_str().to_string());
                }
            }
        }
    }

    modules
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered, append-only list of every name imported anywhere in a document.
///
/// Registration order is first-seen document order, which is also the order in which the
/// placement check reports on modules.
pub struct ImportRegistry {
    modules: Vec<String>,
}

impl ImportRegistry {
    #[must_use]
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `module` as imported under `header`.
    ///
    /// # Errors
    ///
    /// Returns [`Violation::DuplicateImport`] if the name was already registered.
    pub fn register(&mut self, module: &str, header: &str) -> Result<(), Violation> {
        if self.contains(module) {
            return Err(Violation::DuplicateImport {
                module: module.to_string(),
                header: header.to_string(),
            });
        }
        self.modules.push(module.to_string());
        Ok(())
    }

    #[must_use]
    /// Whether `module` has been registered.
    pub fn contains(&self, module: &str) -> bool {
        self.modules.iter().any(|known| known == module)
    }

    /// Registered names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(String::as_str)
    }

    #[must_use]
    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    /// Whether nothing has been imported.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/imports.rs"]
mod tests;
