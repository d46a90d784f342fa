//! Usage classification for code fragments.
//!
//! A fragment either only declares things (imports, comments, docstrings, constants) or it
//! uses them. Usage is detected by substring search for each registered name, so a local
//! identifier that happens to contain a module name counts as a use of that module.

use crate::grammar::CodeGrammar;
use crate::header::HeaderNode;
use crate::imports::ImportRegistry;

#[must_use]
/// Whether `code` consists solely of imports, comments, docstrings and constant assignments.
pub fn is_declaration_only<G: CodeGrammar + ?Sized>(grammar: &G, code: &str) -> bool {
    grammar.declaration_block().is_match(code.trim())
}

#[must_use]
/// Registered names that `code` refers to, or none if it is declaration-only.
pub fn referenced_modules<'r, G: CodeGrammar + ?Sized>(
    grammar: &G,
    code: &str,
    registry: &'r ImportRegistry,
) -> Vec<&'r str> {
    if is_declaration_only(grammar, code) {
        return Vec::new();
    }
    registry
        .iter()
        .filter(|module| code.contains(*module))
        .collect()
}

/// Fill in `uses_imports` for every header from the code it owns.
///
/// Must run after the whole document has been segmented, because a fragment can use a name
/// that is only imported further down.
pub fn classify_usage<G: CodeGrammar + ?Sized>(
    grammar: &G,
    headers: &mut [HeaderNode],
    registry: &ImportRegistry,
) {
    for header in headers.iter_mut() {
        let used: Vec<String> = header
            .code
            .iter()
            .flat_map(|code| referenced_modules(grammar, code, registry))
            .map(str::to_string)
            .collect();

        if !used.is_empty() {
            log::debug!("header `{}` uses {used:?}", header.title);
        }
        header.uses_imports.extend(used);
    }
}

#[cfg(test)]
#[path = "tests/usage.rs"]
mod tests;
