//! Python grammar for notebook code cells.
//!
//! Only the statement shapes that notebooks use for setup are modelled: `import a, b as c`,
//! `from m import (x, y as z)` and `from m import *`, plus the comment, docstring and
//! `UPPER_CASE = literal` forms that may sit alongside them without counting as usage.

use crate::grammar::CodeGrammar;
use regex::Regex;
use std::sync::LazyLock;

const IMPORT_STATEMENT: &str = r"(?:from [\w.\-]+)?\s*import (?:((?:(?: *[\w.\-]+(?: as [\w.\-]+)?),? *)+)|(?:\(\s*)((?:(?: *[\w.\-]+(?: as [\w.\-]+)?),?\s*)+)(?:\s*\))|(?:\*))";

const COMMENT: &str = r"(?:#[^\n]+)";

const DOCSTRING: &str = r#"(?:"""(?:.+)""")"#;

const CONSTANT: &str =
    r#"(?:[A-Z][A-Z_\-]*\s*=\s*(?:\d+|(?:"[^"]+")|(?:'[^']+')|(?:"""[^(?:")]+""")))"#;

static IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IMPORT_STATEMENT).expect("import statement pattern is valid"));

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A([\w.\-]+)(?:\s+as\s+([\w.\-]+))?\z").expect("import entry pattern is valid")
});

static DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let statement = format!("(?:{IMPORT_STATEMENT})|{COMMENT}|{DOCSTRING}|{CONSTANT}");
    Regex::new(&format!(r"\A(?:(?:{statement})\s*)+\z")).expect("declaration pattern is valid")
});

/// Patterns for Python code cells.
pub struct PythonGrammar;

impl CodeGrammar for PythonGrammar {
    fn name(&self) -> &'static str {
        "python"
    }

    fn import_statement(&self) -> &Regex {
        &IMPORT_RE
    }

    fn import_entry(&self) -> &Regex {
        &ENTRY_RE
    }

    fn declaration_block(&self) -> &Regex {
        &DECLARATION_RE
    }
}

#[cfg(test)]
#[path = "../tests/python_grammar.rs"]
mod tests;
