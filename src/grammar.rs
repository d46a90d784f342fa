//! Pattern grammars that the analysis passes are written against.
//!
//! This module defines the `CodeGrammar` trait, which abstracts over the code language inside
//! notebook cells by providing the patterns needed to find imports and recognise
//! declaration-only cells. Markdown patterns are fixed and live in [`markdown`].
//!
//! The patterns are versioned together: any change that alters the set of matched inputs bumps
//! [`GRAMMAR_VERSION`], since it changes which notebooks pass.

use regex::Regex;

pub mod markdown;
pub mod python;

/// Revision of the combined markdown and code patterns.
pub const GRAMMAR_VERSION: u32 = 1;

/// Patterns describing how a code language spells imports and declarations.
pub trait CodeGrammar {
    /// Human-readable language name.
    fn name(&self) -> &'static str;

    /// Import statement; capture group 1 or 2 holds the comma-separated name list, and neither
    /// participates for a wildcard import.
    fn import_statement(&self) -> &Regex;

    /// A single entry of a name list; group 1 is the name and group 2 the optional alias.
    fn import_entry(&self) -> &Regex;

    /// Whole-fragment pattern accepting code made only of imports, comments, docstrings and
    /// constant assignments.
    fn declaration_block(&self) -> &Regex;
}
