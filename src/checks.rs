//! The battery of structural checks run against a notebook.
//!
//! Each check is an independent pure function over a [`Notebook`] that either passes or returns
//! the first [`Violation`] it detects. Checks never depend on one another's outcome, so one
//! failing never stops the rest from running.

use crate::config::Config;
use crate::error::{
    DescriptionProblem, ExpectedSite, FormatProblem, NestingProblem, TitleProblem, Violation,
};
use crate::grammar::python::PythonGrammar;
use crate::grammar::{markdown, CodeGrammar, GRAMMAR_VERSION};
use crate::notebook::{Cell, Notebook};
use crate::placement::{resolve, Placement};
use crate::report::CheckOutcome;
use crate::segment::{segment, Outline};
use crate::tree::DocumentTree;
use crate::usage::classify_usage;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Identifies one check of the battery.
pub enum Check {
    /// Container fields, cell count and schema version.
    Format,
    /// The first cell is a depth-1 markdown header.
    LeadingTitle,
    /// Every header is followed by a descriptive sentence.
    Description,
    /// Headers never skip a level and there is only one title.
    HeaderNesting,
    /// No two code cells are adjacent.
    AdjacentCode,
    /// Every import sits at the header shared by all of its uses.
    ImportPlacement,
}

impl Check {
    /// Every check, in reporting order.
    pub const ALL: [Self; 6] = [
        Self::Format,
        Self::LeadingTitle,
        Self::Description,
        Self::HeaderNesting,
        Self::AdjacentCode,
        Self::ImportPlacement,
    ];

    #[must_use]
    /// Kebab-case name, as accepted by `--skip` and the `skip` config key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::LeadingTitle => "leading-title",
            Self::Description => "description",
            Self::HeaderNesting => "header-nesting",
            Self::AdjacentCode => "adjacent-code",
            Self::ImportPlacement => "import-placement",
        }
    }

    /// Run this check against `notebook`.
    ///
    /// # Errors
    ///
    /// Returns the violation the check detected.
    pub fn run(self, notebook: &Notebook, config: &Config) -> Result<(), Violation> {
        match self {
            Self::Format => check_format(notebook, config.min_nbformat),
            Self::LeadingTitle => check_leading_title(notebook),
            Self::Description => check_descriptions(notebook, config.preview_width),
            Self::HeaderNesting => check_header_nesting(notebook),
            Self::AdjacentCode => check_adjacent_code(notebook, config.snippet_width),
            Self::ImportPlacement => check_import_placement(notebook),
        }
    }
}

#[must_use]
/// Run every check not skipped by `config`, in [`Check::ALL`] order.
pub fn run_all(notebook: &Notebook, config: &Config) -> Vec<CheckOutcome> {
    Check::ALL
        .into_iter()
        .filter(|check| !config.skips(*check))
        .map(|check| CheckOutcome::new(check, check.run(notebook, config)))
        .collect()
}

/// The container exposes its required fields, at least one cell, and a recent schema.
///
/// # Errors
///
/// Returns [`Violation::Format`] describing the first problem found.
pub fn check_format(notebook: &Notebook, min_nbformat: u64) -> Result<(), Violation> {
    let missing = |field| Violation::Format(FormatProblem::MissingField(field));

    if notebook.metadata.is_none() {
        return Err(missing("metadata"));
    }
    let version = notebook.nbformat.as_ref().ok_or_else(|| missing("nbformat"))?;
    if notebook.nbformat_minor.is_none() {
        return Err(missing("nbformat_minor"));
    }
    let cells = notebook.cells.as_ref().ok_or_else(|| missing("cells"))?;

    if cells.is_empty() {
        return Err(Violation::Format(FormatProblem::NoCells));
    }
    match version.as_u64() {
        Some(major) if major >= min_nbformat => Ok(()),
        _ => Err(Violation::Format(FormatProblem::UnsupportedSchema {
            found: version.to_string(),
            minimum: min_nbformat,
        })),
    }
}

/// The first cell is markdown and opens with a single-`#` header.
///
/// # Errors
///
/// Returns [`Violation::MissingTitle`] if the first cell is not markdown or not a title.
pub fn check_leading_title(notebook: &Notebook) -> Result<(), Violation> {
    let Some(first) = notebook.cells().first().filter(|cell| cell.is_markdown()) else {
        return Err(Violation::MissingTitle(TitleProblem::NotMarkdown));
    };
    if markdown::title().is_match(&first.source) {
        Ok(())
    } else {
        Err(Violation::MissingTitle(TitleProblem::Malformed))
    }
}

/// Every header is followed by prose containing punctuation.
///
/// Consecutive markdown cells are read as one text, since a title and its description are
/// often written in separate cells.
///
/// # Errors
///
/// Returns [`Violation::MissingDescription`] for the first undescribed header.
pub fn check_descriptions(notebook: &Notebook, preview_width: usize) -> Result<(), Violation> {
    for run in notebook.cells().split(|cell| !cell.is_markdown()) {
        let text = join_sources(run.iter());

        for found in markdown::described_header().captures_iter(&text) {
            let header = &found[1];
            let description = &found[2];

            let problem = if description.is_empty() {
                DescriptionProblem::Absent
            } else if markdown::is_sentence(description) {
                continue;
            } else {
                DescriptionProblem::NoSentence {
                    preview: shorten(description, preview_width, preview_width),
                }
            };
            return Err(Violation::MissingDescription {
                header: header.to_string(),
                problem,
            });
        }
    }
    Ok(())
}

/// Headers descend one level at a time and only one depth-1 header exists.
///
/// Returning to a shallower level is always allowed.
///
/// # Errors
///
/// Returns [`Violation::HeaderNesting`] at the first skipped level or second title.
pub fn check_header_nesting(notebook: &Notebook) -> Result<(), Violation> {
    let text = join_sources(notebook.cells().iter().filter(|cell| cell.is_markdown()));
    let mut current = "";

    for found in markdown::nested_header().captures_iter(&text) {
        let marker = found.get(1).map_or("", |m| m.as_str());
        let title = found.get(2).map_or("", |m| m.as_str());

        if marker.len() > current.len() {
            if marker.len() != current.len() + 1 {
                return Err(Violation::HeaderNesting(NestingProblem::SkippedLevel {
                    header: format!("{marker} {title}"),
                    expected: format!("{current}# {title}"),
                }));
            }
        } else if marker.len() == 1 {
            return Err(Violation::HeaderNesting(NestingProblem::SecondTitle {
                header: format!("{marker} {title}"),
            }));
        }
        current = marker;
    }
    Ok(())
}

/// No two code cells are adjacent, ignoring empty code cells at the end of the document.
///
/// # Errors
///
/// Returns [`Violation::AdjacentCode`] quoting the first line of both cells.
pub fn check_adjacent_code(notebook: &Notebook, snippet_width: usize) -> Result<(), Violation> {
    let cells = notebook.cells();
    let end = cells
        .iter()
        .rposition(|cell| !(cell.is_code() && cell.source.is_empty()))
        .map_or(0, |last| last + 1);

    for pair in cells[..end].windows(2) {
        if let [first, second] = pair {
            if first.is_code() && second.is_code() {
                let keep = snippet_width.saturating_sub(3);
                return Err(Violation::AdjacentCode {
                    first: shorten(first.first_line(), snippet_width, keep),
                    second: shorten(second.first_line(), snippet_width, keep),
                });
            }
        }
    }
    Ok(())
}

/// Every Python import is declared at the lowest header containing all of its uses.
///
/// # Errors
///
/// Returns the first segmentation or placement violation.
pub fn check_import_placement(notebook: &Notebook) -> Result<(), Violation> {
    check_import_placement_with(notebook, &PythonGrammar)
}

/// [`check_import_placement`] for code written in `grammar`'s language.
///
/// # Errors
///
/// Returns [`Violation::PrecedingCode`] or [`Violation::DuplicateImport`] from segmentation,
/// then [`Violation::UnusedImport`] or [`Violation::MisplacedImport`] for the first module, in
/// import order, that is not where it belongs.
pub fn check_import_placement_with<G: CodeGrammar + ?Sized>(
    notebook: &Notebook,
    grammar: &G,
) -> Result<(), Violation> {
    log::debug!(
        "resolving imports with the {} grammar (v{GRAMMAR_VERSION})",
        grammar.name()
    );
    let Outline {
        mut headers,
        imports,
    } = segment(notebook.cells(), grammar)?;
    classify_usage(grammar, &mut headers, &imports);
    let tree = DocumentTree::build(headers);

    for module in imports.iter() {
        let expected = match resolve(&tree, module) {
            Placement::Unused => {
                return Err(Violation::UnusedImport {
                    module: module.to_string(),
                });
            }
            Placement::Scattered => ExpectedSite::Scattered,
            Placement::Site(site) if tree.node(site).imports(module) => continue,
            Placement::Site(site) => ExpectedSite::Header(tree.node(site).title.clone()),
        };
        return Err(Violation::MisplacedImport {
            module: module.to_string(),
            expected,
        });
    }
    Ok(())
}

fn join_sources<'a>(cells: impl Iterator<Item = &'a Cell>) -> String {
    cells
        .map(|cell| cell.source.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `text` unchanged if it has at most `limit` characters, else its first `keep` plus `...`.
fn shorten(text: &str, limit: usize, keep: usize) -> String {
    if text.chars().count() > limit {
        let mut short: String = text.chars().take(keep).collect();
        short.push_str("...");
        short
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "tests/checks.rs"]
mod tests;
