//! Structural violations raised by the checks, and the errors that stop a notebook loading.
//!
//! Every check reports at most one [`Violation`]. Its `Display` output is the human-readable
//! explanation shown to the notebook author, so the wording here is part of the interface.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// A broken authorship convention, detected by one of the checks.
pub enum Violation {
    /// The container is missing fields, has no cells, or uses an old schema.
    #[error("The Jupyter Notebook is not formatted correctly: {0}")]
    Format(FormatProblem),
    /// The first cell is not a markdown title.
    #[error("{0}")]
    MissingTitle(TitleProblem),
    /// A header is not followed by a sentence describing its section.
    #[error("Header `{header}` {problem}")]
    MissingDescription {
        /// Header line as written, including its `#` marker.
        header: String,
        /// What is wrong with the text after the header.
        problem: DescriptionProblem,
    },
    /// Headers skip a level on the way down, or the document has two titles.
    #[error("{0}")]
    HeaderNesting(NestingProblem),
    /// Two code cells sit next to each other.
    #[error("Two code blocks found next to each other. The first one starts with `{first}` and the second one starts with `{second}`.")]
    AdjacentCode {
        /// Truncated first line of the earlier cell.
        first: String,
        /// Truncated first line of the later cell.
        second: String,
    },
    /// A code cell appears before any header has been written.
    #[error("Discovered a code block before any header. You probably forgot to add a title to the Jupyter Notebook, or you placed the code block in front of it.")]
    PrecedingCode,
    /// The same name is imported in more than one place.
    #[error("Found variable `{module}` imported multiple times: second import found at header `{header}`")]
    DuplicateImport {
        /// Name bound by the import.
        module: String,
        /// Header owning the code cell with the second import.
        header: String,
    },
    /// A name is imported but no code cell refers to it.
    #[error("Module `{module}` is imported but isn't being used anywhere.")]
    UnusedImport {
        /// Name bound by the import.
        module: String,
    },
    /// A name is imported somewhere other than the header shared by all of its uses.
    #[error("Expected module `{module}` to be imported at {expected}.")]
    MisplacedImport {
        /// Name bound by the import.
        module: String,
        /// Where the import belongs.
        expected: ExpectedSite,
    },
}

impl Violation {
    #[must_use]
    /// Stable kebab-case identifier for machine-readable reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Format(_) => "format",
            Self::MissingTitle(_) => "missing-title",
            Self::MissingDescription { .. } => "missing-description",
            Self::HeaderNesting(_) => "header-nesting",
            Self::AdjacentCode { .. } => "adjacent-code",
            Self::PrecedingCode => "preceding-code",
            Self::DuplicateImport { .. } => "duplicate-import",
            Self::UnusedImport { .. } => "unused-import",
            Self::MisplacedImport { .. } => "misplaced-import",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Why the text following a header does not count as a description.
pub enum DescriptionProblem {
    /// Nothing but whitespace follows the header.
    #[error("has no description.")]
    Absent,
    /// The text has no punctuation, so it is not a sentence.
    #[error("is supposed to have at least one sentence as a description. Instead its description is `{preview}`. Make sure your sentence is spelled correctly and uses punctuation.")]
    NoSentence {
        /// Start of the offending description.
        preview: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// The place an import should have been written.
pub enum ExpectedSite {
    /// The deepest header whose section contains every use.
    #[error("header `{0}`")]
    Header(String),
    /// The uses fall under different top-level headers.
    #[error("a single header, but it is used under several top-level headers")]
    Scattered,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// What is wrong with the notebook container.
pub enum FormatProblem {
    /// A required top-level field is absent.
    #[error("the `{0}` field is missing.")]
    MissingField(&'static str),
    /// The `cells` list is empty.
    #[error("it does not contain any cells.")]
    NoCells,
    /// `nbformat` is below the supported minimum or not an integer.
    #[error("nbformat {found} is not supported, version {minimum} or higher is required.")]
    UnsupportedSchema {
        /// Value found in the `nbformat` field.
        found: String,
        /// Lowest accepted major version.
        minimum: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Why the leading title was rejected.
pub enum TitleProblem {
    /// The first cell is absent or is not a markdown cell.
    #[error("Your Jupyter Notebook doesn't start with a markdown block.")]
    NotMarkdown,
    /// The first markdown cell does not open with a single-`#` header.
    #[error("The Jupyter Notebook doesn't start with a title. Make sure you put a h1-header at the top.")]
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// How the header hierarchy is broken.
pub enum NestingProblem {
    /// A header went more than one level deeper than its predecessor.
    #[error("Header `{header}` skips a level: expected `{expected}` at this position.")]
    SkippedLevel {
        /// Header line as written.
        header: String,
        /// The same title one level below the previous header.
        expected: String,
    },
    /// A second depth-1 header was found.
    #[error("Cannot use two document titles (h1-headers) in one Jupyter Notebook: found `{header}`.")]
    SecondTitle {
        /// The offending header line.
        header: String,
    },
}

#[derive(Debug, Error)]
/// Failure to turn a file into a [`crate::notebook::Notebook`].
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read notebook at {path}: {source}")]
    Read {
        /// Location that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The file is not valid notebook JSON.
    #[error("Failed to parse notebook at {path}: {source}")]
    Parse {
        /// Location that was parsed.
        path: PathBuf,
        /// Underlying JSON failure.
        source: serde_json::Error,
    },
}
