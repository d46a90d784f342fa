//! Markdown patterns for headers, titles and section descriptions.
//!
//! The checks use different header patterns: segmentation is line-anchored, while
//! the description and nesting checks scan the joined markdown text and will also pick up a
//! `# ` that appears mid-line.

use regex::Regex;
use std::sync::LazyLock;

/// Characters whose presence marks a description as a full sentence.
pub const SENTENCE_PUNCTUATION: [char; 6] = ['.', ':', ',', ';', '!', '?'];

static HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(#+) +([^\n]+)").expect("header pattern is valid"));

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\n* *# \S").expect("title pattern is valid"));

static DESCRIBED_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(#+ [\S ]+)\s*([^#\n]*\n?)").expect("description pattern is valid")
});

static NESTED_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s?(#+) ([\S ]+)").expect("nesting pattern is valid"));

#[must_use]
/// ATX header on its own line; group 1 is the `#` marker and group 2 the title text.
pub fn header_line() -> &'static Regex {
    &HEADER_LINE
}

#[must_use]
/// Start of a cell that opens with a depth-1 header.
pub fn title() -> &'static Regex {
    &TITLE
}

#[must_use]
/// Header followed by its description; group 1 is the header and group 2 the description.
pub fn described_header() -> &'static Regex {
    &DESCRIBED_HEADER
}

#[must_use]
/// Header as seen by the nesting check; group 1 is the marker and group 2 the title.
pub fn nested_header() -> &'static Regex {
    &NESTED_HEADER
}

#[must_use]
/// Whether `text` contains anything that ends or joins a sentence.
pub fn is_sentence(text: &str) -> bool {
    text.contains(SENTENCE_PUNCTUATION)
}
