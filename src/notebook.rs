//! Notebook container and the flattened cells the analysis works on.
//!
//! A cell's `source` may be stored as one string or as a list of lines. Both shapes are
//! flattened into a single string while deserialising, so nothing downstream needs to know
//! which one a file used.

use crate::error::LoadError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The role of a cell in the document.
pub enum CellKind {
    /// Prose, including headers.
    Markdown,
    /// Executable code.
    Code,
    /// Any other cell type, such as `raw`, kept under its original name.
    Other(String),
}

impl From<String> for CellKind {
    fn from(cell_type: String) -> Self {
        match cell_type.as_str() {
            "markdown" => Self::Markdown,
            "code" => Self::Code,
            _ => Self::Other(cell_type),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
/// Either storage shape of a cell's `source`.
pub enum Source {
    /// The whole source as one string.
    Text(String),
    /// The source split into lines, each keeping its own line ending.
    Lines(Vec<String>),
}

impl Default for Source {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Source {
    #[must_use]
    /// Flatten into one string by concatenating lines as stored.
    pub fn flatten(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Lines(lines) => lines.concat(),
        }
    }
}

#[derive(Deserialize)]
struct RawCell {
    #[serde(default)]
    cell_type: String,
    #[serde(default)]
    source: Source,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A notebook cell with its source already flattened.
pub struct Cell {
    /// Cell type.
    pub kind: CellKind,
    /// Full source text.
    pub source: String,
}

impl Cell {
    #[must_use]
    /// Build a markdown cell.
    pub fn markdown(source: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Markdown,
            source: source.into(),
        }
    }

    #[must_use]
    /// Build a code cell.
    pub fn code(source: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Code,
            source: source.into(),
        }
    }

    #[must_use]
    /// Whether this is a markdown cell.
    pub fn is_markdown(&self) -> bool {
        self.kind == CellKind::Markdown
    }

    #[must_use]
    /// Whether this is a code cell.
    pub fn is_code(&self) -> bool {
        self.kind == CellKind::Code
    }

    #[must_use]
    /// Text up to the first line break.
    pub fn first_line(&self) -> &str {
        self.source.split('\n').next().unwrap_or_default()
    }
}

impl From<RawCell> for Cell {
    fn from(raw: RawCell) -> Self {
        Self {
            kind: CellKind::from(raw.cell_type),
            source: raw.source.flatten(),
        }
    }
}

#[derive(Deserialize)]
struct RawNotebook {
    #[serde(default, deserialize_with = "present")]
    metadata: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    nbformat: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    nbformat_minor: Option<Value>,
    cells: Option<Vec<RawCell>>,
}

/// A field that appears in the document, `null` included.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone)]
/// An immutable snapshot of one loaded notebook.
///
/// The container fields are kept as found, absent or not, so the format check can report what
/// is missing. Everything else reads the cells.
pub struct Notebook {
    /// Top-level `metadata` object.
    pub metadata: Option<Value>,
    /// Major schema version.
    pub nbformat: Option<Value>,
    /// Minor schema version.
    pub nbformat_minor: Option<Value>,
    /// Cells in document order; `None` when the field was absent.
    pub cells: Option<Vec<Cell>>,
}

impl From<RawNotebook> for Notebook {
    fn from(raw: RawNotebook) -> Self {
        Self {
            metadata: raw.metadata,
            nbformat: raw.nbformat,
            nbformat_minor: raw.nbformat_minor,
            cells: raw
                .cells
                .map(|cells| cells.into_iter().map(Cell::from).collect()),
        }
    }
}

impl Notebook {
    #[must_use]
    /// Wrap cells in a well-formed nbformat 4.5 container.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self {
            metadata: Some(Value::Object(serde_json::Map::new())),
            nbformat: Some(Value::from(4)),
            nbformat_minor: Some(Value::from(5)),
            cells: Some(cells),
        }
    }

    /// Parse notebook JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or a cell has an unreadable `source`.
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<RawNotebook>(json_str).map(Self::from)
    }

    /// Read and parse the notebook at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold notebook JSON.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let notebook = Self::from_json(&contents).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "loaded {} with {} cells",
            path.display(),
            notebook.cells().len()
        );
        Ok(notebook)
    }

    #[must_use]
    /// Cells in document order, empty when the field was absent.
    pub fn cells(&self) -> &[Cell] {
        self.cells.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/notebook.rs"]
mod tests;
