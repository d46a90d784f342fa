//! Header segmentation: the first pass over a notebook's cells.
//!
//! Every markdown header becomes a [`HeaderNode`]; every code cell is attached to the header
//! closest above it and its imports are registered. This is the only place duplicate imports
//! are detected, so it has to finish before usage is classified.

use crate::error::Violation;
use crate::grammar::{markdown, CodeGrammar};
use crate::header::HeaderNode;
use crate::imports::{imported_modules, ImportRegistry};
use crate::notebook::{Cell, CellKind};

#[derive(Debug, Clone, Default)]
/// Flat header list in document order, with the document-wide import registry.
pub struct Outline {
    /// Headers in document order, not yet nested.
    pub headers: Vec<HeaderNode>,
    /// Every imported name, first-seen order.
    pub imports: ImportRegistry,
}

/// Split `cells` into headers and register every import.
///
/// # Errors
///
/// Returns [`Violation::PrecedingCode`] for a code cell before the first header and
/// [`Violation::DuplicateImport`] when a name is imported twice.
pub fn segment<G: CodeGrammar + ?Sized>(cells: &[Cell], grammar: &G) -> Result<Outline, Violation> {
    let mut outline = Outline::default();

    for cell in cells {
        match cell.kind {
            CellKind::Markdown => {
                for header in markdown::header_line().captures_iter(&cell.source) {
                    let node = HeaderNode::new(&header[1], &header[2]);
                    log::debug!("found header `{}` at depth {}", node.title, node.depth);
                    outline.headers.push(node);
                }
            }
            CellKind::Code => {
                let Some(owner) = outline.headers.last_mut() else {
                    return Err(Violation::PrecedingCode);
                };
                owner.code.push(cell.source.clone());

                for module in imported_modules(grammar, &cell.source) {
                    outline.imports.register(&module, &owner.title)?;
                    log::debug!("`{module}` imported at `{}`", owner.title);
                    owner.has_imports.push(module);
                }
            }
            CellKind::Other(_) => {}
        }
    }

    Ok(outline)
}

#[cfg(test)]
#[path = "tests/segment.rs"]
mod tests;
