//! Nesting the flat header list into a tree.
//!
//! A header at depth `d` owns every immediately following header deeper than `d`, up to the
//! next header at depth `d` or shallower. The tree is built in one reverse pass: by the time a
//! header is reached, every deeper header after it has already been folded into a subtree, so
//! it only has to adopt the unattached roots that are deeper than itself.

use crate::header::{HeaderNode, ModulePath};

#[derive(Debug, Clone, Default)]
/// Headers nested by depth.
pub struct DocumentTree {
    nodes: Vec<HeaderNode>,
    roots: Vec<usize>,
}

impl DocumentTree {
    #[must_use]
    /// Nest `headers`, given in document order.
    pub fn build(mut headers: Vec<HeaderNode>) -> Self {
        let mut unattached: Vec<usize> = Vec::new();

        for index in (0..headers.len()).rev() {
            let depth = headers[index].depth;
            let (adopted, rest): (Vec<usize>, Vec<usize>) = unattached
                .into_iter()
                .partition(|&candidate| headers[candidate].depth > depth);

            for &child in &adopted {
                headers[child].parent_index = Some(index);
            }
            headers[index].children_indices = adopted;

            unattached = Vec::with_capacity(rest.len() + 1);
            unattached.push(index);
            unattached.extend(rest);
        }

        log::debug!(
            "nested {} headers under {} roots",
            headers.len(),
            unattached.len()
        );

        Self {
            nodes: headers,
            roots: unattached,
        }
    }

    #[must_use]
    /// Top-level headers in document order.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    #[must_use]
    /// Every header, indexed in document order.
    pub fn nodes(&self) -> &[HeaderNode] {
        &self.nodes
    }

    #[must_use]
    /// The header at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a header of this tree.
    pub fn node(&self, index: usize) -> &HeaderNode {
        &self.nodes[index]
    }

    #[must_use]
    /// Indices from the root down to `index`, inclusive.
    pub fn path_to(&self, index: usize) -> ModulePath {
        let mut path = vec![index];
        let mut cursor = index;
        while let Some(parent) = self.nodes[cursor].parent_index {
            path.push(parent);
            cursor = parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
