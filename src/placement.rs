//! Placement resolution: where each import should have been written.
//!
//! The right place for an import is the deepest header whose section contains every use of
//! the name. It is found by collecting the root-to-header path of each header that uses the
//! name and cutting them down to their longest common prefix. The last header of that prefix
//! is the lowest common ancestor of all the uses.

use crate::header::ModulePath;
use crate::tree::DocumentTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of resolving one imported name against the tree.
pub enum Placement {
    /// No header uses the name.
    Unused,
    /// The header (arena index) where the import belongs.
    Site(usize),
    /// The uses fall under different roots, so no single header covers them.
    Scattered,
}

#[must_use]
/// Root-to-header paths for every header that uses `module`.
///
/// A search stops descending at the first header that uses the name: anything below it
/// shares that header's path as a prefix and cannot change the common prefix.
pub fn usage_paths(tree: &DocumentTree, module: &str) -> Vec<ModulePath> {
    let mut paths = Vec::new();
    for &root in tree.roots() {
        collect_paths(tree, module, vec![root], &mut paths);
    }
    paths
}

fn collect_paths(tree: &DocumentTree, module: &str, path: ModulePath, out: &mut Vec<ModulePath>) {
    let Some(&cursor) = path.last() else {
        return;
    };
    let node = tree.node(cursor);

    if node.uses(module) {
        out.push(path);
        return;
    }
    for &child in &node.children_indices {
        let mut extended = path.clone();
        extended.push(child);
        collect_paths(tree, module, extended, out);
    }
}

#[must_use]
/// Longest shared initial run of `paths`, comparing headers by identity.
///
/// The result does not depend on the order of `paths`. An empty input gives an empty prefix.
pub fn longest_common_prefix(paths: &[ModulePath]) -> ModulePath {
    let Some((first, rest)) = paths.split_first() else {
        return Vec::new();
    };

    let mut prefix = first.clone();
    for path in rest {
        let shared = prefix
            .iter()
            .zip(path)
            .take_while(|(a, b)| a == b)
            .count();
        prefix.truncate(shared);
    }
    prefix
}

#[must_use]
/// Find the header where `module` should be imported.
pub fn resolve(tree: &DocumentTree, module: &str) -> Placement {
    let paths = usage_paths(tree, module);
    if paths.is_empty() {
        return Placement::Unused;
    }

    match longest_common_prefix(&paths).last() {
        Some(&site) => {
            log::debug!(
                "`{module}` is used under {} headers, placement site `{}`",
                paths.len(),
                tree.node(site).title
            );
            Placement::Site(site)
        }
        None => Placement::Scattered,
    }
}

#[cfg(test)]
#[path = "tests/placement.rs"]
mod tests;
