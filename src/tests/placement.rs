use super::{longest_common_prefix, resolve, usage_paths, Placement};
use crate::header::HeaderNode;
use crate::tree::DocumentTree;

/// Headers of the given depths; `users` lists the indices whose code uses `os`.
fn tree_with_users(depths: &[usize], users: &[usize]) -> DocumentTree {
    let headers = depths
        .iter()
        .enumerate()
        .map(|(i, &depth)| {
            let mut node = HeaderNode::new(&"#".repeat(depth), &format!("H{i}"));
            if users.contains(&i) {
                node.uses_imports.insert("os".to_string());
            }
            node
        })
        .collect();
    DocumentTree::build(headers)
}

#[test]
fn test_longest_common_prefix() {
    assert_eq!(
        longest_common_prefix(&[vec![0, 1, 2], vec![0, 1, 3]]),
        vec![0, 1]
    );
    assert_eq!(longest_common_prefix(&[vec![0, 1], vec![0, 4, 5]]), vec![0]);
    assert_eq!(longest_common_prefix(&[vec![0, 1, 2]]), vec![0, 1, 2]);
    assert_eq!(longest_common_prefix(&[vec![0, 1, 2], vec![0, 1]]), vec![0, 1]);
    assert!(longest_common_prefix(&[vec![0], vec![1]]).is_empty());
    assert!(longest_common_prefix(&[]).is_empty());
}

#[test]
fn test_prefix_is_independent_of_path_order() {
    let paths = [vec![0, 1, 2, 5], vec![0, 1, 3], vec![0, 1, 2, 6]];
    let orders = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    for order in orders {
        let permuted: Vec<_> = order.iter().map(|&i| paths[i].clone()).collect();
        let prefix = longest_common_prefix(&permuted);
        assert_eq!(prefix, vec![0, 1], "{order:?}");
        assert_eq!(longest_common_prefix(&[prefix.clone(), prefix.clone()]), prefix);
    }
}

#[test]
fn test_usage_paths_stop_at_first_user() {
    // # H0 > ## H1 > ### H2, with H1 and H2 both using os
    let tree = tree_with_users(&[1, 2, 3], &[1, 2]);
    assert_eq!(usage_paths(&tree, "os"), vec![vec![0, 1]]);
}

#[test]
fn test_site_is_lowest_common_ancestor() {
    // # H0 > (## H1 > ### H2, ### H3), ## H4
    let tree = tree_with_users(&[1, 2, 3, 3, 2], &[2, 3]);
    assert_eq!(usage_paths(&tree, "os"), vec![vec![0, 1, 2], vec![0, 1, 3]]);
    assert_eq!(resolve(&tree, "os"), Placement::Site(1));

    let tree = tree_with_users(&[1, 2, 3, 3, 2], &[2, 4]);
    assert_eq!(resolve(&tree, "os"), Placement::Site(0));
}

#[test]
fn test_single_user_is_its_own_site() {
    let tree = tree_with_users(&[1, 2], &[1]);
    assert_eq!(resolve(&tree, "os"), Placement::Site(1));
}

#[test]
fn test_unused_and_scattered() {
    let tree = tree_with_users(&[1, 2], &[]);
    assert_eq!(resolve(&tree, "os"), Placement::Unused);

    // Two roots: ## H0 and # H1
    let tree = tree_with_users(&[2, 1], &[0, 1]);
    assert_eq!(resolve(&tree, "os"), Placement::Scattered);
}
