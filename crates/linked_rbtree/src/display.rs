// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter};

use crate::tree::Side;
use crate::{Color, NodeId, NodePool, RbTree};

const INDENT: usize = 2;

/// Formats the structure of a tree, returned by [`RbTree::display_tree`].
///
/// Nodes are listed in preorder, one per line, indented by depth. Each line starts with `T`
/// for the root or `L`/`R` for the side the node hangs on, followed by its color:
///
/// ```text
/// T(b) B
///   L(b) D
///     L(r) E
///     R(r) C
///   R(b) A
/// ```
#[derive(Debug)]
pub struct DisplayTree<'a, T, P> {
    tree: &'a RbTree<T, P>,
}

impl<'a, T, P> DisplayTree<'a, T, P> {
    pub(crate) const fn new(tree: &'a RbTree<T, P>) -> Self {
        Self { tree }
    }
}

impl<T: Display, P: NodePool<T>> DisplayTree<'_, T, P> {
    fn write_node(&self, f: &mut Formatter<'_>, node: NodeId, tag: char, depth: usize) -> fmt::Result {
        let color = match self.tree.color(node) {
            Color::Red => 'r',
            Color::Black => 'b',
        };
        writeln!(f, "{:indent$}{tag}({color}) {}", "", self.tree[node], indent = depth * INDENT)?;

        if let Some(left) = self.tree.child(node, Side::Left) {
            self.write_node(f, left, 'L', depth + 1)?;
        }
        if let Some(right) = self.tree.child(node, Side::Right) {
            self.write_node(f, right, 'R', depth + 1)?;
        }
        Ok(())
    }
}

impl<T: Display, P: NodePool<T>> Display for DisplayTree<'_, T, P> {
    #[cfg_attr(test, mutants::skip)] // Output format is covered by tests, mutations only reshuffle whitespace.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.tree.root() {
            Some(root) => self.write_node(f, root, 'T', 0),
            None => Ok(()),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use crate::RbTree;
    use crate::tree::tests::build_by_insert_as_first;

    #[test]
    fn prints_preorder_with_sides_and_colors() {
        let tree = build_by_insert_as_first("ABCDE");

        assert_eq!(
            tree.display_tree().to_string(),
            "T(b) B\n  L(b) D\n    L(r) E\n    R(r) C\n  R(b) A\n"
        );
    }

    #[test]
    fn empty_tree_prints_nothing() {
        let tree = RbTree::<u32>::new();
        assert_eq!(tree.display_tree().to_string(), "");
    }
}
