// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{NodeId, NodePool, RbTree, Result};

const ERR_AT_END: &str = "cursor is past the last node";

/// Moves forward through the sequence of a tree, inserting and removing around its position.
///
/// The cursor remembers the node before its position, so removals cost no predecessor search.
/// Every edit keeps the tree balanced. Use [`BatchEditor`][crate::BatchEditor] when making many
/// edits in one go.
///
/// # Examples
///
/// ```
/// use linked_rbtree::RbTree;
///
/// let mut tree = RbTree::from_values(1..=6).unwrap();
///
/// let mut cursor = tree.cursor_mut();
/// while let Some(value) = cursor.value() {
///     if value % 2 == 0 {
///         cursor.remove();
///     } else {
///         cursor.advance();
///     }
/// }
///
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 5]);
/// ```
#[derive(Debug)]
pub struct CursorMut<'a, T, P: NodePool<T>> {
    tree: &'a mut RbTree<T, P>,
    current: Option<NodeId>,
    previous: Option<NodeId>,
}

impl<'a, T, P: NodePool<T>> CursorMut<'a, T, P> {
    pub(crate) fn new(tree: &'a mut RbTree<T, P>) -> Self {
        let current = tree.first();
        Self {
            tree,
            current,
            previous: None,
        }
    }

    /// The node at the cursor position, or `None` past the end.
    #[must_use]
    pub const fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Whether the cursor is past the last node.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// The value at the cursor position.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.current.map(|node| self.tree.get(node))
    }

    /// The value at the cursor position.
    #[must_use]
    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.current.map(|node| self.tree.get_mut(node))
    }

    /// Moves to the next node. Does nothing past the end.
    pub fn advance(&mut self) {
        if let Some(current) = self.current {
            self.previous = Some(current);
            self.current = self.tree.next(current);
        }
    }

    /// Inserts `value` after the current node. The cursor does not move.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot allocate a node.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end.
    pub fn insert_after(&mut self, value: T) -> Result<NodeId> {
        let current = self.current.expect(ERR_AT_END);
        self.tree.insert_after(current, value)
    }

    /// Inserts `value` before the current node, or at the end of the sequence when the cursor
    /// is past the end. The cursor stays on the same node.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot allocate a node.
    pub fn insert_before(&mut self, value: T) -> Result<NodeId> {
        let node = match self.previous {
            Some(previous) => self.tree.insert_after(previous, value)?,
            None => self.tree.insert_as_first(value)?,
        };

        self.previous = Some(node);
        Ok(node)
    }

    /// Removes the current node and moves to the one after it.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end.
    pub fn remove(&mut self) -> T {
        let current = self.current.expect(ERR_AT_END);
        self.current = self.tree.next(current);
        self.tree.remove_with_previous(current, self.previous)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use testing_aids::assert_panic;

    use super::*;
    use crate::Error;

    fn sequence(tree: &RbTree<char>) -> String {
        tree.iter().collect()
    }

    #[test]
    fn inserts_around_position() {
        let mut tree = RbTree::from_values("ACE".chars()).unwrap();

        let mut cursor = tree.cursor_mut();
        assert_eq!(cursor.value(), Some(&'A'));
        cursor.insert_after('B').unwrap();
        assert_eq!(cursor.value(), Some(&'A'));

        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.value(), Some(&'C'));
        cursor.insert_before('b').unwrap();
        cursor.insert_after('D').unwrap();

        assert_eq!(sequence(&tree), "ABbCDE");
        tree.check_invariants().unwrap();
    }

    #[test]
    fn insert_before_on_first_and_past_end() {
        let mut tree = RbTree::from_values("BC".chars()).unwrap();

        let mut cursor = tree.cursor_mut();
        cursor.insert_before('A').unwrap();
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_end());
        cursor.insert_before('D').unwrap();
        cursor.insert_before('E').unwrap();

        assert_eq!(sequence(&tree), "ABCDE");
        tree.check_invariants().unwrap();
    }

    #[test]
    fn insert_before_on_empty_tree() {
        let mut tree = RbTree::new();

        let mut cursor = tree.cursor_mut();
        assert!(cursor.is_end());
        cursor.insert_before('A').unwrap();
        cursor.insert_before('B').unwrap();

        assert_eq!(sequence(&tree), "AB");
    }

    #[test]
    fn remove_moves_to_successor() {
        let mut tree = RbTree::from_values("ABCDEFGHIJ".chars()).unwrap();

        let mut cursor = tree.cursor_mut();
        let mut removed = String::new();
        while !cursor.is_end() {
            removed.push(cursor.remove());
            cursor.advance();
        }

        assert_eq!(removed, "ACEGI");
        assert_eq!(sequence(&tree), "BDFHJ");
        tree.check_invariants().unwrap();
    }

    #[test]
    fn value_mut_edits_in_place() {
        let mut tree = RbTree::from_values("abc".chars()).unwrap();

        let mut cursor = tree.cursor_mut();
        while let Some(value) = cursor.value_mut() {
            *value = value.to_ascii_uppercase();
            cursor.advance();
        }
        cursor.advance();
        assert!(cursor.current().is_none());

        assert_eq!(sequence(&tree), "ABC");
    }

    #[test]
    fn allocation_failure_keeps_position() {
        let mut tree = RbTree::builder().with_max_nodes(2).build();
        tree.try_extend_from(['A', 'B']).unwrap();

        let mut cursor = tree.cursor_mut();
        cursor.advance();
        assert!(matches!(cursor.insert_before('X'), Err(Error::PoolExhausted { .. })));
        assert_eq!(cursor.value(), Some(&'B'));
        assert_eq!(cursor.remove(), 'B');
        cursor.insert_before('C').unwrap();

        assert_eq!(tree.iter().collect::<String>(), "AC");
    }

    #[test]
    fn edits_past_end_panic() {
        let mut tree = RbTree::from_values(['A']).unwrap();

        let mut cursor = tree.cursor_mut();
        cursor.advance();
        assert_panic!(_ = cursor.remove());
        assert_panic!(_ = cursor.insert_after('B'));
    }
}
