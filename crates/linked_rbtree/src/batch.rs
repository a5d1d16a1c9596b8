// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use tracing::{Level, event};

use crate::{NodeId, NodePool, RbTree, Result};

const ERR_AT_END: &str = "batch editor is past the last node";

/// Edits the sequence of a tree without maintaining the tree structure, rebuilding the tree
/// once when the batch ends.
///
/// Each edit only relinks the sequence and costs constant time. When the editor is dropped
/// (or [`finish`][Self::finish] is called) the tree is rebuilt from the sequence in linear time.
/// The tree cannot be observed while the editor holds it, so the temporarily stale structure
/// is never visible.
///
/// # Examples
///
/// ```
/// use linked_rbtree::RbTree;
///
/// let mut tree = RbTree::from_values(0..10).unwrap();
///
/// let mut editor = tree.batch_editor();
/// while let Some(value) = editor.value() {
///     if value % 3 == 0 {
///         editor.remove();
///     } else {
///         editor.advance();
///     }
/// }
/// editor.finish();
///
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 7, 8]);
/// tree.check_invariants().unwrap();
/// ```
#[derive(Debug)]
pub struct BatchEditor<'a, T, P: NodePool<T>> {
    tree: &'a mut RbTree<T, P>,
    current: Option<NodeId>,
    previous: Option<NodeId>,
    edits: usize,
}

impl<'a, T, P: NodePool<T>> BatchEditor<'a, T, P> {
    pub(crate) fn new(tree: &'a mut RbTree<T, P>) -> Self {
        let current = tree.first();
        Self {
            tree,
            current,
            previous: None,
            edits: 0,
        }
    }

    /// The node at the editor position, or `None` past the end.
    #[must_use]
    pub const fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Whether the editor is past the last node.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// The value at the editor position.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.current.map(|node| self.tree.get(node))
    }

    /// The value at the editor position.
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

    /// Inserts `value` after the current node. The editor does not move.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot allocate a node.
    ///
    /// # Panics
    ///
    /// Panics if the editor is past the end.
    pub fn insert_after(&mut self, value: T) -> Result<NodeId> {
        let current = self.current.expect(ERR_AT_END);
        let node = self.tree.allocate_detached(value)?;

        let next = self.tree.next(current);
        self.tree.set_next(node, next);
        self.tree.set_next(current, Some(node));

        self.edits += 1;
        Ok(node)
    }

    /// Inserts `value` before the current node, or at the end of the sequence when the editor
    /// is past the end. The editor stays on the same node.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot allocate a node.
    pub fn insert_before(&mut self, value: T) -> Result<NodeId> {
        let node = self.tree.allocate_detached(value)?;

        self.tree.set_next(node, self.current);
        match self.previous {
            Some(previous) => self.tree.set_next(previous, Some(node)),
            None => self.tree.set_first(Some(node)),
        }

        self.previous = Some(node);
        self.edits += 1;
        Ok(node)
    }

    /// Removes the current node and moves to the one after it.
    ///
    /// # Panics
    ///
    /// Panics if the editor is past the end.
    pub fn remove(&mut self) -> T {
        let current = self.current.expect(ERR_AT_END);
        let next = self.tree.next(current);

        match self.previous {
            Some(previous) => self.tree.set_next(previous, next),
            None => self.tree.set_first(next),
        }

        self.current = next;
        self.edits += 1;
        self.tree.release_detached(current)
    }

    /// Ends the batch, rebuilding the tree if anything was edited.
    pub fn finish(self) {
        drop(self);
    }
}

impl<T, P: NodePool<T>> Drop for BatchEditor<'_, T, P> {
    fn drop(&mut self) {
        if self.edits == 0 {
            return;
        }

        event!(Level::TRACE, message = "finishing batch", edits = self.edits);
        self.tree.rebuild_from_list();
    }
}
