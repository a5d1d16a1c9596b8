// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::iter::FusedIterator;

use crate::tree::Side;
use crate::{Color, NodeId, NodePool, RbTree};

/// Navigates the shape of a tree one edge at a time.
///
/// A walker is either positioned on a node or on an empty child slot. Moving from an empty
/// slot stays on an empty slot, and an empty slot counts as black, like the leaves of a
/// red-black tree.
#[derive(Debug)]
pub struct Walker<'a, T, P> {
    tree: &'a RbTree<T, P>,
    current: Option<NodeId>,
}

impl<'a, T, P: NodePool<T>> Walker<'a, T, P> {
    pub(crate) const fn new(tree: &'a RbTree<T, P>, current: Option<NodeId>) -> Self {
        Self { tree, current }
    }

    /// The node the walker is on, or `None` on an empty slot.
    #[must_use]
    pub const fn node(&self) -> Option<NodeId> {
        self.current
    }

    /// The value of the node the walker is on.
    #[must_use]
    pub fn value(&self) -> Option<&'a T> {
        let tree = self.tree;
        self.current.map(|node| tree.get(node))
    }

    /// Whether the current node has a left child.
    #[must_use]
    pub fn has_left(&self) -> bool {
        self.child(Side::Left).is_some()
    }

    /// Whether the current node has a right child.
    #[must_use]
    pub fn has_right(&self) -> bool {
        self.child(Side::Right).is_some()
    }

    /// Whether the current node is red. Empty slots are not.
    #[must_use]
    pub fn is_red(&self) -> bool {
        self.current.is_some_and(|node| self.tree.color(node) == Color::Red)
    }

    /// Whether the current node is black. Empty slots are.
    #[must_use]
    pub fn is_black(&self) -> bool {
        !self.is_red()
    }

    /// Moves to the left child.
    pub fn move_left(&mut self) {
        self.current = self.child(Side::Left);
    }

    /// Moves to the right child.
    pub fn move_right(&mut self) {
        self.current = self.child(Side::Right);
    }

    /// Moves to the parent.
    pub fn move_up(&mut self) {
        self.current = self.current.and_then(|node| self.tree.links(node).parent);
    }

    /// Moves to the next node of the sequence.
    pub fn move_next(&mut self) {
        self.current = self.current.and_then(|node| self.tree.next(node));
    }

    fn child(&self, side: Side) -> Option<NodeId> {
        self.current.and_then(|node| self.tree.child(node, side))
    }
}

impl<T, P> Clone for Walker<'_, T, P> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            current: self.current,
        }
    }
}

/// Iterator over the values of a tree in sequence order, returned by [`RbTree::iter`].
#[derive(Debug)]
pub struct Iter<'a, T, P> {
    handles: Handles<'a, T, P>,
}

impl<'a, T, P: NodePool<T>> Iter<'a, T, P> {
    pub(crate) fn new(tree: &'a RbTree<T, P>) -> Self {
        Self {
            handles: Handles::new(tree),
        }
    }
}

impl<'a, T, P: NodePool<T>> Iterator for Iter<'a, T, P> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.handles.tree;
        self.handles.next().map(|node| tree.get(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.handles.size_hint()
    }
}

impl<T, P: NodePool<T>> ExactSizeIterator for Iter<'_, T, P> {}

impl<T, P: NodePool<T>> FusedIterator for Iter<'_, T, P> {}

/// Iterator over the node handles of a tree in sequence order, returned by [`RbTree::handles`].
#[derive(Debug)]
pub struct Handles<'a, T, P> {
    tree: &'a RbTree<T, P>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T, P: NodePool<T>> Handles<'a, T, P> {
    pub(crate) fn new(tree: &'a RbTree<T, P>) -> Self {
        Self {
            tree,
            next: tree.first(),
            remaining: tree.len(),
        }
    }
}

impl<T, P: NodePool<T>> Iterator for Handles<'_, T, P> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = self.tree.next(node);
        self.remaining = self.remaining.saturating_sub(1);
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, P: NodePool<T>> ExactSizeIterator for Handles<'_, T, P> {}

impl<T, P: NodePool<T>> FusedIterator for Handles<'_, T, P> {}
