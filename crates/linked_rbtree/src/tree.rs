// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use nm::{Event, Magnitude};
use smallvec::SmallVec;
use tracing::{Level, event};

use crate::pool::{Links, Node};
use crate::{BatchEditor, Color, CursorMut, DisplayTree, Error, Handles, Iter, NodeId, NodePool, RbTreeBuilder, Result, SlabPool, Walker};

const ERR_CHAIN_BROKEN: &str = "a node with a right subtree must have a list successor";
const ERR_RED_ROOT: &str = "a red node always has a parent";
const ERR_MISSING_SIBLING: &str = "a double-black node always has a sibling";
const ERR_ROTATION: &str = "rotation requires a child on the rising side";

/// Which child of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A red-black tree over a caller-ordered sequence of values.
///
/// The tree does not compare values. Instead, the caller decides where each value goes by
/// naming its neighbor: [`insert_as_first`][Self::insert_as_first] starts the sequence and
/// [`insert_after`][Self::insert_after] places a value right behind an existing node. Besides
/// the balanced tree, every node is threaded onto a singly-linked list in sequence order, so
/// the successor of any node is available in constant time.
///
/// Nodes live in a [`NodePool`] and are addressed by [`NodeId`] handles that stay valid until the
/// node is removed, no matter how the tree is rebalanced.
///
/// # Examples
///
/// ```
/// use linked_rbtree::RbTree;
///
/// let mut tree = RbTree::new();
/// let b = tree.insert_as_first('b').unwrap();
/// let a = tree.insert_as_first('a').unwrap();
/// tree.insert_after(b, 'c').unwrap();
///
/// assert_eq!(tree.iter().copied().collect::<String>(), "abc");
/// assert_eq!(tree.remove(a), 'a');
/// assert_eq!(tree.iter().copied().collect::<String>(), "bc");
/// ```
#[derive(Debug)]
pub struct RbTree<T, P = SlabPool<T>> {
    pool: P,
    root: Option<NodeId>,
    first: Option<NodeId>,
    len: usize,
    _values: PhantomData<T>,
}

impl<T> RbTree<T> {
    /// Creates an empty tree backed by an unbounded [`SlabPool`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_pool(SlabPool::new())
    }

    /// Creates an empty tree whose pool has room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_pool(SlabPool::with_capacity(capacity))
    }

    /// Returns a builder for configuring the node pool of a new tree.
    #[must_use]
    pub fn builder() -> RbTreeBuilder<T> {
        RbTreeBuilder::new()
    }

    /// Creates a balanced tree holding `values` in iteration order.
    ///
    /// The tree is built in linear time, without any rebalancing.
    ///
    /// # Errors
    ///
    /// Never fails for the default unbounded pool. The signature mirrors
    /// [`try_extend_from`][Self::try_extend_from].
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut tree = Self::new();
        tree.try_extend_from(values)?;
        Ok(tree)
    }
}

impl<T> Default for RbTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: NodePool<T>> RbTree<T, P> {
    /// Creates an empty tree that stores its nodes in `pool`.
    ///
    /// The pool must not contain any live nodes.
    #[must_use]
    pub const fn with_pool(pool: P) -> Self {
        Self {
            pool,
            root: None,
            first: None,
            len: 0,
            _values: PhantomData,
        }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first node of the sequence, which is also the leftmost node of the tree.
    #[must_use]
    pub const fn first(&self) -> Option<NodeId> {
        self.first
    }

    /// The root of the tree.
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The node that follows `node` in the sequence.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in the tree.
    #[must_use]
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        self.links(node).next
    }

    /// The color of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in the tree.
    #[must_use]
    pub fn color(&self, node: NodeId) -> Color {
        self.links(node).color
    }

    /// The value held by `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in the tree.
    #[must_use]
    pub fn get(&self, node: NodeId) -> &T {
        self.pool.get(node).value()
    }

    /// The value held by `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in the tree.
    #[must_use]
    pub fn get_mut(&mut self, node: NodeId) -> &mut T {
        self.pool.get_mut(node).value_mut()
    }

    /// The pool holding the nodes of this tree.
    #[must_use]
    pub const fn pool(&self) -> &P {
        &self.pool
    }

    /// Iterates over the values in sequence order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter::new(self)
    }

    /// Iterates over the node handles in sequence order.
    #[must_use]
    pub fn handles(&self) -> Handles<'_, T, P> {
        Handles::new(self)
    }

    /// A walker positioned at the root, for navigating the tree structure.
    #[must_use]
    pub fn walker(&self) -> Walker<'_, T, P> {
        Walker::new(self, self.root)
    }

    /// A walker positioned at `node`.
    #[must_use]
    pub fn walker_at(&self, node: NodeId) -> Walker<'_, T, P> {
        Walker::new(self, Some(node))
    }

    /// A cursor positioned at the first node that can insert and remove while it moves
    /// through the sequence.
    #[must_use]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, P> {
        CursorMut::new(self)
    }

    /// An editor for a batch of sequence edits, with the tree rebuilt once when the batch ends.
    #[must_use]
    pub fn batch_editor(&mut self) -> BatchEditor<'_, T, P> {
        BatchEditor::new(self)
    }

    /// Formats the tree structure, one node per line.
    #[must_use]
    pub fn display_tree(&self) -> DisplayTree<'_, T, P> {
        DisplayTree::new(self)
    }

    /// Makes room in the pool for `additional` more nodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot make room for that many nodes.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        self.pool.reserve(additional)
    }

    /// Inserts `value` at the front of the sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot allocate a node. The tree is left unchanged.
    pub fn insert_as_first(&mut self, value: T) -> Result<NodeId> {
        let node = self.allocate(value)?;

        match self.first {
            None => {
                self.links_mut(node).color = Color::Black;
                self.root = Some(node);
            }
            Some(first) => {
                self.links_mut(node).next = Some(first);
                self.attach(node, first, Side::Left);
                self.rebalance_after_insert(node);
            }
        }

        self.first = Some(node);
        self.len += 1;
        Ok(node)
    }

    /// Inserts `value` immediately after `after` in the sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot allocate a node. The tree is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `after` is not in the tree.
    pub fn insert_after(&mut self, after: NodeId, value: T) -> Result<NodeId> {
        let Links { next, right, .. } = *self.links(after);
        let node = self.allocate(value)?;

        self.links_mut(node).next = next;
        self.links_mut(after).next = Some(node);

        // The list successor of a node with a right subtree is the leftmost node of that subtree.
        if right.is_some() {
            let successor = next.expect(ERR_CHAIN_BROKEN);
            self.attach(node, successor, Side::Left);
        } else {
            self.attach(node, after, Side::Right);
        }

        self.rebalance_after_insert(node);
        self.len += 1;
        Ok(node)
    }

    /// Inserts `value` immediately before `before` in the sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot allocate a node. The tree is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not in the tree.
    pub fn insert_before(&mut self, before: NodeId, value: T) -> Result<NodeId> {
        match self.predecessor(before) {
            Some(previous) => self.insert_after(previous, value),
            None => self.insert_as_first(value),
        }
    }

    /// Removes `node` from the tree, returning its value.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in the tree.
    pub fn remove(&mut self, node: NodeId) -> T {
        let previous = self.predecessor(node);
        self.remove_with_previous(node, previous)
    }

    /// Removes `node` given the node that precedes it in the sequence (`None` if `node` is the
    /// first node), avoiding the search for the predecessor.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in the tree or `previous` is not its predecessor.
    pub fn remove_with_previous(&mut self, node: NodeId, previous: Option<NodeId>) -> T {
        let next = self.links(node).next;

        match previous {
            None => {
                assert_eq!(self.first, Some(node), "only the first node has no predecessor");
                self.first = next;
            }
            Some(previous) => {
                assert_eq!(self.links(previous).next, Some(node), "previous node does not precede the removed node");
                self.links_mut(previous).next = next;
            }
        }

        self.unlink(node, next);
        self.len -= 1;
        self.pool.release(node).into_value()
    }

    /// Removes every node, returning the nodes to the pool for reuse.
    pub fn remove_all(&mut self) {
        event!(Level::TRACE, message = "removing all nodes", nodes = self.len);

        self.pool.release_all();
        self.root = None;
        self.first = None;
        self.len = 0;
    }

    /// Appends `values` to the end of the sequence and rebuilds the tree once.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot allocate a node. The nodes already appended by this
    /// call are released again and the tree is left unchanged.
    pub fn try_extend_from(&mut self, values: impl IntoIterator<Item = T>) -> Result<()> {
        let old_last = self.handles().last();
        let mut last = old_last;
        let mut appended: Vec<NodeId> = Vec::new();

        for value in values {
            let node = match self.allocate(value) {
                Ok(node) => node,
                Err(error) => {
                    for node in appended {
                        drop(self.pool.release(node));
                    }
                    match old_last {
                        Some(old_last) => self.links_mut(old_last).next = None,
                        None => self.first = None,
                    }
                    return Err(error);
                }
            };

            match last {
                Some(last) => self.links_mut(last).next = Some(node),
                None => self.first = Some(node),
            }
            last = Some(node);
            appended.push(node);
        }

        if !appended.is_empty() {
            self.rebuild_from_list();
        }
        Ok(())
    }

    /// Rebuilds the tree structure from the sequence in linear time.
    ///
    /// The shape depends only on the number of nodes: subtrees of equal size are joined
    /// pairwise while walking the list, giving a tree that is black everywhere except for
    /// nodes on the right spine whose subtrees would otherwise be one black level too tall.
    pub fn rebuild_from_list(&mut self) {
        #[derive(Clone, Copy)]
        struct Pending {
            left: Option<NodeId>,
            size: usize,
            middle: NodeId,
        }

        let mut stack: SmallVec<[Pending; 64]> = SmallVec::new();
        let mut count = 0_usize;
        let mut cursor = self.first;

        while let Some(node) = cursor {
            cursor = self.links(node).next;
            count += 1;

            stack.push(Pending {
                left: None,
                size: 1,
                middle: node,
            });

            // Join the two oldest of three equally sized neighbors into a perfect subtree that
            // becomes the left subtree of the second one's middle node.
            let mut top = stack.len() - 1;
            while top >= 2 && stack[top - 2].size == stack[top - 1].size && stack[top - 1].size == stack[top].size {
                let second = stack.remove(top - 1);
                let first = &stack[top - 2];
                let (joined, left, size) = (first.middle, first.left, first.size);

                self.set_subtree(joined, left, second.left, Color::Black);

                stack[top - 2] = Pending {
                    left: Some(joined),
                    size: size * 2,
                    middle: second.middle,
                };
                top -= 2;
            }
        }

        let mut right: Option<NodeId> = None;
        for index in (0..stack.len()).rev() {
            let Pending { left, size, middle } = stack[index];
            let color = if index > 0 && stack[index - 1].size == size {
                Color::Red
            } else {
                Color::Black
            };

            self.set_subtree(middle, left, right, color);
            right = Some(middle);
        }

        if let Some(root) = right {
            let links = self.links_mut(root);
            links.parent = None;
            links.color = Color::Black;
        }

        self.root = right;
        self.len = count;

        REBUILD_NODES.with(|e| e.observe(count));
        event!(Level::DEBUG, message = "rebuilt tree from list", nodes = count);
    }

    /// Verifies the structure of the tree and returns its black height.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Corrupted`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<usize> {
        let Some(root) = self.root else {
            if self.first.is_some() || self.len != 0 {
                return Err(corrupted(format!("empty tree has first node {:?} and length {}", self.first, self.len)));
            }
            return Ok(0);
        };

        if self.links(root).color != Color::Black {
            return Err(corrupted("root is red".to_string()));
        }

        let mut in_order = Vec::with_capacity(self.len);
        let black_height = self.check_subtree(Some(root), None, &mut in_order)?;

        if in_order.len() != self.len {
            return Err(corrupted(format!("tree holds {} nodes but length is {}", in_order.len(), self.len)));
        }

        let mut cursor = self.first;
        for (position, expected) in in_order.iter().enumerate() {
            if cursor != Some(*expected) {
                return Err(corrupted(format!(
                    "list node at position {position} is {cursor:?} but in-order node is {expected:?}"
                )));
            }
            cursor = cursor.and_then(|node| self.links(node).next);
        }

        if let Some(extra) = cursor {
            return Err(corrupted(format!("list continues past the last tree node with {extra:?}")));
        }

        Ok(black_height)
    }

    fn check_subtree(&self, node: Option<NodeId>, parent: Option<NodeId>, in_order: &mut Vec<NodeId>) -> Result<usize> {
        let Some(node) = node else {
            return Ok(0);
        };

        let links = *self.links(node);
        if links.parent != parent {
            return Err(corrupted(format!("{node:?} has parent {:?} instead of {parent:?}", links.parent)));
        }

        if links.color == Color::Red && parent.is_some_and(|parent| self.links(parent).color == Color::Red) {
            return Err(corrupted(format!("red {node:?} has a red parent")));
        }

        let left_height = self.check_subtree(links.left, Some(node), in_order)?;
        in_order.push(node);
        let right_height = self.check_subtree(links.right, Some(node), in_order)?;

        if left_height != right_height {
            return Err(corrupted(format!(
                "{node:?} has black height {left_height} on the left and {right_height} on the right"
            )));
        }

        Ok(left_height + usize::from(links.color == Color::Black))
    }

    pub(crate) fn links(&self, node: NodeId) -> &Links {
        &self.pool.get(node).links
    }

    fn links_mut(&mut self, node: NodeId) -> &mut Links {
        &mut self.pool.get_mut(node).links
    }

    pub(crate) fn child(&self, node: NodeId, side: Side) -> Option<NodeId> {
        let links = self.links(node);
        match side {
            Side::Left => links.left,
            Side::Right => links.right,
        }
    }

    fn set_child(&mut self, node: NodeId, side: Side, child: Option<NodeId>) {
        let links = self.links_mut(node);
        match side {
            Side::Left => links.left = child,
            Side::Right => links.right = child,
        }
    }

    fn is_red(&self, node: Option<NodeId>) -> bool {
        node.is_some_and(|node| self.links(node).color == Color::Red)
    }

    fn is_black(&self, node: Option<NodeId>) -> bool {
        !self.is_red(node)
    }

    fn set_color(&mut self, node: NodeId, color: Color) {
        self.links_mut(node).color = color;
    }

    fn allocate(&mut self, value: T) -> Result<NodeId> {
        self.pool.allocate(Node::detached(value)).inspect_err(|error| {
            event!(Level::DEBUG, message = "node allocation failed", nodes = self.len, %error);
        })
    }

    pub(crate) fn set_first(&mut self, first: Option<NodeId>) {
        self.first = first;
    }

    pub(crate) fn set_next(&mut self, node: NodeId, next: Option<NodeId>) {
        self.links_mut(node).next = next;
    }

    pub(crate) fn allocate_detached(&mut self, value: T) -> Result<NodeId> {
        self.allocate(value)
    }

    pub(crate) fn release_detached(&mut self, node: NodeId) -> T {
        self.pool.release(node).into_value()
    }

    fn set_subtree(&mut self, node: NodeId, left: Option<NodeId>, right: Option<NodeId>, color: Color) {
        let links = self.links_mut(node);
        links.left = left;
        links.right = right;
        links.color = color;

        for child in [left, right].into_iter().flatten() {
            self.links_mut(child).parent = Some(node);
        }
    }

    fn attach(&mut self, node: NodeId, parent: NodeId, side: Side) {
        self.set_child(parent, side, Some(node));
        self.links_mut(node).parent = Some(parent);
    }

    fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        if self.first == Some(node) {
            return None;
        }

        if let Some(mut current) = self.links(node).left {
            while let Some(right) = self.links(current).right {
                current = right;
            }
            return Some(current);
        }

        let mut current = node;
        while let Some(parent) = self.links(current).parent {
            if self.links(parent).right == Some(current) {
                return Some(parent);
            }
            current = parent;
        }

        None
    }

    /// Puts `replacement` where `node` hangs under its parent (or at the root).
    fn replace_in_parent(&mut self, node: NodeId, replacement: Option<NodeId>) {
        let parent = self.links(node).parent;

        match parent {
            None => self.root = replacement,
            Some(parent) if self.links(parent).left == Some(node) => self.links_mut(parent).left = replacement,
            Some(parent) => self.links_mut(parent).right = replacement,
        }

        if let Some(replacement) = replacement {
            self.links_mut(replacement).parent = parent;
        }
    }

    /// Rotates `node` down towards `direction`, raising its child on the opposite side.
    fn rotate(&mut self, node: NodeId, direction: Side) {
        let rising_side = direction.opposite();
        let riser = self.child(node, rising_side).expect(ERR_ROTATION);
        let inner = self.child(riser, direction);

        self.set_child(node, rising_side, inner);
        if let Some(inner) = inner {
            self.links_mut(inner).parent = Some(node);
        }

        self.replace_in_parent(node, Some(riser));
        self.attach(node, riser, direction);
    }

    fn rebalance_after_insert(&mut self, mut node: NodeId) {
        let mut rotations = 0_usize;

        while let Some(mut parent) = self.links(node).parent {
            if self.links(parent).color == Color::Black {
                break;
            }

            let grandparent = self.links(parent).parent.expect(ERR_RED_ROOT);
            let side = if self.links(grandparent).left == Some(parent) {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = self.child(grandparent, side.opposite());

            if let Some(uncle) = uncle.filter(|uncle| self.links(*uncle).color == Color::Red) {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if self.child(parent, side.opposite()) == Some(node) {
                self.rotate(parent, side);
                rotations += 1;
                parent = node;
            }

            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
            rotations += 1;
            break;
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }

        FIXUP_ROTATIONS.with(|e| e.observe(rotations));
    }

    /// Detaches `node` from the tree structure. `successor` is its list successor.
    fn unlink(&mut self, node: NodeId, successor: Option<NodeId>) {
        let Links {
            parent, left, right, color, ..
        } = *self.links(node);

        let (removed_color, child, child_parent) = match (left, right) {
            (None, child) | (child, None) => {
                self.replace_in_parent(node, child);
                (color, child, parent)
            }
            (Some(left), Some(right)) => {
                // The successor is the leftmost node of the right subtree and takes over the
                // position and color of the removed node.
                let successor = successor.expect(ERR_CHAIN_BROKEN);
                let Links {
                    parent: successor_parent,
                    right: successor_right,
                    color: successor_color,
                    ..
                } = *self.links(successor);

                let child_parent = if successor_parent == Some(node) {
                    Some(successor)
                } else {
                    self.replace_in_parent(successor, successor_right);
                    self.attach(right, successor, Side::Right);
                    successor_parent
                };

                self.replace_in_parent(node, Some(successor));
                self.attach(left, successor, Side::Left);
                self.set_color(successor, color);

                (successor_color, successor_right, child_parent)
            }
        };

        if removed_color == Color::Black {
            self.rebalance_after_remove(child, child_parent);
        }
    }

    /// Restores the black height after a black node was removed from above `child`, which is
    /// the (possibly empty) subtree now hanging under `parent`.
    fn rebalance_after_remove(&mut self, mut child: Option<NodeId>, mut parent: Option<NodeId>) {
        let mut rotations = 0_usize;

        while child != self.root && self.is_black(child) {
            let Some(current_parent) = parent else {
                break;
            };

            let side = if self.links(current_parent).left == child {
                Side::Left
            } else {
                Side::Right
            };
            let far = side.opposite();

            let mut sibling = self.child(current_parent, far).expect(ERR_MISSING_SIBLING);

            if self.links(sibling).color == Color::Red {
                self.set_color(sibling, Color::Black);
                self.set_color(current_parent, Color::Red);
                self.rotate(current_parent, side);
                rotations += 1;
                sibling = self.child(current_parent, far).expect(ERR_MISSING_SIBLING);
            }

            if self.is_black(self.child(sibling, side)) && self.is_black(self.child(sibling, far)) {
                self.set_color(sibling, Color::Red);
                child = Some(current_parent);
                parent = self.links(current_parent).parent;
                continue;
            }

            if self.is_black(self.child(sibling, far)) {
                if let Some(near_nephew) = self.child(sibling, side) {
                    self.set_color(near_nephew, Color::Black);
                }
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                rotations += 1;
                sibling = self.child(current_parent, far).expect(ERR_MISSING_SIBLING);
            }

            let parent_color = self.links(current_parent).color;
            self.set_color(sibling, parent_color);
            self.set_color(current_parent, Color::Black);
            if let Some(far_nephew) = self.child(sibling, far) {
                self.set_color(far_nephew, Color::Black);
            }
            self.rotate(current_parent, side);
            rotations += 1;

            child = self.root;
            break;
        }

        if let Some(child) = child {
            self.set_color(child, Color::Black);
        }

        FIXUP_ROTATIONS.with(|e| e.observe(rotations));
    }
}

impl<T, P: NodePool<T>> Index<NodeId> for RbTree<T, P> {
    type Output = T;

    fn index(&self, node: NodeId) -> &T {
        self.get(node)
    }
}

impl<T, P: NodePool<T>> IndexMut<NodeId> for RbTree<T, P> {
    fn index_mut(&mut self, node: NodeId) -> &mut T {
        self.get_mut(node)
    }
}

impl<'a, T, P: NodePool<T>> IntoIterator for &'a RbTree<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn corrupted(message: String) -> Error {
    Error::Corrupted(message)
}

const REBUILD_NODES_BUCKETS: &[Magnitude] = &[0, 1, 16, 256, 4096, 65_536, 1_048_576];

const FIXUP_ROTATIONS_BUCKETS: &[Magnitude] = &[0, 1, 2, 3];

thread_local! {
    static REBUILD_NODES: Event = Event::builder()
        .name("linked_rbtree_rebuild_nodes")
        .histogram(REBUILD_NODES_BUCKETS)
        .build();

    static FIXUP_ROTATIONS: Event = Event::builder()
        .name("linked_rbtree_fixup_rotations")
        .histogram(FIXUP_ROTATIONS_BUCKETS)
        .build();
}
