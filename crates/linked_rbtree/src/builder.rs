// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::{RbTree, SlabPool};

/// Configures the default node pool of a new [`RbTree`].
///
/// # Examples
///
/// ```
/// use linked_rbtree::RbTree;
///
/// let mut tree = RbTree::builder().with_capacity(16).with_max_nodes(1024).build();
/// tree.insert_as_first("value").unwrap();
/// ```
#[must_use]
pub struct RbTreeBuilder<T> {
    capacity: usize,
    max_nodes: Option<usize>,
    _values: PhantomData<fn() -> T>,
}

impl<T> RbTreeBuilder<T> {
    /// Creates a builder for an unbounded tree with no preallocated capacity.
    pub const fn new() -> Self {
        Self {
            capacity: 0,
            max_nodes: None,
            _values: PhantomData,
        }
    }

    /// Preallocates room for `capacity` nodes.
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Limits the tree to `max_nodes` nodes. Inserting beyond the limit fails with
    /// [`Error::PoolExhausted`][crate::Error::PoolExhausted].
    pub const fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Creates the tree.
    #[must_use]
    pub fn build(self) -> RbTree<T> {
        let pool = SlabPool::with_capacity(self.capacity);
        let pool = match self.max_nodes {
            Some(max_nodes) => pool.with_max_nodes(max_nodes),
            None => pool,
        };

        RbTree::with_pool(pool)
    }
}

impl<T> Default for RbTreeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RbTreeBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            max_nodes: self.max_nodes,
            _values: PhantomData,
        }
    }
}

impl<T> Debug for RbTreeBuilder<T> {
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RbTreeBuilder")
            .field("capacity", &self.capacity)
            .field("max_nodes", &self.max_nodes)
            .finish()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodePool;

    #[test]
    fn configures_pool() {
        let tree = RbTreeBuilder::<u8>::new().with_capacity(32).with_max_nodes(64).build();

        assert!(tree.pool().capacity() >= 32);
        assert_eq!(tree.pool().max_nodes(), Some(64));
        assert!(tree.is_empty());
    }

    #[test]
    fn default_is_unbounded() {
        let tree = RbTreeBuilder::<u8>::default().build();

        assert_eq!(tree.pool().capacity(), 0);
        assert_eq!(tree.pool().max_nodes(), None);
    }

    #[test]
    fn value_type_is_inferred_from_use() {
        let mut tree = RbTree::builder().with_max_nodes(1).build();
        tree.insert_as_first(7_u32).unwrap();

        assert!(matches!(tree.insert_as_first(8), Err(crate::Error::PoolExhausted { live: 1, limit: 1 })));
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [7]);
    }

    #[test]
    fn clone_keeps_configuration() {
        let builder = RbTreeBuilder::<u8>::new().with_max_nodes(5);
        let tree = builder.clone().build();

        assert_eq!(tree.pool().max_nodes(), Some(5));
        assert!(format!("{builder:?}").contains("max_nodes: Some(5)"));
    }
}
