// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! A red-black tree over a caller-ordered sequence, with a parallel linked list.
//!
//! [`RbTree`] does not sort its values. The caller builds a sequence by inserting values at the
//! front or right after an existing node, and the tree keeps that sequence balanced so that any
//! node can be located and removed in logarithmic time. Alongside the tree structure, every
//! node is linked to its successor in the sequence, which makes "insert after" and sequence
//! traversal constant-time operations.
//!
//! # Nodes and pools
//!
//! Nodes are stored in a [`NodePool`] and addressed by [`NodeId`] handles. A handle stays valid
//! for as long as its node is in the tree, regardless of rotations or pool growth, so callers
//! can keep handles to values they need to revisit. The default pool is [`SlabPool`], which can
//! be bounded with [`RbTreeBuilder::with_max_nodes`]. Any operation that needs a new node
//! allocates it before touching the tree, so allocation failures leave the tree unchanged.
//!
//! # Editing
//!
//! Besides the per-node operations on [`RbTree`], a [`CursorMut`] walks the sequence and edits
//! around its position, and a [`BatchEditor`] applies many edits to the sequence alone and then
//! rebuilds the whole tree in linear time with [`RbTree::rebuild_from_list`].
//!
//! ```
//! use linked_rbtree::RbTree;
//!
//! let mut tree = RbTree::new();
//! let first = tree.insert_as_first(10).unwrap();
//! let last = tree.insert_after(first, 30).unwrap();
//! tree.insert_before(last, 20).unwrap();
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
//! assert_eq!(tree.len(), 3);
//! tree.check_invariants().unwrap();
//! ```
//!
//! # Inspecting the structure
//!
//! [`Walker`] navigates parent and child links, [`RbTree::display_tree`] prints the structure
//! and [`RbTree::check_invariants`] verifies every red-black and list property.
//!
//! # Thread safety
//!
//! The tree has no internal synchronization. It is `Send` and `Sync` when its values and pool
//! are, and shared mutation requires external locking.

mod batch;
mod builder;
mod cursor;
mod display;
mod error;
mod pool;
mod tree;
mod walker;

pub use batch::BatchEditor;
pub use builder::RbTreeBuilder;
pub use cursor::CursorMut;
pub use display::DisplayTree;
pub use error::{Error, Result};
pub use pool::{Color, Node, NodeId, NodePool, SlabPool};
pub use tree::RbTree;
pub use walker::{Handles, Iter, Walker};
