// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::mem;
use std::num::NonZero;

use crate::{Error, Result};

const ERR_STALE_HANDLE: &str = "node handle does not refer to a live node in this pool";

/// Stable handle to a node owned by a [`NodePool`].
///
/// A handle remains valid from the moment its node is allocated until the node is removed
/// from the tree. Moving the tree, growing the pool or rebalancing never invalidates it.
/// After removal the pool may hand the same handle out again for a new node.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(NonZero<usize>);

impl NodeId {
    /// Creates the handle for the slot at `index` of a pool.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(NonZero::<usize>::MIN.saturating_add(index))
    }

    /// The slot index this handle refers to.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.get() - 1
    }
}

/// The color of a tree node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Color {
    /// Newly linked nodes start out red.
    Red,
    /// The root and every child of a red node are black.
    Black,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Links {
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) color: Color,
}

impl Links {
    const fn detached() -> Self {
        Self {
            parent: None,
            left: None,
            right: None,
            next: None,
            color: Color::Red,
        }
    }
}

/// A tree node as stored in a [`NodePool`]: the caller's value plus the tree and list links.
///
/// Pools only store and hand back nodes; the links are maintained by the tree.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    pub(crate) links: Links,
}

impl<T> Node<T> {
    pub(crate) const fn detached(value: T) -> Self {
        Self {
            value,
            links: Links::detached(),
        }
    }

    /// The value carried by this node.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// The value carried by this node.
    #[must_use]
    pub const fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the node, returning its value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// The color the tree last assigned to this node.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.links.color
    }
}

/// Storage for the nodes of a tree.
///
/// The tree never allocates nodes by itself; every node lives in the pool it was constructed
/// with. Implementations must keep a node at the same handle for as long as it is alive.
///
/// Passing a handle that does not refer to a live node to [`release`][Self::release],
/// [`get`][Self::get] or [`get_mut`][Self::get_mut] is a programming error and implementations
/// are expected to panic.
pub trait NodePool<T> {
    /// Stores `node` and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot hold another node. The node is dropped.
    fn allocate(&mut self, node: Node<T>) -> Result<NodeId>;

    /// Removes the node from the pool, returning it. The handle becomes available for reuse.
    fn release(&mut self, id: NodeId) -> Node<T>;

    /// The node with the given handle.
    fn get(&self, id: NodeId) -> &Node<T>;

    /// The node with the given handle.
    fn get_mut(&mut self, id: NodeId) -> &mut Node<T>;

    /// Makes room for at least `additional` more nodes so that the next `additional` calls to
    /// [`allocate`][Self::allocate] cannot fail.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot guarantee room for that many nodes.
    fn reserve(&mut self, additional: usize) -> Result<()>;

    /// Releases every node at once, retaining the memory for later reuse.
    fn release_all(&mut self);

    /// Number of live nodes.
    fn len(&self) -> usize;

    /// Whether the pool holds no live nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes the pool can hold without acquiring more memory.
    fn capacity(&self) -> usize;
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// The default [`NodePool`]: a growable vector of slots with a free list.
///
/// Released slots are reused, most recently released first, before the vector grows.
/// An optional limit on the number of live nodes turns the pool into a bounded one, whose
/// allocation failures the tree reports without modifying itself.
#[derive(Debug)]
pub struct SlabPool<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    live: usize,
    max_nodes: Option<usize>,
}

impl<T> SlabPool<T> {
    /// Creates an empty, unbounded pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live: 0,
            max_nodes: None,
        }
    }

    /// Creates an empty, unbounded pool with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Limits the pool to at most `max_nodes` live nodes.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// The limit on live nodes, if any.
    #[must_use]
    pub fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    fn ensure_room(&self, additional: usize) -> Result<()> {
        match self.max_nodes {
            Some(limit) if self.live.saturating_add(additional) > limit => Err(Error::PoolExhausted { live: self.live, limit }),
            _ => Ok(()),
        }
    }
}

impl<T> Default for SlabPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodePool<T> for SlabPool<T> {
    fn allocate(&mut self, node: Node<T>) -> Result<NodeId> {
        self.ensure_room(1)?;

        let index = match self.free_head {
            Some(index) => {
                let previous = mem::replace(&mut self.slots[index], Slot::Occupied(node));
                let Slot::Vacant { next_free } = previous else {
                    unreachable!("free list points at an occupied slot");
                };
                self.free_head = next_free;
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        };

        self.live += 1;
        Ok(NodeId::from_index(index))
    }

    fn release(&mut self, id: NodeId) -> Node<T> {
        let index = id.index();
        assert!(matches!(self.slots.get(index), Some(Slot::Occupied(_))), "{ERR_STALE_HANDLE}");

        let previous = mem::replace(
            &mut self.slots[index],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        let Slot::Occupied(node) = previous else {
            unreachable!("slot was checked to be occupied");
        };

        self.free_head = Some(index);
        self.live -= 1;
        node
    }

    fn get(&self, id: NodeId) -> &Node<T> {
        match self.slots.get(id.index()) {
            Some(Slot::Occupied(node)) => node,
            _ => stale_handle(),
        }
    }

    fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots.get_mut(id.index()) {
            Some(Slot::Occupied(node)) => node,
            _ => stale_handle(),
        }
    }

    fn reserve(&mut self, additional: usize) -> Result<()> {
        self.ensure_room(additional)?;

        let vacant = self.slots.len() - self.live;
        self.slots.reserve(additional.saturating_sub(vacant));
        Ok(())
    }

    fn release_all(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }

    fn len(&self) -> usize {
        self.live
    }

    fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

#[cold]
#[expect(clippy::panic, reason = "using a released handle is a programming error")]
fn stale_handle() -> ! {
    panic!("{ERR_STALE_HANDLE}");
}
