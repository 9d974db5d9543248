//! Node storage.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Child slots
//! hold a [`Link`], so a missing child is the [`Link::Sentinel`] tag rather
//! than a separately allocated placeholder node.

use std::ops::{Index, IndexMut};

/// Handle to a node of an [`AvlTreeMap`](crate::AvlTreeMap).
///
/// A handle stays valid until its node is removed from the tree. Handles to
/// removed nodes are stale: they never alias a node inserted later and every
/// accessor reports them as not present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// A child slot: either a present node or the sentinel marking "no child here".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    Node(NodeId),
    Sentinel,
}

impl Link {
    /// Returns true if the link refers to a node (which may still be stale).
    pub fn is_node(self) -> bool {
        matches!(self, Link::Node(_))
    }

    /// Returns the referenced node handle, if any.
    pub fn node(self) -> Option<NodeId> {
        match self {
            Link::Node(id) => Some(id),
            Link::Sentinel => None,
        }
    }
}

impl From<NodeId> for Link {
    fn from(id: NodeId) -> Self {
        Link::Node(id)
    }
}

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link,
    pub(crate) right: Link,
    pub(crate) parent: Option<NodeId>,
    pub(crate) height: i32,
    pub(crate) balance: i32,
}

impl<K, V> Node<K, V> {
    /// A fresh leaf: two sentinel children, height 0, balanced.
    pub(crate) fn leaf(key: K, value: V, parent: Option<NodeId>) -> Self {
        Node {
            key,
            value,
            left: Link::Sentinel,
            right: Link::Sentinel,
            parent,
            height: 0,
            balance: 0,
        }
    }
}

#[derive(Clone)]
struct Slot<K, V> {
    generation: u32,
    node: Option<Node<K, V>>,
}

#[derive(Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Vec<usize>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<K, V>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                debug_assert!(slot.node.is_none());
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Frees the slot of `id`, returning its node. Outstanding handles to it become stale.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node<K, V>> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(node)
    }

    /// Frees every slot. Keeps the allocation for reuse.
    pub(crate) fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
            }
        }
    }
}

impl<K, V> Index<NodeId> for Arena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, id: NodeId) -> &Node<K, V> {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale node handle {id:?}"),
        }
    }
}

impl<K, V> IndexMut<NodeId> for Arena<K, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("stale node handle {id:?}"),
        }
    }
}
