use std::cmp::{self, Ordering};
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use log::{debug, trace, warn};

use crate::error::InsertStrategy;
use crate::node::{Arena, Link, Node, NodeId};
use crate::shape::Shape;

/// An ordered dictionary implemented with an AVL tree.
///
/// Besides the usual height bookkeeping the tree tracks its maximum node and
/// the number of nodes whose balance factor is exactly zero (see
/// [`balance_quality`](Self::balance_quality)). Nodes are addressed by
/// [`NodeId`] handles; mutating operations report how many rebalancing
/// operations they performed.
///
/// ```
/// use avl_dict::{AvlTreeMap, InsertStrategy};
/// let mut map = AvlTreeMap::new();
/// for key in 1..=7 {
///     map.insert(key, key * 10, InsertStrategy::FromMax);
/// }
/// let root = map.root().unwrap();
/// assert_eq!(map.key(root), Some(&4));
/// let node = map.search(&5).unwrap();
/// map.delete(node);
/// assert_eq!(map.get(&5), None);
/// assert_eq!(map.size(), 6);
/// ```
#[derive(Clone)]
pub struct AvlTreeMap<K, V> {
    nodes: Arena<K, V>,
    root: Option<NodeId>,
    max: Option<NodeId>,
    num_nodes: usize,
    zero_balance_count: usize,
}

/// An in-order iterator over the entries of a map.
pub struct Iter<'a, K, V> {
    map: &'a AvlTreeMap<K, V>,
    next: Option<NodeId>,
    remaining: usize,
}

#[cfg(any(test, feature = "consistency_check"))]
#[allow(clippy::enum_variant_names)]
enum Direction {
    FromParent,
    FromLeft,
    FromRight,
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Creates an empty map.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            max: None,
            num_nodes: 0,
            zero_balance_count: 0,
        }
    }

    /// Returns true if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the number of elements in the map. Same as [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.num_nodes
    }

    /// Returns the root node, or `None` if the map is empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the node holding the greatest key, or `None` if the map is empty.
    pub fn max(&self) -> Option<NodeId> {
        self.max
    }

    /// Returns the height of the tree: -1 when empty, 0 for a single node.
    pub fn height(&self) -> i32 {
        self.link_height(self.root_link())
    }

    /// Returns the number of nodes whose balance factor is zero.
    pub fn zero_balance_count(&self) -> usize {
        self.zero_balance_count
    }

    /// Returns the share of nodes with balance factor zero, in `[0, 1]`.
    /// An empty map reports 0.
    pub fn balance_quality(&self) -> f64 {
        if self.num_nodes == 0 {
            return 0.0;
        }
        self.zero_balance_count as f64 / self.num_nodes as f64
    }

    /// Clears the map, invalidating all node handles.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.max = None;
        self.num_nodes = 0;
        self.zero_balance_count = 0;
    }

    /// Returns true if `node` refers to a node currently stored in the map.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(node)
    }

    /// Returns the key stored at `node`.
    pub fn key(&self, node: NodeId) -> Option<&K> {
        self.nodes.get(node).map(|n| &n.key)
    }

    /// Returns the value stored at `node`.
    pub fn value(&self, node: NodeId) -> Option<&V> {
        self.nodes.get(node).map(|n| &n.value)
    }

    /// Returns a mutable reference to the value stored at `node`.
    pub fn value_mut(&mut self, node: NodeId) -> Option<&mut V> {
        self.nodes.get_mut(node).map(|n| &mut n.value)
    }

    /// Returns the left child link of `node`.
    pub fn left(&self, node: NodeId) -> Option<Link> {
        self.nodes.get(node).map(|n| n.left)
    }

    /// Returns the right child link of `node`.
    pub fn right(&self, node: NodeId) -> Option<Link> {
        self.nodes.get(node).map(|n| n.right)
    }

    /// Returns the parent of `node`; `None` for the root or a stale handle.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    /// Returns the height of the subtree rooted at `node`.
    pub fn node_height(&self, node: NodeId) -> Option<i32> {
        self.nodes.get(node).map(|n| n.height)
    }

    /// Returns the balance factor (left height minus right height) of `node`.
    pub fn balance_factor(&self, node: NodeId) -> Option<i32> {
        self.nodes.get(node).map(|n| n.balance)
    }

    /// Returns the node holding `key`, or `None` if the key is absent.
    ///
    /// Note that the in-order neighbour queries signal "no such node"
    /// differently, see [`predecessor`](Self::predecessor).
    pub fn search(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match key.cmp(&node.key) {
                Ordering::Equal => break,
                Ordering::Less => node.left.node(),
                Ordering::Greater => node.right.node(),
            };
        }
        current
    }

    /// Returns a reference to the value corresponding to the key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.search(key).map(|id| &self.nodes[id].value)
    }

    /// Returns references to the key-value pair corresponding to the key.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.search(key).map(|id| {
            let node = &self.nodes[id];
            (&node.key, &node.value)
        })
    }

    /// Returns true if the map contains a value for the key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Inserts a key-value pair and returns the number of rebalancing operations.
    ///
    /// The key must not be present yet; inserting a duplicate key is a logic
    /// error (caught by a debug assertion).
    ///
    /// Every rotation counts (a double rotation counts twice), as does every
    /// height increase propagated to an ancestor.
    pub fn insert(&mut self, key: K, value: V, strategy: InsertStrategy) -> usize {
        debug_assert!(self.search(&key).is_none(), "duplicate key inserted");
        self.num_nodes += 1;
        // A fresh leaf is balanced.
        self.zero_balance_count += 1;

        let Some((parent, comparisons)) = self.find_insert_parent(&key, strategy) else {
            let id = self.nodes.alloc(Node::leaf(key, value, None));
            self.root = Some(id);
            self.max = Some(id);
            debug!("insert: new root {id:?}");
            return 0;
        };

        let goes_left = key < self.nodes[parent].key;
        let new_id = self.nodes.alloc(Node::leaf(key, value, Some(parent)));
        if goes_left {
            self.nodes[parent].left = Link::Node(new_id);
        } else {
            self.nodes[parent].right = Link::Node(new_id);
        }

        let rotations = self.rebalance_after_insert(new_id);

        if let Some(max) = self.max {
            if self.nodes[new_id].key > self.nodes[max].key {
                self.max = Some(new_id);
            }
        }
        debug!(
            "insert ({strategy}): {comparisons} comparisons, {rotations} rebalancing operations"
        );
        rotations
    }

    /// Removes `node` from the map and returns the number of rebalancing operations.
    ///
    /// If `node` has two children its in-order successor is moved into it and
    /// the successor's slot is freed instead, so `node` stays valid (now
    /// holding the successor's entry) while the successor's handle goes stale.
    ///
    /// `node` must be present in this map. Debug builds panic otherwise;
    /// release builds log a warning and return 0.
    pub fn delete(&mut self, node: NodeId) -> usize {
        self.delete_entry(node)
            .map(|(_, operations)| operations)
            .unwrap_or(0)
    }

    /// Removes a key from the map.
    /// Returns the value at the key if the key was previously in the map.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.search(key)?;
        self.delete_entry(id).map(|((_, value), _)| value)
    }

    /// Returns the in-order predecessor of `node`.
    ///
    /// - `Some(Link::Node(p))`: the predecessor is `p`.
    /// - `Some(Link::Sentinel)`: `node` is present but holds the smallest key.
    /// - `None`: `node` is not present (a sentinel or a stale handle).
    ///
    /// This differs from [`search`](Self::search), which uses `None` for "not found".
    pub fn predecessor(&self, node: Link) -> Option<Link> {
        let id = self.present(node)?;
        Some(self.predecessor_of(id).map_or(Link::Sentinel, Link::Node))
    }

    /// Returns the in-order successor of `node`.
    /// Absence is signaled as in [`predecessor`](Self::predecessor).
    pub fn successor(&self, node: Link) -> Option<Link> {
        let id = self.present(node)?;
        Some(self.successor_of(id).map_or(Link::Sentinel, Link::Node))
    }

    /// Returns all entries in key order, freshly collected.
    pub fn to_sorted_vec(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// Gets an in-order iterator over the entries of the map.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            map: self,
            next: self.root.map(|root| self.leftmost(root)),
            remaining: self.num_nodes,
        }
    }

    /// Returns a displayable text diagram of the tree, for debugging.
    pub fn shape(&self) -> Shape<'_, K, V> {
        Shape::new(self)
    }

    pub(crate) fn root_link(&self) -> Link {
        self.root.map_or(Link::Sentinel, Link::Node)
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id]
    }

    /// Finds the node below which `key` is to be inserted.
    /// Returns it along with the number of key comparisons spent, or `None` if the tree is empty.
    pub(crate) fn find_insert_parent(
        &self,
        key: &K,
        strategy: InsertStrategy,
    ) -> Option<(NodeId, usize)> {
        let root = self.root?;
        let mut comparisons = 0;

        let mut current = match (strategy, self.max) {
            (InsertStrategy::FromMax, Some(max)) if max != root => {
                // Climb the right spine until the key fits below
                let mut finger = max;
                while let Some(parent) = self.nodes[finger].parent {
                    comparisons += 1;
                    if self.nodes[finger].key <= *key {
                        break;
                    }
                    finger = parent;
                }
                finger
            }
            _ => root,
        };

        loop {
            comparisons += 1;
            let node = &self.nodes[current];
            let next = if *key < node.key {
                node.left
            } else {
                node.right
            };
            match next {
                Link::Node(child) => current = child,
                Link::Sentinel => return Some((current, comparisons)),
            }
        }
    }

    fn delete_entry(&mut self, node: NodeId) -> Option<((K, V), usize)> {
        if !self.nodes.contains(node) {
            if cfg!(debug_assertions) {
                panic!("delete of {node:?}, which is not present in this map");
            }
            warn!("ignoring delete of {node:?}, which is not present in this map");
            return None;
        }

        if self.num_nodes == 1 && self.root == Some(node) {
            let removed = self.nodes.release(node)?;
            self.clear();
            debug!("delete: map is now empty");
            return Some(((removed.key, removed.value), 0));
        }

        // Re-locate by key
        let Some(found) = self.search(&self.nodes[node].key) else {
            if cfg!(debug_assertions) {
                panic!("{node:?} is not reachable from the root of this map");
            }
            warn!("ignoring delete of unreachable {node:?}");
            return None;
        };

        let mut target = found;
        if let (Link::Node(_), Link::Node(right)) = (self.nodes[found].left, self.nodes[found].right)
        {
            target = self.leftmost(right);
        }

        let (child, parent, balance) = {
            let t = &self.nodes[target];
            let child = if t.left.is_node() { t.left } else { t.right };
            (child, t.parent, t.balance)
        };
        if balance == 0 {
            self.zero_balance_count -= 1;
        }
        if self.max == Some(target) {
            self.max = self.predecessor_of(target);
        }

        self.replace_child(parent, target, child);
        if let Link::Node(child) = child {
            self.nodes[child].parent = parent;
        }

        let Some(mut removed) = self.nodes.release(target) else {
            unreachable!("removal target {target:?} vanished");
        };
        if target != found {
            // Successor's entry moves into the found node
            let slot = &mut self.nodes[found];
            mem::swap(&mut slot.key, &mut removed.key);
            mem::swap(&mut slot.value, &mut removed.value);
        }

        let operations = self.rebalance_after_delete(parent);
        self.num_nodes -= 1;
        debug!("delete: {operations} rebalancing operations");
        Some(((removed.key, removed.value), operations))
    }

    /// Walks up from a freshly inserted leaf, refreshing metadata and rotating.
    ///
    /// Rotation choice compares the inserted key with the child's key. The
    /// walk stops at the second consecutive node whose height did not change.
    fn rebalance_after_insert(&mut self, new_id: NodeId) -> usize {
        let mut rotations = 0;
        let mut extend_once = false;
        let mut current = Some(new_id);

        while let Some(mut id) = current {
            let previous_height = self.nodes[id].height;
            self.refresh_metadata(id);
            let height_changed = previous_height != self.nodes[id].height;
            let balance = self.nodes[id].balance;

            if balance > 1 {
                let outer = match self.nodes[id].left {
                    Link::Node(left) => self.nodes[new_id].key < self.nodes[left].key,
                    Link::Sentinel => false,
                };
                if outer {
                    id = self.rotate_right(id);
                    rotations += 1;
                } else {
                    id = self.rotate_left_right(id);
                    rotations += 2;
                }
            } else if balance < -1 {
                let outer = match self.nodes[id].right {
                    Link::Node(right) => self.nodes[new_id].key > self.nodes[right].key,
                    Link::Sentinel => false,
                };
                if outer {
                    id = self.rotate_left(id);
                    rotations += 1;
                } else {
                    id = self.rotate_right_left(id);
                    rotations += 2;
                }
            } else if !height_changed {
                if extend_once {
                    trace!("insert ascent stops at {id:?}");
                    break;
                }
                extend_once = true;
            } else {
                rotations += 1;
            }

            current = self.nodes[id].parent;
        }
        rotations
    }

    /// Walks up from the parent of a removed node, refreshing metadata and rotating.
    ///
    /// Rotation choice looks at the balance factor of the taller child. The
    /// walk stops once a subtree keeps its height.
    fn rebalance_after_delete(&mut self, start_from: Option<NodeId>) -> usize {
        let mut operations = 0;
        let mut current = start_from;

        while let Some(mut id) = current {
            let previous_height = self.nodes[id].height;
            self.refresh_metadata(id);
            let balance = self.nodes[id].balance;

            if balance > 1 {
                if self.link_balance(self.nodes[id].left) < 0 {
                    id = self.rotate_left_right(id);
                    operations += 2;
                } else {
                    id = self.rotate_right(id);
                    operations += 1;
                }
            } else if balance < -1 {
                if self.link_balance(self.nodes[id].right) > 0 {
                    id = self.rotate_right_left(id);
                    operations += 2;
                } else {
                    id = self.rotate_left(id);
                    operations += 1;
                }
            }

            // Compare against whatever subtree root now occupies the position.
            let node = &self.nodes[id];
            if previous_height == node.height && node.balance.abs() < 2 {
                trace!("delete ascent stops at {id:?}");
                break;
            }
            operations += 1;
            current = node.parent;
        }
        operations
    }

    /// Recomputes height and balance factor of `id` from its children,
    /// which must already be up to date.
    fn refresh_metadata(&mut self, id: NodeId) {
        let (left, right) = {
            let node = &self.nodes[id];
            (node.left, node.right)
        };
        let left_height = self.link_height(left);
        let right_height = self.link_height(right);

        let node = &mut self.nodes[id];
        let previous = node.balance;
        node.height = 1 + cmp::max(left_height, right_height);
        node.balance = left_height - right_height;
        let balance = node.balance;

        if previous == 0 && balance != 0 {
            self.zero_balance_count -= 1;
        } else if previous != 0 && balance == 0 {
            self.zero_balance_count += 1;
        }
    }

    /// Promotes the right child of `x` and returns it.
    fn rotate_left(&mut self, x: NodeId) -> NodeId {
        let Link::Node(y) = self.nodes[x].right else {
            debug_assert!(self.nodes[x].right.is_node(), "rotate_left without right child");
            return x;
        };
        let inner = self.nodes[y].left;
        let parent = self.nodes[x].parent;

        self.nodes[x].right = inner;
        if let Link::Node(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        self.nodes[y].parent = parent;
        self.replace_child(parent, x, Link::Node(y));

        self.nodes[y].left = Link::Node(x);
        self.nodes[x].parent = Some(y);

        self.refresh_metadata(x);
        self.refresh_metadata(y);
        trace!("rotate left: {y:?} replaces {x:?}");
        y
    }

    /// Promotes the left child of `y` and returns it.
    fn rotate_right(&mut self, y: NodeId) -> NodeId {
        let Link::Node(x) = self.nodes[y].left else {
            debug_assert!(self.nodes[y].left.is_node(), "rotate_right without left child");
            return y;
        };
        let inner = self.nodes[x].right;
        let parent = self.nodes[y].parent;

        self.nodes[y].left = inner;
        if let Link::Node(inner) = inner {
            self.nodes[inner].parent = Some(y);
        }

        self.nodes[x].parent = parent;
        self.replace_child(parent, y, Link::Node(x));

        self.nodes[x].right = Link::Node(y);
        self.nodes[y].parent = Some(x);

        self.refresh_metadata(y);
        self.refresh_metadata(x);
        trace!("rotate right: {x:?} replaces {y:?}");
        x
    }

    fn rotate_left_right(&mut self, z: NodeId) -> NodeId {
        if let Link::Node(left) = self.nodes[z].left {
            let left = self.rotate_left(left);
            self.nodes[z].left = Link::Node(left);
            self.nodes[left].parent = Some(z);
        }
        self.rotate_right(z)
    }

    fn rotate_right_left(&mut self, z: NodeId) -> NodeId {
        if let Link::Node(right) = self.nodes[z].right {
            let right = self.rotate_right(right);
            self.nodes[z].right = Link::Node(right);
            self.nodes[right].parent = Some(z);
        }
        self.rotate_left(z)
    }

    /// Puts `new` into the slot of `parent` that holds `old`, or makes it the root.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Link) {
        match parent {
            None => self.root = new.node(),
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Link::Node(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            }
        }
    }

    fn predecessor_of(&self, id: NodeId) -> Option<NodeId> {
        if let Link::Node(left) = self.nodes[id].left {
            return Some(self.rightmost(left));
        }
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            if self.nodes[parent].right == Link::Node(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    fn successor_of(&self, id: NodeId) -> Option<NodeId> {
        if let Link::Node(right) = self.nodes[id].right {
            return Some(self.leftmost(right));
        }
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            if self.nodes[parent].left == Link::Node(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Link::Node(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Link::Node(right) = self.nodes[id].right {
            id = right;
        }
        id
    }

    fn present(&self, link: Link) -> Option<NodeId> {
        link.node().filter(|id| self.nodes.contains(*id))
    }

    fn link_height(&self, link: Link) -> i32 {
        match link {
            Link::Node(id) => self.nodes[id].height,
            Link::Sentinel => -1,
        }
    }

    fn link_balance(&self, link: Link) -> i32 {
        match link {
            Link::Node(id) => self.nodes[id].balance,
            Link::Sentinel => 0,
        }
    }

    /// Verifies every structural invariant by full scan. Panics on the first violation.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Check root link
        if let Some(root) = self.root {
            assert!(self.nodes[root].parent.is_none());
        }
        assert_eq!(self.root.is_some(), self.num_nodes > 0);

        // Check tree nodes
        let mut num_nodes = 0;
        let mut zero_balance_count = 0;
        let mut previous: Option<NodeId> = None;
        self.traverse(
            |id| {
                let node = &self.nodes[id];

                // Check link for left child node
                if let Link::Node(left) = node.left {
                    assert_eq!(self.nodes[left].parent, Some(id));
                    assert!(self.nodes[left].key < node.key);
                }

                // Check link for right child node
                if let Link::Node(right) = node.right {
                    assert_eq!(self.nodes[right].parent, Some(id));
                    assert!(self.nodes[right].key > node.key);
                }

                // Check height and balance factor
                let left_height = self.link_height(node.left);
                let right_height = self.link_height(node.right);
                assert_eq!(node.height, 1 + cmp::max(left_height, right_height));
                assert_eq!(node.balance, left_height - right_height);

                // Check AVL condition (nearly balance)
                assert!(node.balance.abs() <= 1);

                if node.balance == 0 {
                    zero_balance_count += 1;
                }
                num_nodes += 1;
            },
            |id| {
                if let Some(previous) = previous {
                    assert!(self.nodes[previous].key < self.nodes[id].key);
                }
                previous = Some(id);
            },
        );

        // Check counters and the max node
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(zero_balance_count, self.zero_balance_count);
        assert_eq!(previous, self.max);
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn traverse<Pre, In>(&self, mut preorder: Pre, mut inorder: In)
    where
        Pre: FnMut(NodeId),
        In: FnMut(NodeId),
    {
        if let Some(mut id) = self.root {
            let mut dir = Direction::FromParent;
            loop {
                match dir {
                    Direction::FromParent => {
                        preorder(id);
                        match self.nodes[id].left {
                            Link::Node(left) => id = left,
                            Link::Sentinel => dir = Direction::FromLeft,
                        }
                    }
                    Direction::FromLeft => {
                        inorder(id);
                        match self.nodes[id].right {
                            Link::Node(right) => {
                                id = right;
                                dir = Direction::FromParent;
                            }
                            Link::Sentinel => dir = Direction::FromRight,
                        }
                    }
                    Direction::FromRight => match self.nodes[id].parent {
                        Some(parent) => {
                            if self.nodes[parent].left == Link::Node(id) {
                                dir = Direction::FromLeft;
                            } else {
                                dir = Direction::FromRight;
                            }
                            id = parent;
                        }
                        None => break,
                    },
                }
            }
        }
    }
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTreeMap<K, V> {
    /// Inserts all pairs using the finger search from the maximum.
    /// A key that is already present gets its value replaced.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            match self.search(&key) {
                Some(id) => self.nodes[id].value = value,
                None => {
                    self.insert(key, value, InsertStrategy::FromMax);
                }
            }
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a AvlTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K: Ord, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let map = self.map;
        self.next = map.successor_of(id);
        self.remaining -= 1;
        let node = &map.nodes[id];
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Ord, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: Ord, V> FusedIterator for Iter<'_, K, V> {}
