//! An ordered dictionary implemented with an augmented AVL tree.
//!
//! [`AvlTreeMap`] keeps per-node height and balance factor, a handle to the
//! node with the greatest key, and a running count of perfectly balanced
//! nodes. Insertion can locate its position from the root or by finger
//! search from the maximum ([`InsertStrategy`]), which is cheap for ascending
//! key sequences. Insertion and deletion return the number of rebalancing
//! operations they performed.
//!
//! ```
//! use avl_dict::{AvlTreeMap, InsertStrategy, Link};
//!
//! let mut map = AvlTreeMap::new();
//! map.insert(2, "two", InsertStrategy::FromRoot);
//! map.insert(1, "one", InsertStrategy::FromRoot);
//! map.insert(3, "three", "max".parse().unwrap());
//!
//! let two = map.search(&2).unwrap();
//! let one = map.search(&1).unwrap();
//! assert_eq!(map.predecessor(Link::Node(two)), Some(Link::Node(one)));
//! assert_eq!(map.predecessor(Link::Node(one)), Some(Link::Sentinel));
//!
//! assert_eq!(map.delete(two), 0);
//! assert_eq!(map.to_sorted_vec(), vec![(&1, &"one"), (&3, &"three")]);
//! ```

mod error;
mod map;
mod node;
mod shape;

pub use error::{Error, InsertStrategy, Result};
pub use map::{AvlTreeMap, Iter};
pub use node::{Link, NodeId};
pub use shape::Shape;

#[cfg(test)]
mod proptests;
