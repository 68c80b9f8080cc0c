//! An insertion-ordered map: hashed lookup plus deterministic enumeration in
//! the order keys were first inserted.
//!
//! ```
//! use orderedmap_rs::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert(5, "e");
//! map.insert(3, "c");
//! map.insert(5, "E"); //value replaced, position kept
//!
//! assert_eq!(map.keys().collect::<Vec<_>>(), [&5, &3]);
//! assert_eq!(map.get(&5), Some(&"E"));
//! ```
//!
//! The map is a plain single-threaded value with no internal synchronization.
//! Callers that share one across threads must wrap it in their own lock.

mod ordered_map;

pub use ordered_map::{IntOrderedMap, Iter, Keys, OrderedMap, Values};
