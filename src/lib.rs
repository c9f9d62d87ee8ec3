//! A multi-level insertion-ordered map, addressed through key paths.
//!
//! A [`PathMap`] is a tree of [`Level`]s. Each key of a level maps to a [`Slot`],
//! which is either a nested [`Level`] or a leaf value.
//! Writes create missing intermediate levels on the way, but refuse to descend through a leaf.
//!
//! ```
//! use pathmap::{PathMap, Slot};
//!
//! let mut map = PathMap::new();
//! map.set(&["x", "y"], 1)?;
//!
//! assert!(map.is_map(&["x"]));
//! assert!(!map.is_map(&["x", "y"]));
//! assert_eq!(map.get(&["x", "y"])?, Some(&Slot::Leaf(1)));
//!
//! assert!(map.set(&["x", "y", "z"], 2).is_err());
//! # Ok::<(), pathmap::SetError<&str>>(())
//! ```
//!
//! # Performance Focus
//!
//! This implementation is optimised for relatively small entry counts per level,
//! like nested settings or hierarchical identifiers.
//! Keys only need to be [`Eq`], so lookups within a level are linear.
//!
//! # Concurrency
//!
//! [`PathMap`] does no internal synchronisation. Wrap the whole map in a lock to share it mutably.
//!
//! The iterators returned by [`PathMap::keys_at`] and friends borrow the map,
//! so it can't be mutated while they're alive.
#![no_std]
#![doc(html_root_url = "https://docs.rs/pathmap/0.0.1")]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::semicolon_if_nothing_returned)]

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
mod readme {}

extern crate alloc;

pub mod error;
pub mod iter;
mod level;
mod path_map;
mod slot;

pub use error::{ArgumentError, ConflictError, SetError};
pub use level::Level;
pub use path_map::PathMap;
pub use slot::Slot;
