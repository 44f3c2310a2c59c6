//! An ordered map on a plain binary search tree, and the book catalog indexes
//! built from it.
//!
//! [`BstMap`] keeps one node per distinct key in an unbalanced binary search
//! tree. Besides the usual map operations it extracts its keys or values into
//! a caller-supplied buffer in ascending key order:
//!
//! - [`to_key_array`](BstMap::to_key_array) - every key, ascending
//! - [`to_value_array`](BstMap::to_value_array) - every value, ordered by its key
//! - [`try_get`](BstMap::try_get) / [`try_contains_key`](BstMap::try_contains_key) -
//!   lookups that reject an absent key with [`Error::MissingKey`]
//!
//! # Example
//!
//! ```
//! use bst_catalog::BstMap;
//!
//! let mut map = BstMap::new();
//! map.insert("B", 2);
//! map.insert("A", 1);
//! map.insert("C", 3);
//!
//! assert_eq!(map.get("A"), Some(&1));
//! assert!(!map.contains_key("D"));
//! assert_eq!(map.to_key_array(Vec::with_capacity(1))?, ["A", "B", "C"]);
//! assert_eq!(map.to_value_array(Vec::with_capacity(8))?, [1, 2, 3]);
//! # Ok::<(), bst_catalog::Error>(())
//! ```
//!
//! # Features
//!
//! - **`std`** (default) - the [`catalog`] module: parsing a delimited book
//!   file into one [`BstMap`] per browsable field, and a cursor to walk them.
//!   Without it the crate is `no_std` and only needs `alloc`.
//!
//! # Implementation
//!
//! Nodes live in an arena owned by the map and link to their children by
//! index. The tree is never rebalanced, so keys inserted in sorted order
//! produce a chain as tall as the map is long; every traversal is iterative so
//! such chains cost time but never stack depth.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod bst_map;
#[cfg(feature = "std")]
pub mod catalog;
pub mod error;

pub use bst_map::BstMap;
pub use error::{Error, Result};
