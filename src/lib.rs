//! An in-memory B+ tree map for Rust.
//!
//! This crate provides [`BPTreeMap`], an ordered map backed by a B+ tree with a
//! configurable maximum fanout and a forward-linked leaf level:
//!
//! - [`insert`](BPTreeMap::insert) / [`get`](BPTreeMap::get) /
//!   [`remove`](BPTreeMap::remove) - point operations in O(log n)
//! - [`iter`](BPTreeMap::iter) - in-order iteration driven by the leaf chain,
//!   without touching inner nodes
//! - [`check`](BPTreeMap::check) - a diagnostic validation pass that reports
//!   every structural invariant violation instead of aborting
//!
//! # Example
//!
//! ```
//! use bramble_tree::BPTreeMap;
//!
//! let mut scores = BPTreeMap::new(16).expect("order >= 3");
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Entries come back in key order via the leaf chain.
//! let names: Vec<_> = scores.keys().copied().collect();
//! assert_eq!(names, ["Alice", "Bob", "Carol"]);
//!
//! assert_eq!(scores.remove(&"Bob"), Some(85));
//! assert_eq!(scores.get(&"Bob"), None);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Runtime fanout** - The maximum node fanout is a constructor parameter
//!   (minimum 3), so the same type covers narrow test trees and wide production ones
//! - **Arena-backed** - All nodes live in one contiguous slot arena addressed by
//!   handles; parent links and the leaf chain are plain indices, never owners
//! - **No unsafe code** - The crate forbids `unsafe` outright
//!
//! # Implementation
//!
//! The map is a B+ tree: all entries live in leaf nodes, inner nodes hold only
//! separator keys, and the leaves form a forward-linked chain for iteration.
//! A node holds at most `order - 1` keys and splits when it reaches `order`;
//! every non-root node keeps at least `(order - 1) / 2` keys, restored after
//! deletions by borrowing from a sibling or merging with one, with underflow
//! repair cascading toward the root. The tree is single-threaded; callers that
//! need concurrent access must serialize externally.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
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

mod error;
mod raw;

pub mod bptree_map;

pub use bptree_map::BPTreeMap;
pub use error::{Error, InvariantViolation};
