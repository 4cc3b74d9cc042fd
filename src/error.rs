//! Error types for `bramble_tree`.

use thiserror::Error;

/// Errors surfaced to callers by construction.
///
/// Tree operations themselves are infallible on a valid tree: lookups and
/// deletions signal an absent key through their return value, and rebalancing
/// decisions are resolved internally.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The requested maximum fanout is too small for the split and merge
    /// arithmetic to be well-defined. The minimum accepted order is 3.
    #[error("invalid order {order}: a B+ tree requires an order of at least 3")]
    InvalidOrder {
        /// The rejected order.
        order: usize,
    },
}

/// A structural invariant violation found by [`check`](crate::BPTreeMap::check).
///
/// Each variant carries the arena index of the offending node so a caller can
/// correlate violations with a [`dump`](crate::BPTreeMap::dump) of the tree.
/// `check` collects every violation it finds rather than stopping at the
/// first; the caller decides whether to log, assert, or abort.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum InvariantViolation {
    /// A node's parent back-reference does not name its actual owner.
    #[error("node {node}: parent link does not match the owning node")]
    ParentMismatch {
        /// Arena index of the mis-linked node.
        node: usize,
    },

    /// A node holds at least `order` keys; it should have split.
    #[error("node {node}: holds {num_keys} keys, which order {order} does not allow")]
    OversizedNode {
        /// Arena index of the oversized node.
        node: usize,
        /// The node's recorded key count.
        num_keys: usize,
        /// The tree's configured maximum fanout.
        order: usize,
    },

    /// An inner node's child list is not exactly one longer than its key list.
    #[error("node {node}: inner node has {children} children for {num_keys} keys")]
    ChildCountMismatch {
        /// Arena index of the malformed inner node.
        node: usize,
        /// The node's recorded key count.
        num_keys: usize,
        /// The actual child count.
        children: usize,
    },

    /// A node's recorded key count disagrees with its stored keys (or, for a
    /// leaf, its stored values).
    #[error("node {node}: recorded {num_keys} keys but stores {stored}")]
    KeyCountMismatch {
        /// Arena index of the inconsistent node.
        node: usize,
        /// The node's recorded key count.
        num_keys: usize,
        /// The stored key (or value) sequence length.
        stored: usize,
    },

    /// The recorded depth is inconsistent with the shape of the root.
    #[error("recorded depth {depth} is inconsistent with the root node (leaf: {root_is_leaf})")]
    DepthMismatch {
        /// The tree's recorded depth.
        depth: usize,
        /// Whether the root is a leaf.
        root_is_leaf: bool,
    },
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn error_display() {
        let err = Error::InvalidOrder { order: 2 };
        assert_eq!(format!("{err}"), "invalid order 2: a B+ tree requires an order of at least 3");
    }

    #[test]
    fn violation_display() {
        let v = InvariantViolation::OversizedNode {
            node: 7,
            num_keys: 4,
            order: 4,
        };
        assert_eq!(format!("{v}"), "node 7: holds 4 keys, which order 4 does not allow");

        let v = InvariantViolation::DepthMismatch {
            depth: 2,
            root_is_leaf: true,
        };
        assert_eq!(format!("{v}"), "recorded depth 2 is inconsistent with the root node (leaf: true)");
    }
}
