use thiserror::Error;

use crate::types::NodeRef;

/// A broken red-black or search-tree invariant, reported by
/// [`validate`](crate::validate::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("root {0} has a parent")]
    RootHasParent(NodeRef),
    #[error("root {0} is not black")]
    RootNotBlack(NodeRef),
    #[error("broken parent link between {parent} and child {child}")]
    BrokenParentLink { parent: NodeRef, child: NodeRef },
    #[error("red node {parent} has red child {child}")]
    RedRed { parent: NodeRef, child: NodeRef },
    #[error("black height mismatch under {node}: left {left}, right {right}")]
    BlackHeightMismatch {
        node: NodeRef,
        left: usize,
        right: usize,
    },
    #[error("node {node} is not ordered after {prev}")]
    OrderViolated { prev: NodeRef, node: NodeRef },
}
