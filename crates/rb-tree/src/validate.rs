//! Invariant checker.
//!
//! Verifies parent links, root color, red-red adjacency, equal black height
//! and strict in-order ordering. Used by tests after every mutation and by
//! the demo driver once a run completes.

use crate::error::InvariantError;
use crate::types::{ColoredNode, NodeRef, RbNodeLike};
use crate::util::{first, get_l, get_p, get_r, next};

/// Black height of `node` counting `node` itself; `0` for a nil leaf.
fn black_height<N: ColoredNode>(
    arena: &[N],
    node: Option<NodeRef>,
) -> Result<usize, InvariantError> {
    let Some(node) = node else {
        return Ok(0);
    };

    let l = get_l(arena, node);
    let r = get_r(arena, node);
    let red = !arena[node as usize].is_black();

    for child in [l, r].into_iter().flatten() {
        if get_p(arena, child) != Some(node) {
            return Err(InvariantError::BrokenParentLink {
                parent: node,
                child,
            });
        }
        if red && !arena[child as usize].is_black() {
            return Err(InvariantError::RedRed {
                parent: node,
                child,
            });
        }
    }

    let left = black_height(arena, l)?;
    let right = black_height(arena, r)?;
    if left != right {
        return Err(InvariantError::BlackHeightMismatch { node, left, right });
    }

    Ok(left + usize::from(!red))
}

/// Checks every invariant of the tree rooted at `root`.
pub fn validate<T, N>(arena: &[N], root: Option<NodeRef>) -> Result<(), InvariantError>
where
    T: Ord,
    N: RbNodeLike<T>,
{
    let Some(root) = root else {
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err(InvariantError::RootHasParent(root));
    }
    if !arena[root as usize].is_black() {
        return Err(InvariantError::RootNotBlack(root));
    }

    black_height(arena, Some(root))?;

    let mut prev: Option<NodeRef> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(p) = prev {
            if arena[p as usize].payload() >= arena[i as usize].payload() {
                return Err(InvariantError::OrderViolated { prev: p, node: i });
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
