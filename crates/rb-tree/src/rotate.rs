//! Rotation primitives.
//!
//! Both rotations are O(1), keep the in-order sequence intact and never
//! touch colors. A rotation whose promoted child is missing leaves the tree
//! as it is and returns `false`; fixup only rotates after it has seen that
//! child.

use log::trace;

use crate::types::{Node, NodeRef};
use crate::util::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Points whatever referenced `old` (its parent's child slot, or the root
/// handle) at `new` instead.
fn replace_child<N: Node>(
    arena: &mut [N],
    root: &mut Option<NodeRef>,
    parent: Option<NodeRef>,
    old: NodeRef,
    new: NodeRef,
) {
    set_p(arena, new, parent);
    match parent {
        None => *root = Some(new),
        Some(p) if get_l(arena, p) == Some(old) => set_l(arena, p, Some(new)),
        Some(p) => set_r(arena, p, Some(new)),
    }
}

/// Promotes `n.r` into `n`'s position; `n` becomes its left child.
pub fn rotate_left<N: Node>(arena: &mut [N], root: &mut Option<NodeRef>, n: NodeRef) -> bool {
    let Some(nr) = get_r(arena, n) else {
        return false;
    };
    trace!("rotate_left at {n}, promoting {nr}");

    let nrl = get_l(arena, nr);
    set_r(arena, n, nrl);
    if let Some(nrl) = nrl {
        set_p(arena, nrl, Some(n));
    }

    let p = get_p(arena, n);
    replace_child(arena, root, p, n, nr);

    set_l(arena, nr, Some(n));
    set_p(arena, n, Some(nr));
    true
}

/// Promotes `n.l` into `n`'s position; `n` becomes its right child.
pub fn rotate_right<N: Node>(arena: &mut [N], root: &mut Option<NodeRef>, n: NodeRef) -> bool {
    let Some(nl) = get_l(arena, n) else {
        return false;
    };
    trace!("rotate_right at {n}, promoting {nl}");

    let nlr = get_r(arena, nl);
    set_l(arena, n, nlr);
    if let Some(nlr) = nlr {
        set_p(arena, nlr, Some(n));
    }

    let p = get_p(arena, n);
    replace_child(arena, root, p, n, nl);

    set_r(arena, nl, Some(n));
    set_p(arena, n, Some(nl));
    true
}
