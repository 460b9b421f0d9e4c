//! Insertion fixup.
//!
//! Runs on a freshly linked red node. The only invariant that may be broken
//! at that point is "no red node has a red child", and only between the new
//! node and its parent. Each recoloring step moves that spot two levels up;
//! the rotation cases end the repair.

use log::trace;

use crate::rotate::{rotate_left, rotate_right};
use crate::types::{Color, ColoredNode, NodeRef};
use crate::util::{get_l, get_p, get_r};

#[inline]
fn paint<N: ColoredNode>(arena: &mut [N], i: NodeRef, color: Color) {
    arena[i as usize].set_color(color);
}

/// Restores the red-black invariants after `n` was linked in as a red leaf.
pub fn fixup<N: ColoredNode>(arena: &mut [N], root: &mut Option<NodeRef>, n: NodeRef) {
    let Some(mut p) = get_p(arena, n) else {
        paint(arena, n, Color::Black);
        return;
    };
    if arena[p as usize].is_black() {
        return;
    }

    // A red parent is never the root.
    let Some(g) = get_p(arena, p) else {
        paint(arena, p, Color::Black);
        return;
    };

    let parent_is_left = get_l(arena, g) == Some(p);
    let uncle = if parent_is_left {
        get_r(arena, g)
    } else {
        get_l(arena, g)
    };

    if let Some(u) = uncle.filter(|&u| !arena[u as usize].is_black()) {
        trace!("fixup at {n}: red uncle {u}, recoloring and moving up to {g}");
        paint(arena, g, Color::Red);
        paint(arena, p, Color::Black);
        paint(arena, u, Color::Black);
        fixup(arena, root, g);
        return;
    }

    if parent_is_left {
        if get_r(arena, p) == Some(n) {
            trace!("fixup at {n}: straightening left-right triangle");
            rotate_left(arena, root, p);
            // `n` now sits where the parent was.
            p = n;
        }
        trace!("fixup at {p}: rotating right at {g}");
        rotate_right(arena, root, g);
    } else {
        if get_l(arena, p) == Some(n) {
            trace!("fixup at {n}: straightening right-left triangle");
            rotate_right(arena, root, p);
            p = n;
        }
        trace!("fixup at {p}: rotating left at {g}");
        rotate_left(arena, root, g);
    }

    paint(arena, p, Color::Black);
    paint(arena, g, Color::Red);
}
