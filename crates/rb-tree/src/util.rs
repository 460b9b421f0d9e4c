//! Link helpers and traversal over an arena slice.
//!
//! Everything here works on plain `&[N]` so it can be shared by the tree
//! engine, the invariant checker and tests that wire nodes by hand.

use std::cmp::Ordering;

use crate::types::{KeyOrd, Node, NodeRef, RbNodeLike};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: NodeRef) -> Option<NodeRef> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: NodeRef) -> Option<NodeRef> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: NodeRef) -> Option<NodeRef> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: NodeRef, v: Option<NodeRef>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: NodeRef, v: Option<NodeRef>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: NodeRef, v: Option<NodeRef>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<NodeRef>) -> Option<NodeRef> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<NodeRef>) -> Option<NodeRef> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor, found through parent links.
pub fn next<N: Node>(arena: &[N], mut curr: NodeRef) -> Option<NodeRef> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &[N], root: NodeRef) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<NodeRef>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Nodes on the longest downward path from `root`; `0` for an empty tree.
pub fn height<N: Node>(arena: &[N], root: Option<NodeRef>) -> usize {
    root.map_or(0, |r| {
        1 + height(arena, get_l(arena, r)).max(height(arena, get_r(arena, r)))
    })
}

/// Finds the node whose payload orders equal to `key`.
pub fn find<T, K, N>(arena: &[N], root: Option<NodeRef>, key: &K) -> Option<NodeRef>
where
    K: ?Sized,
    T: KeyOrd<K>,
    N: RbNodeLike<T>,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match arena[i as usize].payload().cmp_key(key) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_r(arena, i),
            Ordering::Greater => get_l(arena, i),
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{find, first, height, last, next, size};
    use crate::types::RbNode;

    //        20(0)
    //       /     \
    //    10(1)    30(2)
    //        \
    //       15(3)
    fn sample() -> Vec<RbNode<i32>> {
        let mut arena = vec![
            RbNode::new(20),
            RbNode::new(10),
            RbNode::new(30),
            RbNode::new(15),
        ];
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].p = Some(0);
        arena[2].p = Some(0);
        arena[1].r = Some(3);
        arena[3].p = Some(1);
        arena
    }

    #[test]
    fn walks_nodes_in_order() {
        let arena = sample();
        let mut order = Vec::new();
        let mut curr = first(&arena, Some(0));
        while let Some(i) = curr {
            order.push(arena[i as usize].payload);
            curr = next(&arena, i);
        }
        assert_eq!(order, vec![10, 15, 20, 30]);
        assert_eq!(last(&arena, Some(0)), Some(2));
    }

    #[test]
    fn size_and_height_count_nodes() {
        let arena = sample();
        assert_eq!(size(&arena, Some(0)), 4);
        assert_eq!(height(&arena, Some(0)), 3);
        assert_eq!(size(&arena, None), 0);
        assert_eq!(height(&arena, None), 0);
    }

    #[test]
    fn find_descends_by_key() {
        let arena = sample();
        assert_eq!(find::<i32, i32, _>(&arena, Some(0), &15), Some(3));
        assert_eq!(find::<i32, i32, _>(&arena, Some(0), &30), Some(2));
        assert_eq!(find::<i32, i32, _>(&arena, Some(0), &16), None);
        assert_eq!(find::<i32, i32, _>(&arena, None, &16), None);
    }
}
