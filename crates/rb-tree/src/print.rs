//! Debug dump.
//!
//! [`PreOrder`] lazily walks the tree root first, left before right, and
//! yields each node with its depth. [`write_dump`] renders that sequence as
//! one `B: <payload>` / `R: <payload>` line per node, indented by one space
//! per level. The format is for humans only and may change.

use std::fmt::{self, Display, Write};

use crate::types::{Node, NodeRef, RbNodeLike};

/// Pre-order traversal yielding `(depth, node)`.
pub struct PreOrder<'a, N> {
    arena: &'a [N],
    stack: Vec<(usize, NodeRef)>,
}

impl<'a, N: Node> PreOrder<'a, N> {
    pub fn new(arena: &'a [N], root: Option<NodeRef>) -> Self {
        Self {
            arena,
            stack: root.map(|r| (0, r)).into_iter().collect(),
        }
    }
}

impl<'a, N: Node> Iterator for PreOrder<'a, N> {
    type Item = (usize, &'a N);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, i) = self.stack.pop()?;
        let node = &self.arena[i as usize];
        if let Some(r) = node.r() {
            self.stack.push((depth + 1, r));
        }
        if let Some(l) = node.l() {
            self.stack.push((depth + 1, l));
        }
        Some((depth, node))
    }
}

/// Writes the dump of the nodes produced by `nodes` into `out`.
pub fn write_dump<'a, T, N, I, W>(out: &mut W, nodes: I) -> fmt::Result
where
    T: Display,
    N: RbNodeLike<T> + 'a,
    I: IntoIterator<Item = (usize, &'a N)>,
    W: Write + ?Sized,
{
    for (depth, node) in nodes {
        writeln!(
            out,
            "{:depth$}{}: {}",
            "",
            node.color().tag(),
            node.payload(),
        )?;
    }
    Ok(())
}

/// Renders the subtree at `root` as a string.
pub fn dump<T, N>(arena: &[N], root: Option<NodeRef>) -> String
where
    T: Display,
    N: RbNodeLike<T>,
{
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_dump::<T, N, _, _>(&mut out, PreOrder::new(arena, root));
    out
}

#[cfg(test)]
mod tests {
    use super::{dump, PreOrder};
    use crate::types::{Color, RbNode};

    #[test]
    fn pre_order_visits_root_then_left_then_right() {
        let mut arena = vec![
            RbNode::new(20),
            RbNode::new(10),
            RbNode::new(30),
            RbNode::new(5),
        ];
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].p = Some(0);
        arena[2].p = Some(0);
        arena[1].l = Some(3);
        arena[3].p = Some(1);

        let seen: Vec<(usize, i32)> = PreOrder::new(&arena, Some(0))
            .map(|(d, n)| (d, n.payload))
            .collect();
        assert_eq!(seen, vec![(0, 20), (1, 10), (2, 5), (1, 30)]);
    }

    #[test]
    fn dump_indents_by_depth() {
        let mut arena = vec![RbNode::new(2), RbNode::new(1), RbNode::new(3)];
        arena[0].color = Color::Black;
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].p = Some(0);
        arena[2].p = Some(0);

        assert_eq!(dump::<i32, _>(&arena, Some(0)), "B: 2\n R: 1\n R: 3\n");
        assert_eq!(dump::<i32, RbNode<i32>>(&arena, None), "");
    }
}
