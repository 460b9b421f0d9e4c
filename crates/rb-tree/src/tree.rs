use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::arena::Arena;
use crate::error::InvariantError;
use crate::fixup::fixup;
use crate::print::{self, PreOrder};
use crate::types::{Color, KeyOrd, NodeRef, RbNode};
use crate::util;

/// Ordered set of payloads kept balanced by the red-black rules.
///
/// Payloads are ordered by `T: Ord` on insertion and can be looked up by any
/// narrower key `K` for which `T: KeyOrd<K>`. There is no removal: nodes
/// live in the tree's arena until the tree is dropped.
///
/// ```
/// use rb_tree::RbTree;
///
/// let mut tree = RbTree::new();
/// assert!(tree.insert(10));
/// assert!(tree.insert(20));
/// assert!(!tree.insert(10));
/// assert_eq!(tree.search(&20), Some(&20));
/// assert_eq!(tree.search(&30), None);
/// ```
#[derive(Clone, Debug)]
pub struct RbTree<T> {
    arena: Arena<T>,
    root: Option<NodeRef>,
}

impl<T> RbTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        util::height(self.arena.nodes(), self.root)
    }

    /// Black nodes below the root on any path down to a nil leaf.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut curr = self.root.and_then(|r| self.arena.nodes()[r as usize].l);
        while let Some(i) = curr {
            let node = &self.arena.nodes()[i as usize];
            if node.color == Color::Black {
                count += 1;
            }
            curr = node.l;
        }
        count
    }

    pub fn root(&self) -> Option<NodeRef> {
        self.root
    }

    pub fn node(&self, node: NodeRef) -> Option<&RbNode<T>> {
        self.arena.get(node)
    }

    pub fn color_of(&self, node: NodeRef) -> Option<Color> {
        self.arena.get(node).map(|n| n.color)
    }

    pub fn arena(&self) -> &Arena<T> {
        &self.arena
    }

    /// Smallest payload.
    pub fn first(&self) -> Option<&T> {
        util::first(self.arena.nodes(), self.root).map(|i| self.payload(i))
    }

    /// Largest payload.
    pub fn last(&self) -> Option<&T> {
        util::last(self.arena.nodes(), self.root).map(|i| self.payload(i))
    }

    /// Payloads in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.arena.nodes(),
            curr: util::first(self.arena.nodes(), self.root),
        }
    }

    /// Root-first traversal with node depths, as used by the debug dump.
    pub fn pre_order(&self) -> PreOrder<'_, RbNode<T>> {
        PreOrder::new(self.arena.nodes(), self.root)
    }

    fn payload(&self, i: NodeRef) -> &T {
        &self.arena.nodes()[i as usize].payload
    }
}

impl<T: Ord> RbTree<T> {
    /// Inserts `payload`, returning `false` and leaving the tree untouched if
    /// an equal payload is already stored.
    pub fn insert(&mut self, payload: T) -> bool {
        let mut parent = None;
        let mut go_left = false;
        let mut curr = self.root;
        while let Some(i) = curr {
            let node = &self.arena.nodes()[i as usize];
            go_left = match payload.cmp(&node.payload) {
                Ordering::Equal => {
                    debug!("rejected duplicate payload at node {i}");
                    return false;
                }
                Ordering::Less => true,
                Ordering::Greater => false,
            };
            parent = Some(i);
            curr = if go_left { node.l } else { node.r };
        }

        let n = self.arena.allocate(payload);
        let nodes = self.arena.nodes_mut();
        nodes[n as usize].p = parent;
        match parent {
            None => {
                nodes[n as usize].color = Color::Black;
                self.root = Some(n);
                return true;
            }
            Some(p) if go_left => nodes[p as usize].l = Some(n),
            Some(p) => nodes[p as usize].r = Some(n),
        }

        fixup(nodes, &mut self.root, n);
        true
    }

    /// Whether a payload equal to `payload` is stored.
    pub fn contains(&self, payload: &T) -> bool {
        self.search(payload).is_some()
    }

    /// Checks every red-black and ordering invariant.
    pub fn validate(&self) -> Result<(), InvariantError> {
        crate::validate::validate::<T, _>(self.arena.nodes(), self.root)
    }
}

impl<T> RbTree<T> {
    /// Finds the payload ordering equal to `key`.
    pub fn search<K>(&self, key: &K) -> Option<&T>
    where
        K: ?Sized,
        T: KeyOrd<K>,
    {
        util::find::<T, K, _>(self.arena.nodes(), self.root, key).map(|i| self.payload(i))
    }
}

impl<T: fmt::Display> RbTree<T> {
    /// Indented pre-order rendering, one `B: <payload>` or `R: <payload>`
    /// line per node.
    pub fn dump(&self) -> String {
        print::dump::<T, _>(self.arena.nodes(), self.root)
    }
}

impl<T: fmt::Display> fmt::Display for RbTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print::write_dump::<T, _, _, _>(f, self.pre_order())
    }
}

impl<T> Default for RbTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for RbTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for payload in iter {
            self.insert(payload);
        }
    }
}

impl<T: Ord> FromIterator<T> for RbTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Ascending iterator over a tree's payloads.
pub struct Iter<'a, T> {
    nodes: &'a [RbNode<T>],
    curr: Option<NodeRef>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = util::next(self.nodes, i);
        Some(&self.nodes[i as usize].payload)
    }
}

impl<'a, T> IntoIterator for &'a RbTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::RbTree;
    use crate::types::Color;

    #[test]
    fn first_insert_becomes_black_root() {
        let mut tree = RbTree::new();
        assert!(tree.insert(7));
        let root = tree.root().unwrap();
        assert_eq!(tree.color_of(root), Some(Color::Black));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn duplicate_insert_does_not_allocate() {
        let mut tree = RbTree::new();
        tree.insert(1);
        tree.insert(2);
        assert!(!tree.insert(1));
        assert_eq!(tree.arena().len(), 2);
    }

    #[test]
    fn black_height_excludes_root() {
        let tree: RbTree<i32> = (1..=3).collect();
        assert_eq!(tree.black_height(), 0);
        let tree: RbTree<i32> = (1..=4).collect();
        assert_eq!(tree.black_height(), 1);
    }

    #[test]
    fn display_matches_dump() {
        let tree: RbTree<i32> = [10, 20, 30].into_iter().collect();
        assert_eq!(tree.to_string(), tree.dump());
        assert_eq!(tree.dump(), "B: 20\n R: 10\n R: 30\n");
    }
}
