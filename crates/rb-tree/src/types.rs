//! Node definitions.
//!
//! Every structural "pointer" is an `Option<NodeRef>`, i.e. an index into the
//! tree's [`Arena`](crate::Arena). Links never own anything; the arena owns
//! every node and every node owns its payload.

use std::cmp::Ordering;

/// Stable handle of a node inside its arena.
pub type NodeRef = u32;

/// Balance color of a node. Absent children count as [`Color::Black`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Single-letter tag used by the debug dump.
    pub fn tag(self) -> &'static str {
        match self {
            Color::Red => "R",
            Color::Black => "B",
        }
    }
}

/// Structural links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<NodeRef>;
    fn l(&self) -> Option<NodeRef>;
    fn r(&self) -> Option<NodeRef>;
    fn set_p(&mut self, v: Option<NodeRef>);
    fn set_l(&mut self, v: Option<NodeRef>);
    fn set_r(&mut self, v: Option<NodeRef>);
}

/// Red-black specific node behavior. Rotations and fixup only need this;
/// they never look at payloads.
pub trait ColoredNode: Node {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }
}

/// A colored node carrying a payload.
pub trait RbNodeLike<T>: ColoredNode {
    fn payload(&self) -> &T;
}

/// One stored element.
#[derive(Clone, Debug)]
pub struct RbNode<T> {
    pub(crate) p: Option<NodeRef>,
    pub(crate) l: Option<NodeRef>,
    pub(crate) r: Option<NodeRef>,
    pub(crate) payload: T,
    pub(crate) color: Color,
}

impl<T> RbNode<T> {
    /// A detached red node.
    pub fn new(payload: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            payload,
            color: Color::Red,
        }
    }
}

impl<T> Node for RbNode<T> {
    fn p(&self) -> Option<NodeRef> {
        self.p
    }

    fn l(&self) -> Option<NodeRef> {
        self.l
    }

    fn r(&self) -> Option<NodeRef> {
        self.r
    }

    fn set_p(&mut self, v: Option<NodeRef>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<NodeRef>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<NodeRef>) {
        self.r = v;
    }
}

impl<T> ColoredNode for RbNode<T> {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl<T> RbNodeLike<T> for RbNode<T> {
    fn payload(&self) -> &T {
        &self.payload
    }
}

/// Ordering of a payload against a narrower lookup key.
///
/// This is the second comparison capability next to `T: Ord`: insertion
/// orders payloads against payloads, [`search`](crate::RbTree::search)
/// orders payloads against keys. Implementations must agree with the
/// payload's `Ord`, otherwise lookups descend into the wrong subtree.
///
/// Every `T: Ord` can be looked up by itself.
///
/// ```
/// use rb_tree::{KeyOrd, RbTree};
/// use std::cmp::Ordering;
///
/// #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
/// struct User {
///     id: u32,
///     name: &'static str,
/// }
///
/// impl KeyOrd<u32> for User {
///     fn cmp_key(&self, key: &u32) -> Ordering {
///         self.id.cmp(key)
///     }
/// }
///
/// let mut users = RbTree::new();
/// users.insert(User { id: 7, name: "ana" });
/// assert_eq!(users.search(&7u32).map(|u| u.name), Some("ana"));
/// ```
pub trait KeyOrd<K: ?Sized> {
    fn cmp_key(&self, key: &K) -> Ordering;
}

impl<T: Ord> KeyOrd<T> for T {
    fn cmp_key(&self, key: &T) -> Ordering {
        self.cmp(key)
    }
}
