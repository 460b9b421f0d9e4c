//! Arena-backed red-black tree.
//!
//! Nodes live in a [`Vec`]-backed [`Arena`] owned by the tree; every
//! structural link (`p` / `l` / `r`) is an `Option<NodeRef>` index into it.
//! Nothing is ever removed, so handles stay valid for the tree's lifetime.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`RbNode`], [`Color`], the [`Node`] / [`ColoredNode`] / [`RbNodeLike`] link traits and [`KeyOrd`] |
//! [`arena`] | [`Arena`], the single owner of all nodes |
//! [`rotate`] | [`rotate_left`], [`rotate_right`] |
//! [`fixup`] | post-insertion invariant repair |
//! [`util`] | `first`, `next`, `size`, `height`, `find` |
//! [`validate`] | invariant checker returning [`InvariantError`] |
//! [`print`] | [`PreOrder`] traversal and the debug dump |
//! [`tree`] | [`RbTree`], the public container |

pub mod arena;
pub mod error;
pub mod fixup;
pub mod print;
pub mod rotate;
pub mod tree;
pub mod types;
pub mod util;
pub mod validate;

pub use arena::Arena;
pub use error::InvariantError;
pub use print::PreOrder;
pub use rotate::{rotate_left, rotate_right};
pub use tree::{Iter, RbTree};
pub use types::{Color, ColoredNode, KeyOrd, Node, NodeRef, RbNode, RbNodeLike};
