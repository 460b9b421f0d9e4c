//! Node storage.
//!
//! The arena is the only owner of nodes. Handles it returns stay valid for
//! as long as the arena lives because slots are only ever appended.

use crate::types::{NodeRef, RbNode};

#[derive(Clone, Debug)]
pub struct Arena<T> {
    nodes: Vec<RbNode<T>>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Takes ownership of `payload` and stores it in a fresh, unlinked red
    /// node.
    ///
    /// # Panics
    ///
    /// Panics once the arena holds `u32::MAX` nodes and no further handle
    /// can be issued.
    pub fn allocate(&mut self, payload: T) -> NodeRef {
        let idx = NodeRef::try_from(self.nodes.len())
            .ok()
            .filter(|&idx| idx != NodeRef::MAX)
            .expect("arena exhausted its node handle space");
        self.nodes.push(RbNode::new(payload));
        idx
    }

    pub fn get(&self, node: NodeRef) -> Option<&RbNode<T>> {
        self.nodes.get(node as usize)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in allocation order.
    pub fn nodes(&self) -> &[RbNode<T>] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [RbNode<T>] {
        &mut self.nodes
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
