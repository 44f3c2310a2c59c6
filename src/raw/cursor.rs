use smallvec::SmallVec;

use super::handle::Handle;
use super::raw_bst_map::RawBstMap;

/// Pending ancestors of one end of an in-order walk.
///
/// Holds at most one handle per tree level, so a degenerate (list-shaped) tree
/// spills to the heap instead of overflowing the call stack.
type Spine = SmallVec<[Handle; 32]>;

/// Double-ended in-order walk over the node handles of a [`RawBstMap`].
///
/// The front end yields ascending keys and the back end descending keys. Both
/// ends share `remaining`, which stops them once they meet.
pub(crate) struct InOrder<'a, K, V> {
    tree: Option<&'a RawBstMap<K, V>>,
    front: Spine,
    back: Spine,
    remaining: usize,
}

impl<'a, K, V> InOrder<'a, K, V> {
    pub(crate) fn new(tree: &'a RawBstMap<K, V>) -> Self {
        let mut walk = Self {
            tree: Some(tree),
            front: Spine::new(),
            back: Spine::new(),
            remaining: tree.len(),
        };
        walk.push_left_spine(tree.root());
        walk.push_right_spine(tree.root());
        walk
    }

    /// A walk that yields nothing.
    pub(crate) fn empty() -> Self {
        Self {
            tree: None,
            front: Spine::new(),
            back: Spine::new(),
            remaining: 0,
        }
    }

    pub(crate) fn tree(&self) -> Option<&'a RawBstMap<K, V>> {
        self.tree
    }

    pub(crate) fn remaining(&self) -> usize {
        self.remaining
    }

    fn push_left_spine(&mut self, mut current: Option<Handle>) {
        let Some(tree) = self.tree else { return };
        while let Some(handle) = current {
            self.front.push(handle);
            current = tree.node(handle).left;
        }
    }

    fn push_right_spine(&mut self, mut current: Option<Handle>) {
        let Some(tree) = self.tree else { return };
        while let Some(handle) = current {
            self.back.push(handle);
            current = tree.node(handle).right;
        }
    }

    pub(crate) fn next_front(&mut self) -> Option<Handle> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree?;
        let handle = self.front.pop()?;
        self.push_left_spine(tree.node(handle).right);
        self.remaining -= 1;
        Some(handle)
    }

    pub(crate) fn next_back(&mut self) -> Option<Handle> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree?;
        let handle = self.back.pop()?;
        self.push_right_spine(tree.node(handle).left);
        self.remaining -= 1;
        Some(handle)
    }
}

impl<K, V> Clone for InOrder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}
