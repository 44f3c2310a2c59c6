use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use smallvec::SmallVec;

use super::arena::Arena;
use super::cursor::InOrder;
use super::handle::Handle;
use super::node::Node;

/// The unbalanced binary search tree backing `BstMap`.
#[derive(Clone)]
pub(crate) struct RawBstMap<K, V> {
    /// Arena owning every node; child links index into it.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of distinct keys in the tree.
    len: usize,
}

impl<K, V> RawBstMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Drops every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Moves every entry out in ascending key order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let order: Vec<Handle> = {
            let mut walk = InOrder::new(self);
            core::iter::from_fn(|| walk.next_front()).collect()
        };

        let mut entries = Vec::with_capacity(order.len());
        for handle in order {
            let node = self.nodes.take(handle);
            entries.push((node.key, node.value));
        }

        self.clear();
        entries
    }

    /// Returns every entry in ascending key order with mutable access to the values.
    pub(crate) fn entries_mut(&mut self) -> Vec<(&K, &mut V)> {
        let order: Vec<usize> = {
            let mut walk = InOrder::new(self);
            core::iter::from_fn(|| walk.next_front()).map(Handle::to_index).collect()
        };

        let mut slots: Vec<Option<(&K, &mut V)>> =
            self.nodes.slots_mut().map(|slot| slot.map(|node| (&node.key, &mut node.value))).collect();

        order
            .into_iter()
            .map(|index| slots[index].take().expect("`RawBstMap::entries_mut()` - node visited twice!"))
            .collect()
    }

    /// Returns the leftmost node, which holds the smallest key.
    pub(crate) fn first(&self) -> Option<&Node<K, V>> {
        let mut node = self.nodes.get(self.root?);
        while let Some(left) = node.left {
            node = self.nodes.get(left);
        }
        Some(node)
    }

    /// Returns the rightmost node, which holds the largest key.
    pub(crate) fn last(&self) -> Option<&Node<K, V>> {
        let mut node = self.nodes.get(self.root?);
        while let Some(right) = node.right {
            node = self.nodes.get(right);
        }
        Some(node)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: SmallVec<[(Handle, usize); 32]> = SmallVec::new();
        if let Some(root) = self.root {
            pending.push((root, 1));
        }
        while let Some((handle, depth)) = pending.pop() {
            height = height.max(depth);
            let node = self.nodes.get(handle);
            pending.extend([node.left, node.right].into_iter().flatten().map(|child| (child, depth + 1)));
        }
        height
    }
}

impl<K: Ord, V> RawBstMap<K, V> {
    /// Descends from the root comparing `key` against each node, returning the
    /// node holding an equal key.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(handle),
                ordering => current = node.child(ordering),
            }
        }
        None
    }

    /// Returns a reference to the value corresponding to the key.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| &self.nodes.get(handle).value)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(&mut self.nodes.get_mut(handle).value)
    }

    /// Returns the key-value pair corresponding to the key.
    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(self.search(key)?);
        Some((&node.key, &node.value))
    }

    /// Returns true if the tree contains the specified key.
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Inserts a key-value pair into the tree.
    ///
    /// An equal key keeps its node and has its value replaced; the old value is
    /// returned and the length is unchanged. Otherwise a new leaf is linked in
    /// below the last node visited. The tree is never restructured.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.alloc(Node::leaf(key, value)));
            self.len = 1;
            return None;
        };

        loop {
            let node = self.nodes.get_mut(current);
            let ordering = key.cmp(&node.key);
            if ordering == Ordering::Equal {
                return Some(mem::replace(&mut node.value, value));
            }

            match node.child(ordering) {
                Some(child) => current = child,
                None => {
                    let leaf = self.nodes.alloc(Node::leaf(key, value));
                    self.nodes.get_mut(current).set_child(ordering, leaf);
                    self.len += 1;
                    debug_assert_eq!(self.nodes.len(), self.len, "every node holds one distinct key");
                    return None;
                }
            }
        }
    }
}
