use core::cmp::Ordering;

use super::handle::Handle;

/// A binary search tree node.
///
/// Every key in the `left` subtree compares less than `key`, every key in the
/// `right` subtree compares greater.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// Creates a leaf holding one entry.
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// Returns the child to descend into for a search key that compared
    /// `ordering` against this node's key.
    ///
    /// `Equal` has no child to descend into and yields `None`.
    #[inline]
    pub(crate) fn child(&self, ordering: Ordering) -> Option<Handle> {
        match ordering {
            Ordering::Less => self.left,
            Ordering::Greater => self.right,
            Ordering::Equal => None,
        }
    }

    /// Links `child` on the side selected by `ordering`.
    pub(crate) fn set_child(&mut self, ordering: Ordering, child: Handle) {
        match ordering {
            Ordering::Less => self.left = Some(child),
            Ordering::Greater => self.right = Some(child),
            Ordering::Equal => panic!("`Node::set_child()` - a node has no equal-side child"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn set_child_links_the_requested_side() {
        let mut node = Node::leaf("m", 0);
        assert_eq!((node.left, node.right), (None, None));

        node.set_child(Ordering::Less, Handle::from_index(1));
        assert_eq!(node.child(Ordering::Less), Some(Handle::from_index(1)));
        assert_eq!(node.child(Ordering::Greater), None);

        node.set_child(Ordering::Greater, Handle::from_index(2));
        assert_eq!(node.child(Ordering::Greater), Some(Handle::from_index(2)));
        assert_eq!(node.child(Ordering::Equal), None);
    }

    #[test]
    #[should_panic(expected = "`Node::set_child()` - a node has no equal-side child")]
    fn equal_side_is_rejected() {
        Node::leaf(1, 1).set_child(Ordering::Equal, Handle::from_index(0));
    }
}
