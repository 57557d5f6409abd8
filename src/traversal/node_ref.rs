use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    ops::Range,
    ptr,
    slice,
};
use super::Traversable;

/// A read-only reference to a node in a property tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the cursor of the node, it can be used to traverse the tree. It works with any [`Traversable`], which means that the same algorithms are available for mutable and frozen trees alike.
///
/// Comparing two `NodeRef`s with `==` compares the *structure* of the subtrees. To check whether two references point to the very same node, use [`is`].
///
/// [`Traversable`]: trait.Traversable.html " "
/// [`is`]: #method.is " "
pub struct NodeRef<'a, X: Traversable> {
    pub(crate) tree: &'a X,
    pub(crate) cursor: X::Cursor,
}
impl<'a, X: Traversable> NodeRef<'a, X> {
    /// Creates a new `NodeRef` pointing to the specified cursor in the tree, or `None` if the cursor is not part of the tree.
    #[inline]
    pub fn new_raw(tree: &'a X, cursor: X::Cursor) -> Option<Self> {
        if tree.contains_cursor(&cursor) {
            Some(Self::new_raw_unchecked(tree, cursor))
        } else {
            None
        }
    }
    /// Creates a new `NodeRef` pointing to the specified cursor without checking whether it's actually a part of the tree. Methods of the resulting reference will panic if it isn't.
    #[inline(always)]
    pub(crate) fn new_raw_unchecked(tree: &'a X, cursor: X::Cursor) -> Self {
        Self { tree, cursor }
    }
    /// Returns the tree the node belongs to.
    #[inline(always)]
    pub fn tree(&self) -> &'a X {
        self.tree
    }
    /// Returns a reference to the raw cursor for the node.
    #[inline(always)]
    pub fn raw_cursor(&self) -> &X::Cursor {
        &self.cursor
    }
    /// Consumes the reference and returns the underlying raw cursor for the node.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_raw_cursor(self) -> X::Cursor {
        self.cursor
    }
    /// Returns `true` if `self` and `other` point to the same node of the same tree, `false` otherwise.
    ///
    /// This is identity, not structural equality: two distinct nodes with equal subtrees are *not* the same node.
    #[inline]
    pub fn is(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.cursor == other.cursor
    }
    /// Returns a reference to the data stored in the node.
    #[inline]
    pub fn value(&self) -> &'a X::Value {
        self.tree.value_of(&self.cursor)
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.tree
            .parent_of(&self.cursor)
            .map(|parent| Self::new_raw_unchecked(self.tree, parent))
    }
    /// Returns `true` if the node is the root node of its tree, `false` otherwise.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.tree.parent_of(&self.cursor).is_none()
    }
    /// Returns the number of property slots of the node.
    #[inline]
    pub fn num_properties(&self) -> usize {
        self.tree.num_properties_of(&self.cursor)
    }
    /// Returns the number of children in the specified property slot, or `None` if the property index is out of range.
    #[inline]
    pub fn num_children(&self, property: usize) -> Option<usize> {
        self.tree.num_children_of(&self.cursor, property)
    }
    /// Returns `true` if every property slot of the node is empty, `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.tree.is_leaf_at(&self.cursor)
    }
    /// Returns `true` if at least one property slot of the node has children, `false` otherwise.
    #[inline]
    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }
    /// Returns a reference to the child at position `index` in the property slot `property`, or `None` if either of them does not exist.
    #[inline]
    pub fn child(&self, property: usize, index: usize) -> Option<Self> {
        self.tree
            .nth_child_of(&self.cursor, property, index)
            .map(|child| Self::new_raw_unchecked(self.tree, child))
    }
    /// Returns an iterator over references to the children in the specified property slot, or `None` if the property index is out of range.
    #[inline]
    pub fn children(&self, property: usize) -> Option<NodeChildrenIter<'a, X>> {
        self.tree
            .children_of(&self.cursor, property)
            .map(|children| NodeChildrenIter::new(self.tree, children))
    }
    /// Returns an iterator over the property slots of the node, each yielded as an iterator over references to the children in that slot.
    #[inline]
    pub fn properties(&self) -> NodePropertiesIter<'a, X> {
        NodePropertiesIter {
            tree: self.tree,
            cursor: self.cursor.clone(),
            properties: 0..self.num_properties(),
        }
    }
}
impl<X: Traversable> Copy for NodeRef<'_, X>
where X::Cursor: Copy {}
impl<X: Traversable> Clone for NodeRef<'_, X> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            cursor: self.cursor.clone(),
        }
    }
}
impl<X: Traversable> Debug for NodeRef<'_, X>
where X::Value: Debug {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("cursor", &self.cursor)
            .field("value", self.value())
            .finish()
    }
}

/// An iterator over references to the children in one property slot of a node.
pub struct NodeChildrenIter<'a, X: Traversable> {
    tree: &'a X,
    children: slice::Iter<'a, X::Cursor>,
}
impl<'a, X: Traversable> NodeChildrenIter<'a, X> {
    #[inline(always)]
    pub(crate) fn new(tree: &'a X, children: &'a [X::Cursor]) -> Self {
        Self {
            tree,
            children: children.iter(),
        }
    }
}
impl<'a, X: Traversable> Iterator for NodeChildrenIter<'a, X> {
    type Item = NodeRef<'a, X>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.children
            .next()
            .map(|child| NodeRef::new_raw_unchecked(tree, child.clone()))
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.children.size_hint()
    }
}
impl<X: Traversable> DoubleEndedIterator for NodeChildrenIter<'_, X> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.children
            .next_back()
            .map(|child| NodeRef::new_raw_unchecked(tree, child.clone()))
    }
}
impl<X: Traversable> ExactSizeIterator for NodeChildrenIter<'_, X> {}
impl<X: Traversable> FusedIterator for NodeChildrenIter<'_, X> {}
impl<X: Traversable> Clone for NodeChildrenIter<'_, X> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            children: self.children.clone(),
        }
    }
}
impl<X: Traversable> Debug for NodeChildrenIter<'_, X> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeChildrenIter")
            .field("remaining", &self.children.as_slice())
            .finish()
    }
}

/// An iterator over the property slots of a node, yielding an iterator over the children of each slot in order.
pub struct NodePropertiesIter<'a, X: Traversable> {
    tree: &'a X,
    cursor: X::Cursor,
    properties: Range<usize>,
}
impl<'a, X: Traversable> NodePropertiesIter<'a, X> {
    #[inline]
    fn slot(&self, property: usize) -> NodeChildrenIter<'a, X> {
        let tree: &'a X = self.tree;
        NodeChildrenIter::new(
            tree,
            crate::util::slot(tree.children_of(&self.cursor, property)),
        )
    }
}
impl<'a, X: Traversable> Iterator for NodePropertiesIter<'a, X> {
    type Item = NodeChildrenIter<'a, X>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let property = self.properties.next()?;
        Some(self.slot(property))
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.properties.size_hint()
    }
}
impl<X: Traversable> DoubleEndedIterator for NodePropertiesIter<'_, X> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let property = self.properties.next_back()?;
        Some(self.slot(property))
    }
}
impl<X: Traversable> ExactSizeIterator for NodePropertiesIter<'_, X> {}
impl<X: Traversable> FusedIterator for NodePropertiesIter<'_, X> {}
impl<X: Traversable> Debug for NodePropertiesIter<'_, X> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodePropertiesIter")
            .field("cursor", &self.cursor)
            .field("properties", &self.properties)
            .finish()
    }
}
