use core::{
    fmt::{self, Formatter, Debug, Display},
    hash::{Hash, Hasher},
};
use granite::{Storage, DefaultStorage};
use crate::traversal::{Traversable, NodeRef};
use super::{PropertyTree, Node};

/// An immutable property tree.
///
/// Has the same shape and read accessors as [`PropertyTree`], but no way of appending children: nothing reachable from a frozen tree hands out mutable access. Produced by [`PropertyTree::into_frozen`] or by snapshotting a subtree with [`NodeRef::to_frozen`].
///
/// [`PropertyTree`]: struct.PropertyTree.html " "
/// [`PropertyTree::into_frozen`]: struct.PropertyTree.html#method.into_frozen " "
/// [`NodeRef::to_frozen`]: ../traversal/struct.NodeRef.html#method.to_frozen " "
#[derive(Clone)]
pub struct FrozenTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: PropertyTree<T, K, S>,
}
impl<T, K, S> FrozenTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Returns a reference to the root node of the tree.
    #[inline(always)]
    pub fn root(&self) -> NodeRef<'_, Self> {
        NodeRef::new_raw_unchecked(self, self.tree.root_key().clone())
    }
    /// Returns a reference to the node with the specified key, or `None` if the key is not part of the tree.
    #[inline]
    pub fn node(&self, key: K) -> Option<NodeRef<'_, Self>> {
        NodeRef::new_raw(self, key)
    }
    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.tree.num_nodes()
    }
}
impl<T, K, S> From<PropertyTree<T, K, S>> for FrozenTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn from(tree: PropertyTree<T, K, S>) -> Self {
        log::debug!("froze a tree of {} nodes", tree.num_nodes());
        Self { tree }
    }
}

impl<T, K, S> Traversable for FrozenTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Value = T;
    type Cursor = K;

    #[inline(always)]
    fn cursor_to_root(&self) -> Self::Cursor {
        self.tree.cursor_to_root()
    }
    #[inline(always)]
    fn contains_cursor(&self, cursor: &Self::Cursor) -> bool {
        self.tree.contains_cursor(cursor)
    }
    #[inline(always)]
    #[track_caller]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value {
        self.tree.value_of(cursor)
    }
    #[inline(always)]
    #[track_caller]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.tree.parent_of(cursor)
    }
    #[inline(always)]
    #[track_caller]
    fn num_properties_of(&self, cursor: &Self::Cursor) -> usize {
        self.tree.num_properties_of(cursor)
    }
    #[inline(always)]
    #[track_caller]
    fn children_of(&self, cursor: &Self::Cursor, property: usize) -> Option<&[Self::Cursor]> {
        self.tree.children_of(cursor, property)
    }
    #[inline(always)]
    #[track_caller]
    fn is_leaf_at(&self, cursor: &Self::Cursor) -> bool {
        self.tree.is_leaf_at(cursor)
    }
}

impl<T, K, S> PartialEq for FrozenTree<T, K, S>
where
    T: PartialEq,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}
impl<T, K, S> Eq for FrozenTree<T, K, S>
where
    T: Eq,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
}
impl<T, K, S> Hash for FrozenTree<T, K, S>
where
    T: Hash,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root().hash(state)
    }
}
impl<T, K, S> Debug for FrozenTree<T, K, S>
where
    PropertyTree<T, K, S>: Debug,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FrozenTree").field(&self.tree).finish()
    }
}
impl<T, K, S> Display for FrozenTree<T, K, S>
where
    T: Display,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.root(), f)
    }
}
