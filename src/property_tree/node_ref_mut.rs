use core::fmt::{self, Debug, Formatter};
use granite::{Storage, DefaultStorage};
use crate::{
    traversal::{Traversable, NodeRef, algorithms::copy_children},
    PropertyIndexError,
};
use super::{PropertyTree, Node};

/// A *mutable* reference to a node in a property tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to move around the tree and append to it. Appending children is the only mutation a property tree supports: payloads and property counts are fixed once a node is created.
pub struct NodeRefMut<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a mut PropertyTree<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRefMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage, or `None` if it does not exist.
    #[inline]
    pub fn new_raw(tree: &'a mut PropertyTree<T, K, S>, key: K) -> Option<Self> {
        if tree.contains_cursor(&key) {
            Some(Self::new_raw_unchecked(tree, key))
        } else {
            None
        }
    }
    #[inline(always)]
    pub(super) fn new_raw_unchecked(tree: &'a mut PropertyTree<T, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns a reference to the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_raw_key(self) -> K {
        self.key
    }
    /// Returns an immutable reference to the same node, through which the read-only algorithms are available.
    #[inline]
    pub fn as_ref(&self) -> NodeRef<'_, PropertyTree<T, K, S>> {
        NodeRef::new_raw_unchecked(&*self.tree, self.key.clone())
    }
    /// Returns a reference to the data stored in the node.
    #[inline]
    pub fn value(&self) -> &T {
        &self.tree.node_at(&self.key).value
    }
    /// Returns the number of property slots of the node.
    #[inline]
    pub fn num_properties(&self) -> usize {
        self.tree.node_at(&self.key).num_properties()
    }
    /// Returns the number of children in the specified property slot, or `None` if the property index is out of range.
    #[inline]
    pub fn num_children(&self, property: usize) -> Option<usize> {
        self.tree.num_children_of(&self.key, property)
    }
    /// Returns `true` if every property slot of the node is empty, `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.tree.node_at(&self.key).is_leaf()
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.tree.node_at(&self.key).parent.is_none()
    }
    /// Returns a *mutable* reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.tree.node_at(&self.key).parent.clone()?;
        Some(NodeRefMut::new_raw_unchecked(self.tree, key))
    }
    /// Returns a *mutable* reference to the child at position `index` in the property slot `property`, or `None` if either of them does not exist.
    #[inline]
    pub fn child_mut(&mut self, property: usize, index: usize) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.tree.nth_child_of(&self.key, property, index)?;
        Some(NodeRefMut::new_raw_unchecked(self.tree, key))
    }
    /// Consumes the reference and returns a *mutable* reference to the child at position `index` in the property slot `property`, or the original reference if there is no such child.
    ///
    /// # Errors
    /// Returns `self` back if either the property or the child does not exist.
    #[inline]
    pub fn into_child(self, property: usize, index: usize) -> Result<Self, Self> {
        match self.tree.nth_child_of(&self.key, property, index) {
            Some(key) => Ok(Self::new_raw_unchecked(self.tree, key)),
            None => Err(self),
        }
    }
    /// Appends a new node with the specified value and number of property slots to the end of the property slot `property`, returning a mutable reference to the new node.
    ///
    /// # Errors
    /// Fails if `property` is not smaller than the number of property slots of the node, in which case nothing is appended.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::PropertyTree;
    /// let mut tree = PropertyTree::<_>::new("fn", 2);
    /// let mut root = tree.root_mut();
    /// root.add_child("x", 0, 0).unwrap();
    /// root.add_child("return", 1, 1).unwrap().add_child("x", 0, 0).unwrap();
    ///
    /// // There is no third slot:
    /// let error = root.add_child("y", 0, 2).unwrap_err();
    /// assert_eq!(error.num_properties, 2);
    ///
    /// assert_eq!(root.num_children(0), Some(1));
    /// assert_eq!(root.num_children(1), Some(1));
    /// ```
    pub fn add_child(
        &mut self,
        value: T,
        num_properties: usize,
        property: usize,
    ) -> Result<NodeRefMut<'_, T, K, S>, PropertyIndexError> {
        let child = self
            .tree
            .attach_child(&self.key, property, value, num_properties)?;
        log::trace!(
            "appended {:?} to property {} of {:?}",
            child,
            property,
            self.key,
        );
        Ok(NodeRefMut::new_raw_unchecked(self.tree, child))
    }
    /// Appends a deep copy of the specified subtree, which may belong to any kind of tree, to the end of the property slot `property`, returning a mutable reference to the root of the appended copy.
    ///
    /// # Errors
    /// Fails if `property` is not smaller than the number of property slots of the node, in which case nothing is appended.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::PropertyTree;
    /// let mut condition = PropertyTree::<_>::new("==", 2);
    /// condition.root_mut().add_child("a", 0, 0).unwrap();
    /// condition.root_mut().add_child("b", 0, 1).unwrap();
    ///
    /// let mut tree = PropertyTree::<_>::new("if", 2);
    /// tree.root_mut().append_subtree(&condition.root(), 0).unwrap();
    ///
    /// assert_eq!(tree.root().tree_size(), 4);
    /// assert_eq!(tree.root().child(0, 0).unwrap(), condition.root());
    /// ```
    pub fn append_subtree<X>(
        &mut self,
        subtree: &NodeRef<'_, X>,
        property: usize,
    ) -> Result<NodeRefMut<'_, T, K, S>, PropertyIndexError>
    where
        X: Traversable<Value = T>,
        T: Clone,
    {
        let child = self.tree.attach_child(
            &self.key,
            property,
            subtree.value().clone(),
            subtree.num_properties(),
        )?;
        let mut num_copied = 1_usize;
        copy_children(subtree, self.tree, child.clone(), |_, _| num_copied += 1);
        log::debug!(
            "appended a copy of {} nodes to property {} of {:?}",
            num_copied,
            property,
            self.key,
        );
        Ok(NodeRefMut::new_raw_unchecked(self.tree, child))
    }
}
impl<'a, T, K, S> From<NodeRefMut<'a, T, K, S>> for NodeRef<'a, PropertyTree<T, K, S>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn from(op: NodeRefMut<'a, T, K, S>) -> Self {
        let tree: &'a PropertyTree<T, K, S> = op.tree;
        NodeRef::new_raw_unchecked(tree, op.key)
    }
}
impl<T, K, S> Debug for NodeRefMut<'_, T, K, S>
where
    T: Debug,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRefMut")
            .field("key", &self.key)
            .field("value", self.value())
            .finish()
    }
}
