use core::{
    fmt::{self, Formatter, Debug, Display},
    hash::{Hash, Hasher},
};
use granite::{Storage, DefaultStorage};
use crate::{
    traversal::{Traversable, NodeRef},
    PropertyIndexError,
};
use super::{Node, NodeRefMut, FrozenTree};

/// A property tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct PropertyTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    storage: S,
    root: K,
}
impl<T, K, S> PropertyTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a property tree with the specified value and number of property slots for the root node.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::PropertyTree;
    /// // The turbofish there is needed to state that we are using the default storage method
    /// // instead of asking the compiler to infer it, which would be impossible.
    /// let tree = PropertyTree::<_>::new("while", 2);
    ///
    /// let root = tree.root();
    /// assert_eq!(root.num_properties(), 2);
    /// assert!(root.is_leaf());
    /// ```
    #[inline(always)]
    pub fn new(value: T, num_properties: usize) -> Self {
        let mut storage = S::new();
        let root = storage.add(Node::new(value, num_properties, None));
        Self { storage, root }
    }
    /// Creates a property tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    #[inline(always)]
    pub fn with_capacity(capacity: usize, value: T, num_properties: usize) -> Self {
        let mut storage = S::with_capacity(capacity);
        let root = storage.add(Node::new(value, num_properties, None));
        Self { storage, root }
    }
    /// Creates a property tree whose root has the same value and the same number of property slots as the specified node, but no children.
    ///
    /// This is the seed which deep copies are grown from.
    #[inline]
    pub fn with_shape_of<X>(node: &NodeRef<'_, X>) -> Self
    where
        X: Traversable<Value = T>,
        T: Clone,
    {
        Self::new(node.value().clone(), node.num_properties())
    }

    /// Returns a reference to the root node of the tree.
    #[inline(always)]
    pub fn root(&self) -> NodeRef<'_, Self> {
        NodeRef::new_raw_unchecked(self, self.root.clone())
    }
    /// Returns a *mutable* reference to the root node of the tree, allowing children to be appended anywhere in the tree.
    #[inline(always)]
    pub fn root_mut(&mut self) -> NodeRefMut<'_, T, K, S> {
        let root = self.root.clone();
        NodeRefMut::new_raw_unchecked(self, root)
    }
    /// Returns the key of the root node.
    #[inline(always)]
    pub fn root_key(&self) -> &K {
        &self.root
    }
    /// Returns a reference to the node with the specified key, or `None` if the key is not part of the tree.
    #[inline]
    pub fn node(&self, key: K) -> Option<NodeRef<'_, Self>> {
        NodeRef::new_raw(self, key)
    }
    /// Returns a mutable reference to the node with the specified key, or `None` if the key is not part of the tree.
    #[inline]
    pub fn node_mut(&mut self, key: K) -> Option<NodeRefMut<'_, T, K, S>> {
        NodeRefMut::new_raw(self, key)
    }
    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.storage.len()
    }
    /// Consumes the tree and turns it into an immutable one.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::PropertyTree;
    /// let mut tree = PropertyTree::<_>::new("call", 2);
    /// tree.root_mut().add_child("f", 0, 0).unwrap();
    ///
    /// let frozen = tree.into_frozen();
    /// assert_eq!(frozen.root().tree_size(), 2);
    /// ```
    #[inline]
    pub fn into_frozen(self) -> FrozenTree<T, K, S> {
        FrozenTree::from(self)
    }

    #[track_caller]
    pub(super) fn node_at(&self, key: &K) -> &Node<T, K> {
        self.storage
            .get(key)
            .unwrap_or_else(|| panic!("invalid cursor: {:?}", key))
    }
    #[track_caller]
    pub(super) fn node_at_mut(&mut self, key: &K) -> &mut Node<T, K> {
        self.storage
            .get_mut(key)
            .unwrap_or_else(|| panic!("invalid cursor: {:?}", key))
    }
    /// Appends a new node to the end of the specified property slot of the node at `parent`, returning the key of the new node.
    ///
    /// # Errors
    /// Fails if `property` is out of range for the parent node, in which case the tree is left untouched.
    #[track_caller]
    pub(crate) fn attach_child(
        &mut self,
        parent: &K,
        property: usize,
        value: T,
        num_properties: usize,
    ) -> Result<K, PropertyIndexError> {
        let parent_properties = self.node_at(parent).num_properties();
        if property >= parent_properties {
            return Err(PropertyIndexError {
                property,
                num_properties: parent_properties,
            });
        }
        Ok(self.attach_child_unchecked(parent, property, value, num_properties))
    }
    /// Same as `attach_child`, but the property index is only checked by slice indexing.
    ///
    /// # Panics
    /// Panics if `property` is out of range for the parent node or `parent` is not a key of the tree.
    #[track_caller]
    pub(crate) fn attach_child_unchecked(
        &mut self,
        parent: &K,
        property: usize,
        value: T,
        num_properties: usize,
    ) -> K {
        debug_assert!(
            property < self.node_at(parent).num_properties(),
            "property index out of range",
        );
        let child = self
            .storage
            .add(Node::new(value, num_properties, Some(parent.clone())));
        self.node_at_mut(parent).properties[property].push(child.clone());
        child
    }
}

impl<T, K, S> Traversable for PropertyTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Value = T;
    type Cursor = K;

    #[inline(always)]
    fn cursor_to_root(&self) -> Self::Cursor {
        self.root.clone()
    }
    #[inline(always)]
    fn contains_cursor(&self, cursor: &Self::Cursor) -> bool {
        self.storage.contains_key(cursor)
    }
    #[inline]
    #[track_caller]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value {
        &self.node_at(cursor).value
    }
    #[inline]
    #[track_caller]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node_at(cursor).parent.clone()
    }
    #[inline]
    #[track_caller]
    fn num_properties_of(&self, cursor: &Self::Cursor) -> usize {
        self.node_at(cursor).num_properties()
    }
    #[inline]
    #[track_caller]
    fn children_of(&self, cursor: &Self::Cursor, property: usize) -> Option<&[Self::Cursor]> {
        self.node_at(cursor)
            .properties
            .get(property)
            .map(Vec::as_slice)
    }
    #[inline]
    #[track_caller]
    fn is_leaf_at(&self, cursor: &Self::Cursor) -> bool {
        self.node_at(cursor).is_leaf()
    }
}

impl<T, K, S> PartialEq for PropertyTree<T, K, S>
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
impl<T, K, S> Eq for PropertyTree<T, K, S>
where
    T: Eq,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
}
impl<T, K, S> Hash for PropertyTree<T, K, S>
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
impl<T, K, S> Display for PropertyTree<T, K, S>
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
