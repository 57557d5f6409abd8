use core::{fmt::Debug, hash::Hash};
use std::collections::HashSet;
use granite::{Storage, DefaultStorage};
use crate::{
    property_tree::{PropertyTree, FrozenTree, Node},
    traversal::{Traversable, NodeRef},
    util::slot,
};

/// A freshly copied tree, along with the nodes of the copy which correspond to the reference nodes of the source.
///
/// Produced by [`NodeRef::deep_copy_with_references`]. Callers which track special nodes by identity use it to keep tracking the corresponding nodes after a deep copy.
///
/// [`NodeRef::deep_copy_with_references`]: ../struct.NodeRef.html#method.deep_copy_with_references " "
#[derive(Clone, Debug)]
pub struct NodeWithRef<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// The copied tree. Its root corresponds to the node the copy was made from.
    pub tree: PropertyTree<T, K, S>,
    /// The keys of the nodes of the copy whose source nodes were in the reference set.
    pub references: HashSet<K>,
    /// The key of the node of the copy whose source node was the current reference, or `None` if the current reference was not part of the copied subtree.
    pub current_reference: Option<K>,
}
impl<T, K, S> NodeWithRef<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Returns a reference to the root of the copied tree.
    #[inline]
    pub fn root(&self) -> NodeRef<'_, PropertyTree<T, K, S>> {
        self.tree.root()
    }
    /// Returns a reference to the node of the copy corresponding to the current reference, if there is one.
    #[inline]
    pub fn current_reference(&self) -> Option<NodeRef<'_, PropertyTree<T, K, S>>> {
        self.current_reference
            .clone()
            .and_then(|key| NodeRef::new_raw(&self.tree, key))
    }
    /// Returns an iterator over references to the nodes of the copy corresponding to the reference set, in no particular order.
    #[inline]
    pub fn references(&self) -> impl Iterator<Item = NodeRef<'_, PropertyTree<T, K, S>>> + '_ {
        let tree = &self.tree;
        self.references
            .iter()
            .filter_map(move |key| NodeRef::new_raw(tree, key.clone()))
    }
}

/// Copies the structure below `from` into the destination tree as descendants of the node at `to`, which must have the same number of properties as `from`. Payloads are cloned, nodes are not shared.
///
/// `on_copy` is called for every node created, with the cursor of its source node, in creation order. It is *not* called for `to` itself.
pub(crate) fn copy_children<X, K, S, F>(
    from: &NodeRef<'_, X>,
    destination: &mut PropertyTree<X::Value, K, S>,
    to: K,
    mut on_copy: F,
) where
    X: Traversable,
    X::Value: Clone,
    S: Storage<Element = Node<X::Value, K>, Key = K>,
    K: Clone + Debug + Eq,
    F: FnMut(&X::Cursor, &K),
{
    let source = from.tree;
    let mut stack = vec![(from.cursor.clone(), to)];
    while let Some((current_from, current_to)) = stack.pop() {
        for property in 0..source.num_properties_of(&current_from) {
            for from_child in slot(source.children_of(&current_from, property)) {
                let to_child = destination.attach_child_unchecked(
                    &current_to,
                    property,
                    source.value_of(from_child).clone(),
                    source.num_properties_of(from_child),
                );
                on_copy(from_child, &to_child);
                stack.push((from_child.clone(), to_child));
            }
        }
    }
}

impl<'a, X> NodeRef<'a, X>
where
    X: Traversable,
    X::Value: Clone,
{
    /// Creates a deep copy of the subtree rooted at this node, in a new tree which uses the default storage.
    ///
    /// Every node of the copy is newly allocated and keeps the property count and child order of its source node; the payloads are cloned. Use `Rc` or `Arc` payloads if they should be shared between the trees instead.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::PropertyTree;
    /// let mut tree = PropertyTree::<_>::new("stmt", 1);
    /// tree.root_mut().add_child("expr", 0, 0).unwrap();
    ///
    /// let copy = tree.root().deep_copy();
    /// // Structurally equal...
    /// assert_eq!(copy.root(), tree.root());
    /// // ...but a different tree.
    /// assert!(!std::ptr::eq(copy.root().tree(), tree.root().tree()));
    /// ```
    /// With `Rc` payloads, both trees point at the same data:
    /// ```rust
    /// # use kindling::PropertyTree;
    /// use std::rc::Rc;
    /// let mut tree = PropertyTree::<_>::new(Rc::new(String::from("call")), 1);
    /// tree.root_mut().add_child(Rc::new(String::from("f")), 0, 0).unwrap();
    ///
    /// let copy = tree.root().deep_copy();
    /// assert!(Rc::ptr_eq(copy.root().value(), tree.root().value()));
    /// assert!(Rc::ptr_eq(
    ///     copy.root().child(0, 0).unwrap().value(),
    ///     tree.root().child(0, 0).unwrap().value(),
    /// ));
    /// ```
    #[inline]
    pub fn deep_copy(&self) -> PropertyTree<X::Value> {
        self.deep_copy_into()
    }
    /// Creates a deep copy of the subtree rooted at this node, in a new tree with the specified storage type.
    pub fn deep_copy_into<K, S>(&self) -> PropertyTree<X::Value, K, S>
    where
        S: Storage<Element = Node<X::Value, K>, Key = K>,
        K: Clone + Debug + Eq,
    {
        let mut copy: PropertyTree<_, K, S> = PropertyTree::with_shape_of(self);
        let root = copy.root_key().clone();
        copy_children(self, &mut copy, root, |_, _| {});
        log::debug!("deep copy produced {} nodes", copy.num_nodes());
        copy
    }
    /// Creates a deep copy of the subtree rooted at this node, along with the nodes of the copy which correspond to the specified reference nodes and current reference node.
    ///
    /// References are matched by identity, i.e. by cursor, and not by value. The root is checked like any other node. References which are not in the copied subtree are not represented in the result, and neither is the current reference if it's outside of the subtree.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::PropertyTree;
    /// # use std::collections::HashSet;
    /// let mut tree = PropertyTree::<_>::new("block", 1);
    /// let first = *tree.root_mut().add_child("stmt", 0, 0).unwrap().raw_key();
    /// let second = *tree.root_mut().add_child("stmt", 0, 0).unwrap().raw_key();
    ///
    /// let references: HashSet<_> = [first, second].iter().copied().collect();
    /// let copy = tree.root().deep_copy_with_references(&references, Some(&second));
    ///
    /// assert_eq!(copy.references.len(), 2);
    /// let current = copy.current_reference().unwrap();
    /// assert!(current.is(&copy.root().child(0, 1).unwrap()));
    /// ```
    #[inline]
    #[allow(clippy::implicit_hasher)]
    pub fn deep_copy_with_references(
        &self,
        references: &HashSet<X::Cursor>,
        current_reference: Option<&X::Cursor>,
    ) -> NodeWithRef<X::Value>
    where X::Cursor: Hash {
        self.deep_copy_with_references_into(references, current_reference)
    }
    /// Same as [`deep_copy_with_references`], but creates the copy with the specified storage type.
    ///
    /// [`deep_copy_with_references`]: #method.deep_copy_with_references " "
    #[allow(clippy::implicit_hasher)]
    pub fn deep_copy_with_references_into<K, S>(
        &self,
        references: &HashSet<X::Cursor>,
        current_reference: Option<&X::Cursor>,
    ) -> NodeWithRef<X::Value, K, S>
    where
        X::Cursor: Hash,
        S: Storage<Element = Node<X::Value, K>, Key = K>,
        K: Clone + Debug + Eq + Hash,
    {
        let mut tree: PropertyTree<_, K, S> = PropertyTree::with_shape_of(self);
        let root = tree.root_key().clone();
        let mut references_copy = HashSet::new();
        let mut current_reference_copy = None;
        let mut remap = |from: &X::Cursor, to: &K| {
            if references.contains(from) {
                references_copy.insert(to.clone());
            }
            if current_reference == Some(from) {
                current_reference_copy = Some(to.clone());
            }
        };
        remap(&self.cursor, &root);
        copy_children(self, &mut tree, root, remap);
        log::debug!(
            "deep copy produced {} nodes, remapped {} of {} references",
            tree.num_nodes(),
            references_copy.len(),
            references.len(),
        );
        NodeWithRef {
            tree,
            references: references_copy,
            current_reference: current_reference_copy,
        }
    }
    /// Creates an immutable structural snapshot of the subtree rooted at this node.
    #[inline]
    pub fn to_frozen(&self) -> FrozenTree<X::Value> {
        self.deep_copy().into_frozen()
    }
}
