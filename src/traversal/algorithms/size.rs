use crate::{
    traversal::{Traversable, NodeRef},
    util::slot,
};

/// Returns the number of nodes in the subtree rooted at the specified cursor, counting the root itself.
///
/// The subtree is walked using a work-list on the heap, so the depth of the tree does not affect the call stack.
pub fn tree_size<X: Traversable>(tree: &X, cursor: &X::Cursor) -> usize {
    let mut size = 1;
    let mut to_look = vec![cursor.clone()];
    while let Some(current) = to_look.pop() {
        for property in 0..tree.num_properties_of(&current) {
            let children = slot(tree.children_of(&current, property));
            size += children.len();
            to_look.extend(children.iter().cloned());
        }
    }
    size
}

impl<'a, X: Traversable> NodeRef<'a, X> {
    /// Returns the total number of nodes in the subtree rooted at this node, counting the node itself.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::PropertyTree;
    /// let mut tree = PropertyTree::<_>::new('R', 2);
    /// let mut root = tree.root_mut();
    /// root.add_child('A', 0, 0).unwrap();
    /// root.add_child('B', 1, 1).unwrap().add_child('D', 0, 0).unwrap();
    /// root.add_child('C', 0, 1).unwrap();
    ///
    /// assert_eq!(tree.root().tree_size(), 5);
    /// assert_eq!(tree.root().child(1, 0).unwrap().tree_size(), 2);
    /// ```
    #[inline]
    pub fn tree_size(&self) -> usize {
        tree_size(self.tree, &self.cursor)
    }
}
