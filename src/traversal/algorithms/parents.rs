use core::{fmt::Debug, ptr};
use crate::{
    traversal::{Traversable, NodeRef},
    util::slot,
    UnreachableTargetError,
};

/// The path from a root node to a target node, computed by searching the tree from the root.
///
/// The three lists are parallel and have the same length, the depth of the target below the root. The first entry describes the parent of the target, the last one describes the root: `through_nodes[i]` is an ancestor, and its child at index `next_child_num[i]` in the property slot `next_property[i]` is the next node on the way down to the target.
///
/// If the target *is* the root, all three lists are empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeParents<C> {
    /// The node the path leads to.
    pub target: C,
    /// The ancestors of the target, nearest parent first, root last.
    pub through_nodes: Vec<C>,
    /// The property slot used to step down from each of the ancestors.
    pub next_property: Vec<usize>,
    /// The position inside of that property slot of the next node on the path.
    pub next_child_num: Vec<usize>,
}

/// One level of the depth-first search: the node being explored and the position of the next child to look at.
struct Frame<C> {
    cursor: C,
    property: usize,
    child_num: usize,
}

impl<C: Clone + Debug + Eq> NodeParents<C> {
    /// Searches the subtree under `root` for `target`, comparing cursors (i.e. by node identity, not by value).
    ///
    /// The search is depth-first, exploring property slots in increasing order and children inside of a slot in increasing order, and stops at the first path found.
    ///
    /// # Errors
    /// Fails with [`UnreachableTargetError`] if `target` is not in the subtree of `root`.
    ///
    /// [`UnreachableTargetError`]: ../../struct.UnreachableTargetError.html " "
    pub fn new<X>(tree: &X, root: &C, target: &C) -> Result<Self, UnreachableTargetError>
    where X: Traversable<Cursor = C> {
        let mut parents = Self {
            target: target.clone(),
            through_nodes: Vec::new(),
            next_property: Vec::new(),
            next_child_num: Vec::new(),
        };
        if root == target {
            return Ok(parents);
        }
        let mut stack = vec![Frame {
            cursor: root.clone(),
            property: 0,
            child_num: 0,
        }];
        while let Some(frame) = stack.last_mut() {
            if frame.property >= tree.num_properties_of(&frame.cursor) {
                stack.pop();
                continue;
            }
            let children = slot(tree.children_of(&frame.cursor, frame.property));
            let child = if let Some(child) = children.get(frame.child_num) {
                child.clone()
            } else {
                frame.property += 1;
                frame.child_num = 0;
                continue;
            };
            frame.child_num += 1;
            if child == *target {
                // Every frame on the stack has already advanced past the child it descended into
                for frame in stack.into_iter().rev() {
                    parents.through_nodes.push(frame.cursor);
                    parents.next_property.push(frame.property);
                    parents.next_child_num.push(frame.child_num - 1);
                }
                return Ok(parents);
            }
            stack.push(Frame {
                cursor: child,
                property: 0,
                child_num: 0,
            });
        }
        log::trace!("{:?} is unreachable from {:?}", target, root);
        Err(UnreachableTargetError)
    }
    /// Returns the number of edges between the root and the target.
    #[inline]
    pub fn depth(&self) -> usize {
        self.through_nodes.len()
    }
    /// Returns `true` if the target is the root itself, `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.through_nodes.is_empty()
    }
    /// Returns the root the path starts from.
    #[inline]
    pub fn root(&self) -> &C {
        self.through_nodes.last().unwrap_or(&self.target)
    }
    /// Returns an iterator over the steps of the path, nearest parent first. Each step is an ancestor along with the property slot and the position inside of that slot of the next node down.
    #[inline]
    pub fn steps(&self) -> impl DoubleEndedIterator<Item = (&C, usize, usize)> + '_ {
        self.through_nodes
            .iter()
            .zip(self.next_property.iter().copied())
            .zip(self.next_child_num.iter().copied())
            .map(|((node, property), child_num)| (node, property, child_num))
    }
    /// Follows the recorded directions down from the root, returning the cursor of the node they lead to, or `None` if they don't describe a path in the specified tree.
    ///
    /// For the tree the path was computed on, this is always the target.
    pub fn walk<X>(&self, tree: &X) -> Option<C>
    where X: Traversable<Cursor = C> {
        let mut current = self.root().clone();
        for (_, property, child_num) in self.steps().rev() {
            current = tree.nth_child_of(&current, property, child_num)?;
        }
        Some(current)
    }
}

impl<'a, X: Traversable> NodeRef<'a, X> {
    /// Computes the path from the specified root down to this node.
    ///
    /// # Errors
    /// Fails with [`UnreachableTargetError`] if this node is not in the subtree of `root`, which includes the case of the two nodes being in different trees.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::PropertyTree;
    /// let mut tree = PropertyTree::<_>::new('R', 2);
    /// let mut root = tree.root_mut();
    /// root.add_child('A', 0, 0).unwrap();
    /// root.add_child('B', 1, 1).unwrap().add_child('D', 0, 0).unwrap();
    ///
    /// let root = tree.root();
    /// let b = root.child(1, 0).unwrap();
    /// let d = b.child(0, 0).unwrap();
    /// let parents = d.node_parents(&root).unwrap();
    /// assert_eq!(parents.through_nodes, [*b.raw_cursor(), *root.raw_cursor()]);
    /// assert_eq!(parents.next_property, [0, 1]);
    /// assert_eq!(parents.next_child_num, [0, 0]);
    /// ```
    ///
    /// [`UnreachableTargetError`]: ../struct.UnreachableTargetError.html " "
    pub fn node_parents(
        &self,
        root: &NodeRef<'_, X>,
    ) -> Result<NodeParents<X::Cursor>, UnreachableTargetError> {
        if !ptr::eq(self.tree, root.tree) {
            return Err(UnreachableTargetError);
        }
        NodeParents::new(self.tree, &root.cursor, &self.cursor)
    }
}
