use crate::traversal::{Traversable, NodeRef};

/// A pair of nodes being compared, along with the position of the next pair of children to compare.
struct Frame<'a, 'b, X: Traversable, Y: Traversable> {
    left: NodeRef<'a, X>,
    right: NodeRef<'b, Y>,
    property: usize,
    child_num: usize,
}

impl<'a, X: Traversable> NodeRef<'a, X> {
    /// Checks whether the structure of the subtree rooted at this node is positionally contained in the subtree rooted at `other`, comparing payloads with `==`.
    ///
    /// See [`partial_match_with`] for the exact rules.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::PropertyTree;
    /// let mut pattern = PropertyTree::<_>::new("call", 2);
    /// pattern.root_mut().add_child("f", 0, 0).unwrap();
    ///
    /// let mut tree = PropertyTree::<_>::new("call", 2);
    /// tree.root_mut().add_child("f", 0, 0).unwrap();
    /// tree.root_mut().add_child("x", 0, 1).unwrap();
    ///
    /// // The pattern says nothing about the arguments, which is fine even in strict mode...
    /// assert!(pattern.root().partial_match(&tree.root(), true));
    /// // ...but the other way around, the pattern lacks an argument.
    /// assert!(!tree.root().partial_match(&pattern.root(), false));
    /// ```
    ///
    /// [`partial_match_with`]: #method.partial_match_with " "
    #[inline]
    pub fn partial_match<Y>(&self, other: &NodeRef<'_, Y>, require_all_children: bool) -> bool
    where
        Y: Traversable,
        X::Value: PartialEq<Y::Value>,
    {
        self.partial_match_with(
            other,
            |left, right| left.value() == right.value(),
            require_all_children,
        )
    }
    /// Checks whether the structure of the subtree rooted at this node is positionally contained in the subtree rooted at `other`, using the specified comparator to decide whether two nodes match.
    ///
    /// Starting from the two roots, every pair of nodes compared must:
    /// - satisfy the comparator
    /// - have the same number of property slots
    /// - have compatible numbers of children in each slot. In lenient mode, this node's side must not have more children than `other`'s. In strict mode (`require_all_children`), the counts must be the same unless this node's slot is empty, which always passes.
    ///
    /// The children are then paired up by position, for as many children as this node's side has in the slot, and compared by the same rules. There is no search for a better alignment, so the cost is linear in the size of this subtree no matter how large `other` is. The first failure ends the comparison.
    ///
    /// The comparator is called in preorder: a pair of nodes before their children, and the children of property slot `i` before those of slot `i + 1`.
    pub fn partial_match_with<'b, Y, F>(
        &self,
        other: &NodeRef<'b, Y>,
        mut comparator: F,
        require_all_children: bool,
    ) -> bool
    where
        Y: Traversable,
        F: FnMut(&NodeRef<'a, X>, &NodeRef<'b, Y>) -> bool,
    {
        let mut stack: Vec<Frame<'a, 'b, X, Y>> = Vec::new();
        let mut entering = Some((self.clone(), other.clone()));
        loop {
            if let Some((left, right)) = entering.take() {
                if !comparator(&left, &right) || left.num_properties() != right.num_properties() {
                    return false;
                }
                stack.push(Frame {
                    left,
                    right,
                    property: 0,
                    child_num: 0,
                });
            }
            let frame = if let Some(frame) = stack.last_mut() {
                frame
            } else {
                return true;
            };
            if frame.property >= frame.left.num_properties() {
                stack.pop();
                continue;
            }
            let num_left = frame.left.num_children(frame.property).unwrap_or(0);
            if frame.child_num == 0 {
                let num_right = frame.right.num_children(frame.property).unwrap_or(0);
                let counts_mismatch = if require_all_children {
                    num_left != num_right && num_left != 0
                } else {
                    num_left > num_right
                };
                if counts_mismatch {
                    return false;
                }
            }
            if frame.child_num < num_left {
                let left = frame.left.child(frame.property, frame.child_num);
                let right = frame.right.child(frame.property, frame.child_num);
                frame.child_num += 1;
                match (left, right) {
                    (Some(left), Some(right)) => entering = Some((left, right)),
                    _ => return false,
                }
            } else {
                frame.property += 1;
                frame.child_num = 0;
            }
        }
    }
}
