use core::hash::{Hash, Hasher};
use crate::{
    traversal::{Traversable, NodeRef},
    util::slot,
};

/// Structural equality: the payloads are equal, the numbers of property slots are equal and every slot holds pairwise equal subtrees in the same order.
///
/// The two references may point into different kinds of trees, e.g. a mutable and a frozen one.
impl<'a, 'b, X, Y> PartialEq<NodeRef<'b, Y>> for NodeRef<'a, X>
where
    X: Traversable,
    Y: Traversable,
    X::Value: PartialEq<Y::Value>,
{
    fn eq(&self, other: &NodeRef<'b, Y>) -> bool {
        let (left_tree, right_tree) = (self.tree, other.tree);
        let mut stack = vec![(self.cursor.clone(), other.cursor.clone())];
        while let Some((left, right)) = stack.pop() {
            if left_tree.value_of(&left) != right_tree.value_of(&right) {
                return false;
            }
            let num_properties = left_tree.num_properties_of(&left);
            if num_properties != right_tree.num_properties_of(&right) {
                return false;
            }
            for property in 0..num_properties {
                let left_children = slot(left_tree.children_of(&left, property));
                let right_children = slot(right_tree.children_of(&right, property));
                if left_children.len() != right_children.len() {
                    return false;
                }
                stack.extend(
                    left_children
                        .iter()
                        .cloned()
                        .zip(right_children.iter().cloned()),
                );
            }
        }
        true
    }
}
impl<X> Eq for NodeRef<'_, X>
where
    X: Traversable,
    X::Value: Eq,
{
}

/// Hashes the payload along with the subtree reachable through the first property slot only.
///
/// Deep differences in the other slots are left to equality to sort out.
impl<X> Hash for NodeRef<'_, X>
where
    X: Traversable,
    X::Value: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let tree = self.tree;
        let mut stack = vec![self.cursor.clone()];
        while let Some(current) = stack.pop() {
            tree.value_of(&current).hash(state);
            if let Some(children) = tree.children_of(&current, 0) {
                children.len().hash(state);
                stack.extend(children.iter().rev().cloned());
            }
        }
    }
}
