//! Property trees, ones in which every node has a fixed number of independently ordered child lists.
//!
//! The child lists are called *properties* or *property slots*. How many of them a node has is decided when the node is created and never changes afterwards; each of the slots can grow independently by appending children to its end. This is the shape of the nodes of abstract syntax trees, where a conditional keeps its condition, "then" branch and "else" branch apart, or of trees produced by grammar derivations, where every right-hand side symbol gets its own slot.
//!
//! # Example
//! ```rust
//! use kindling::property_tree::{PropertyTree, NodeRef};
//!
//! // A `for` loop with an initializer slot, a condition slot and a body slot. The turbofish there
//! // is needed to state that we are using the default storage method instead of asking the
//! // compiler to infer it, which would be impossible.
//! let mut tree = PropertyTree::<_>::new("for", 3);
//!
//! let mut root = tree.root_mut();
//! root.add_child("i = 0", 0, 0).unwrap();
//! root.add_child("i < n", 0, 1).unwrap();
//! // The body is a block with a single statement list:
//! let mut body = root.add_child("block", 1, 2).unwrap();
//! body.add_child("f(i)", 0, 0).unwrap();
//! body.add_child("i++", 0, 0).unwrap();
//!
//! // Let's return to an immutable reference and look at our tree.
//! let root = NodeRef::from(root);
//! assert_eq!(root.num_properties(), 3);
//! assert_eq!(root.tree_size(), 6);
//!
//! let body = root.child(2, 0).unwrap();
//! let statements = body
//!     .children(0)
//!     .unwrap()
//!     .map(|node| *node.value())
//!     .collect::<Vec<_>>();
//! assert_eq!(statements, ["f(i)", "i++"]);
//!
//! // When the tree is complete, it can be frozen to make sure nothing gets appended to it anymore.
//! let frozen = tree.into_frozen();
//! assert_eq!(frozen.root().tree_size(), 6);
//! ```

mod base;
mod frozen;
mod node;
mod node_ref_mut;

pub use base::PropertyTree;
pub use frozen::FrozenTree;
pub use node::Node;
pub use node_ref_mut::NodeRefMut;
#[doc(no_inline)]
pub use crate::traversal::NodeRef;

#[cfg(test)]
mod tests;

use granite::SparseVec;

/// A property tree which uses a *sparse* `Vec` as backing storage.
///
/// The default `PropertyTree` type already uses this, so this is only provided for explicitness and consistency.
pub type SparseVecPropertyTree<T> = PropertyTree<T, usize, SparseVec<Node<T, usize>>>;
/// A property tree which uses a plain `Vec` as backing storage.
///
/// Since nodes are never removed from property trees, a sparse storage has no holes to track, and this is a slightly leaner alternative.
pub type VecPropertyTree<T> = PropertyTree<T, usize, Vec<Node<T, usize>>>;
/// A property tree which uses an `ArrayVec` as backing storage, for trees whose maximal number of nodes is known in advance.
///
/// The tree panics when it runs out of space, including upon creation if the capacity is zero.
#[cfg(feature = "arrayvec_storage")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "arrayvec_storage")))]
pub type ArrayVecPropertyTree<T, A> = PropertyTree<T, usize, arrayvec::ArrayVec<A>>;

