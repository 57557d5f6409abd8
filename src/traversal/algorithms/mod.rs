//! Structural algorithms for property trees.
//!
//! This includes:
//! - Subtree size
//! - Parent path reconstruction
//! - Deep copying, including remapping reference nodes into the copy
//! - Partial matching
//! - Structural equality and hashing
//! - Textual rendering
//!
//! All of them are exposed as methods on [`NodeRef`] and work on any [`Traversable`]. None of them recurse: pending work is kept in explicit stacks on the heap.
//!
//! [`NodeRef`]: ../struct.NodeRef.html " "
//! [`Traversable`]: ../trait.Traversable.html " "

mod copy;
mod equality;
mod parents;
mod partial_match;
mod render;
mod size;

pub use copy::NodeWithRef;
pub use parents::NodeParents;
pub use render::{DisplayWith, render_optional, SUB_NODE_STRING_PREFIX, NULL_NODE_STRING};
pub use size::tree_size;

pub(crate) use copy::copy_children;

#[cfg(test)]
mod tests;
