//! Everything related to traversing property trees in general.
//!
//! The module is home to the following items:
//! - [`Traversable`] — the *read-only accessor contract* shared by mutable and frozen trees
//! - [`NodeRef`] — a read-only reference to a node of any `Traversable`, which is where the algorithms are exposed
//! - Iterators over the children and property slots of a node: [`NodeChildrenIter`] and [`NodePropertiesIter`]
//! - Implementations of the structural algorithms (see the [`algorithms`] module for more)
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Traversable`]: trait.Traversable.html " "
//! [`NodeRef`]: struct.NodeRef.html " "
//! [`NodeChildrenIter`]: struct.NodeChildrenIter.html " "
//! [`NodePropertiesIter`]: struct.NodePropertiesIter.html " "

pub mod algorithms;
mod node_ref;

pub use node_ref::{NodeRef, NodeChildrenIter, NodePropertiesIter};

use core::fmt::Debug;

/// Data structures which can be read as property trees.
///
/// Every node is addressed by a cursor. A node has a fixed number of property slots, each being an ordered list of cursors to its children.
pub trait Traversable: Sized {
    /// The data payload of the nodes.
    type Value;
    /// The type for the cursor which will be used for keeping track of the traversed nodes.
    ///
    /// Must be very cheaply clonable, but not required to be `Copy`. Two cursors into the same traversable are equal if and only if they point to the same node, which is what identity-based algorithms rely on.
    type Cursor: Clone + Debug + Eq;

    /// Returns the cursor pointing to the root node.
    fn cursor_to_root(&self) -> Self::Cursor;
    /// Returns `true` if the cursor points to a node of the traversable, `false` otherwise.
    fn contains_cursor(&self, cursor: &Self::Cursor) -> bool;
    /// Returns a reference to the payload of the node at the specified cursor.
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value;
    /// Returns a cursor to the parent of the node at the specified cursor, or `None` if that node is the root node.
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns the number of property slots of the node at the specified cursor.
    fn num_properties_of(&self, cursor: &Self::Cursor) -> usize;
    /// Returns the cursors to the children in the specified property slot of the node at the specified cursor, or `None` if the property index is out of range.
    fn children_of(&self, cursor: &Self::Cursor, property: usize) -> Option<&[Self::Cursor]>;

    /// Returns the number of children in the specified property slot, or `None` if the property index is out of range.
    #[inline]
    fn num_children_of(&self, cursor: &Self::Cursor, property: usize) -> Option<usize> {
        self.children_of(cursor, property).map(<[Self::Cursor]>::len)
    }
    /// Returns a cursor to the *`n`*th child in the specified property slot, or `None` if either the property or the child does not exist.
    #[inline]
    fn nth_child_of(
        &self,
        cursor: &Self::Cursor,
        property: usize,
        child_num: usize,
    ) -> Option<Self::Cursor> {
        self.children_of(cursor, property)?.get(child_num).cloned()
    }
    /// Returns `true` if every property slot of the node at the specified cursor is empty, `false` otherwise.
    #[inline]
    fn is_leaf_at(&self, cursor: &Self::Cursor) -> bool {
        (0..self.num_properties_of(cursor))
            .all(|property| self.num_children_of(cursor, property) == Some(0))
    }
}

//──────────────────────────────────┐
// Implementations for pointer types │
//──────────────────────────────────┘
impl<T: Traversable> Traversable for &T {
    type Value = T::Value;
    type Cursor = T::Cursor;

    #[inline(always)]
    fn cursor_to_root(&self) -> Self::Cursor {
        (**self).cursor_to_root()
    }
    #[inline(always)]
    fn contains_cursor(&self, cursor: &Self::Cursor) -> bool {
        (**self).contains_cursor(cursor)
    }
    #[inline(always)]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value {
        (**self).value_of(cursor)
    }
    #[inline(always)]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        (**self).parent_of(cursor)
    }
    #[inline(always)]
    fn num_properties_of(&self, cursor: &Self::Cursor) -> usize {
        (**self).num_properties_of(cursor)
    }
    #[inline(always)]
    fn children_of(&self, cursor: &Self::Cursor, property: usize) -> Option<&[Self::Cursor]> {
        (**self).children_of(cursor, property)
    }
}
impl<T: Traversable> Traversable for &mut T {
    type Value = T::Value;
    type Cursor = T::Cursor;

    #[inline(always)]
    fn cursor_to_root(&self) -> Self::Cursor {
        (**self).cursor_to_root()
    }
    #[inline(always)]
    fn contains_cursor(&self, cursor: &Self::Cursor) -> bool {
        (**self).contains_cursor(cursor)
    }
    #[inline(always)]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value {
        (**self).value_of(cursor)
    }
    #[inline(always)]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        (**self).parent_of(cursor)
    }
    #[inline(always)]
    fn num_properties_of(&self, cursor: &Self::Cursor) -> usize {
        (**self).num_properties_of(cursor)
    }
    #[inline(always)]
    fn children_of(&self, cursor: &Self::Cursor, property: usize) -> Option<&[Self::Cursor]> {
        (**self).children_of(cursor, property)
    }
}
