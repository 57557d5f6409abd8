//! Implements arena-allocated multi-property trees for representing grammar and syntax trees, along with the structural algorithms needed to mine them.
//!
//! ------------------------
//!
//! # Overview
//! A node of a *property tree* does not have a single list of children. Instead, it has a fixed number of independently ordered child lists, called *properties* (or property slots), chosen when the node is created. This allows a uniform node type to keep semantically distinct groups of children apart, like the "then" branch and the "else" branch of a conditional. Abstract syntax trees and trees produced by grammar derivations are shaped exactly like that.
//!
//! Like the other trees built on this technique, property trees use ["arena-allocated trees"][arena tree blog post]: the nodes are stored in a backing storage implementing [`Storage`] (a sparse `Vec` by default), and children are referred to by keys into that storage rather than by pointers. A node is identified by the tree it lives in and its key, which is what the identity-based operations (parent path queries, reference remapping during copies) work with.
//!
//! # Trees and views
//! - [`PropertyTree`] is the mutable tree. Nodes are only ever *appended*; there is no removal.
//! - [`FrozenTree`] is the immutable counterpart, produced either by consuming a `PropertyTree` or by taking a structural snapshot of a subtree.
//! - [`Traversable`] is the read-only accessor contract both of them implement, and [`NodeRef`] is a read-only reference to a node of any `Traversable`. All algorithms live on `NodeRef` and are thus agnostic to whether the tree is frozen.
//! - [`NodeRefMut`] is the mutable reference to a node of a `PropertyTree`, used to append children.
//!
//! # Algorithms
//! - Subtree size — [`NodeRef::tree_size`]
//! - Parent path reconstruction — [`NodeRef::node_parents`], [`NodeParents`]
//! - Deep copying, with or without remapping a set of reference nodes into the copy — [`NodeRef::deep_copy`], [`NodeRef::deep_copy_with_references`], [`NodeWithRef`]
//! - Partial structural matching under a pluggable equality rule — [`NodeRef::partial_match`], [`NodeRef::partial_match_with`]
//! - Textual rendering — the [`Display`] implementations and [`NodeRef::display_with`]
//!
//! None of them use recursion: every walk keeps its pending work on the heap, so arbitrarily deep trees are handled without exhausting the call stack.
//!
//! # Example
//! ```rust
//! use kindling::PropertyTree;
//!
//! // An `if` node with a condition slot, a "then" slot and an "else" slot.
//! let mut tree = PropertyTree::<_>::new("if", 3);
//! let mut root = tree.root_mut();
//! root.add_child("cond", 0, 0).unwrap();
//! root.add_child("then", 0, 1).unwrap();
//! root.add_child("else", 0, 2).unwrap();
//!
//! assert_eq!(tree.root().tree_size(), 4);
//! assert_eq!(
//!     tree.to_string(),
//!     "if\n-(0)cond\n-(1)then\n-(2)else\n",
//! );
//! ```
//!
//! # Feature flags
//! - `arrayvec_storage` — enables the `ArrayVec` storage backend from `granite` and the [`ArrayVecPropertyTree`] type alias.
//! - `smallvec`, `slab`, `slotmap` — enable the corresponding storage backends from `granite`.
//! - `union_optimizations` — adds some layout optimizations by using untagged unions in sparse storage. **Requires a nightly compiler.**
//! - `doc_cfg` — annotates feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Logging
//! Whole-tree operations emit records through the [`log`] facade at the `debug` and `trace` levels. The crate never installs a logger itself.
//!
//! [`Storage`]: https://docs.rs/granite/*/granite/trait.Storage.html " "
//! [`Display`]: https://doc.rust-lang.org/std/fmt/trait.Display.html " "
//! [`log`]: https://docs.rs/log " "
//! [`ArrayVecPropertyTree`]: property_tree/type.ArrayVecPropertyTree.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_hasher,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(feature = "union_optimizations", feature(untagged_unions))]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[doc(no_inline)]
pub use granite::{Storage, DefaultStorage};

pub mod property_tree;
pub use property_tree::{PropertyTree, FrozenTree, Node, NodeRefMut};

pub mod traversal;
pub use traversal::{
    Traversable,
    NodeRef,
    algorithms::{NodeParents, NodeWithRef, SUB_NODE_STRING_PREFIX, NULL_NODE_STRING},
};

/// A prelude for using Kindling, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        property_tree::{
            PropertyTree,
            FrozenTree as FrozenPropertyTree,
            NodeRefMut as PropertyTreeNodeRefMut,
        },
        traversal::{
            Traversable as TraversablePropertyTree,
            NodeRef as PropertyTreeNodeRef,
            algorithms::{NodeParents, NodeWithRef},
        },
        PropertyIndexError,
        UnreachableTargetError,
    };
}

pub(crate) mod util;

use core::fmt::{self, Formatter, Display};

/// The error type returned by methods which add children to a node, produced when the specified property index does not name one of the node's property slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyIndexError {
    /// The property index which was passed to the method.
    pub property: usize,
    /// The number of properties the node actually has.
    pub num_properties: usize,
}
impl Display for PropertyIndexError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&format!(
            "property index {} is out of range for a node with {} properties",
            self.property, self.num_properties,
        ))
    }
}
impl std::error::Error for PropertyIndexError {}

/// The error type returned by parent path queries when the target node cannot be reached from the specified root node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnreachableTargetError;
impl Display for UnreachableTargetError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the target node is unreachable from the specified root node")
    }
}
impl std::error::Error for UnreachableTargetError {}
