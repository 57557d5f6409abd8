use core::fmt::{self, Formatter, Display, Write};
use crate::traversal::{Traversable, NodeRef};

/// The marker appended to the line prefix for every level of nesting, followed by the property index in parentheses.
pub const SUB_NODE_STRING_PREFIX: &str = "-";
/// The line printed in place of a node which does not exist.
pub const NULL_NODE_STRING: &str = "NULL";

/// Writes one line per node of the subtree, in preorder. The line of a child in property slot `i` has the line prefix of its parent extended by `-(i)`.
fn write_tree<X, W, F>(node: &NodeRef<'_, X>, out: &mut W, mut write_value: F) -> fmt::Result
where
    X: Traversable,
    W: Write + ?Sized,
    F: FnMut(&mut W, &X::Value) -> fmt::Result,
{
    let mut stack = vec![(node.clone(), String::new())];
    while let Some((current, prefix)) = stack.pop() {
        out.write_str(&prefix)?;
        write_value(out, current.value())?;
        out.write_char('\n')?;
        for (property, children) in current.properties().enumerate().rev() {
            let child_prefix = format!("{}{}({})", prefix, SUB_NODE_STRING_PREFIX, property);
            stack.extend(children.rev().map(|child| (child, child_prefix.clone())));
        }
    }
    Ok(())
}

/// Renders the subtree rooted at the specified node, or the placeholder line if there is no node.
///
/// # Example
/// ```rust
/// # use kindling::{PropertyTree, traversal::algorithms::render_optional};
/// let tree = PropertyTree::<_>::new("x", 0);
/// assert_eq!(render_optional(tree.root().child(0, 0).as_ref()), "NULL\n");
/// assert_eq!(render_optional(Some(&tree.root())), "x\n");
/// ```
pub fn render_optional<X>(node: Option<&NodeRef<'_, X>>) -> String
where
    X: Traversable,
    X::Value: Display,
{
    match node {
        Some(node) => node.to_string(),
        None => format!("{}\n", NULL_NODE_STRING),
    }
}

/// Renders a node with the payloads converted to text by a closure.
///
/// Created by [`NodeRef::display_with`].
///
/// [`NodeRef::display_with`]: ../struct.NodeRef.html#method.display_with " "
pub struct DisplayWith<'a, X: Traversable, F> {
    node: NodeRef<'a, X>,
    to_text: F,
}
impl<X, F, D> Display for DisplayWith<'_, X, F>
where
    X: Traversable,
    F: Fn(&X::Value) -> D,
    D: Display,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_tree(&self.node, f, |f, value| write!(f, "{}", (self.to_text)(value)))
    }
}
impl<X: Traversable, F> fmt::Debug for DisplayWith<'_, X, F> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayWith")
            .field("cursor", self.node.raw_cursor())
            .finish()
    }
}

impl<'a, X: Traversable> NodeRef<'a, X> {
    /// Returns an object which renders the subtree rooted at this node, converting every payload to text with the specified closure.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::PropertyTree;
    /// let mut tree = PropertyTree::<_>::new(1, 2);
    /// let mut root = tree.root_mut();
    /// root.add_child(2, 0, 0).unwrap();
    /// root.add_child(3, 0, 1).unwrap();
    ///
    /// let rendered = tree.root().display_with(|x| x * 10).to_string();
    /// assert_eq!(rendered, "10\n-(0)20\n-(1)30\n");
    /// ```
    #[inline]
    pub fn display_with<F, D>(&self, to_text: F) -> DisplayWith<'a, X, F>
    where
        F: Fn(&X::Value) -> D,
        D: Display,
    {
        DisplayWith {
            node: self.clone(),
            to_text,
        }
    }
    /// Renders the subtree rooted at this node into a string, converting every payload to text with the specified closure.
    #[inline]
    pub fn to_string_with<F, D>(&self, to_text: F) -> String
    where
        F: Fn(&X::Value) -> D,
        D: Display,
    {
        self.display_with(to_text).to_string()
    }
}
/// Renders the subtree using the natural text form of the payloads: one line per node, children indented by `-(i)` for property slot `i`.
impl<X> Display for NodeRef<'_, X>
where
    X: Traversable,
    X::Value: Display,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_tree(self, f, |f, value| Display::fmt(value, f))
    }
}
