use std::collections::HashSet;
use std::rc::Rc;
use crate::{
    property_tree::{Node, VecPropertyTree},
    PropertyTree, NodeParents, UnreachableTargetError,
};
use super::render_optional;

/// R (2 properties) with slot 0 = [A] and slot 1 = [B, C], B having slot 0 = [D].
fn sample() -> (PropertyTree<char>, [usize; 4]) {
    let mut tree = PropertyTree::<_>::new('R', 2);
    let mut root = tree.root_mut();
    let a = *root.add_child('A', 0, 0).unwrap().raw_key();
    let mut b = root.add_child('B', 1, 1).unwrap();
    let d = *b.add_child('D', 0, 0).unwrap().raw_key();
    let b = b.into_raw_key();
    let c = *root.add_child('C', 0, 1).unwrap().raw_key();
    (tree, [a, b, c, d])
}

#[test]
fn size() {
    let (tree, [a, b, c, d]) = sample();
    assert_eq!(tree.root().tree_size(), 5);
    assert_eq!(tree.node(b).unwrap().tree_size(), 2);
    for leaf in [a, c, d].iter().copied() {
        let leaf = tree.node(leaf).unwrap();
        assert!(leaf.is_leaf());
        assert_eq!(leaf.tree_size(), 1);
    }
}

#[test]
fn size_of_deep_chain() {
    let mut tree = PropertyTree::<u32>::new(0, 1);
    let mut key = *tree.root().raw_cursor();
    for i in 1..100_000 {
        key = tree
            .node_mut(key)
            .unwrap()
            .add_child(i, 1, 0)
            .unwrap()
            .into_raw_key();
    }
    assert_eq!(tree.root().tree_size(), 100_000);
    let copy = tree.root().deep_copy();
    assert_eq!(copy.root(), tree.root());
}

#[test]
fn parents() {
    let (tree, [a, b, c, d]) = sample();
    let root = tree.root();

    let parents = tree.node(d).unwrap().node_parents(&root).unwrap();
    assert_eq!(parents.target, d);
    assert_eq!(parents.through_nodes, [b, *root.raw_cursor()]);
    assert_eq!(parents.next_property, [0, 1]);
    assert_eq!(parents.next_child_num, [0, 0]);
    assert_eq!(parents.depth(), 2);
    assert_eq!(parents.walk(&tree), Some(d));

    let parents = tree.node(c).unwrap().node_parents(&root).unwrap();
    assert_eq!(parents.through_nodes, [*root.raw_cursor()]);
    assert_eq!(parents.next_property, [1]);
    assert_eq!(parents.next_child_num, [1]);

    let parents = tree.node(a).unwrap().node_parents(&root).unwrap();
    let steps = parents.steps().collect::<Vec<_>>();
    assert_eq!(steps, [(root.raw_cursor(), 0, 0)]);
}

#[test]
fn parents_of_root() {
    let (tree, _) = sample();
    let root = tree.root();
    let parents = root.node_parents(&root).unwrap();
    assert!(parents.is_empty());
    assert!(parents.next_property.is_empty());
    assert!(parents.next_child_num.is_empty());
    assert_eq!(parents.root(), root.raw_cursor());
    assert_eq!(parents.walk(&tree), Some(*root.raw_cursor()));
}

#[test]
fn parents_unreachable() {
    let (tree, [a, b, ..]) = sample();
    let a = tree.node(a).unwrap();
    let b = tree.node(b).unwrap();
    // A is a sibling of B, not a descendant
    assert_eq!(a.node_parents(&b), Err(UnreachableTargetError));
    // The root is above A
    assert_eq!(tree.root().node_parents(&a), Err(UnreachableTargetError));

    let (other, _) = sample();
    assert_eq!(a.node_parents(&other.root()), Err(UnreachableTargetError));
    assert_eq!(
        UnreachableTargetError.to_string(),
        "the target node is unreachable from the specified root node",
    );
}

#[test]
fn parents_from_inner_root() {
    let (tree, [_, b, _, d]) = sample();
    let parents = NodeParents::new(&tree, &b, &d).unwrap();
    assert_eq!(parents.through_nodes, [b]);
    assert_eq!(parents.next_property, [0]);
    assert_eq!(parents.next_child_num, [0]);
}

#[test]
fn deep_copy() {
    let (tree, [_, b, ..]) = sample();
    let copy = tree.root().deep_copy();
    assert_eq!(copy.root(), tree.root());
    assert_eq!(copy.num_nodes(), 5);
    let copied_b = copy.root().child(1, 0).unwrap();
    assert_eq!(*copied_b.value(), 'B');
    assert!(!std::ptr::eq(copied_b.tree(), tree.node(b).unwrap().tree()));

    let subtree = tree.node(b).unwrap().deep_copy();
    assert_eq!(subtree.to_string(), "B\n-(0)D\n");
    assert!(subtree.root().is_root());
}

#[test]
fn deep_copy_with_references() {
    let (tree, [a, b, c, d]) = sample();
    let root = *tree.root().raw_cursor();
    let references = [root, b, d].iter().copied().collect::<HashSet<_>>();

    let copy = tree
        .root()
        .deep_copy_with_references(&references, Some(&c));
    assert_eq!(copy.tree, tree);
    assert_eq!(copy.references.len(), 3);

    let positions = copy
        .references()
        .map(|node| node.node_parents(&copy.root()).unwrap())
        .map(|parents| (parents.next_property, parents.next_child_num))
        .collect::<HashSet<_>>();
    let expected: HashSet<(Vec<usize>, Vec<usize>)> = [
        (vec![], vec![]),
        (vec![1], vec![0]),
        (vec![0, 1], vec![0, 0]),
    ]
    .iter()
    .cloned()
    .collect();
    assert_eq!(positions, expected);

    let current = copy.current_reference().unwrap();
    assert_eq!(*current.value(), 'C');
    assert!(current.is(&copy.root().child(1, 1).unwrap()));

    // The root itself can be the current reference
    let copy = tree
        .root()
        .deep_copy_with_references(&HashSet::new(), Some(&root));
    assert!(copy.references.is_empty());
    assert_eq!(copy.current_reference, Some(*copy.tree.root_key()));

    // References outside of the copied subtree are dropped
    let references = [a, d].iter().copied().collect::<HashSet<_>>();
    let copy = tree
        .node(b)
        .unwrap()
        .deep_copy_with_references(&references, Some(&a));
    assert_eq!(copy.references.len(), 1);
    assert!(copy.current_reference.is_none());
    assert_eq!(*copy.references().next().unwrap().value(), 'D');
}

#[test]
fn deep_copy_into_other_storage() {
    let (tree, [_, b, c, _]) = sample();
    let dense: VecPropertyTree<char> = tree.root().deep_copy_into();
    assert_eq!(dense.root(), tree.root());
    assert_eq!(dense.num_nodes(), 5);

    let references = [b].iter().copied().collect::<HashSet<_>>();
    let copy = tree
        .root()
        .deep_copy_with_references_into::<usize, Vec<Node<char, usize>>>(&references, Some(&c));
    assert_eq!(copy.root(), tree.root());
    assert_eq!(*copy.references().next().unwrap().value(), 'B');
    assert_eq!(*copy.current_reference().unwrap().value(), 'C');
}

#[test]
fn deep_copy_shares_rc_payloads() {
    let mut tree = PropertyTree::<_>::new(Rc::new("R"), 1);
    tree.root_mut().add_child(Rc::new("A"), 0, 0).unwrap();
    let copy = tree.root().deep_copy();
    assert!(Rc::ptr_eq(copy.root().value(), tree.root().value()));
    let (left, right) = (copy.root().child(0, 0).unwrap(), tree.root().child(0, 0).unwrap());
    assert!(Rc::ptr_eq(left.value(), right.value()));
    assert_eq!(Rc::strong_count(tree.root().value()), 2);
}

#[test]
fn equality() {
    let (left, _) = sample();
    let (right, _) = sample();
    assert_eq!(left.root(), right.root());
    assert!(!left.root().is(&right.root()));

    let mut different = PropertyTree::<_>::new('R', 2);
    different.root_mut().add_child('A', 0, 0).unwrap();
    assert_ne!(left.root(), different.root());

    // Same values, different property counts
    let one = PropertyTree::<_>::new('X', 1);
    let two = PropertyTree::<_>::new('X', 2);
    assert_ne!(one.root(), two.root());

    // Same children, different slots
    let mut first = PropertyTree::<_>::new('X', 2);
    first.root_mut().add_child('Y', 0, 0).unwrap();
    let mut second = PropertyTree::<_>::new('X', 2);
    second.root_mut().add_child('Y', 0, 1).unwrap();
    assert_ne!(first.root(), second.root());
}

#[test]
fn partial_match() {
    let (tree, [_, b, ..]) = sample();
    let root = tree.root();
    assert!(root.partial_match(&root, true));
    assert!(root.partial_match(&root, false));

    // R with slot 0 = [A] and an empty slot 1
    let mut pattern = PropertyTree::<_>::new('R', 2);
    pattern.root_mut().add_child('A', 0, 0).unwrap();
    assert!(pattern.root().partial_match(&root, false));
    assert!(pattern.root().partial_match(&root, true));
    assert!(!root.partial_match(&pattern.root(), false));

    // R with slot 1 = [B], a prefix of [B, C]
    let mut prefix = PropertyTree::<_>::new('R', 2);
    prefix.root_mut().add_child('A', 0, 0).unwrap();
    prefix.root_mut().add_child('B', 1, 1).unwrap();
    assert!(prefix.root().partial_match(&root, false));
    assert!(!prefix.root().partial_match(&root, true));

    // B must have one property, as in the tree
    let mut wrong_shape = PropertyTree::<_>::new('R', 2);
    wrong_shape.root_mut().add_child('A', 0, 0).unwrap();
    wrong_shape.root_mut().add_child('B', 0, 1).unwrap();
    assert!(!wrong_shape.root().partial_match(&root, false));

    // Matching is positional
    let mut swapped = PropertyTree::<_>::new('R', 2);
    swapped.root_mut().add_child('A', 0, 0).unwrap();
    swapped.root_mut().add_child('C', 0, 1).unwrap();
    assert!(!swapped.root().partial_match(&root, false));

    assert!(!tree.node(b).unwrap().partial_match(&root, false));
}

#[test]
fn partial_match_comparator_order() {
    let (tree, _) = sample();
    let root = tree.root();
    let mut calls = Vec::new();
    let matched = root.partial_match_with(
        &root,
        |left, right| {
            calls.push(*left.value());
            left.value() == right.value()
        },
        true,
    );
    assert!(matched);
    assert_eq!(calls, ['R', 'A', 'B', 'D', 'C']);
}

#[test]
fn partial_match_custom_comparator() {
    let mut pattern = PropertyTree::<_>::new("expr", 1);
    pattern.root_mut().add_child("?", 0, 0).unwrap();
    let mut tree = PropertyTree::<_>::new("expr", 1);
    tree.root_mut().add_child("x", 0, 0).unwrap();

    assert!(pattern.root().partial_match_with(
        &tree.root(),
        |left, right| *left.value() == "?" || left.value() == right.value(),
        true,
    ));
    assert!(!pattern.root().partial_match(&tree.root(), true));

    // The comparator can fail on the very first pair
    assert!(!pattern.root().partial_match_with(&tree.root(), |_, _| false, false));
}

#[test]
fn partial_match_across_tree_kinds() {
    let (tree, _) = sample();
    let frozen = tree.root().to_frozen();
    assert!(tree.root().partial_match(&frozen.root(), true));
    assert!(frozen.root().partial_match(&tree.root(), true));
}

#[test]
fn render() {
    let (tree, [_, b, ..]) = sample();
    assert_eq!(
        tree.root().to_string(),
        "R\n-(0)A\n-(1)B\n-(1)-(0)D\n-(1)C\n",
    );
    assert_eq!(
        tree.root().to_string_with(|x| x.to_ascii_lowercase()),
        "r\n-(0)a\n-(1)b\n-(1)-(0)d\n-(1)c\n",
    );
    assert_eq!(
        format!("{}", tree.node(b).unwrap().display_with(|x| format!("<{}>", x))),
        "<B>\n-(0)<D>\n",
    );
    assert_eq!(render_optional::<PropertyTree<char>>(None), "NULL\n");
    assert_eq!(render_optional(tree.node(b).as_ref()), "B\n-(0)D\n");
}
