use super::*;
use crate::{Traversable, PropertyIndexError};

#[test]
fn basic() {
    let mut tree: PropertyTree<&str> = PropertyTree::new("if", 3);
    let mut root = tree.root_mut();
    root.add_child("cond", 0, 0).unwrap();
    root.add_child("then", 0, 1).unwrap();

    let root = tree.root();
    assert_eq!(root.num_properties(), 3);
    assert_eq!(root.num_children(0), Some(1));
    assert_eq!(root.num_children(1), Some(1));
    assert_eq!(root.num_children(2), Some(0));
    assert_eq!(root.num_children(3), None);
    assert_eq!(root.child(1, 0).map(|x| *x.value()), Some("then"));
    assert!(root.child(2, 0).is_none());
    assert!(root.is_branch());
    assert_eq!(tree.num_nodes(), 3);
}

#[test]
fn zero_properties() {
    let mut tree: PropertyTree<u32> = PropertyTree::new(7, 0);
    assert!(tree.root().is_leaf());
    assert_eq!(tree.root().num_properties(), 0);
    assert_eq!(
        tree.root_mut().add_child(8, 0, 0).unwrap_err(),
        PropertyIndexError {
            property: 0,
            num_properties: 0,
        },
    );
    assert_eq!(tree.num_nodes(), 1);
}

#[test]
fn out_of_range_property_leaves_tree_untouched() {
    let mut tree: PropertyTree<u32> = PropertyTree::new(1, 2);
    tree.root_mut().add_child(2, 0, 1).unwrap();
    let error = tree.root_mut().add_child(3, 0, 2).unwrap_err();
    assert_eq!(error.property, 2);
    assert_eq!(error.num_properties, 2);
    assert_eq!(
        error.to_string(),
        "property index 2 is out of range for a node with 2 properties",
    );
    assert_eq!(tree.root().tree_size(), 2);
}

#[test]
fn children_keep_append_order() {
    let mut tree: PropertyTree<u32> = PropertyTree::new(0, 1);
    for i in 1..=5 {
        tree.root_mut().add_child(i, 0, 0).unwrap();
    }
    let values = tree
        .root()
        .children(0)
        .unwrap()
        .map(|x| *x.value())
        .collect::<Vec<_>>();
    assert_eq!(values, [1, 2, 3, 4, 5]);
    let reversed = tree
        .root()
        .children(0)
        .unwrap()
        .rev()
        .map(|x| *x.value())
        .collect::<Vec<_>>();
    assert_eq!(reversed, [5, 4, 3, 2, 1]);
}

#[test]
fn properties_iter() {
    let mut tree: PropertyTree<char> = PropertyTree::new('R', 3);
    let mut root = tree.root_mut();
    root.add_child('a', 0, 0).unwrap();
    root.add_child('b', 0, 2).unwrap();
    root.add_child('c', 0, 2).unwrap();

    let lengths = tree
        .root()
        .properties()
        .map(|children| children.len())
        .collect::<Vec<_>>();
    assert_eq!(lengths, [1, 0, 2]);
}

#[test]
fn navigation() {
    let mut tree: PropertyTree<char> = PropertyTree::new('R', 1);
    let key = *tree
        .root_mut()
        .add_child('A', 1, 0)
        .unwrap()
        .add_child('B', 0, 0)
        .unwrap()
        .raw_key();

    let b = tree.node(key).unwrap();
    assert_eq!(*b.value(), 'B');
    let a = b.parent().unwrap();
    assert_eq!(*a.value(), 'A');
    assert!(a.parent().unwrap().is_root());
    assert!(a.parent().unwrap().is(&tree.root()));

    let mut b_mut = tree.node_mut(key).unwrap();
    let mut a_mut = b_mut.parent_mut().unwrap();
    a_mut.add_child('C', 0, 0).unwrap();
    assert_eq!(tree.root().child(0, 0).unwrap().num_children(0), Some(2));

    let root = tree.root_mut();
    let a = root.into_child(0, 0).unwrap();
    assert!(a.into_child(0, 5).is_err());
}

#[test]
fn node_ref_mut_conversion() {
    let mut tree: PropertyTree<u8> = PropertyTree::new(0, 1);
    let child = tree.root_mut().add_child(1, 0, 0).unwrap().into_raw_key();
    let child_mut = tree.node_mut(child).unwrap();
    assert!(!child_mut.is_root());
    assert!(child_mut.is_leaf());
    let child_ref = NodeRef::from(child_mut);
    assert_eq!(*child_ref.value(), 1);
}

#[test]
fn append_subtree() {
    let mut argument: PropertyTree<&str> = PropertyTree::new("+", 2);
    argument.root_mut().add_child("1", 0, 0).unwrap();
    argument.root_mut().add_child("2", 0, 1).unwrap();

    let mut tree: PropertyTree<&str> = PropertyTree::new("call", 2);
    tree.root_mut().add_child("f", 0, 0).unwrap();
    tree.root_mut()
        .append_subtree(&argument.root(), 1)
        .unwrap()
        .add_child("3", 0, 1)
        .unwrap();

    assert_eq!(tree.root().tree_size(), 6);
    assert_eq!(tree.to_string(), "call\n-(0)f\n-(1)+\n-(1)-(0)1\n-(1)-(1)2\n-(1)-(1)3\n");
    // The source tree is untouched
    assert_eq!(argument.root().tree_size(), 3);

    assert!(tree.root_mut().append_subtree(&argument.root(), 2).is_err());
    assert_eq!(tree.root().tree_size(), 6);
}

#[test]
fn append_subtree_from_frozen() {
    let mut source: PropertyTree<u32> = PropertyTree::new(10, 1);
    source.root_mut().add_child(11, 0, 0).unwrap();
    let frozen = source.into_frozen();

    let mut tree: PropertyTree<u32> = PropertyTree::new(0, 1);
    tree.root_mut().append_subtree(&frozen.root(), 0).unwrap();
    assert_eq!(tree.root().child(0, 0).unwrap(), frozen.root());
}

#[test]
fn frozen() {
    let mut tree: PropertyTree<u32> = PropertyTree::new(1, 2);
    tree.root_mut().add_child(2, 0, 0).unwrap();
    tree.root_mut().add_child(3, 1, 1).unwrap().add_child(4, 0, 0).unwrap();
    let copy = tree.root().deep_copy();

    let frozen = tree.into_frozen();
    assert_eq!(frozen.num_nodes(), 4);
    assert_eq!(frozen.root().tree_size(), 4);
    assert_eq!(frozen.root(), copy.root());
    assert_eq!(frozen.to_string(), copy.to_string());
    assert!(frozen.contains_cursor(&frozen.cursor_to_root()));

    let snapshot = copy.root().child(1, 0).unwrap().to_frozen();
    assert_eq!(snapshot.root().tree_size(), 2);
    assert!(snapshot.root().is_root());
}

#[test]
fn vec_storage() {
    let mut tree: VecPropertyTree<u32> = PropertyTree::with_capacity(4, 1, 2);
    tree.root_mut().add_child(2, 0, 0).unwrap();
    tree.root_mut().add_child(3, 0, 1).unwrap();

    let sparse = tree.root().deep_copy();
    assert_eq!(sparse.root(), tree.root());
    let dense: VecPropertyTree<u32> = sparse.root().deep_copy_into();
    assert_eq!(dense, tree);
}

#[test]
fn vec_storage_clone() {
    let mut tree: VecPropertyTree<u32> = PropertyTree::new(1, 1);
    tree.root_mut().add_child(2, 0, 0).unwrap();
    let mut copy = tree.clone();
    copy.root_mut().add_child(3, 0, 0).unwrap();
    assert_eq!(tree.root().tree_size(), 2);
    assert_eq!(copy.root().tree_size(), 3);
}

#[test]
fn appends_never_move_nodes() {
    let mut tree: VecPropertyTree<u32> = PropertyTree::new(0, 2);
    let mut keys = vec![*tree.root_key()];
    for i in 1..64 {
        let parent = keys[(i as usize * 7) % keys.len()];
        let mut parent = tree.node_mut(parent).unwrap();
        if parent.num_properties() == 0 {
            continue;
        }
        let property = i as usize % parent.num_properties();
        keys.push(parent.add_child(i, i as usize % 3, property).unwrap().into_raw_key());
    }
    for (position, key) in keys.iter().enumerate() {
        let node = tree.node(*key).unwrap();
        if let Some(parent) = node.parent() {
            assert!(parent
                .properties()
                .flatten()
                .any(|child| child.is(&node)));
        }
        assert_eq!(*key, position);
    }
}

#[test]
#[should_panic(expected = "invalid cursor")]
fn invalid_cursor_panics() {
    let tree: PropertyTree<u32> = PropertyTree::new(1, 0);
    let _ = tree.value_of(&100);
}

#[test]
fn tree_equality_and_hash() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(x: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        x.hash(&mut hasher);
        hasher.finish()
    }

    let build = |last| {
        let mut tree: PropertyTree<u32> = PropertyTree::new(1, 2);
        tree.root_mut().add_child(2, 0, 0).unwrap();
        tree.root_mut().add_child(last, 0, 1).unwrap();
        tree
    };
    let (a, b, c) = (build(3), build(3), build(4));
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);
    // Only the first slot takes part in hashing
    assert_eq!(hash_of(&a), hash_of(&c));
}
