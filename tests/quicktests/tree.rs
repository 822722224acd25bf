use sapling::BinarySearchTree;

use std::collections::BTreeSet;

use crate::Op;

/// Number of cursor steps it takes to get from `begin` to `end`.
fn steps<T: Ord>(tree: &BinarySearchTree<T>) -> usize {
    let mut cursor = tree.begin();
    let mut steps = 0;
    while cursor != tree.end() {
        cursor.advance();
        steps += 1;
    }
    steps
}

/// Applies a set of operations to a tree and a `BTreeSet`, checking
/// after every one of them that both agree.
fn do_ops<T>(ops: &[Op<T>], tree: &mut BinarySearchTree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(x) => {
                let (cursor, inserted) = tree.insert(x.clone());
                let points_at_value = *cursor == *x;
                points_at_value && inserted == set.insert(x.clone())
            }
            Op::Find(x) => tree.find(x).get() == set.get(x),
            Op::Clear => {
                tree.clear();
                set.clear();
                tree.is_empty() && tree.begin() == tree.end()
            }
            Op::Iter => tree.iter().eq(set.iter()),
        };
        if !agrees || tree.len() != set.len() {
            return false;
        }
    }

    tree.iter().eq(set.iter()) && steps(tree) == tree.len()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
}

#[quickcheck]
fn fuzz_multiple_operations_string(ops: Vec<Op<String>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
}

#[quickcheck]
fn sorted_traversal(xs: Vec<i32>) -> bool {
    let tree: BinarySearchTree<i32> = xs.iter().copied().collect();
    let values: Vec<i32> = tree.iter().copied().collect();

    values.windows(2).all(|pair| pair[0] < pair[1])
        && values.len() == tree.len()
        && steps(&tree) == tree.len()
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: BinarySearchTree<i8> = xs.into_iter().collect();
    let (first, _) = tree.insert(x);
    let first_key = first.raw_key();
    let len = tree.len();
    let (second, inserted) = tree.insert(x);
    let second_key = second.raw_key();

    !inserted && first_key == second_key && tree.len() == len
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x).get() == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<i8> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| tree.find(x) == tree.end())
}

#[quickcheck]
fn clear_behaves_like_a_fresh_tree(before: Vec<i8>, after: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<i8> = before.into_iter().collect();
    tree.clear();
    let cleared = tree.is_empty() && tree.len() == 0 && tree.begin() == tree.end();

    tree.extend(after.iter().copied());
    let fresh: BinarySearchTree<i8> = after.into_iter().collect();

    cleared && tree.iter().eq(fresh.iter())
}

#[test]
fn example_sequence() {
    let mut tree = BinarySearchTree::<i32>::new();
    for x in [5, 3, 8, 1, 4].iter().copied() {
        assert!(tree.insert(x).1);
    }
    assert!(tree.iter().copied().eq([1, 3, 4, 5, 8].iter().copied()));
    assert_eq!(tree.find(&4).get(), Some(&4));
    assert_eq!(tree.find(&9), tree.end());
    assert_eq!(tree.len(), 5);

    tree.clear();
    assert_eq!(tree.len(), 0);
    let (cursor, inserted) = tree.insert(2);
    assert!(inserted);
    assert_eq!(*cursor, 2);
}
