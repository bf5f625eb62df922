use quickcheck::{quickcheck, Arbitrary, Gen};
use rand::{SeedableRng, XorShiftRng};
use randomized_bst::bst::{tree, Tree};

/// An operation applied to a tree in a property test.
#[derive(Copy, Clone, Debug)]
enum Op {
    Insert(i8),
    InsertBalanced(i8),
    Remove(i8),
    SplitJoin(i8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g)),
            1 => Op::InsertBalanced(i8::arbitrary(g)),
            2 => Op::Remove(i8::arbitrary(g)),
            3 => Op::SplitJoin(i8::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

fn rng() -> XorShiftRng {
    SeedableRng::from_seed([1, 1, 1, 1])
}

fn build(keys: &[i8]) -> Tree<i8> {
    keys.iter().fold(None, |root, key| tree::insert(root, *key))
}

fn inorder(root: &Tree<i8>) -> Vec<i8> {
    tree::iter(root).cloned().collect()
}

fn sizes_consistent(root: &Tree<i8>) -> bool {
    fn check(root: &Tree<i8>) -> Option<usize> {
        match root {
            Some(node) => {
                let size = 1 + check(node.left())? + check(node.right())?;
                if node.size() == size {
                    Some(size)
                } else {
                    None
                }
            },
            None => Some(0),
        }
    }
    check(root).is_some()
}

fn is_sorted(keys: &[i8]) -> bool {
    keys.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Applies `ops` to both a tree and a sorted vector, checking the invariants after each step.
fn do_ops(ops: &[Op]) -> bool {
    let mut rng = rng();
    let mut root = None;
    let mut model: Vec<i8> = Vec::new();

    for op in ops {
        match *op {
            Op::Insert(key) => {
                root = tree::insert(root, key);
                let index = model.binary_search(&key).unwrap_or_else(|index| index);
                model.insert(index, key);
            },
            Op::InsertBalanced(key) => {
                root = tree::insert_balanced(root, key, &mut rng);
                let index = model.binary_search(&key).unwrap_or_else(|index| index);
                model.insert(index, key);
            },
            Op::Remove(key) => {
                if let Ok(index) = model.binary_search(&key) {
                    let (next, removed) = tree::remove(root, &key, &mut rng);
                    root = next;
                    if removed != key {
                        return false;
                    }
                    model.remove(index);
                }
            },
            Op::SplitJoin(key) => {
                let (left, right) = tree::split(root, &key);
                if inorder(&left).iter().any(|k| *k > key) || inorder(&right).iter().any(|k| *k <= key) {
                    return false;
                }
                root = tree::join(left, right, &mut rng);
            },
        }
        let keys = inorder(&root);
        if !is_sorted(&keys) || !sizes_consistent(&root) || keys != model {
            return false;
        }
    }
    true
}

quickcheck! {
    fn prop_operations_preserve_invariants(ops: Vec<Op>) -> bool {
        do_ops(&ops)
    }

    fn prop_insert_then_find(keys: Vec<i8>, key: i8) -> bool {
        let root = tree::insert(build(&keys), key);
        tree::find(&root, &key).map(|node| *node.key()) == Some(key)
    }

    fn prop_remove_inverts_insert(keys: Vec<i8>, key: i8) -> bool {
        let mut rng = rng();
        if keys.contains(&key) {
            return true;
        }
        let root = build(&keys);
        let before = inorder(&root);
        let (root, _) = tree::remove(tree::insert_balanced(root, key, &mut rng), &key, &mut rng);
        inorder(&root) == before && !tree::contains(&root, &key)
    }

    fn prop_remove_inverts_plain_insert(keys: Vec<i8>, key: i8) -> bool {
        let mut rng = rng();
        if keys.contains(&key) {
            return true;
        }
        let root = build(&keys);
        let before = inorder(&root);
        let (root, removed) = tree::remove(tree::insert(root, key), &key, &mut rng);
        removed == key
            && inorder(&root) == before
            && !tree::contains(&root, &key)
            && sizes_consistent(&root)
    }

    fn prop_select_matches_inorder(keys: Vec<i8>) -> bool {
        let root = build(&keys);
        let sorted = inorder(&root);
        (0..sorted.len()).all(|rank| *tree::select(&root, rank).key() == sorted[rank])
    }

    fn prop_split_join_round_trip(keys: Vec<i8>, pivot: i8) -> bool {
        let mut rng = rng();
        let root = build(&keys);
        let before = inorder(&root);
        let (left, right) = tree::split(root, &pivot);
        let left_size = tree::size(&left);
        let right_size = tree::size(&right);
        let root = tree::join(left, right, &mut rng);
        left_size + right_size == before.len()
            && tree::size(&root) == before.len()
            && inorder(&root) == before
            && sizes_consistent(&root)
    }

    fn prop_inorder_is_sorted(keys: Vec<i8>) -> bool {
        let mut rng = rng();
        let root = keys.iter().fold(None, |root, key| tree::insert_balanced(root, *key, &mut rng));
        let mut expected = keys.clone();
        expected.sort();
        inorder(&root) == expected && sizes_consistent(&root)
    }
}
