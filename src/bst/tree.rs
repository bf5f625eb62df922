//! Free functions over owned subtrees.
//!
//! Every mutating function consumes the trees passed to it and returns the tree(s) that now own
//! the nodes, so a subtree is never reachable from two handles at once.

use crate::bst::node::Node;
use rand::Rng;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Returns the number of nodes in `tree`.
pub fn size<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(node) => node.size,
        None => 0,
    }
}

/// Returns the number of nodes on the longest root-to-leaf path of `tree`.
pub fn height<T>(tree: &Tree<T>) -> usize {
    let mut max_depth = 0;
    let mut stack = Vec::new();
    if let Some(node) = tree {
        stack.push((&**node, 1));
    }
    while let Some((node, depth)) = stack.pop() {
        max_depth = max_depth.max(depth);
        if let Some(ref left_node) = node.left {
            stack.push((&**left_node, depth + 1));
        }
        if let Some(ref right_node) = node.right {
            stack.push((&**right_node, depth + 1));
        }
    }
    max_depth
}

/// Joins two trees into one. Every key in `l_tree` must be less than or equal to every key in
/// `r_tree`; this is not checked.
///
/// The root of `l_tree` becomes the new root with probability `|L| / (|L| + |R|)`, otherwise the
/// root of `r_tree` does.
pub fn join<T, R: Rng>(l_tree: Tree<T>, r_tree: Tree<T>, rng: &mut R) -> Tree<T> {
    match (l_tree, r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            if rng.gen_range(0, l_node.size + r_node.size) < l_node.size {
                l_node.size += r_node.size;
                l_node.right = join(l_node.right.take(), Some(r_node), rng);
                Some(l_node)
            } else {
                r_node.size += l_node.size;
                r_node.left = join(Some(l_node), r_node.left.take(), rng);
                Some(r_node)
            }
        },
        (tree, None) | (None, tree) => tree,
    }
}

/// Splits `tree` into a tree with all keys less than or equal to `key` and a tree with all keys
/// greater than `key`.
pub fn split<T: Ord>(tree: Tree<T>, key: &T) -> (Tree<T>, Tree<T>) {
    match tree {
        Some(mut node) => {
            if *key < node.key {
                let (left, right) = split(node.left.take(), key);
                node.size -= size(&left);
                node.left = right;
                (left, Some(node))
            } else {
                let (left, right) = split(node.right.take(), key);
                node.size -= size(&right);
                node.right = left;
                (Some(node), right)
            }
        },
        None => (None, None),
    }
}

/// Inserts `key` by plain binary search tree descent. Equal keys are placed to the right.
pub fn insert<T: Ord>(mut tree: Tree<T>, key: T) -> Tree<T> {
    let mut curr = &mut tree;
    while let Some(node) = curr {
        node.size += 1;
        curr = if key < node.key {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    *curr = Some(Box::new(Node::new(key)));
    tree
}

/// Inserts `key` so that the resulting tree is distributed like a binary search tree built from
/// a uniformly random insertion order.
///
/// With probability `1 / n`, where `n` is the size after insertion, `key` becomes the root of the
/// current subtree and the subtree is split around it.
pub fn insert_balanced<T: Ord, R: Rng>(tree: Tree<T>, key: T, rng: &mut R) -> Tree<T> {
    match tree {
        Some(mut node) => {
            let new_size = node.size + 1;
            if rng.gen_range(0, new_size) == 0 {
                let (left, right) = split(Some(node), &key);
                Some(Box::new(Node::with_children(key, left, right)))
            } else {
                node.size = new_size;
                if key < node.key {
                    node.left = insert_balanced(node.left.take(), key, rng);
                } else {
                    node.right = insert_balanced(node.right.take(), key, rng);
                }
                Some(node)
            }
        },
        None => Some(Box::new(Node::new(key))),
    }
}

/// Removes one occurrence of `key` and returns the resulting tree together with the removed key.
/// The removed node is the one `find` would return.
///
/// # Panics
///
/// Panics if `key` is not in `tree`.
pub fn remove<T: Ord, R: Rng>(mut tree: Tree<T>, key: &T, rng: &mut R) -> (Tree<T>, T) {
    assert!(contains(&tree, key), "Error: key not found.");
    let removed = remove_present(&mut tree, key, rng);
    (tree, removed)
}

/// Removes one occurrence of `key` in place. The caller must have checked that `key` is in
/// `tree`: sizes are decremented on the way down before the match is reached.
pub(crate) fn remove_present<T: Ord, R: Rng>(tree: &mut Tree<T>, key: &T, rng: &mut R) -> T {
    let mut curr = tree;
    while curr
        .as_ref()
        .map_or(false, |node| key.cmp(&node.key) != Ordering::Equal)
    {
        let node = curr.as_mut().expect("Unreachable code");
        node.size -= 1;
        curr = if *key < node.key {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    let Node { key, left, right, .. } = *curr.take().expect("Error: key not found.");
    *curr = join(left, right, rng);
    key
}

/// Returns the first node on the root-to-leaf search path whose key equals `key`.
pub fn find<'a, T: Ord>(tree: &'a Tree<T>, key: &T) -> Option<&'a Node<T>> {
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(&node.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&**node),
        }
    }
    None
}

pub fn contains<T: Ord>(tree: &Tree<T>, key: &T) -> bool {
    find(tree, key).is_some()
}

/// Returns the node of rank `rank`, where rank `0` is the minimum. Equal keys are counted
/// positionally.
///
/// # Panics
///
/// Panics if `rank` is not less than the size of `tree`.
pub fn select<T>(tree: &Tree<T>, mut rank: usize) -> &Node<T> {
    assert!(rank < size(tree), "Error: rank out of bounds.");
    let mut curr = tree;
    while let Some(node) = curr {
        let left_size = node.left_size();
        match rank.cmp(&left_size) {
            Ordering::Equal => return &**node,
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                rank -= left_size + 1;
                curr = &node.right;
            },
        }
    }
    unreachable!("Unreachable code")
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

/// Returns an inorder iterator over the keys of `tree`.
pub fn iter<T>(tree: &Tree<T>) -> Iter<'_, T> {
    Iter {
        current: tree,
        stack: Vec::new(),
    }
}

/// An iterator over the keys of a tree in ascending order.
pub struct Iter<'a, T> {
    current: &'a Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                ref key,
                ref right,
                ..
            } = node;
            self.current = right;
            key
        })
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            current: self.current,
            stack: self.stack.clone(),
        }
    }
}
