use crate::bst::tree;

/// A struct representing an internal node of a randomized binary search tree.
pub struct Node<T> {
    pub(crate) key: T,
    pub(crate) size: usize,
    pub(crate) left: tree::Tree<T>,
    pub(crate) right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            size: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) fn with_children(key: T, left: tree::Tree<T>, right: tree::Tree<T>) -> Self {
        let mut node = Node {
            key,
            size: 1,
            left,
            right,
        };
        node.update();
        node
    }

    /// Returns the key stored at this node.
    pub fn key(&self) -> &T {
        &self.key
    }

    /// Returns the number of nodes in the subtree rooted at this node, including itself.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn left(&self) -> &tree::Tree<T> {
        &self.left
    }

    pub fn right(&self) -> &tree::Tree<T> {
        &self.right
    }

    pub(crate) fn update(&mut self) {
        let Node {
            ref mut size,
            ref left,
            ref right,
            ..
        } = self;
        *size = 1 + tree::size(left) + tree::size(right);
    }

    pub(crate) fn left_size(&self) -> usize {
        tree::size(&self.left)
    }
}
