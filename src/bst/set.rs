use crate::bst::node::Node;
use crate::bst::tree;
use log::trace;
use rand::{Rand, Rng, SeedableRng, XorShiftRng};
use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;

/// An ordered multiset implemented by a randomized binary search tree.
///
/// Every node stores the size of its subtree. Instead of priorities or rotations, the tree is
/// kept balanced by random choices weighted by those sizes: when two trees are joined, the root
/// of each is chosen with probability proportional to its size, and a balanced insertion places
/// the new key at the root of an `n`-node subtree with probability `1 / n`. The resulting shape
/// is distributed like a binary search tree built from a uniformly random insertion order, so the
/// expected height is proportional to the logarithm of the number of keys.
///
/// Equal keys are all kept. `remove` removes one occurrence at a time and `select` counts each
/// occurrence separately.
///
/// # Examples
///
/// ```
/// use randomized_bst::bst::RandomizedBst;
///
/// let mut tree = RandomizedBst::new();
/// tree.insert_balanced(5);
/// tree.insert_balanced(1);
/// tree.insert_balanced(3);
///
/// assert_eq!(tree.find(&3), Some(&3));
/// assert_eq!(tree.find(&2), None);
/// assert_eq!(tree.select(1), &3);
/// assert_eq!(tree.len(), 3);
///
/// let (left, right) = tree.split(&3);
/// assert_eq!(left.iter().collect::<Vec<&u32>>(), vec![&1, &3]);
/// assert_eq!(right.iter().collect::<Vec<&u32>>(), vec![&5]);
///
/// let mut tree = left.join(right);
/// assert_eq!(tree.remove(&1), 1);
/// assert_eq!(tree.len(), 2);
/// ```
pub struct RandomizedBst<T, R = XorShiftRng> {
    root: tree::Tree<T>,
    rng: R,
}

impl<T: Ord> RandomizedBst<T> {
    /// Constructs a new, empty `RandomizedBst<T>` with an unseeded random source.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let tree: RandomizedBst<u32> = RandomizedBst::new();
    /// ```
    pub fn new() -> Self {
        Self::with_rng(XorShiftRng::new_unseeded())
    }

    /// Constructs a new, empty `RandomizedBst<T>` whose random source is seeded with `seed`. The
    /// seed must not be all zeroes.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let tree: RandomizedBst<u32> = RandomizedBst::from_seed([1, 2, 3, 4]);
    /// ```
    pub fn from_seed(seed: [u32; 4]) -> Self {
        Self::with_rng(XorShiftRng::from_seed(seed))
    }
}

impl<T: Ord, R: Rng> RandomizedBst<T, R> {
    /// Constructs a new, empty `RandomizedBst<T, R>` that draws its random choices from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    /// use rand::StdRng;
    ///
    /// let tree: RandomizedBst<u32, StdRng> = RandomizedBst::with_rng(StdRng::new().unwrap());
    /// ```
    pub fn with_rng(rng: R) -> Self {
        RandomizedBst { root: None, rng }
    }

    /// Inserts a key by plain binary search tree descent. Equal keys are placed after existing
    /// ones. This does not rebalance the tree: inserting sorted keys produces a tree of linear
    /// height.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let mut tree = RandomizedBst::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) {
        let root = self.root.take();
        self.root = tree::insert(root, key);
    }

    /// Inserts a key while keeping the shape of the tree distributed like a randomly built binary
    /// search tree, regardless of the insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let mut tree = RandomizedBst::new();
    /// for key in 0..1000 {
    ///     tree.insert_balanced(key);
    /// }
    /// assert_eq!(tree.len(), 1000);
    /// assert!(tree.height() < 100);
    /// ```
    pub fn insert_balanced(&mut self, key: T) {
        let RandomizedBst { root, rng } = self;
        *root = tree::insert_balanced(root.take(), key, rng);
    }

    /// Removes one occurrence of a key from the tree and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the key is not in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let mut tree = RandomizedBst::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), 1);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &T) -> T {
        assert!(self.contains(key), "Error: key not found.");
        let RandomizedBst { root, rng } = self;
        tree::remove_present(root, key, rng)
    }

    /// Returns an immutable reference to a stored key equal to `key`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let mut tree = RandomizedBst::new();
    /// tree.insert(1);
    /// assert_eq!(tree.find(&0), None);
    /// assert_eq!(tree.find(&1), Some(&1));
    /// ```
    pub fn find(&self, key: &T) -> Option<&T> {
        tree::find(&self.root, key).map(Node::key)
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let mut tree = RandomizedBst::new();
    /// tree.insert(1);
    /// assert_eq!(tree.contains(&0), false);
    /// assert_eq!(tree.contains(&1), true);
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.root, key)
    }

    /// Returns the key of rank `rank` in ascending order, where rank `0` is the minimum.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is not less than the number of keys in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let mut tree = RandomizedBst::new();
    /// tree.insert(3);
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.select(0), &1);
    /// assert_eq!(tree.select(2), &3);
    /// ```
    pub fn select(&self, rank: usize) -> &T {
        tree::select(&self.root, rank).key()
    }

    /// Returns the minimum key of the tree, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the tree, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Splits the tree into a tree with all keys less than or equal to `key` and a tree with all
    /// keys greater than `key`. The second tree gets a fresh random source drawn from this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let mut tree = RandomizedBst::new();
    /// for key in 0..10 {
    ///     tree.insert_balanced(key);
    /// }
    ///
    /// let (left, right) = tree.split(&2);
    /// assert_eq!(left.len(), 3);
    /// assert_eq!(right.len(), 7);
    /// assert_eq!(right.select(0), &3);
    /// ```
    pub fn split(mut self, key: &T) -> (Self, Self)
    where
        R: Rand,
    {
        let right_rng = self.rng.gen::<R>();
        let (left, right) = tree::split(self.root.take(), key);
        trace!(
            "split {} keys into {} and {}",
            tree::size(&left) + tree::size(&right),
            tree::size(&left),
            tree::size(&right)
        );
        self.root = left;
        (
            self,
            RandomizedBst {
                root: right,
                rng: right_rng,
            },
        )
    }

    /// Joins two trees. Every key in `self` must be less than or equal to every key in `other`.
    /// The random source of `other` is discarded.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the maximum of `self` is greater than the minimum of `other`.
    /// Release builds do not check the ordering, and an unordered join produces a tree whose
    /// inorder traversal is not sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let mut left = RandomizedBst::new();
    /// left.insert(1);
    /// left.insert(2);
    ///
    /// let mut right = RandomizedBst::new();
    /// right.insert(3);
    ///
    /// let tree = left.join(right);
    /// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    /// ```
    pub fn join(mut self, mut other: Self) -> Self {
        debug_assert!(
            match (self.max(), other.min()) {
                (Some(max), Some(min)) => max <= min,
                _ => true,
            },
            "Error: joined trees overlap.",
        );
        trace!(
            "join {} keys with {} keys",
            tree::size(&self.root),
            tree::size(&other.root)
        );
        let RandomizedBst { root, rng } = &mut self;
        *root = tree::join(root.take(), other.root.take(), rng);
        self
    }
}

impl<T, R> RandomizedBst<T, R> {
    /// Returns the number of keys in the tree, counting every occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let mut tree = RandomizedBst::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::size(&self.root)
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let tree: RandomizedBst<u32> = RandomizedBst::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Clears the tree, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let mut tree = RandomizedBst::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// Returns an iterator over the tree. The iterator yields keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomized_bst::bst::RandomizedBst;
    ///
    /// let mut tree = RandomizedBst::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> tree::Iter<'_, T> {
        tree::iter(&self.root)
    }
}

impl<T, R> Drop for RandomizedBst<T, R> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, R> IntoIterator for RandomizedBst<T, R> {
    type IntoIter = RandomizedBstIntoIter<T>;
    type Item = T;

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.root.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T, R> IntoIterator for &'a RandomizedBst<T, R>
where
    T: 'a,
{
    type IntoIter = tree::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RandomizedBst<T, R>`.
///
/// This iterator traverses the keys of the tree in-order and yields owned keys.
pub struct RandomizedBstIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for RandomizedBstIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

impl<T> Drop for RandomizedBstIntoIter<T> {
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}

impl<T: Ord> Default for RandomizedBst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for RandomizedBst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord, R: Rng> Extend<T> for RandomizedBst<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert_balanced(key);
        }
    }
}

impl<T: Ord, R: Rng> Index<usize> for RandomizedBst<T, R> {
    type Output = T;

    fn index(&self, rank: usize) -> &Self::Output {
        self.select(rank)
    }
}

impl<T: fmt::Debug, R> fmt::Debug for RandomizedBst<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
