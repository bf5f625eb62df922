//! Randomized binary search tree where every structural decision is weighted by subtree sizes.

mod node;
mod set;
pub mod tree;

pub use self::node::Node;
pub use self::set::{RandomizedBst, RandomizedBstIntoIter};
pub use self::tree::{Iter, Tree};
