#![cfg_attr(feature = "clippy", feature(plugin))]
#![cfg_attr(feature = "clippy", plugin(clippy))]

//! A randomized binary search tree augmented with subtree sizes.
//!
//! The tree is balanced by random choices weighted by subtree sizes instead of rotations or
//! colour bits. `split` and `join` are the structural primitives; insertion, removal and the
//! balance-preserving insertion are all expressed in terms of them.

pub mod bst;
