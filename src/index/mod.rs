//! Index structures.
//!
//! The ordered index is the crate's core: every registry operation bottoms
//! out in it.
//!
//! # Components
//! - [`RbTree`] - Red-black tree mapping ordered keys to opaque payloads
//! - [`Iter`] - Lazy in-order traversal

pub mod rbtree;

pub use rbtree::{Iter, RbTree};
