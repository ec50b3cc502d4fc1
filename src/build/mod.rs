//! Building producers from scratch
//!
//! This module provides functions and types for turning closures, iterators and plain
//! values into [`Producer`](crate::Producer)s.

mod func;
mod iter;

// Re-export building blocks
pub use func::{Empty, FromFn, FromStep, Once, Repeat, empty, from_fn, from_step, once, repeat};
pub use iter::{FromIter, from_iter};
