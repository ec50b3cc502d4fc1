//! Combining producers
//!
//! This module provides combinators that build one producer out of several.

mod chain;

pub use chain::{Chain, chain};
