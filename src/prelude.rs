//! Commonly used imports
//!
//! Use `use stepgen::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Cursor, End, GenError, Generator, Producer, Step};

// Configuration
pub use crate::{FinalValue, GeneratorConfig};

// Most common constructors
pub use crate::build::{empty, from_fn, from_iter, from_step, once, repeat};
pub use crate::generator;

// Composition
pub use crate::compose::chain;

// Execution
pub use crate::{drive, drive_while};
