//! # Stepgen: Generators Over Step Functions
//!
//! Turn a hand-written step function into a lazy, pull-based sequence consumed through
//! `Iterator` or an explicit cursor protocol.
//!
//! ## Core Types
//!
//! - **[`Producer`]**: a step function that yields one value per call and raises a
//!   `&mut bool` stop flag when it is exhausted
//! - **[`Generator`]**: owns a producer and the stop flag; hands out cursors
//! - **[`Cursor`]**: a forward-only handle that borrows its generator
//!
//! ## Key Properties
//!
//! - **Single pass**: an exhausted generator refuses `begin()` until `reset()`
//! - **Checked misuse**: reading past the end or using a detached cursor returns a
//!   [`GenError`] instead of a stale value
//! - **Borrowed cursors**: a cursor can never outlive its generator
//!
//! ## Example
//!
//! ```
//! use stepgen::*;
//!
//! let mut n = 0;
//! let mut seq = generator(move |stop: &mut bool| {
//!     if n == 3 {
//!         *stop = true;
//!     }
//!     n += 1;
//!     n - 1
//! });
//!
//! let values: Vec<i32> = seq.begin()?.collect();
//! assert_eq!(values, vec![0, 1, 2]);
//!
//! // Exhausted until re-armed
//! assert_eq!(seq.begin().unwrap_err(), GenError::ExpiredSession);
//! seq.reset();
//! assert_eq!(seq.begin()?.next(), Some(4));
//! # Ok::<(), GenError>(())
//! ```
//!
//! ## Common Functions
//!
//! **Building Producers:**
//! - [`from_fn(f)`] - Wrap a raw `FnMut(&mut bool) -> T` step function
//! - [`from_step(f)`] - Wrap a closure returning [`Step`]
//! - [`from_iter(iter)`] - Drive any iterator
//! - [`repeat(f)`], [`once(v)`], [`empty()`] - Fixed shapes
//! - [`chain(a, b)`] - Run `a` until it stops, then `b`
//!
//! **Consumption:**
//! - [`drive(seq, consumer)`] - Run the consumption loop to the end
//! - [`drive_while(seq, consumer)`] - Same, with early exit

pub mod build;
pub mod compose;
mod config;
mod cursor;
mod drive;
mod error;
pub mod prelude;
mod producer;
mod session;
mod step;

pub use build::*;
pub use compose::*;
pub use config::*;
pub use cursor::*;
pub use drive::*;
pub use error::*;
pub use producer::*;
pub use session::*;
pub use step::*;
