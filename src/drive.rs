//! Functions for draining generators.
//!
//! These run the canonical consumption loop (`begin`, read, advance, compare against
//! `end`) so that callers only supply what to do with each value.

use crate::{error::GenError, producer::Producer, session::Generator};

/// Drain a generator, handing every value to `consumer`.
///
/// Returns the number of values consumed. Fails if the generator cannot begin or a pull
/// fails; values consumed before the failure are not rolled back.
///
/// ```rust
/// use stepgen::prelude::*;
///
/// let seq = Generator::new(from_iter(["a", "b", "c"]));
/// let mut joined = String::new();
/// let count = drive(&seq, |s| joined.push_str(s))?;
/// assert_eq!(count, 3);
/// assert_eq!(joined, "abc");
/// # Ok::<(), GenError>(())
/// ```
pub fn drive<P, C>(generator: &Generator<P>, mut consumer: C) -> Result<usize, GenError>
where
    P: Producer,
    P::Item: Clone,
    C: FnMut(P::Item),
{
    drive_while(generator, |value| {
        consumer(value);
        true
    })
}

/// Like [`drive`], but stops early once `consumer` returns `false`.
///
/// Stopping early leaves the generator live and pulls nothing past the last consumed
/// value, so the next pass begins with the value that follows it.
pub fn drive_while<P, C>(generator: &Generator<P>, mut consumer: C) -> Result<usize, GenError>
where
    P: Producer,
    P::Item: Clone,
    C: FnMut(P::Item) -> bool,
{
    let mut cursor = generator.begin()?;
    let mut consumed = 0;
    while cursor != generator.end() {
        consumed += 1;
        if !consumer(cursor.value()?) {
            break;
        }
        cursor.advance()?;
    }
    Ok(consumed)
}
