use crate::Producer;

/// Drives an iterator as a step function.
///
/// Exhaustion of the iterator raises the stop flag with `T::default()` as the companion
/// value. Once stopped, the underlying iterator is not polled again.
pub struct FromIter<I> {
    iter: I,
    done: bool,
}

impl<I> Producer for FromIter<I>
where
    I: Iterator,
    I::Item: Default,
{
    type Item = I::Item;

    fn pull(&mut self, stop: &mut bool) -> Self::Item {
        if !self.done {
            if let Some(v) = self.iter.next() {
                return v;
            }
            self.done = true;
        }
        *stop = true;
        I::Item::default()
    }
}

/// Create a producer from anything iterable.
///
/// ```rust
/// use stepgen::prelude::*;
///
/// let seq = Generator::new(from_iter(vec!["a", "b"]));
/// let seen: Vec<_> = seq.begin().unwrap().collect();
/// assert_eq!(seen, vec!["a", "b"]);
/// ```
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter {
        iter: iter.into_iter(),
        done: false,
    }
}
