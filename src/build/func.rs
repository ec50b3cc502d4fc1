use std::marker::PhantomData;

use crate::{Producer, step::Step};

/// Wraps a raw step function of shape `FnMut(&mut bool) -> T`.
pub struct FromFn<F>(F);

impl<T, F> Producer for FromFn<F>
where
    F: FnMut(&mut bool) -> T,
{
    type Item = T;
    fn pull(&mut self, stop: &mut bool) -> Self::Item {
        (self.0)(stop)
    }
}

/// Create a producer from a step function that raises `stop` when it is exhausted.
///
/// ```rust
/// use stepgen::prelude::*;
///
/// let mut left = 2;
/// let mut countdown = from_fn(move |stop: &mut bool| {
///     if left == 0 {
///         *stop = true;
///     } else {
///         left -= 1;
///     }
///     left
/// });
/// assert_eq!(countdown.step(), Step::Yielded(1));
/// assert_eq!(countdown.step(), Step::Yielded(0));
/// assert!(countdown.step().is_stopped());
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut(&mut bool) -> T,
{
    FromFn(f)
}

/// Wraps a closure that reports each pull as a [`Step`].
pub struct FromStep<F>(F);

impl<T, F> Producer for FromStep<F>
where
    F: FnMut() -> Step<T>,
{
    type Item = T;
    fn pull(&mut self, stop: &mut bool) -> Self::Item {
        let (stopped, value) = (self.0)().into_flag();
        if stopped {
            *stop = true;
        }
        value
    }
}

/// Create a producer from a closure returning [`Step`] instead of writing a flag.
///
/// ```rust
/// use stepgen::prelude::*;
///
/// let mut n = 0;
/// let mut evens = from_step(move || {
///     n += 2;
///     if n > 4 { Step::Stopped(0) } else { Step::Yielded(n) }
/// });
/// assert_eq!(evens.step(), Step::Yielded(2));
/// assert_eq!(evens.step(), Step::Yielded(4));
/// assert_eq!(evens.step(), Step::Stopped(0));
/// ```
pub fn from_step<T, F>(f: F) -> FromStep<F>
where
    F: FnMut() -> Step<T>,
{
    FromStep(f)
}

/// Calls a function on every pull and never stops.
pub struct Repeat<F>(F);

impl<T, F> Producer for Repeat<F>
where
    F: FnMut() -> T,
{
    type Item = T;
    fn pull(&mut self, _stop: &mut bool) -> Self::Item {
        (self.0)()
    }
}

/// Create an infinite producer.
///
/// Pair it with [`GeneratorConfig::max_pulls`](crate::GeneratorConfig::max_pulls) or
/// `Iterator::take` when draining.
pub fn repeat<T, F: FnMut() -> T>(f: F) -> Repeat<F> {
    Repeat(f)
}

/// Yields one value, then stops.
///
/// The stop is reported with `T::default()` as its companion value.
pub struct Once<T>(Option<T>);

impl<T: Default> Producer for Once<T> {
    type Item = T;
    fn pull(&mut self, stop: &mut bool) -> Self::Item {
        match self.0.take() {
            Some(v) => v,
            None => {
                *stop = true;
                T::default()
            }
        }
    }
}

/// Create a producer of exactly one value.
pub fn once<T: Default>(value: T) -> Once<T> {
    Once(Some(value))
}

/// Stops on the first pull.
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T: Default> Producer for Empty<T> {
    type Item = T;
    fn pull(&mut self, stop: &mut bool) -> Self::Item {
        *stop = true;
        T::default()
    }
}

/// Create a producer with no values.
pub fn empty<T: Default>() -> Empty<T> {
    Empty(PhantomData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_stops_when_flag_raised() {
        let mut counter = 0;
        let mut producer = from_fn(move |stop: &mut bool| {
            if counter == 3 {
                *stop = true;
                return -1;
            }
            counter += 1;
            counter - 1
        });

        assert_eq!(producer.step(), Step::Yielded(0));
        assert_eq!(producer.step(), Step::Yielded(1));
        assert_eq!(producer.step(), Step::Yielded(2));
        assert_eq!(producer.step(), Step::Stopped(-1));
    }

    #[test]
    fn test_from_step_never_clears_flag() {
        let mut producer = from_step(|| Step::Yielded(1));
        let mut stop = true;
        producer.pull(&mut stop);
        assert!(stop);
    }

    #[test]
    fn test_repeat_never_stops() {
        let mut producer = repeat(|| "tick");
        for _ in 0..100 {
            assert_eq!(producer.step(), Step::Yielded("tick"));
        }
    }

    #[test]
    fn test_once_then_stopped() {
        let mut producer = once(String::from("only"));
        assert_eq!(producer.step(), Step::Yielded(String::from("only")));
        assert_eq!(producer.step(), Step::Stopped(String::new()));
        assert_eq!(producer.step(), Step::Stopped(String::new()));
    }

    #[test]
    fn test_empty_stops_immediately() {
        let mut producer = empty::<u8>();
        assert_eq!(producer.step(), Step::Stopped(0));
    }
}
