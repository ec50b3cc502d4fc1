//! Core trait for step functions.
//!
//! A [`Producer`] is the resumable half of a generator: a plain function invoked once per
//! requested value, carrying its progress in state it owns. There is no suspension point;
//! "resuming" is simply calling [`Producer::pull`] again.
//!
//! # Examples
//!
//! ```rust
//! use stepgen::prelude::*;
//!
//! let mut n = 0;
//! let mut counter = from_fn(move |stop: &mut bool| {
//!     n += 1;
//!     if n > 2 {
//!         *stop = true;
//!     }
//!     n
//! });
//!
//! let mut stop = false;
//! assert_eq!(counter.pull(&mut stop), 1);
//! assert_eq!(counter.pull(&mut stop), 2);
//! assert!(!stop);
//! counter.pull(&mut stop);
//! assert!(stop);
//! ```

use either::Either;

use crate::{
    compose::{Chain, chain},
    step::Step,
};

/// A step function: produces one value per call and reports exhaustion out-of-band.
///
/// Implementations set `*stop = true` to signal that the sequence is over. The value
/// returned from that same call is a companion value; whether it is kept is decided by
/// the owning generator's [`FinalValue`](crate::FinalValue) policy.
///
/// Implementations must never clear a `stop` flag they were handed.
pub trait Producer {
    /// Type of the produced values
    type Item;

    /// Produce the next value, raising `stop` when the sequence is exhausted.
    fn pull(&mut self, stop: &mut bool) -> Self::Item;

    /// Pull once and fold the flag into a [`Step`].
    fn step(&mut self) -> Step<Self::Item> {
        let mut stop = false;
        let value = self.pull(&mut stop);
        Step::from_flag(stop, value)
    }

    /// Erase the concrete producer type.
    fn boxed<'a>(self) -> Box<dyn Producer<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Run this producer until it stops, then continue with `next`.
    ///
    /// ```rust
    /// use stepgen::prelude::*;
    ///
    /// let both = from_iter([1, 2]).chain(from_iter([3]));
    /// let seq = Generator::new(both);
    /// assert_eq!(seq.begin().unwrap().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    fn chain<R>(self, next: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Producer<Item = Self::Item>,
    {
        chain(self, next)
    }
}

impl<P> Producer for &'_ mut P
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn pull(&mut self, stop: &mut bool) -> Self::Item {
        (**self).pull(stop)
    }
}

impl<T> Producer for Box<dyn Producer<Item = T> + '_> {
    type Item = T;

    fn pull(&mut self, stop: &mut bool) -> Self::Item {
        (**self).pull(stop)
    }
}

impl<L, R> Producer for Either<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self, stop: &mut bool) -> Self::Item {
        match self {
            Either::Left(l) => l.pull(stop),
            Either::Right(r) => r.pull(stop),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, from_iter, repeat};

    #[test]
    fn test_step_folds_stop_flag() {
        let mut p = from_iter([5]);
        assert_eq!(p.step(), Step::Yielded(5));
        assert_eq!(p.step(), Step::Stopped(0));
    }

    #[test]
    fn test_either_dispatches_to_active_side() {
        let mut left: Either<_, crate::build::FromIter<std::vec::IntoIter<i32>>> =
            Either::Left(repeat(|| 1));
        let mut right: Either<crate::build::Repeat<fn() -> i32>, _> =
            Either::Right(from_iter(vec![2, 3]));

        assert_eq!(left.step(), Step::Yielded(1));
        assert_eq!(right.step(), Step::Yielded(2));
        assert_eq!(right.step(), Step::Yielded(3));
        assert!(right.step().is_stopped());
    }

    #[test]
    fn test_boxed_producer_keeps_state() {
        let mut calls = 0;
        let mut boxed = from_fn(move |_: &mut bool| {
            calls += 1;
            calls
        })
        .boxed();

        let mut stop = false;
        assert_eq!(boxed.pull(&mut stop), 1);
        assert_eq!(boxed.pull(&mut stop), 2);
    }

    #[test]
    fn test_mut_ref_producer_advances_owner() {
        fn first<P: Producer>(mut p: P) -> Step<P::Item> {
            p.step()
        }

        let mut source = from_iter(vec!['a', 'b']);
        assert_eq!(first(&mut source), Step::Yielded('a'));
        assert_eq!(source.step(), Step::Yielded('b'));
    }
}
