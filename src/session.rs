//! The session half of a generator.
//!
//! A [`Generator`] owns a [`Producer`] and the exhaustion flag shared with every
//! [`Cursor`] borrowed from it. Cursors hold a plain `&Generator`, so the borrow checker
//! guarantees the generator outlives them; the flag and the producer sit behind `Cell`
//! and `RefCell` so that several cursors and the `end()` sentinel can coexist.

use std::cell::{Cell, RefCell};
use std::fmt;

use tracing::{debug, trace, warn};

use crate::{
    build::{FromFn, from_fn},
    config::GeneratorConfig,
    cursor::Cursor,
    error::GenError,
    producer::Producer,
    step::Step,
};

/// Zero-sized end-of-sequence sentinel returned by [`Generator::end`].
///
/// A cursor compares equal to `End` once it is detached or its generator has stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct End;

/// A single-pass, pull-based sequence over a step function.
///
/// ```rust
/// use stepgen::prelude::*;
///
/// let mut n = 0;
/// let seq = generator(move |stop: &mut bool| {
///     if n == 3 {
///         *stop = true;
///     }
///     n += 1;
///     n - 1
/// });
///
/// let mut cursor = seq.begin()?;
/// let mut seen = Vec::new();
/// while cursor != seq.end() {
///     seen.push(cursor.value()?);
///     cursor.advance()?;
/// }
/// assert_eq!(seen, vec![0, 1, 2]);
/// assert!(seq.begin().is_err());
/// # Ok::<(), GenError>(())
/// ```
pub struct Generator<P> {
    producer: RefCell<Option<P>>,
    stopped: Cell<bool>,
    pulls: Cell<u64>,
    // value of `pulls` when the current pass was armed
    pass_start: Cell<u64>,
    config: GeneratorConfig,
}

impl<P> Generator<P>
where
    P: Producer,
{
    pub fn new(producer: P) -> Self {
        Self::with_config(producer, GeneratorConfig::default())
    }

    pub fn with_config(producer: P, config: GeneratorConfig) -> Self {
        Self {
            producer: RefCell::new(Some(producer)),
            stopped: Cell::new(false),
            pulls: Cell::new(0),
            pass_start: Cell::new(0),
            config,
        }
    }

    /// Start a pass over the sequence.
    ///
    /// The returned cursor has already pulled its first value. Fails with
    /// [`GenError::ExpiredSession`] if the generator stopped and was not reset, or was
    /// transferred out.
    pub fn begin(&self) -> Result<Cursor<'_, P>, GenError> {
        if self.stopped.get() {
            warn!(label = self.config.label_str(), "begin() on expired generator");
            return Err(GenError::ExpiredSession);
        }
        Cursor::start(self)
    }

    /// Alias of [`begin`](Self::begin) for use in `for` loops.
    pub fn iter(&self) -> Result<Cursor<'_, P>, GenError> {
        self.begin()
    }

    /// The end sentinel for `while cursor != generator.end()` loops.
    pub fn end(&self) -> End {
        End
    }

    /// Re-arm an exhausted generator.
    ///
    /// Only the stop flag is cleared. The producer keeps its own state, so a stateful
    /// producer continues from where it stopped rather than starting over. The
    /// [`max_pulls`](GeneratorConfig::max_pulls) budget starts over for the new pass. A
    /// generator that was transferred out stays expired.
    pub fn reset(&mut self) {
        if self.producer.get_mut().is_none() {
            warn!(label = self.config.label_str(), "reset() on transferred-out generator");
            return;
        }
        debug!(label = self.config.label_str(), pulls = self.pulls.get(), "generator reset");
        self.pass_start.set(self.pulls.get());
        self.stopped.set(false);
    }

    /// Move the producer and session state into a new generator.
    ///
    /// Fails with [`GenError::ExpiredSession`] on a stopped generator. On success `self`
    /// is left permanently expired.
    pub fn transfer(&mut self) -> Result<Generator<P>, GenError> {
        if self.stopped.get() {
            return Err(GenError::ExpiredSession);
        }
        let producer = self.producer.get_mut().take();
        if producer.is_none() {
            return Err(GenError::ExpiredSession);
        }
        self.stopped.set(true);
        let pulls = self.pulls.replace(0);
        let pass_start = self.pass_start.replace(0);
        debug!(label = self.config.label_str(), pulls, "generator transferred");
        Ok(Generator {
            producer: RefCell::new(producer),
            stopped: Cell::new(false),
            pulls: Cell::new(pulls),
            pass_start: Cell::new(pass_start),
            config: self.config.clone(),
        })
    }

    /// Whether the stop flag is raised.
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    /// Whether the producer was moved out by [`transfer`](Self::transfer).
    pub fn is_transferred(&self) -> bool {
        // a running producer is borrowed, so it is still present
        self.producer.try_borrow().is_ok_and(|p| p.is_none())
    }

    /// Number of producer invocations made through this generator, across all passes.
    pub fn pulls(&self) -> u64 {
        self.pulls.get()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Give back the producer, if it was not transferred out.
    pub fn into_producer(self) -> Option<P> {
        self.producer.into_inner()
    }

    /// Borrow the producer as a running pull would.
    #[cfg(test)]
    pub(crate) fn hold_producer(&self) -> std::cell::RefMut<'_, Option<P>> {
        self.producer.borrow_mut()
    }

    /// Invoke the producer once on behalf of a cursor.
    ///
    /// Raises the shared stop flag when the producer does, or when `max_pulls` is reached
    /// within the current pass.
    /// A stop caused by the pull limit carries no companion value.
    pub(crate) fn pull(&self) -> Result<Step<Option<P::Item>>, GenError> {
        let mut slot = self
            .producer
            .try_borrow_mut()
            .map_err(|_| GenError::Reentrant)?;
        let producer = slot.as_mut().ok_or(GenError::ExpiredSession)?;

        let pulls = self.pulls.get();
        let in_pass = pulls - self.pass_start.get();
        if self.config.max_pulls.is_some_and(|limit| in_pass >= limit) {
            debug!(label = self.config.label_str(), pulls, "pull limit reached");
            self.stopped.set(true);
            return Ok(Step::Stopped(None));
        }

        let mut stop = false;
        let value = producer.pull(&mut stop);
        drop(slot);

        self.pulls.set(pulls + 1);
        trace!(label = self.config.label_str(), pull = pulls + 1, stop, "pulled");
        if stop {
            debug!(label = self.config.label_str(), pulls = pulls + 1, "generator exhausted");
            self.stopped.set(true);
        }
        Ok(Step::from_flag(stop, Some(value)))
    }
}

impl<F> Generator<FromFn<F>> {
    /// Build a generator straight from a raw step function.
    pub fn from_fn<T>(f: F) -> Self
    where
        F: FnMut(&mut bool) -> T,
    {
        Generator::new(from_fn(f))
    }
}

/// Build a generator from a step function of shape `FnMut(&mut bool) -> T`.
pub fn generator<T, F>(f: F) -> Generator<FromFn<F>>
where
    F: FnMut(&mut bool) -> T,
{
    Generator::from_fn(f)
}

impl<P> fmt::Debug for Generator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("label", &self.config.label)
            .field("stopped", &self.stopped.get())
            .field("pulls", &self.pulls.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_iter, repeat};
    use crate::config::FinalValue;

    fn counter_to(limit: i32) -> Generator<impl Producer<Item = i32>> {
        let mut n = 0;
        generator(move |stop: &mut bool| {
            if n == limit {
                *stop = true;
                return -1;
            }
            n += 1;
            n - 1
        })
    }

    #[test]
    fn test_begin_on_stopped_generator_fails() {
        let seq = counter_to(1);
        let mut cursor = seq.begin().unwrap();
        cursor.advance().unwrap();
        assert!(seq.is_stopped());
        assert_eq!(seq.begin().unwrap_err(), GenError::ExpiredSession);
        assert_eq!(seq.begin().unwrap_err(), GenError::ExpiredSession);
    }

    #[test]
    fn test_reset_rearms_without_rewinding_producer() {
        let mut seq = Generator::new(from_iter([1, 2, 3, 4]));
        {
            let cursor = seq.begin().unwrap();
            assert_eq!(cursor.value().unwrap(), 1);
        }
        // not stopped yet: a new pass simply continues the producer
        {
            let mut cursor = seq.begin().unwrap();
            assert_eq!(cursor.value().unwrap(), 2);
            cursor.advance().unwrap();
            cursor.advance().unwrap();
            cursor.advance().unwrap();
        }
        assert!(seq.is_stopped());

        seq.reset();
        assert!(!seq.is_stopped());
        let cursor = seq.begin().unwrap();
        assert_eq!(cursor, seq.end());
        assert_eq!(cursor.value().unwrap_err(), GenError::StoppedIteration);
    }

    #[test]
    fn test_transfer_leaves_source_expired() {
        let mut source = counter_to(3);
        let moved = source.transfer().unwrap();

        assert!(source.is_transferred());
        assert_eq!(source.begin().unwrap_err(), GenError::ExpiredSession);
        source.reset();
        assert_eq!(source.begin().unwrap_err(), GenError::ExpiredSession);
        assert_eq!(source.transfer().unwrap_err(), GenError::ExpiredSession);

        let values: Vec<_> = moved.begin().unwrap().collect();
        assert_eq!(values, vec![0, 1, 2]);
    }

    #[test]
    fn test_transfer_of_stopped_generator_fails() {
        let mut seq = counter_to(0);
        let cursor = seq.begin().unwrap();
        drop(cursor);
        assert_eq!(seq.transfer().unwrap_err(), GenError::ExpiredSession);
    }

    #[test]
    fn test_independent_generators_do_not_share_state() {
        let a = counter_to(2);
        let b = counter_to(2);

        let exhausted: Vec<_> = a.begin().unwrap().collect();
        assert_eq!(exhausted, vec![0, 1]);
        assert!(a.is_stopped());

        assert!(!b.is_stopped());
        let mut cursor = b.begin().unwrap();
        assert_eq!(cursor.value().unwrap(), 0);
        cursor.advance().unwrap();
        assert_eq!(cursor.value().unwrap(), 1);
    }

    #[test]
    fn test_max_pulls_stops_infinite_producer() {
        let seq = Generator::with_config(repeat(|| 'x'), GeneratorConfig::new().max_pulls(3));
        let values: Vec<_> = seq.begin().unwrap().collect();
        assert_eq!(values, vec!['x', 'x', 'x']);
        assert_eq!(seq.pulls(), 3);
        assert!(seq.is_stopped());
    }

    #[test]
    fn test_reset_after_pull_cap_continues_producer() {
        let mut seq =
            Generator::with_config(from_iter(0..10), GeneratorConfig::new().max_pulls(3));
        let first: Vec<_> = seq.begin().unwrap().collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert!(seq.is_stopped());

        seq.reset();
        let mut cursor = seq.begin().unwrap();
        assert_eq!(cursor.value().unwrap(), 3);
        assert!(!seq.is_stopped());
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert_eq!(cursor.value().unwrap(), 5);
        cursor.advance().unwrap();
        assert_eq!(cursor, seq.end());
        assert_eq!(seq.pulls(), 6);
    }

    #[test]
    fn test_max_pulls_with_retain_yields_no_phantom_value() {
        let config = GeneratorConfig::new()
            .max_pulls(2)
            .final_value(FinalValue::Retain);
        let seq = Generator::with_config(repeat(|| 5u8), config);
        let values: Vec<_> = seq.begin().unwrap().collect();
        assert_eq!(values, vec![5, 5]);
    }

    #[test]
    fn test_reentrant_pull_is_rejected() {
        let seq = Generator::new(repeat(|| 0));
        let _guard = seq.producer.borrow_mut();
        assert_eq!(seq.pull().unwrap_err(), GenError::Reentrant);
    }

    #[test]
    fn test_into_producer_returns_state() {
        let seq = Generator::new(from_iter([10, 20]));
        {
            let cursor = seq.begin().unwrap();
            assert_eq!(cursor.value().unwrap(), 10);
        }
        let mut producer = seq.into_producer().unwrap();
        assert_eq!(producer.step(), Step::Yielded(20));
    }
}
