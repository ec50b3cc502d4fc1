//! The iteration handle over a [`Generator`].
//!
//! A [`Cursor`] borrows its generator and caches the most recently pulled value. It is
//! either *live* (it has a generator) or *detached* (it was built with
//! [`Cursor::detached`] or emptied by [`Cursor::transfer`]). A live cursor whose
//! generator has stopped is *exhausted*: reading and advancing fail from then on.
//!
//! Both the explicit protocol (`value`, `advance`, `!= generator.end()`) and `Iterator`
//! are supported. Only the explicit protocol reports pull errors; `Iterator` ends early
//! and detaches instead:
//!
//! ```rust
//! use stepgen::prelude::*;
//!
//! let seq = Generator::new(from_iter([3, 1, 4]));
//! let total: i32 = seq.begin()?.sum();
//! assert_eq!(total, 8);
//! # Ok::<(), GenError>(())
//! ```

use std::fmt;
use std::ptr;

use tracing::{debug, warn};

use crate::{
    config::FinalValue,
    error::GenError,
    producer::Producer,
    session::{End, Generator},
    step::Step,
};

/// Forward-only cursor over a [`Generator`].
pub struct Cursor<'g, P>
where
    P: Producer,
{
    session: Option<&'g Generator<P>>,
    last: Option<P::Item>,
    // set while `last` holds the companion value of the stop signal
    at_final: bool,
}

impl<'g, P> Cursor<'g, P>
where
    P: Producer,
{
    /// Link a cursor to `session` and eagerly pull its first value.
    pub(crate) fn start(session: &'g Generator<P>) -> Result<Self, GenError> {
        let mut cursor = Cursor {
            session: Some(session),
            last: None,
            at_final: false,
        };
        let step = session.pull()?;
        cursor.store(step);
        Ok(cursor)
    }

    /// A cursor with no generator behind it.
    ///
    /// Every operation on it fails except comparison, where it reads as finished.
    pub fn detached() -> Self {
        Cursor {
            session: None,
            last: None,
            at_final: false,
        }
    }

    pub fn is_detached(&self) -> bool {
        self.session.is_none()
    }

    /// Whether the cursor is live and its generator has stopped.
    pub fn is_exhausted(&self) -> bool {
        self.session.is_some_and(|g| g.is_stopped())
    }

    /// Pull the next value (pre-increment).
    ///
    /// Fails with [`GenError::DetachedCursor`] on a detached cursor and with
    /// [`GenError::StoppedIteration`] once the generator has stopped.
    pub fn advance(&mut self) -> Result<&mut Self, GenError> {
        let session = self.live()?;
        let step = session.pull()?;
        self.store(step);
        Ok(self)
    }

    /// Pull the next value, returning a copy of the cursor as it was before (post-increment).
    pub fn advance_and_snapshot(&mut self) -> Result<Self, GenError>
    where
        P::Item: Clone,
    {
        let session = self.live()?;
        let snapshot = Cursor {
            session: Some(session),
            last: self.last.clone(),
            at_final: false,
        };
        self.advance()?;
        Ok(snapshot)
    }

    /// A copy of the current value (dereference).
    ///
    /// Fails with [`GenError::DetachedCursor`] on a detached cursor and with
    /// [`GenError::StoppedIteration`] once the generator has stopped, including right
    /// after the advance that raised the stop flag.
    pub fn value(&self) -> Result<P::Item, GenError>
    where
        P::Item: Clone,
    {
        self.live()?;
        self.last.clone().ok_or(GenError::StoppedIteration)
    }

    /// Duplicate the cursor. Both copies share the generator.
    pub fn try_clone(&self) -> Result<Self, GenError>
    where
        P::Item: Clone,
    {
        match self.session {
            Some(session) => Ok(Cursor {
                session: Some(session),
                last: self.last.clone(),
                at_final: self.at_final,
            }),
            None => {
                warn!("copy from detached cursor");
                Err(GenError::InvalidCursor)
            }
        }
    }

    /// Move the cursor's state into a new cursor, leaving `self` detached.
    pub fn transfer(&mut self) -> Result<Self, GenError> {
        let Some(session) = self.session.take() else {
            warn!("transfer from detached cursor");
            return Err(GenError::InvalidCursor);
        };
        debug!(label = session.config().label_str(), "cursor transferred");
        Ok(Cursor {
            session: Some(session),
            last: self.last.take(),
            at_final: std::mem::take(&mut self.at_final),
        })
    }

    /// Take the value returned alongside the stop signal.
    ///
    /// Only available once the generator has stopped, and only under
    /// [`FinalValue::Retain`]; returns `None` otherwise.
    pub fn take_final(&mut self) -> Option<P::Item> {
        if self.at_final && self.is_exhausted() {
            self.at_final = false;
            self.last.take()
        } else {
            None
        }
    }

    fn live(&self) -> Result<&'g Generator<P>, GenError> {
        let Some(session) = self.session else {
            warn!("use of detached cursor");
            return Err(GenError::DetachedCursor);
        };
        if session.is_stopped() {
            return Err(GenError::StoppedIteration);
        }
        Ok(session)
    }

    fn store(&mut self, step: Step<Option<P::Item>>) {
        self.at_final = step.is_stopped();
        self.last = match step {
            Step::Yielded(v) => v,
            Step::Stopped(v) => match self.session.map(|g| g.config().final_value) {
                Some(FinalValue::Retain) => v,
                _ => None,
            },
        };
    }
}

/// Yields the current value, then advances.
///
/// `next` cannot return an error. If a pull fails (a producer pulling from its own
/// generator, [`GenError::Reentrant`]), the failure is logged, the cursor detaches, and
/// iteration ends with `None` just as it would on exhaustion. Use
/// [`advance`](Cursor::advance) to observe such errors, or check
/// [`is_detached`](Cursor::is_detached) after the loop: it is `true` only after a failed
/// pull, while a normally exhausted cursor stays attached.
impl<P> Iterator for Cursor<'_, P>
where
    P: Producer,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let session = self.session?;
        if session.is_stopped() {
            return self.take_final();
        }
        let current = self.last.take();
        match session.pull() {
            Ok(step) => self.store(step),
            Err(e) => {
                warn!(error = %e, "pull failed during iteration; detaching cursor");
                self.session = None;
            }
        }
        current
    }
}

impl<P> PartialEq<End> for Cursor<'_, P>
where
    P: Producer,
{
    fn eq(&self, _: &End) -> bool {
        self.session.is_none_or(|g| g.is_stopped())
    }
}

impl<P> PartialEq<Cursor<'_, P>> for End
where
    P: Producer,
{
    fn eq(&self, other: &Cursor<'_, P>) -> bool {
        other == self
    }
}

/// Two cursors are equal when both are live over the same generator.
impl<'b, P> PartialEq<Cursor<'b, P>> for Cursor<'_, P>
where
    P: Producer,
{
    fn eq(&self, other: &Cursor<'b, P>) -> bool {
        match (self.session, other.session) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            _ => false,
        }
    }
}

impl<P> fmt::Debug for Cursor<'_, P>
where
    P: Producer,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.session {
            None => "detached",
            Some(g) if g.is_stopped() => "exhausted",
            Some(_) => "live",
        };
        f.debug_struct("Cursor")
            .field("state", &state)
            .field("last", &self.last)
            .finish()
    }
}
