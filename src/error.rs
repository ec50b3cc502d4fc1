//! Errors raised when a generator or cursor is misused.

use thiserror::Error;

/// Every way a [`Generator`](crate::Generator) or [`Cursor`](crate::Cursor) can refuse an
/// operation.
///
/// All variants are raised synchronously at the point of misuse and none are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GenError {
    /// `begin` or `transfer` on a session that is already exhausted or was transferred out.
    #[error("generator is expired; call reset() before beginning a new pass")]
    ExpiredSession,

    /// Advance or dereference on a cursor with no session behind it.
    #[error("cursor is detached from its generator")]
    DetachedCursor,

    /// Copy or transfer from a cursor with no session behind it.
    #[error("cannot copy or transfer from a detached cursor")]
    InvalidCursor,

    /// Advance or dereference after the session raised its stop flag.
    #[error("iteration has stopped")]
    StoppedIteration,

    /// A pull was requested while the producer was already running.
    #[error("producer pulled from its own generator")]
    Reentrant,
}

impl GenError {
    /// Returns `true` for errors caused by a cursor that lost its session.
    pub fn is_detached(&self) -> bool {
        matches!(self, GenError::DetachedCursor | GenError::InvalidCursor)
    }
}
