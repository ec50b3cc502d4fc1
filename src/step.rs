/// Outcome of a single pull from a producer.
///
/// A step function reports exhaustion through an out-parameter, so every pull hands back a
/// value *and* a flag. `Step` folds the two into one value: `Yielded` when the producer
/// wants to continue, `Stopped` when it raised the stop flag. The payload of `Stopped` is
/// the companion value returned alongside the stop signal, which is usually a placeholder.
///
/// # Examples
///
/// ```rust
/// use stepgen::Step;
///
/// let going: Step<i32> = Step::from_flag(false, 7);
/// assert_eq!(going, Step::Yielded(7));
///
/// let done = Step::from_flag(true, 0);
/// assert!(done.is_stopped());
/// assert_eq!(done.yielded_value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<T> {
    /// The producer produced a value and can be pulled again
    Yielded(T),
    /// The producer signalled exhaustion; the payload is the companion value
    Stopped(T),
}

impl<T> Step<T> {
    /// Builds a step from the `(stop, value)` pair a raw step function produces.
    #[inline]
    pub fn from_flag(stopped: bool, value: T) -> Self {
        if stopped {
            Step::Stopped(value)
        } else {
            Step::Yielded(value)
        }
    }

    /// Splits the step back into the `(stop, value)` pair.
    #[inline]
    pub fn into_flag(self) -> (bool, T) {
        match self {
            Step::Yielded(v) => (false, v),
            Step::Stopped(v) => (true, v),
        }
    }

    /// Returns `true` if the step is `Yielded`.
    ///
    /// ```rust
    /// use stepgen::Step;
    ///
    /// assert!(Step::Yielded(1).is_yielded());
    /// assert!(!Step::Stopped(1).is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Stopped`.
    #[inline]
    pub const fn is_stopped(&self) -> bool {
        matches!(self, Step::Stopped(_))
    }

    /// Converts into `Option<T>`, discarding the companion value of a `Stopped` step.
    #[inline]
    pub fn yielded_value(self) -> Option<T> {
        match self {
            Step::Yielded(v) => Some(v),
            Step::Stopped(_) => None,
        }
    }

    /// Returns the payload regardless of variant.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Step::Yielded(v) | Step::Stopped(v) => v,
        }
    }

    /// Maps the payload, keeping the variant.
    ///
    /// ```rust
    /// use stepgen::Step;
    ///
    /// assert_eq!(Step::Yielded(2).map(|v| v * 10), Step::Yielded(20));
    /// assert_eq!(Step::Stopped(2).map(|v| v * 10), Step::Stopped(20));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Yielded(v) => Step::Yielded(f(v)),
            Step::Stopped(v) => Step::Stopped(f(v)),
        }
    }

    /// Returns the yielded value, panicking on `Stopped`.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Stopped`.
    #[inline]
    #[track_caller]
    pub fn unwrap_yielded(self) -> T {
        match self {
            Step::Yielded(v) => v,
            Step::Stopped(_) => panic!("called `Step::unwrap_yielded()` on a `Stopped` value"),
        }
    }

    /// Converts from `&Step<T>` to `Step<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Step<&T> {
        match self {
            Step::Yielded(v) => Step::Yielded(v),
            Step::Stopped(v) => Step::Stopped(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_round_trip_keeps_variant() {
        assert_eq!(Step::from_flag(false, 'a').into_flag(), (false, 'a'));
        assert_eq!(Step::from_flag(true, 'b').into_flag(), (true, 'b'));
    }

    #[test]
    fn test_stopped_discards_companion_value() {
        let step = Step::Stopped(String::from("placeholder"));
        assert_eq!(step.as_ref().yielded_value(), None);
        assert_eq!(step.into_inner(), "placeholder");
    }

    #[test]
    #[should_panic(expected = "on a `Stopped` value")]
    fn test_unwrap_yielded_panics_on_stopped() {
        Step::Stopped(0).unwrap_yielded();
    }
}
