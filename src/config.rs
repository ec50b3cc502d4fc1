//! Per-generator settings.

/// What happens to the value a producer returns in the same call that raises its stop flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinalValue {
    /// Drop it. Dereferencing after the stop fails and iteration ends without it.
    #[default]
    Discard,
    /// Keep it. It is reachable through [`Cursor::take_final`](crate::Cursor::take_final)
    /// and is produced as the last item when iterating.
    Retain,
}

/// Settings for a [`Generator`](crate::Generator).
///
/// ```rust
/// use stepgen::{FinalValue, GeneratorConfig};
///
/// let config = GeneratorConfig::new()
///     .label("lines")
///     .final_value(FinalValue::Retain)
///     .max_pulls(1_000);
/// assert_eq!(config.label.as_deref(), Some("lines"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Name attached to tracing events
    pub label: Option<String>,
    /// Handling of the value returned alongside a stop signal
    pub final_value: FinalValue,
    /// Stop after this many producer invocations per pass
    pub max_pulls: Option<u64>,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn final_value(mut self, policy: FinalValue) -> Self {
        self.final_value = policy;
        self
    }

    /// Caps the number of producer invocations in one pass.
    ///
    /// Once the cap is reached the next pull raises the stop flag without calling the
    /// producer, which makes infinite producers safe to drain. `reset` starts a new
    /// budget.
    pub fn max_pulls(mut self, limit: u64) -> Self {
        self.max_pulls = Some(limit);
        self
    }

    pub(crate) fn label_str(&self) -> &str {
        self.label.as_deref().unwrap_or("<unnamed>")
    }
}
