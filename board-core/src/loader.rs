//! Loading/error state shared by every remote call.
//!
//! A pure counter plus a message slot. It has no knowledge of which
//! operation is running; callers pair [`LoaderState::begin`] and
//! [`LoaderState::end`] around exactly one logical operation.

/// Outstanding-call counter and current user-facing error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderState {
    outstanding: usize,
    error: Option<String>,
}

/// What a consumer reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderSnapshot {
    /// True while at least one tracked call is outstanding.
    pub busy: bool,
    /// Current error message, if any.
    pub error: Option<String>,
}

impl LoaderState {
    /// Create an idle state with no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a tracked call.
    pub fn begin(&mut self) {
        self.outstanding = self.outstanding.saturating_add(1);
    }

    /// Record the end of a tracked call.
    ///
    /// Returns `false` if nothing was outstanding (an unpaired `end`); the
    /// counter never goes below zero.
    pub fn end(&mut self) -> bool {
        match self.outstanding.checked_sub(1) {
            Some(n) => {
                self.outstanding = n;
                true
            }
            None => false,
        }
    }

    /// Replace the error message. Independent of the busy flag.
    ///
    /// Returns whether the stored value changed.
    pub fn set_error(&mut self, error: Option<String>) -> bool {
        if self.error == error {
            return false;
        }
        self.error = error;
        true
    }

    /// True iff at least one call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.outstanding > 0
    }

    /// Number of outstanding calls.
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Current error message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Copy out the consumer-visible fields.
    pub fn snapshot(&self) -> LoaderSnapshot {
        LoaderSnapshot {
            busy: self.is_busy(),
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle() {
        let state = LoaderState::new();
        assert!(!state.is_busy());
        assert_eq!(state.error(), None);
        assert_eq!(state.snapshot(), LoaderSnapshot::default());
    }

    #[test]
    fn single_call_toggles_busy() {
        let mut state = LoaderState::new();
        state.begin();
        assert!(state.is_busy());
        assert!(state.end());
        assert!(!state.is_busy());
    }

    #[test]
    fn busy_until_last_overlapping_call_ends() {
        let mut state = LoaderState::new();
        for _ in 0..3 {
            state.begin();
        }

        assert!(state.end());
        assert!(state.is_busy());
        assert!(state.end());
        assert!(state.is_busy());
        assert!(state.end());
        assert!(!state.is_busy());
    }

    #[test]
    fn unpaired_end_is_rejected_without_underflow() {
        let mut state = LoaderState::new();
        assert!(!state.end());
        assert_eq!(state.outstanding(), 0);

        state.begin();
        assert!(state.is_busy());
    }

    #[test]
    fn set_error_is_idempotent() {
        let mut state = LoaderState::new();
        assert!(state.set_error(Some("boom".into())));
        assert!(!state.set_error(Some("boom".into())));
        assert_eq!(state.error(), Some("boom"));

        assert!(state.set_error(None));
        assert!(!state.set_error(None));
    }

    #[test]
    fn error_is_independent_of_busy() {
        let mut state = LoaderState::new();
        state.begin();
        state.set_error(Some("failed".into()));
        state.end();

        let snapshot = state.snapshot();
        assert!(!snapshot.busy);
        assert_eq!(snapshot.error.as_deref(), Some("failed"));
    }
}
