//! Detail view state machine - NO I/O, just state transitions.
//!
//! A detail view is either not loaded, waiting on one specific request, or
//! showing a complete post with its comments. There is no partial state:
//! a post without its comments is never exposed.
//!
//! Completions carry the [`GenerationToken`] of the request that produced
//! them and are only applied while that request is the one being waited on.

use postboard_types::{PostDetail, PostId};

use crate::GenerationToken;

/// Lifecycle of one detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    /// Nothing shown. Initial state, and the state after any failure.
    #[default]
    NotLoaded,
    /// Waiting for the fan-out of a specific request.
    Loading {
        /// Post being loaded.
        post_id: PostId,
        /// Request whose completion will be accepted.
        token: GenerationToken,
    },
    /// Post and comments both arrived.
    Loaded(PostDetail),
}

/// Inputs to the detail state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    /// A new load was issued; supersedes any earlier one.
    LoadRequested {
        /// Post to load.
        post_id: PostId,
        /// Token for this request.
        token: GenerationToken,
    },
    /// Both calls of a fan-out succeeded.
    LoadSucceeded {
        /// Token of the completing request.
        token: GenerationToken,
        /// The combined result.
        detail: PostDetail,
    },
    /// At least one call of a fan-out failed.
    LoadFailed {
        /// Token of the completing request.
        token: GenerationToken,
    },
    /// The consumer went away.
    Closed,
}

impl DetailState {
    /// Create a state with nothing loaded.
    pub fn new() -> Self {
        Self::NotLoaded
    }

    /// Process an event and return the new state, plus whether the event was
    /// applied. Completions for a request that is not being waited on are
    /// ignored and leave the state unchanged.
    pub fn on_event(self, event: DetailEvent) -> (Self, bool) {
        match (self, event) {
            (_, DetailEvent::LoadRequested { post_id, token }) => {
                (Self::Loading { post_id, token }, true)
            }
            (_, DetailEvent::Closed) => (Self::NotLoaded, true),

            (Self::Loading { token: waiting, .. }, DetailEvent::LoadSucceeded { token, detail })
                if waiting == token =>
            {
                (Self::Loaded(detail), true)
            }
            (Self::Loading { token: waiting, .. }, DetailEvent::LoadFailed { token })
                if waiting == token =>
            {
                (Self::NotLoaded, true)
            }

            // Stale completion - stay in current state
            (state, _) => (state, false),
        }
    }

    /// Check if a detail is shown.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Check if a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// The shown detail, if any.
    pub fn detail(&self) -> Option<&PostDetail> {
        match self {
            Self::Loaded(detail) => Some(detail),
            _ => None,
        }
    }
}
