//! Result of a store-level load.

use postboard_types::RemoteError;

/// How a load ended.
///
/// Store-level loads never propagate remote failures; the user-facing
/// message is already in the loader's error slot. The outcome tells the
/// caller what happened without requiring it to handle anything.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum LoadOutcome<T> {
    /// The result was applied to the store.
    Applied(T),
    /// A newer request superseded this one; nothing was applied.
    Stale,
    /// The remote call failed; the loader's error is set.
    Failed(RemoteError),
}

impl<T> LoadOutcome<T> {
    /// Check if the result was applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Check if the load was superseded.
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale)
    }

    /// The remote error, if the load failed.
    pub fn error(&self) -> Option<&RemoteError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The applied value, if any.
    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        let applied: LoadOutcome<u8> = LoadOutcome::Applied(3);
        assert!(applied.is_applied());
        assert_eq!(applied.applied(), Some(3));

        let stale: LoadOutcome<u8> = LoadOutcome::Stale;
        assert!(stale.is_stale());
        assert_eq!(stale.error(), None);

        let failed: LoadOutcome<u8> = LoadOutcome::Failed(RemoteError::Network);
        assert_eq!(failed.error(), Some(&RemoteError::Network));
        assert_eq!(failed.applied(), None);
    }
}
