//! Generation tokens for discarding stale completions.
//!
//! Each logical load request takes a fresh token. A completion may only be
//! applied if its token is still the latest one issued; anything older was
//! superseded (a newer request, or the consumer went away).

/// Token identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationToken(u64);

impl GenerationToken {
    /// Raw counter value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonically increasing token source.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    /// Create a counter with no tokens issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token, superseding every earlier one.
    pub fn issue(&mut self) -> GenerationToken {
        self.latest = self.latest.wrapping_add(1);
        GenerationToken(self.latest)
    }

    /// Supersede every outstanding token without issuing a usable one.
    pub fn invalidate(&mut self) {
        self.latest = self.latest.wrapping_add(1);
    }

    /// Whether `token` is the latest issued.
    pub fn is_current(&self, token: GenerationToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_token_is_current() {
        let mut generation = Generation::new();
        let token = generation.issue();
        assert!(generation.is_current(token));
    }

    #[test]
    fn newer_token_supersedes_older() {
        let mut generation = Generation::new();
        let first = generation.issue();
        let second = generation.issue();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn invalidate_supersedes_everything() {
        let mut generation = Generation::new();
        let token = generation.issue();

        generation.invalidate();

        assert!(!generation.is_current(token));
    }
}
