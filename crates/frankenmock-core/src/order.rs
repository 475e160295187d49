//! Session-wide call-order log.
//!
//! One ordered sequence of fake identities per [`Session`], appended each
//! time any fake in the session is invoked. The log only answers ordering
//! questions ("did A's call precede B's?"); per-call data lives in each
//! fake's ledger. Positions are 1-based, matching call-record ordinals.
//!
//! [`Session`]: crate::session::Session

/// Stable identity token for one fake within a session.
///
/// Issued by the session when the fake is created; valid only for ordering
/// and positional queries against that session's log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeId(pub(crate) usize);

/// Append-only invocation order across all fakes in one session.
#[derive(Debug, Default)]
pub struct CallOrderLog {
    names: Vec<String>,
    entries: Vec<FakeId>,
}

impl CallOrderLog {
    /// Create an empty log with no registered fakes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fake identity under `name` and return its token.
    pub(crate) fn register(&mut self, name: impl Into<String>) -> FakeId {
        let id = FakeId(self.names.len());
        self.names.push(name.into());
        id
    }

    /// Append one invocation of `id`.
    pub(crate) fn append(&mut self, id: FakeId) {
        self.entries.push(id);
    }

    /// Total invocations recorded across all fakes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been invoked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Which fake was the `position`-th invocation overall (1-based).
    #[must_use]
    pub fn entry(&self, position: usize) -> Option<FakeId> {
        if position < 1 {
            return None;
        }
        self.entries.get(position - 1).copied()
    }

    /// The 1-based position of the most recent invocation of `id`, if any.
    #[must_use]
    pub fn most_recent_position(&self, id: FakeId) -> Option<usize> {
        self.entries.iter().rposition(|e| *e == id).map(|i| i + 1)
    }

    /// Display name registered for `id`.
    #[must_use]
    pub fn name(&self, id: FakeId) -> &str {
        self.names.get(id.0).map_or("<unregistered>", String::as_str)
    }

    /// Drop all invocation entries, keeping registrations. Called at
    /// test-case start via session reset.
    pub(crate) fn clear_history(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based_in_append_order() {
        let mut log = CallOrderLog::new();
        let a = log.register("a");
        let b = log.register("b");
        log.append(a);
        log.append(b);
        log.append(a);

        assert_eq!(log.len(), 3);
        assert_eq!(log.entry(1), Some(a));
        assert_eq!(log.entry(2), Some(b));
        assert_eq!(log.entry(3), Some(a));
        assert_eq!(log.entry(0), None);
        assert_eq!(log.entry(4), None);
    }

    #[test]
    fn most_recent_position_tracks_the_latest_appearance() {
        let mut log = CallOrderLog::new();
        let a = log.register("a");
        let b = log.register("b");
        log.append(a);
        log.append(b);
        log.append(a);

        assert_eq!(log.most_recent_position(a), Some(3));
        assert_eq!(log.most_recent_position(b), Some(2));
    }

    #[test]
    fn never_invoked_fake_has_no_position() {
        let mut log = CallOrderLog::new();
        let a = log.register("a");
        assert_eq!(log.most_recent_position(a), None);
    }

    #[test]
    fn clear_history_keeps_registrations() {
        let mut log = CallOrderLog::new();
        let a = log.register("a");
        log.append(a);
        log.clear_history();

        assert!(log.is_empty());
        assert_eq!(log.name(a), "a");
    }
}
