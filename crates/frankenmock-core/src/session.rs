//! Test-case-scoped context.
//!
//! A [`Session`] owns the call-order log shared by every fake it creates.
//! Build one session per test case; parallel test workers must each use
//! their own session (and fakes); the log is never process-global. The
//! reset point is explicit: construct a fresh session, or call
//! [`Session::reset`] at test-case start.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::fake::Fake;
use crate::order::{CallOrderLog, FakeId};

/// Owner of the call-order log and allocator of fake identities.
pub struct Session {
    order: Arc<Mutex<CallOrderLog>>,
}

impl Session {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Arc::new(Mutex::new(CallOrderLog::new())),
        }
    }

    /// Create a fake wired into this session's call-order log.
    ///
    /// The return value starts at `Ret::default()` (the type's zero value)
    /// until [`Fake::set_return_value`] or a return sequence overrides it.
    pub fn fake<Args, Ret: Default + Clone>(&self, name: &str) -> Fake<Args, Ret> {
        self.fake_returning(name, Ret::default())
    }

    /// Create a fake with an explicit initial return value, for return
    /// types without a meaningful `Default`.
    pub fn fake_returning<Args, Ret: Clone>(&self, name: &str, initial: Ret) -> Fake<Args, Ret> {
        let id = self.order.lock().register(name);
        Fake::new(id, name.to_string(), initial, Arc::clone(&self.order))
    }

    /// Total invocations recorded across all fakes in this session.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.order.lock().len()
    }

    /// Which fake was the `position`-th invocation overall (1-based).
    #[must_use]
    pub fn history_entry(&self, position: usize) -> Option<FakeId> {
        self.order.lock().entry(position)
    }

    /// Order check over most-recent positions; see
    /// [`CallOrderLog::in_order`] for the exact semantics.
    #[must_use]
    pub fn called_in_order(&self, ids: &[FakeId]) -> bool {
        self.order.lock().in_order(ids)
    }

    /// Display name registered for `id`.
    #[must_use]
    pub fn name_of(&self, id: FakeId) -> String {
        self.order.lock().name(id).to_string()
    }

    /// Clear the call-order log for a new test-case run.
    ///
    /// Fake registrations survive; per-fake ledgers are cleared
    /// individually via [`Fake::reset`].
    pub fn reset(&self) {
        self.order.lock().clear_history();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
