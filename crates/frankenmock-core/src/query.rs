//! History queries over ledgers and the call-order log.
//!
//! Pure read-side algorithms: every function here takes the recorded
//! history as-is and never mutates it, so repeated identical queries give
//! identical answers. Out-of-range call indices surface as
//! [`HistoryError::OutOfRange`] only from the explicit Nth-call API; the
//! any-call scan and the order checks report absence as a clean `false`.

use crate::error::HistoryError;
use crate::ledger::Ledger;
use crate::matcher::ArgPattern;
use crate::order::{CallOrderLog, FakeId};

impl<Args, Ret> Ledger<Args, Ret> {
    /// Exact-count check: exactly `n` calls recorded.
    #[must_use]
    pub fn called_exactly(&self, n: usize) -> bool {
        self.count() == n
    }

    /// Nth-call check: call `index` (1-based) happened and its arguments
    /// satisfy `pattern`.
    ///
    /// An out-of-range index is an error rather than `false`, so callers
    /// can tell "that call never happened" apart from "wrong argument".
    pub fn nth_matches<P: ArgPattern<Args>>(
        &self,
        index: usize,
        pattern: &P,
    ) -> Result<bool, HistoryError> {
        let record = self.nth(index)?;
        Ok(pattern.matches(&record.args))
    }

    /// Last-call check: the most recent call satisfies `pattern`.
    ///
    /// A never-invoked fake is a defined no-match, not an error.
    #[must_use]
    pub fn last_matches<P: ArgPattern<Args>>(&self, pattern: &P) -> bool {
        match self.last() {
            Ok(record) => pattern.matches(&record.args),
            Err(_) => false,
        }
    }

    /// Exists-any-call check: some recorded call satisfies `pattern`.
    ///
    /// Scans most-recent-first and short-circuits on the first match. The
    /// boolean result is identical to a forward scan over the same records.
    #[must_use]
    pub fn any_matches<P: ArgPattern<Args>>(&self, pattern: &P) -> bool {
        self.records()
            .iter()
            .rev()
            .any(|record| pattern.matches(&record.args))
    }
}

impl CallOrderLog {
    /// Order check: each identity's most recent invocation happened
    /// strictly after the previous identity's most recent invocation.
    ///
    /// This compares one representative (latest) position per identity; it
    /// is NOT a subsequence match over every invocation. A fake called
    /// multiple times is judged only by where it was last seen. Any
    /// identity with no invocations at all fails the check. An empty
    /// identity list is vacuously in order.
    #[must_use]
    pub fn in_order(&self, ids: &[FakeId]) -> bool {
        let mut previous = 0usize;
        for id in ids {
            match self.most_recent_position(*id) {
                Some(position) if position > previous => previous = position,
                _ => return false,
            }
        }
        true
    }
}
