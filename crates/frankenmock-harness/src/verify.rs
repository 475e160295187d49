//! The assertion surface: one check per history query.
//!
//! Each [`Verifier`] method evaluates a query from `frankenmock-core`, and
//! on failure formats a message naming the fake, the expected vs. recorded
//! values or counts, and the failing call index where applicable, then
//! delegates to the configured [`FailureReporter`]. Every evaluated check
//! also lands in a [`CheckRecord`] so a whole run can be summarized or
//! exported as a structured log.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use frankenmock_core::{ArgPattern, Fake, FakeId, HistoryError, Session};

use crate::report::{FailureReporter, PanicReporter};

/// Which verification a check record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    CalledTimes,
    NotCalled,
    CalledOnce,
    NthCall,
    LastCall,
    AnyCall,
    InOrder,
    NthInHistory,
}

/// Outcome of a single evaluated check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    /// Fake (or ordered fake list) the check targeted.
    pub fake: String,
    /// Which verification ran.
    pub check: CheckKind,
    /// Whether the underlying query held.
    pub passed: bool,
    /// Failure message; present exactly when `passed` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Aggregate outcome of a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Total checks evaluated.
    pub total: usize,
    /// Checks whose query held.
    pub passed: usize,
    /// Checks whose query failed.
    pub failed: usize,
    /// Individual outcomes, in evaluation order.
    pub records: Vec<CheckRecord>,
}

impl CheckSummary {
    /// Build a summary from individual check records.
    #[must_use]
    pub fn from_records(records: Vec<CheckRecord>) -> Self {
        let total = records.len();
        let passed = records.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            total,
            passed,
            failed,
            records,
        }
    }

    /// Returns `true` if every check passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Evaluates history queries and reports failures.
pub struct Verifier<R: FailureReporter = PanicReporter> {
    reporter: R,
    records: Vec<CheckRecord>,
}

impl Verifier<PanicReporter> {
    /// Verifier that fails the current test on the first unmet check.
    #[must_use]
    pub fn new() -> Self {
        Self::with_reporter(PanicReporter)
    }
}

impl Default for Verifier<PanicReporter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FailureReporter> Verifier<R> {
    /// Verifier delegating failure signaling to `reporter`.
    pub fn with_reporter(reporter: R) -> Self {
        Self {
            reporter,
            records: Vec::new(),
        }
    }

    fn record(&mut self, fake: impl Into<String>, check: CheckKind, detail: Option<String>) {
        let passed = detail.is_none();
        self.records.push(CheckRecord {
            fake: fake.into(),
            check,
            passed,
            detail: detail.clone(),
        });
        if let Some(message) = detail {
            self.reporter.report_failure(&message);
        }
    }

    /// Assert the fake was called exactly `expected` times.
    pub fn called_times<Args, Ret: Clone>(&mut self, fake: &Fake<Args, Ret>, expected: usize) {
        let actual = fake.call_count();
        let detail = (actual != expected).then(|| {
            format!(
                "`{}` called {actual} time(s), expected {expected}",
                fake.name()
            )
        });
        self.record(fake.name(), CheckKind::CalledTimes, detail);
    }

    /// Assert the fake was never called.
    pub fn not_called<Args, Ret: Clone>(&mut self, fake: &Fake<Args, Ret>) {
        let actual = fake.call_count();
        let detail = (actual != 0).then(|| {
            format!(
                "`{}` called {actual} time(s), expected no calls",
                fake.name()
            )
        });
        self.record(fake.name(), CheckKind::NotCalled, detail);
    }

    /// Assert the fake was called exactly once, with arguments satisfying
    /// `pattern`.
    pub fn called_once<Args, Ret, P>(&mut self, fake: &Fake<Args, Ret>, pattern: &P)
    where
        Args: Clone + Debug,
        Ret: Clone,
        P: ArgPattern<Args> + Debug,
    {
        let count = fake.call_count();
        let detail = if count != 1 {
            Some(format!(
                "`{}` called {count} time(s), expected exactly one call",
                fake.name()
            ))
        } else if fake.last_call_matches(pattern) {
            None
        } else {
            Some(format!(
                "`{}` single call had arguments {}, expected {pattern:?}",
                fake.name(),
                recorded_args(fake, 1)
            ))
        };
        self.record(fake.name(), CheckKind::CalledOnce, detail);
    }

    /// Assert call `index` (1-based) happened with arguments satisfying
    /// `pattern`. "That call never happened" and "arguments didn't match"
    /// produce distinct messages.
    pub fn nth_call<Args, Ret, P>(&mut self, fake: &Fake<Args, Ret>, index: usize, pattern: &P)
    where
        Args: Clone + Debug,
        Ret: Clone,
        P: ArgPattern<Args> + Debug,
    {
        let detail = match fake.nth_call_matches(index, pattern) {
            Ok(true) => None,
            Ok(false) => Some(format!(
                "`{}` call {index} had arguments {}, expected {pattern:?}",
                fake.name(),
                recorded_args(fake, index)
            )),
            Err(HistoryError::OutOfRange { index, count }) => Some(format!(
                "`{}` call {index} never happened ({count} call(s) recorded)",
                fake.name()
            )),
            Err(HistoryError::NoCallsRecorded) => {
                Some(format!("`{}` was never called", fake.name()))
            }
        };
        self.record(fake.name(), CheckKind::NthCall, detail);
    }

    /// Assert the fake was called at least once and its most recent call
    /// satisfies `pattern`.
    pub fn last_call<Args, Ret, P>(&mut self, fake: &Fake<Args, Ret>, pattern: &P)
    where
        Args: Clone + Debug,
        Ret: Clone,
        P: ArgPattern<Args> + Debug,
    {
        let count = fake.call_count();
        let detail = if count == 0 {
            Some(format!("`{}` was never called", fake.name()))
        } else if fake.last_call_matches(pattern) {
            None
        } else {
            Some(format!(
                "`{}` last call (call {count}) had arguments {}, expected {pattern:?}",
                fake.name(),
                recorded_args(fake, count)
            ))
        };
        self.record(fake.name(), CheckKind::LastCall, detail);
    }

    /// Assert some recorded call satisfies `pattern`.
    pub fn any_call<Args, Ret, P>(&mut self, fake: &Fake<Args, Ret>, pattern: &P)
    where
        Ret: Clone,
        P: ArgPattern<Args> + Debug,
    {
        let detail = (!fake.any_call_matches(pattern)).then(|| {
            format!(
                "`{}` has no call matching {pattern:?} across {} recorded call(s)",
                fake.name(),
                fake.call_count()
            )
        });
        self.record(fake.name(), CheckKind::AnyCall, detail);
    }

    /// Assert the identities were invoked in the stated relative order,
    /// judged by each one's most recent invocation.
    pub fn in_order(&mut self, session: &Session, ids: &[FakeId]) {
        let names: Vec<String> = ids.iter().map(|id| session.name_of(*id)).collect();
        let label = if names.is_empty() {
            String::from("(none)")
        } else {
            names.join(" -> ")
        };
        let detail = (!session.called_in_order(ids))
            .then(|| format!("calls were not observed in order [{label}]"));
        self.record(label, CheckKind::InOrder, detail);
    }

    /// Assert the `position`-th invocation in the whole session (1-based)
    /// was the fake identified by `id`.
    pub fn nth_in_history(&mut self, session: &Session, position: usize, id: FakeId) {
        let expected = session.name_of(id);
        let detail = match session.history_entry(position) {
            Some(actual) if actual == id => None,
            Some(actual) => Some(format!(
                "session call {position} was `{}`, expected `{expected}`",
                session.name_of(actual)
            )),
            None => Some(format!(
                "session call {position} never happened ({} call(s) recorded)",
                session.history_len()
            )),
        };
        self.record(expected, CheckKind::NthInHistory, detail);
    }

    /// All checks evaluated so far, in order.
    #[must_use]
    pub fn records(&self) -> &[CheckRecord] {
        &self.records
    }

    /// Aggregate summary of the checks evaluated so far.
    #[must_use]
    pub fn summary(&self) -> CheckSummary {
        CheckSummary::from_records(self.records.clone())
    }
}

fn recorded_args<Args, Ret>(fake: &Fake<Args, Ret>, index: usize) -> String
where
    Args: Clone + Debug,
    Ret: Clone,
{
    fake.nth_call(index)
        .map_or_else(|_| String::from("<unavailable>"), |r| format!("{:?}", r.args))
}
