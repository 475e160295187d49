//! Error taxonomy for history queries and fake setup.
//!
//! Two distinct failure classes exist here:
//! - [`HistoryError`]: a well-formed query the recorded history cannot
//!   answer ("that call never happened"). Recoverable; assertion layers
//!   turn it into a descriptive failure.
//! - [`SetupError`]: the test itself is broken (bad setup), not the code
//!   under test. Fatal; the ergonomic setup wrappers fail fast on it.
//!
//! A false query result is not an error at this level; absence of a match
//! is a clean `false`.

use thiserror::Error;

/// Query-level failures over recorded call history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// A specific call index was requested outside `1..=count`.
    #[error("call index {index} out of range ({count} call(s) recorded)")]
    OutOfRange {
        /// The 1-based index that was requested.
        index: usize,
        /// Number of calls actually recorded.
        count: usize,
    },
    /// A last-call accessor was used on a never-invoked fake.
    #[error("no calls recorded")]
    NoCallsRecorded,
}

/// Fatal setup mistakes detected before any verification runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A return sequence must script at least one value; consuming from an
    /// empty script would have no defined exhaustion value.
    #[error("return sequence must contain at least one value")]
    EmptyReturnSequence,
}
