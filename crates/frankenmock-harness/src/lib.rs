//! Assertion surface for frankenmock fakes.
//!
//! This crate provides:
//! - Failure reporting seam: [`FailureReporter`] delegates failure
//!   signaling to the surrounding test runner ([`PanicReporter`] fails the
//!   current test, [`CollectingReporter`] captures messages)
//! - [`Verifier`]: one assertion per history query, with descriptive
//!   messages naming the fake, expected vs. recorded values, and the
//!   failing call index
//! - Structured check log: JSONL emission + validation of verification
//!   outcomes
//!
//! The query semantics live in `frankenmock-core`; nothing here adds logic
//! beyond formatting and delegation.

#![forbid(unsafe_code)]

pub mod check_log;
pub mod report;
pub mod verify;

pub use check_log::{CheckLogError, read_check_log, validate_check_line, write_check_log};
pub use report::{CollectingReporter, FailureReporter, PanicReporter};
pub use verify::{CheckKind, CheckRecord, CheckSummary, Verifier};
