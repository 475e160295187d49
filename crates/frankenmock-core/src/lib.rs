//! # frankenmock-core
//!
//! Call-history model for fake-function test doubles.
//!
//! This crate provides:
//! - Call ledger: append-only per-fake record of invocations
//! - Return sequencer: scripted return values with sticky-last exhaustion
//! - Argument matcher: positional equality patterns over argument tuples
//! - History queries: exact count, Nth/last/any-call matching, cross-fake
//!   call ordering
//!
//! Substituting a callable for a real function and the test runner's
//! pass/fail machinery are external collaborators. Test code drives a
//! [`Fake`] directly (or through generated glue), then asserts on its
//! history via `frankenmock-harness`.

#![forbid(unsafe_code)]

pub mod error;
pub mod fake;
pub mod ledger;
pub mod matcher;
pub mod order;
pub mod query;
pub mod sequence;
pub mod session;

pub use error::{HistoryError, SetupError};
pub use fake::Fake;
pub use ledger::{CallRecord, Ledger};
pub use matcher::ArgPattern;
pub use order::{CallOrderLog, FakeId};
pub use sequence::ReturnPlan;
pub use session::Session;
