//! The per-double recording handle.
//!
//! A [`Fake`] stands in for one function. `Args` is the argument tuple type
//! (fixing arity and per-position static types at definition time); `Ret`
//! is the return type. Create fakes through [`Session::fake`] or
//! [`Session::fake_returning`] so every invocation also lands in the
//! session's call-order log.
//!
//! Invocation, setup, and queries all take `&self`: the code under test
//! holds a shared reference while the test mutates return plans and reads
//! history. Interior state sits behind `parking_lot` mutexes; by contract
//! a single test case runs sequentially, so locks are only ever held for
//! one record or one read.
//!
//! [`Session::fake`]: crate::session::Session::fake
//! [`Session::fake_returning`]: crate::session::Session::fake_returning

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{HistoryError, SetupError};
use crate::ledger::{CallRecord, Ledger};
use crate::matcher::ArgPattern;
use crate::order::{CallOrderLog, FakeId};
use crate::sequence::ReturnPlan;

/// A test double for one function.
pub struct Fake<Args, Ret> {
    id: FakeId,
    name: String,
    initial: Ret,
    ledger: Mutex<Ledger<Args, Ret>>,
    plan: Mutex<ReturnPlan<Ret>>,
    order: Arc<Mutex<CallOrderLog>>,
}

impl<Args, Ret: Clone> Fake<Args, Ret> {
    pub(crate) fn new(
        id: FakeId,
        name: String,
        initial: Ret,
        order: Arc<Mutex<CallOrderLog>>,
    ) -> Self {
        Self {
            id,
            name,
            initial: initial.clone(),
            ledger: Mutex::new(Ledger::new()),
            plan: Mutex::new(ReturnPlan::Fixed(initial)),
            order,
        }
    }

    /// Identity token for order and positional history checks.
    #[must_use]
    pub fn id(&self) -> FakeId {
        self.id
    }

    /// Display name used in failure messages.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record one invocation.
    ///
    /// Snapshots `args` by value, consumes the next scripted return value,
    /// appends a call record, and logs this fake in the session call order.
    /// The substitution glue (or the test author driving the fake by hand)
    /// must route every real invocation through here exactly once.
    pub fn call(&self, args: Args) -> Ret {
        let ret = self.plan.lock().next_value();
        self.ledger.lock().record(args, ret.clone());
        self.order.lock().append(self.id);
        ret
    }

    // ── Setup ──────────────────────────────────────────────────────────

    /// Replace the fixed return value for subsequent calls.
    pub fn set_return_value(&self, value: Ret) {
        self.plan.lock().set_value(value);
    }

    /// Script a sequence of return values, consumed one per call; after
    /// exhaustion the final value repeats.
    pub fn try_set_return_seq(&self, values: Vec<Ret>) -> Result<(), SetupError> {
        self.plan.lock().set_sequence(values)
    }

    /// Script a sequence of return values.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty: a broken test setup, not a test
    /// failure. Use [`try_set_return_seq`](Self::try_set_return_seq) to
    /// handle the error instead.
    pub fn set_return_seq(&self, values: Vec<Ret>) {
        if let Err(err) = self.try_set_return_seq(values) {
            panic!("set_return_seq on `{}`: {err}", self.name);
        }
    }

    /// Clear recorded history and restore the initial fixed return value.
    ///
    /// Does not touch the session call-order log; reset that through
    /// [`Session::reset`](crate::session::Session::reset).
    pub fn reset(&self) {
        self.ledger.lock().clear();
        self.plan.lock().set_value(self.initial.clone());
    }

    // ── History queries ────────────────────────────────────────────────

    /// Number of recorded calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.ledger.lock().count()
    }

    /// Exactly `n` calls recorded.
    #[must_use]
    pub fn called_exactly(&self, n: usize) -> bool {
        self.ledger.lock().called_exactly(n)
    }

    /// Zero calls recorded.
    #[must_use]
    pub fn not_called(&self) -> bool {
        self.called_exactly(0)
    }

    /// Call `index` (1-based) happened and its arguments satisfy
    /// `pattern`. Out-of-range indices are a distinguishable error.
    pub fn nth_call_matches<P: ArgPattern<Args>>(
        &self,
        index: usize,
        pattern: &P,
    ) -> Result<bool, HistoryError> {
        self.ledger.lock().nth_matches(index, pattern)
    }

    /// The most recent call satisfies `pattern`; `false` if never invoked.
    #[must_use]
    pub fn last_call_matches<P: ArgPattern<Args>>(&self, pattern: &P) -> bool {
        self.ledger.lock().last_matches(pattern)
    }

    /// Some recorded call satisfies `pattern` (searched most-recent-first);
    /// `false` if none does or the fake was never invoked.
    #[must_use]
    pub fn any_call_matches<P: ArgPattern<Args>>(&self, pattern: &P) -> bool {
        self.ledger.lock().any_matches(pattern)
    }
}

impl<Args: Clone, Ret: Clone> Fake<Args, Ret> {
    /// Snapshot of the record for call `index` (1-based).
    pub fn nth_call(&self, index: usize) -> Result<CallRecord<Args, Ret>, HistoryError> {
        self.ledger.lock().nth(index).cloned()
    }

    /// Snapshot of the most recent call record.
    pub fn last_call(&self) -> Result<CallRecord<Args, Ret>, HistoryError> {
        self.ledger.lock().last().cloned()
    }
}
