//! Failure signaling seam toward the external test runner.
//!
//! The verifier formats failure messages; how a failure halts or flags the
//! current test is the runner's contract, abstracted behind
//! [`FailureReporter`].

use parking_lot::Mutex;

/// Reports assertion failures to the surrounding test runner.
pub trait FailureReporter {
    /// Signal one failed assertion with a fully formatted message.
    fn report_failure(&self, message: &str);
}

impl<R: FailureReporter + ?Sized> FailureReporter for &R {
    fn report_failure(&self, message: &str) {
        (**self).report_failure(message);
    }
}

/// Default reporter: fail the current test immediately.
///
/// Under Rust's built-in test harness a panic is the standard failure
/// signal; embedders with their own runner substitute a different reporter.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl FailureReporter for PanicReporter {
    fn report_failure(&self, message: &str) {
        panic!("{message}");
    }
}

/// Captures failure messages instead of halting.
///
/// Used to test the assertion surface itself and by embedders that collect
/// all failures before reporting.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    messages: Mutex<Vec<String>>,
}

impl CollectingReporter {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages reported so far, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Returns `true` if no failure has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl FailureReporter for CollectingReporter {
    fn report_failure(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "boom")]
    fn panic_reporter_panics_with_the_message() {
        PanicReporter.report_failure("boom");
    }

    #[test]
    fn collecting_reporter_keeps_messages_in_order() {
        let reporter = CollectingReporter::new();
        assert!(reporter.is_empty());

        reporter.report_failure("first");
        reporter.report_failure("second");

        assert_eq!(reporter.messages(), vec!["first", "second"]);
        assert!(!reporter.is_empty());
    }

    #[test]
    fn references_forward_to_the_underlying_reporter() {
        let reporter = CollectingReporter::new();
        let by_ref: &dyn FailureReporter = &reporter;
        by_ref.report_failure("via ref");
        assert_eq!(reporter.messages(), vec!["via ref"]);
    }
}
