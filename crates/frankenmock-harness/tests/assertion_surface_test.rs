// End-to-end tests for the assertion surface: each check kind against live
// fakes, with the collecting reporter capturing the exact failure text.

use frankenmock_core::Session;
use frankenmock_harness::{CollectingReporter, Verifier};

#[test]
fn nth_call_distinguishes_missing_call_from_wrong_arguments() {
    let session = Session::new();
    let fake = session.fake::<(i32, String), i32>("send");
    fake.call((1, "x".to_string()));
    fake.call((2, "y".to_string()));

    let reporter = CollectingReporter::new();
    let mut verifier = Verifier::with_reporter(&reporter);

    verifier.nth_call(&fake, 2, &(Some(2), None::<String>));
    verifier.nth_call(&fake, 2, &(Some(9), None::<String>));
    verifier.nth_call(&fake, 5, &(Some(1), None::<String>));

    let messages = reporter.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(
        messages[0],
        "`send` call 2 had arguments (2, \"y\"), expected (Some(9), None)"
    );
    assert_eq!(messages[1], "`send` call 5 never happened (2 call(s) recorded)");
}

#[test]
fn last_call_reports_never_called_distinctly() {
    let session = Session::new();
    let quiet = session.fake::<(i32,), i32>("quiet");
    let busy = session.fake::<(i32,), i32>("busy");
    busy.call((7,));

    let reporter = CollectingReporter::new();
    let mut verifier = Verifier::with_reporter(&reporter);

    verifier.last_call(&quiet, &(Some(1),));
    verifier.last_call(&busy, &(Some(9),));

    let messages = reporter.messages();
    assert_eq!(messages[0], "`quiet` was never called");
    assert_eq!(
        messages[1],
        "`busy` last call (call 1) had arguments (7,), expected (Some(9),)"
    );
}

#[test]
fn any_call_failure_names_pattern_and_search_breadth() {
    let session = Session::new();
    let fake = session.fake::<(u8,), i32>("poll");
    fake.call((1,));
    fake.call((2,));

    let reporter = CollectingReporter::new();
    let mut verifier = Verifier::with_reporter(&reporter);

    verifier.any_call(&fake, &(Some(2u8),));
    verifier.any_call(&fake, &(Some(9u8),));

    assert_eq!(
        reporter.messages(),
        vec!["`poll` has no call matching (Some(9),) across 2 recorded call(s)"]
    );
}

#[test]
fn called_once_checks_count_before_arguments() {
    let session = Session::new();
    let once = session.fake::<(i32,), i32>("once");
    let twice = session.fake::<(i32,), i32>("twice");
    once.call((4,));
    twice.call((1,));
    twice.call((2,));

    let reporter = CollectingReporter::new();
    let mut verifier = Verifier::with_reporter(&reporter);

    verifier.called_once(&once, &(Some(4),));
    verifier.called_once(&once, &(Some(5),));
    verifier.called_once(&twice, &(Some(2),));

    let messages = reporter.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(
        messages[0],
        "`once` single call had arguments (4,), expected (Some(5),)"
    );
    assert_eq!(messages[1], "`twice` called 2 time(s), expected exactly one call");
}

#[test]
fn in_order_failure_lists_the_expected_sequence() {
    let session = Session::new();
    let setup = session.fake::<(), i32>("setup");
    let run = session.fake::<(), i32>("run");
    let teardown = session.fake::<(), i32>("teardown");

    setup.call(());
    run.call(());
    teardown.call(());

    let reporter = CollectingReporter::new();
    let mut verifier = Verifier::with_reporter(&reporter);

    verifier.in_order(&session, &[setup.id(), run.id(), teardown.id()]);
    verifier.in_order(&session, &[teardown.id(), setup.id()]);

    assert_eq!(
        reporter.messages(),
        vec!["calls were not observed in order [teardown -> setup]"]
    );
}

#[test]
fn nth_in_history_failures_name_the_actual_callee() {
    let session = Session::new();
    let a = session.fake::<(), i32>("a");
    let b = session.fake::<(), i32>("b");
    a.call(());
    b.call(());

    let reporter = CollectingReporter::new();
    let mut verifier = Verifier::with_reporter(&reporter);

    verifier.nth_in_history(&session, 1, a.id());
    verifier.nth_in_history(&session, 2, a.id());
    verifier.nth_in_history(&session, 3, a.id());

    let messages = reporter.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], "session call 2 was `b`, expected `a`");
    assert_eq!(messages[1], "session call 3 never happened (2 call(s) recorded)");
}

#[test]
fn summary_counts_mixed_outcomes() {
    let session = Session::new();
    let fake = session.fake::<(i32,), i32>("probe");
    fake.call((1,));

    let reporter = CollectingReporter::new();
    let mut verifier = Verifier::with_reporter(&reporter);

    verifier.called_times(&fake, 1);
    verifier.not_called(&fake);
    verifier.any_call(&fake, &(Some(1),));

    let summary = verifier.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 1);
    assert!(!summary.all_passed());
}
