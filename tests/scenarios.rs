//! End-to-end scenarios seeded directly from the design's §8 test list.

mod support;

use support::{CallCounter, Recorder};
use tether::{make_promise, make_ready_error, make_ready_value, FutureError};

#[test]
fn settle_before_attach() {
    // Scenario 1.
    support::init_logging();
    let (promise, future) = make_promise::<i32>();
    promise.set_value(5);

    let recorder = Recorder::new();
    let recorder_in_closure = recorder.clone();
    let future = future.then(move |i| recorder_in_closure.record(i));

    assert_eq!(recorder.taken(), Some(5));
    assert!(!future.valid() || future.ready());
}

#[test]
fn attach_before_settle() {
    // Scenario 2.
    support::init_logging();
    let (promise, future) = make_promise::<i32>();

    let recorder = Recorder::new();
    let recorder_in_closure = recorder.clone();
    let _future = future.then(move |i| recorder_in_closure.record(i));

    assert_eq!(recorder.taken(), None);
    promise.set_value(5);
    assert_eq!(recorder.taken(), Some(5));
}

#[test]
fn skipping_chain() {
    // Scenario 3.
    support::init_logging();
    let (promise, future) = make_promise::<tether::Void>();
    let recorder = Recorder::new();
    let recorder_in_closure = recorder.clone();

    let _future = future
        .then(|_| 5)
        .then(|i| 2 * i)
        .then(move |i| recorder_in_closure.record(i));

    promise.set_value(tether::Void);
    assert_eq!(recorder.taken(), Some(10));
}

#[test]
fn error_bypass_and_recovery() {
    // Scenario 4.
    support::init_logging();
    let (promise, future) = make_promise::<tether::Void>();
    let recorder = Recorder::new();
    let recorder_in_closure = recorder.clone();
    let skipped = CallCounter::new();
    let skipped_in_closure = skipped.clone();

    let _future = future
        .then(|_| -> i32 { panic!("boom") })
        .then(move |i| {
            skipped_in_closure.bump();
            i
        })
        .catch(|_e| 5)
        .then(move |i| recorder_in_closure.record(i));

    promise.set_value(tether::Void);

    assert_eq!(recorder.taken(), Some(5));
    assert_eq!(skipped.count(), 0, "the then after the panic must never run");
}

#[test]
fn inner_future_unwrap_outer_first() {
    // Scenario 5, outer settles first.
    support::init_logging();
    let (p0, f0) = make_promise::<i32>();
    let (p1, f1) = make_promise::<i32>();

    let recorder = Recorder::new();
    let recorder_in_closure = recorder.clone();
    let _result = f0
        .then(move |i| f1.then(move |p| i * p))
        .then(move |v| recorder_in_closure.record(v));

    p0.set_value(5);
    assert_eq!(recorder.taken(), None, "must wait on the inner future too");
    p1.set_value(3);
    assert_eq!(recorder.taken(), Some(15));
}

#[test]
fn inner_future_unwrap_inner_first() {
    // Scenario 5, inner settles first.
    support::init_logging();
    let (p0, f0) = make_promise::<i32>();
    let (p1, f1) = make_promise::<i32>();

    let recorder = Recorder::new();
    let recorder_in_closure = recorder.clone();
    let _result = f0
        .then(move |i| f1.then(move |p| i * p))
        .then(move |v| recorder_in_closure.record(v));

    p1.set_value(3);
    assert_eq!(recorder.taken(), None, "must wait on the outer promise too");
    p0.set_value(5);
    assert_eq!(recorder.taken(), Some(15));
}

#[test]
fn broken_promise() {
    // Scenario 6.
    support::init_logging();
    let (promise, future) = make_promise::<i32>();
    let recorder: Recorder<i32> = Recorder::new();
    let recorder_in_closure = recorder.clone();

    let final_future = future.then(move |i| recorder_in_closure.record(i));
    drop(promise);

    assert_eq!(recorder.taken(), None, "record must never run on a broken promise");
    assert!(final_future.ready());
}

#[test]
fn ready_value_round_trip() {
    // P6.
    support::init_logging();
    let recorder = Recorder::new();
    let recorder_in_closure = recorder.clone();
    let _f = make_ready_value(42).then(move |v| recorder_in_closure.record(v));
    assert_eq!(recorder.taken(), Some(42));
}

#[test]
fn ready_error_round_trip() {
    // P7.
    support::init_logging();
    let recorder = Recorder::new();
    let recorder_in_closure = recorder.clone();
    let _f = make_ready_error::<i32>("boom".into())
        .catch(|_e| 7)
        .then(move |v| recorder_in_closure.record(v));
    assert_eq!(recorder.taken(), Some(7));
}

#[test]
fn error_passes_through_multiple_then_untouched() {
    // P4, extended: several `then`s in a row must all be skipped.
    support::init_logging();
    let (promise, future) = make_promise::<i32>();
    let touched = CallCounter::new();
    let t1 = touched.clone();
    let t2 = touched.clone();
    let recorder = Recorder::new();
    let recorder_in_closure = recorder.clone();

    let _f = future
        .then(move |i| {
            t1.bump();
            i
        })
        .then(move |i| {
            t2.bump();
            i
        })
        .catch(move |_e| {
            recorder_in_closure.record(());
            0
        })
        .then(|_| ());

    promise.set_exception(FutureError::from("boom"));

    assert_eq!(touched.count(), 0);
    assert_eq!(recorder.taken(), Some(()));
}

#[test]
fn pure_then_runs_at_most_once_regardless_of_timing() {
    // P3, both orderings.
    support::init_logging();
    let counter = CallCounter::new();

    let (p, f) = make_promise::<i32>();
    let c = counter.clone();
    let _chain = f.then(move |i| {
        c.bump();
        i + 1
    });
    p.set_value(1);
    assert_eq!(counter.count(), 1);

    let counter2 = CallCounter::new();
    let c2 = counter2.clone();
    let already_ready = make_ready_value(1);
    let _chain2 = already_ready.then(move |i| {
        c2.bump();
        i + 1
    });
    assert_eq!(counter2.count(), 1);
}
