//! §8, P5: a chain of N already-ready `then`s must drain without stack
//! growth proportional to N. Mirrors the shape of the teacher's own
//! `tests/recurse.rs`, which built a 1,000-deep `and_then` chain to prove
//! the old combinator design didn't blow the stack; this generalizes that
//! idea to an explicit trampoline over 10^5 hops.

mod support;

use support::Recorder;
use tether::make_promise;

#[test]
fn drains_a_deep_chain_of_already_ready_continuations() {
    support::init_logging();
    const DEPTH: i32 = 100_000;

    // Build the whole chain while still pending, so every hop is installed
    // as a waiting continuation rather than dispatched on the spot. A
    // single `set_value` call then has to walk all of them in one
    // Trampoline run — the scenario P5 actually cares about.
    let (promise, mut future) = make_promise::<i32>();
    for _ in 0..DEPTH {
        future = future.then(|n| n + 1);
    }

    let recorder = Recorder::new();
    let recorder_in_closure = recorder.clone();
    let _final = future.then(move |n| recorder_in_closure.record(n));

    promise.set_value(0);

    assert_eq!(recorder.taken(), Some(DEPTH));
}
