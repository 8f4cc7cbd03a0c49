//! The Trampoline (§4.4): the sole dispatch path in the system.
//!
//! Every call site that settles a state funnels its follow-up work through
//! `run`, converting what would otherwise be a `continue_with` call
//! recursing into the next `continue_with` call into a flat loop — the
//! crate's answer to the "recursion hazard" called out in §9: a naive
//! recursive dispatch blows the stack on a long chain of already-ready
//! continuations (see `tests/trampoline.rs`, which builds one 10^5 deep).

use crate::continuation::Continuation;

pub(crate) fn run(mut work: Option<Box<dyn Continuation>>) {
    let mut depth = 0u64;
    while let Some(continuation) = work {
        depth += 1;
        log::trace!("trampoline hop {}", depth);
        work = continuation.run();
    }
    log::trace!("trampoline drained a chain of depth {}", depth);
}
