//! # Dispatch policies for publish.
//!
//! [`DispatchPolicy`] determines **when** handlers run relative to the
//! `publish` call. Both strategies deliver the same snapshot, in the same
//! subscription order, with the same per-handler isolation; they differ in
//! what the publisher and the handlers can observe.
//!
//! ## Choosing the right policy
//!
//! **Fire-and-forget publishing** (default):
//! ```text
//! DispatchPolicy::Deferred   → publish returns immediately; handlers run
//!                              on a spawned dispatcher task after the
//!                              publisher's current work
//! ```
//!
//! **Publish-then-observe** (tests, request/response-ish flows):
//! ```text
//! DispatchPolicy::Inline     → publish awaits every handler before
//!                              returning
//! ```
//!
//! ## Reentrancy
//! Under `Deferred`, a handler that itself publishes never runs inside the
//! outer publisher's call stack. Under `Inline`, a handler publishing to the
//! same bus nests dispatch within the outer `publish` await.
//!
//! ## Stalls
//! There are no timeouts. A handler that never returns stalls the rest of
//! its own dispatch run: under `Deferred` that is an orphan background task,
//! under `Inline` it is the publisher itself.

/// Policy controlling when `publish` invokes handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Hand the snapshot to a spawned dispatcher task and return
    /// immediately (default). Handlers run sequentially, in subscription
    /// order, after the publisher's current call stack.
    Deferred,
    /// Await each handler in place, in subscription order, before `publish`
    /// returns.
    Inline,
}

impl Default for DispatchPolicy {
    /// Returns [`DispatchPolicy::Deferred`].
    fn default() -> Self {
        DispatchPolicy::Deferred
    }
}
