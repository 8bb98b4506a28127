//! Dispatch strategy.
//!
//! This module groups the knobs that control **when** handlers run relative
//! to the `publish` call.
//!
//! ## Contents
//! - [`DispatchPolicy`] deferred (spawned dispatcher) vs inline (awaited)
//!
//! ## Defaults
//! - `DispatchPolicy::Deferred` — the publisher never blocks on handler
//!   execution time.

mod dispatch;

pub use dispatch::DispatchPolicy;
