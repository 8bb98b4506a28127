//! # Event handlers.
//!
//! This module provides the [`Handle`] trait and the function-backed
//! [`HandlerFn`] implementation for reacting to events published through a
//! [`Bus`](crate::Bus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   publisher ── publish(name, payload) ──► Bus ──► dispatch in subscription order
//!                                                       │
//!                                                       ├──► Handle::on_event(&Event)
//!                                                       │         │
//!                                                       │    ┌────┴────┬────────┐
//!                                                       │    ▼         ▼        ▼
//!                                                       │  LogWriter  Metrics  ...
//!                                                       │
//!                                                       └──► failures isolated per handler
//! ```
//!
//! ## Implementing custom handlers
//! Implement [`Handle`] for a struct when the handler carries state or
//! deserves a type; reach for [`HandlerFn`] when a closure is enough.

mod handler;
mod handler_fn;
#[cfg(feature = "logging")]
mod log;

pub use handler::Handle;
pub use handler_fn::{HandlerFn, HandlerRef};
#[cfg(feature = "logging")]
pub use log::LogWriter;
