//! # Event handler trait.
//!
//! Provides [`Handle`], the extension point for plugging callbacks into a
//! [`Bus`](crate::Bus).
//!
//! Each handler gets:
//! - **Per-handler isolation**: a panic or `Err` is caught by the dispatcher
//!   and never aborts sibling handlers or the publisher.
//! - **In-order delivery**: handlers for one publish run in subscription
//!   order.
//!
//! ## Identity
//! A handler subscribes as a [`HandlerRef`](crate::HandlerRef)
//! (`Arc<dyn Handle>`); the `Arc` reference is its identity. Subscribing the
//! same `Arc` twice is a silent no-op, while two separately-allocated
//! handlers with identical code are independent subscriptions.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use herald::{Event, Handle, HandlerError};
//!
//! struct Metrics;
//!
//! #[async_trait]
//! impl Handle for Metrics {
//!     async fn on_event(&self, ev: &Event) -> Result<(), HandlerError> {
//!         if let Some(clicks) = ev.payload_as::<u32>() {
//!             let _ = clicks; // export a metric, etc.
//!         }
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "metrics" }   // prefer short, descriptive names
//! }
//! ```

use async_trait::async_trait;

use crate::error::HandlerError;
use crate::events::Event;

/// Callback invoked for every published event it is subscribed to.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Return `Err` for recoverable failures; the dispatcher reports it and
///   moves on to the next handler.
/// - Panics are caught and reported the same way, but prefer `Err`.
#[async_trait]
pub trait Handle: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Under the default deferred dispatch this runs outside the publisher's
    /// call stack; the publisher never observes the result.
    async fn on_event(&self, event: &Event) -> Result<(), HandlerError>;

    /// Returns the handler name used in failure reports.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose -
    /// override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
