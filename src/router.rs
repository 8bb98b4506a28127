//! # Process-wide ambient router.
//!
//! Some handlers want to self-register without threading a [`Bus`]
//! reference through the program. This module provides exactly that:
//! one process-wide bus behind [`router()`], created lazily on first access
//! and alive for the rest of the process, plus the [`Attach`] sugar that
//! lets a handler subscribe itself.
//!
//! All access goes through the single accessor; there is no other global
//! state. The sugar is a thin forwarding adapter over the [`Bus`] contract,
//! never new logic.
//!
//! ## Example
//! ```rust
//! use herald::{router, Attach, Event, HandlerError, HandlerFn, HandlerRef};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let audit: HandlerRef = HandlerFn::arc("audit", |ev: Event| async move {
//!     let _ = ev;
//!     Ok::<_, HandlerError>(())
//! });
//!
//! audit.attach("login");                    // == router().subscribe("login", audit.clone())
//! router().publish("login", "alice").await;
//! audit.detach("login");                    // == router().unsubscribe("login", &audit)
//! # }
//! ```

use std::sync::{Arc, OnceLock};

use crate::events::Bus;
use crate::handlers::HandlerRef;

static ROUTER: OnceLock<Bus> = OnceLock::new();

/// Returns the process-wide bus, initializing it on first access.
///
/// The router uses the default [`Config`](crate::Config) (deferred
/// dispatch) and lives for the process. Any caller may subscribe,
/// unsubscribe, or publish on it; registration is last-writer-wins with no
/// access control.
pub fn router() -> &'static Bus {
    ROUTER.get_or_init(Bus::new)
}

/// Self-registration sugar on [`HandlerRef`], targeting the [`router()`].
pub trait Attach {
    /// Subscribes this handler to `event` on the process-wide bus.
    ///
    /// Forwards to [`Bus::subscribe`]; returns the handler for chaining.
    fn attach(&self, event: &str) -> HandlerRef;

    /// Unsubscribes this handler from `event` on the process-wide bus.
    ///
    /// Forwards to [`Bus::unsubscribe`]; a handler that was never attached
    /// is a silent no-op.
    fn detach(&self, event: &str) -> HandlerRef;
}

impl Attach for HandlerRef {
    fn attach(&self, event: &str) -> HandlerRef {
        router().subscribe(event, Arc::clone(self))
    }

    fn detach(&self, event: &str) -> HandlerRef {
        router().unsubscribe(event, self)
    }
}
