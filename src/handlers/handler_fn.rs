//! # Function-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(Event) -> Fut`, producing a fresh
//! future per dispatch. This avoids shared mutable state; if a handler needs
//! state across invocations, move an `Arc<...>` into the closure explicitly.
//!
//! ## Example
//! ```rust
//! use herald::{Event, Handle, HandlerError, HandlerFn, HandlerRef};
//!
//! let h: HandlerRef = HandlerFn::arc("audit", |ev: Event| async move {
//!     if let Some(n) = ev.payload_as::<u32>() {
//!         println!("{} -> {n}", ev.name);
//!     }
//!     Ok::<_, HandlerError>(())
//! });
//!
//! assert_eq!(h.name(), "audit");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::HandlerError;
use crate::events::Event;
use crate::handlers::handler::Handle;

/// Shared handle to a handler (`Arc<dyn Handle>`).
///
/// The `Arc` is the handler's identity: the bus deduplicates and
/// unsubscribes by `Arc::ptr_eq`, never by comparing handler contents.
pub type HandlerRef = Arc<dyn Handle>;

/// Function-backed handler implementation.
///
/// Wraps a closure that *creates* a new future per dispatch.
#[derive(Debug)]
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a [`HandlerRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the handler and returns it as a shared handle.
    ///
    /// Every call allocates a fresh `Arc`, hence a fresh identity: two
    /// handlers built from the same closure text are independent
    /// subscriptions.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Handle for HandlerFn<F>
where
    F: Fn(Event) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<(), HandlerError>> + Send + 'static,
{
    async fn on_event(&self, event: &Event) -> Result<(), HandlerError> {
        (self.f)(event.clone()).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
