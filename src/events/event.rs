//! # Named events with caller-supplied payloads.
//!
//! An [`Event`] is what handlers receive on dispatch: the event name, an
//! optional opaque payload, a wall-clock timestamp, and a globally unique
//! sequence number.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Dispatch order across concurrent publishes is not defined;
//! use `seq` to restore the publish order when it matters.
//!
//! ## Payloads
//! The bus does not interpret payloads. A payload is any `Any + Send + Sync`
//! value; handlers that expect a concrete type recover it with
//! [`Event::payload_as`].
//!
//! ## Example
//! ```rust
//! use herald::Event;
//!
//! let ev = Event::new("click").with_payload(42u32);
//!
//! assert_eq!(&*ev.name, "click");
//! assert_eq!(ev.payload_as::<u32>(), Some(&42));
//! assert_eq!(ev.payload_as::<String>(), None);
//! ```

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// A named occurrence delivered to every handler subscribed to `name`.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - `name`: exact-match event name; no pattern matching
/// - payload: optional opaque data, shared across handlers without copying
#[derive(Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event name, as passed to `publish`.
    pub name: Arc<str>,

    payload: Option<Arc<dyn Any + Send + Sync>>,
}

impl Event {
    /// Creates a new event with the current timestamp and next sequence number.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            name: name.into(),
            payload: None,
        }
    }

    /// Attaches a payload, replacing any previous one.
    #[inline]
    pub fn with_payload(mut self, payload: impl Any + Send + Sync) -> Self {
        self.payload = Some(Arc::new(payload));
        self
    }

    /// Returns the payload downcast to `T`, or `None` when the payload is
    /// absent or of a different type.
    #[inline]
    pub fn payload_as<T: Any>(&self) -> Option<&T> {
        self.payload.as_ref().and_then(|p| p.downcast_ref::<T>())
    }

    /// True if a payload was attached.
    #[inline]
    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("seq", &self.seq)
            .field("at", &self.at)
            .field("name", &self.name)
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}
