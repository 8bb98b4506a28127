//! # Event bus: the publish/subscribe contract.
//!
//! [`Bus`] wraps one [`Registry`] behind a mutex and exposes the four
//! operations of the contract: `subscribe`, `unsubscribe`, `publish`, `off`.
//!
//! ## Architecture
//! ```text
//!    publish(name, payload)
//!        │  snapshot the handler set under the lock (insertion order)
//!        ▼
//!    ┌─────────────────────────────┐
//!    │ Bus                         │
//!    │  ├─ Mutex<Registry>         │
//!    │  │    name ──► HandlerSet   │
//!    │  └─ Config { dispatch }     │
//!    └───────────┬─────────────────┘
//!                │
//!    Deferred ──►│ spawned dispatcher ──► h1.on_event ─► h2.on_event ─► ...
//!    Inline   ──►│ awaited in place   ──► same order, same isolation
//! ```
//!
//! ## Rules
//! - **Idempotent subscribe**: the same `Arc` subscribed twice to one event
//!   is a single subscription; identity is `Arc::ptr_eq`, never closure text.
//! - **Snapshot dispatch**: `publish` captures the handler set before
//!   invoking anything; handlers added or removed during an in-flight
//!   publish do not affect that dispatch run.
//! - **Per-handler isolation**: an `Err` or panic from one handler is
//!   reported on stderr and never aborts the siblings.
//! - **Permissive no-ops**: unsubscribing a stranger handler, publishing to
//!   an unknown event, and `off` on an absent name are silent no-ops.
//! - **No cancellation**: once a snapshot is captured, scheduled handler
//!   invocations cannot be revoked by a later `unsubscribe`/`off`.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::FutureExt;

use crate::config::Config;
use crate::error::HandlerError;
use crate::handlers::HandlerRef;
use crate::policies::DispatchPolicy;

use super::event::Event;
use super::registry::Registry;

/// In-process publish/subscribe bus over string-named events.
///
/// Starts with an empty registry; entries appear on first subscribe and
/// disappear only through [`Bus::off`]. The bus is `Send + Sync` and is
/// typically shared as-is or behind an `Arc`.
pub struct Bus {
    registry: Mutex<Registry>,
    config: Config,
}

impl Bus {
    /// Creates a bus with the default configuration (deferred dispatch).
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a bus with an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            registry: Mutex::new(Registry::new()),
            config,
        }
    }

    /// Registers `handler` for `name`, preserving subscription order.
    ///
    /// Subscribing an identical `Arc` twice is a silent no-op. Returns the
    /// handler reference for call-site chaining.
    pub fn subscribe(&self, name: &str, handler: HandlerRef) -> HandlerRef {
        self.registry().ensure(name).insert(Arc::clone(&handler));
        handler
    }

    /// Removes `handler` from `name`, if subscribed.
    ///
    /// A stranger handler or unknown event is a silent no-op. The registry
    /// entry survives even when its last handler leaves; only [`Bus::off`]
    /// deletes entries. Returns the handler reference unchanged.
    pub fn unsubscribe(&self, name: &str, handler: &HandlerRef) -> HandlerRef {
        if let Some(set) = self.registry().get_mut(name) {
            set.remove(handler);
        }
        Arc::clone(handler)
    }

    /// Publishes `payload` to every handler currently subscribed to `name`.
    ///
    /// Returns `false` without dispatching when no handlers are subscribed.
    /// Otherwise every snapshotted handler runs exactly once, in
    /// subscription order, with the same [`Event`]; the timing depends on
    /// [`Config::dispatch`].
    pub async fn publish<T>(&self, name: &str, payload: T) -> bool
    where
        T: Any + Send + Sync,
    {
        self.publish_event(Event::new(name).with_payload(payload))
            .await
    }

    /// Publishes a pre-built event, e.g. one without a payload.
    ///
    /// The registry is consulted under `event.name`; see [`Bus::publish`]
    /// for the dispatch contract.
    pub async fn publish_event(&self, event: Event) -> bool {
        let snapshot = {
            let reg = self.registry();
            match reg.get(&event.name) {
                Some(set) if !set.is_empty() => set.snapshot(),
                _ => return false,
            }
        };

        match self.config.dispatch {
            DispatchPolicy::Deferred => {
                tokio::spawn(dispatch(snapshot, event));
            }
            DispatchPolicy::Inline => dispatch(snapshot, event).await,
        }
        true
    }

    /// Drops the whole entry for `name`: every handler, and the name itself.
    ///
    /// Returns `false` when the event was never subscribed (or already
    /// removed). A later subscribe starts the event over from scratch.
    pub fn off(&self, name: &str) -> bool {
        self.registry().remove(name)
    }

    /// Returns the sorted list of known event names.
    pub fn names(&self) -> Vec<String> {
        self.registry().names()
    }

    /// Number of handlers currently subscribed to `name` (0 when unknown).
    pub fn handler_count(&self, name: &str) -> usize {
        self.registry().get(name).map_or(0, |set| set.len())
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // Handlers never run under the lock, so a poisoned registry still
        // holds its invariants.
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one captured dispatch: every handler, in order, failures isolated.
async fn dispatch(handlers: Vec<HandlerRef>, event: Event) {
    for handler in handlers {
        let fut = handler.on_event(&event);
        let result = match AssertUnwindSafe(fut).catch_unwind().await {
            Ok(res) => res,
            Err(panic) => Err(HandlerError::Panicked {
                error: panic_message(panic.as_ref()),
            }),
        };
        if let Err(err) = result {
            eprintln!(
                "[herald] handler '{}' failed on '{}': {}",
                handler.name(),
                event.name,
                err.as_message()
            );
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{Handle, HandlerFn};
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn inline_bus() -> Bus {
        Bus::with_config(Config {
            dispatch: DispatchPolicy::Inline,
        })
    }

    /// Pushes "<label> <event> <payload>" into the shared log.
    fn recorder(label: &'static str, log: Arc<Mutex<Vec<String>>>) -> HandlerRef {
        HandlerFn::arc(label, move |ev: Event| {
            let log = Arc::clone(&log);
            async move {
                let n = ev.payload_as::<u32>().copied().unwrap_or(0);
                log.lock().unwrap().push(format!("{label} {} {n}", ev.name));
                Ok::<_, HandlerError>(())
            }
        })
    }

    /// Sends the event's seq once dispatch reaches this handler.
    fn notifier(tx: mpsc::Sender<u64>) -> HandlerRef {
        HandlerFn::arc("notify", move |ev: Event| {
            let tx = tx.clone();
            async move {
                tx.send(ev.seq).await.ok();
                Ok::<_, HandlerError>(())
            }
        })
    }

    struct Panicky;

    #[async_trait]
    impl Handle for Panicky {
        async fn on_event(&self, _event: &Event) -> Result<(), HandlerError> {
            panic!("kaboom");
        }

        fn name(&self) -> &str {
            "panicky"
        }
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_returns_false() {
        let bus = inline_bus();
        assert!(!bus.publish("missing", 1u32).await);
    }

    #[tokio::test]
    async fn test_dispatch_order_and_arguments() {
        let bus = inline_bus();
        let log = Arc::new(Mutex::new(Vec::new()));
        let a = recorder("a", Arc::clone(&log));
        let b = recorder("b", Arc::clone(&log));
        let c = recorder("c", Arc::clone(&log));

        bus.subscribe("click", Arc::clone(&a));
        bus.subscribe("click", b);
        bus.subscribe("click", a); // duplicate reference, silent no-op
        bus.subscribe("click", c);
        assert_eq!(bus.handler_count("click"), 3);

        assert!(bus.publish("click", 42u32).await);
        assert_eq!(
            log.lock().unwrap().clone(),
            vec!["a click 42", "b click 42", "c click 42"]
        );
    }

    #[tokio::test]
    async fn test_identical_closures_invoked_independently() {
        let bus = inline_bus();
        let log = Arc::new(Mutex::new(Vec::new()));
        bus.subscribe("click", recorder("x", Arc::clone(&log)));
        bus.subscribe("click", recorder("x", Arc::clone(&log)));

        assert!(bus.publish("click", 7u32).await);
        assert_eq!(log.lock().unwrap().clone(), vec!["x click 7", "x click 7"]);
    }

    #[tokio::test]
    async fn test_subscribe_returns_handler_for_chaining() {
        let bus = inline_bus();
        let orig = recorder("a", Arc::new(Mutex::new(Vec::new())));
        let returned = bus.subscribe("click", Arc::clone(&orig));
        assert!(Arc::ptr_eq(&returned, &orig));
    }

    #[tokio::test]
    async fn test_unsubscribe_cycle() {
        let bus = inline_bus();
        let log = Arc::new(Mutex::new(Vec::new()));
        let a = recorder("a", Arc::clone(&log));

        bus.subscribe("move", Arc::clone(&a));
        assert!(bus.publish("move", 1u32).await);

        bus.unsubscribe("move", &a);
        bus.unsubscribe("move", &a); // already gone, no-op
        assert!(!bus.publish("move", 2u32).await);

        // The emptied entry stays addressable; only off() forgets the name.
        assert_eq!(bus.handler_count("move"), 0);
        assert_eq!(bus.names(), vec!["move".to_string()]);
        assert_eq!(log.lock().unwrap().clone(), vec!["a move 1"]);
    }

    #[tokio::test]
    async fn test_unsubscribe_stranger_keeps_others() {
        let bus = inline_bus();
        let log = Arc::new(Mutex::new(Vec::new()));
        let stranger = recorder("stranger", Arc::clone(&log));

        bus.subscribe("click", recorder("a", Arc::clone(&log)));
        bus.unsubscribe("click", &stranger);
        bus.unsubscribe("never-seen", &stranger);

        assert!(bus.publish("click", 3u32).await);
        assert_eq!(log.lock().unwrap().clone(), vec!["a click 3"]);
    }

    #[tokio::test]
    async fn test_off_then_resubscribe() {
        let bus = inline_bus();
        let log = Arc::new(Mutex::new(Vec::new()));
        bus.subscribe("click", recorder("a", Arc::clone(&log)));
        bus.subscribe("click", recorder("b", Arc::clone(&log)));

        assert!(bus.off("click"));
        assert!(!bus.off("click"));
        assert!(!bus.publish("click", 1u32).await);

        // The event starts over as if new.
        bus.subscribe("click", recorder("c", Arc::clone(&log)));
        assert!(bus.publish("click", 2u32).await);
        assert_eq!(log.lock().unwrap().clone(), vec!["c click 2"]);
    }

    #[tokio::test]
    async fn test_failing_handler_does_not_abort_dispatch() {
        let bus = inline_bus();
        let log = Arc::new(Mutex::new(Vec::new()));
        let failing: HandlerRef = HandlerFn::arc("bad", |_ev: Event| async {
            Err::<(), _>(HandlerError::Fail {
                error: "boom".into(),
            })
        });

        bus.subscribe("click", failing);
        bus.subscribe("click", recorder("a", Arc::clone(&log)));

        assert!(bus.publish("click", 9u32).await);
        assert_eq!(log.lock().unwrap().clone(), vec!["a click 9"]);
    }

    #[tokio::test]
    async fn test_panicking_handler_is_isolated() {
        let bus = inline_bus();
        let log = Arc::new(Mutex::new(Vec::new()));

        bus.subscribe("click", Arc::new(Panicky));
        bus.subscribe("click", recorder("a", Arc::clone(&log)));

        assert!(bus.publish("click", 1u32).await);
        assert_eq!(log.lock().unwrap().clone(), vec!["a click 1"]);

        // The bus is not poisoned for later publishes.
        assert!(bus.publish("click", 2u32).await);
        assert_eq!(
            log.lock().unwrap().clone(),
            vec!["a click 1", "a click 2"]
        );
    }

    #[tokio::test]
    async fn test_deferred_publish_returns_before_handlers() {
        let bus = Bus::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let (tx, mut rx) = mpsc::channel(1);

        bus.subscribe("tick", recorder("a", Arc::clone(&log)));
        bus.subscribe("tick", notifier(tx));

        assert!(bus.publish("tick", 5u32).await);
        // Current-thread runtime: the dispatcher task has not been polled yet.
        assert!(log.lock().unwrap().is_empty());

        tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("dispatch timed out")
            .expect("dispatcher dropped the notifier");
        assert_eq!(log.lock().unwrap().clone(), vec!["a tick 5"]);
    }

    #[tokio::test]
    async fn test_deferred_snapshot_excludes_late_subscriber() {
        let bus = Bus::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let (tx, mut rx) = mpsc::channel(1);

        bus.subscribe("tick", recorder("a", Arc::clone(&log)));
        bus.subscribe("tick", notifier(tx));
        assert!(bus.publish("tick", 1u32).await);

        // Subscribed after the snapshot was captured; not part of this run.
        bus.subscribe("tick", recorder("late", Arc::clone(&log)));

        tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("dispatch timed out")
            .expect("dispatcher dropped the notifier");
        assert_eq!(log.lock().unwrap().clone(), vec!["a tick 1"]);
    }

    #[tokio::test]
    async fn test_publish_event_without_payload() {
        let bus = inline_bus();
        let log = Arc::new(Mutex::new(Vec::new()));
        bus.subscribe("tick", recorder("a", Arc::clone(&log)));

        assert!(bus.publish_event(Event::new("tick")).await);
        assert_eq!(log.lock().unwrap().clone(), vec!["a tick 0"]);
    }

    #[tokio::test]
    async fn test_names_track_subscribe_and_off() {
        let bus = inline_bus();
        let log = Arc::new(Mutex::new(Vec::new()));
        bus.subscribe("move", recorder("a", Arc::clone(&log)));
        bus.subscribe("click", recorder("b", Arc::clone(&log)));

        assert_eq!(bus.names(), vec!["click".to_string(), "move".to_string()]);
        bus.off("click");
        assert_eq!(bus.names(), vec!["move".to_string()]);
    }
}
