//! # herald
//!
//! **Herald** is a minimal in-process publish/subscribe event bus for Rust.
//!
//! It maps string-named events to ordered sets of handler callbacks, with
//! at-most-once registration per (event, handler) pair and best-effort
//! fan-out. The crate is designed as a building block: no wire protocol, no
//! persistence, no pattern matching on names.
//!
//! ## Architecture
//! ```text
//!     subscribe(name, handler)        publish(name, payload)
//!              │                               │
//!              ▼                               ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Bus                                                      │
//! │  - Mutex<Registry> (name ──► ordered, identity-unique     │
//! │                     HandlerSet)                           │
//! │  - Config { dispatch: Deferred | Inline }                 │
//! └──────────────┬────────────────────────────────────────────┘
//!                │ snapshot of the handler set, insertion order
//!                ▼
//!       ┌──────────────────┐     Deferred: on a spawned dispatcher task
//!       │  dispatch run    │     Inline:   awaited inside publish
//!       └──────────────────┘
//!          │        │        │
//!          ▼        ▼        ▼
//!       h1.on_event  h2.on_event  ...   (per-handler panic/Err isolation)
//! ```
//!
//! ## Contract
//! - `subscribe(name, handler)` appends once per handler identity
//!   (`Arc::ptr_eq`); re-subscribing the same reference is a silent no-op.
//! - `unsubscribe(name, &handler)` removes the matching identity; unknown
//!   targets are silent no-ops.
//! - `publish(name, payload)` returns `false` when nobody listens;
//!   otherwise all handlers captured at that moment run exactly once, in
//!   subscription order, with the same [`Event`].
//! - `off(name)` drops the whole entry and reports whether it existed.
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits             |
//! |-------------------|--------------------------------------------------------------|--------------------------------|
//! | **Handler API**   | React to named events (logging, metrics, custom handlers).   | [`Handle`], [`HandlerFn`]      |
//! | **Dispatch**      | Choose deferred or inline fan-out.                           | [`DispatchPolicy`], [`Config`] |
//! | **Errors**        | Typed, isolated handler failures.                            | [`HandlerError`]               |
//! | **Ambient router**| Process-wide bus with self-registration sugar.               | [`router()`], [`Attach`]       |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use herald::{Bus, Event, HandlerError, HandlerFn, HandlerRef};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let bus = Bus::new();
//!
//!     let audit: HandlerRef = HandlerFn::arc("audit", |ev: Event| async move {
//!         if let Some(clicks) = ev.payload_as::<u32>() {
//!             println!("{} -> {clicks}", ev.name);
//!         }
//!         Ok::<_, HandlerError>(())
//!     });
//!
//!     bus.subscribe("click", HandlerRef::clone(&audit));
//!     assert!(bus.publish("click", 42u32).await);
//!     assert!(!bus.publish("resize", 0u32).await);
//!
//!     bus.unsubscribe("click", &audit);
//!     assert!(!bus.publish("click", 43u32).await);
//! }
//! ```

mod config;
mod error;
mod events;
mod handlers;
mod policies;
mod router;

// ---- Public re-exports ----

pub use config::Config;
pub use error::HandlerError;
pub use events::{Bus, Event};
pub use handlers::{Handle, HandlerFn, HandlerRef};
pub use policies::DispatchPolicy;
pub use router::{Attach, router};

// Optional: expose a simple built-in logging handler (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use handlers::LogWriter;
