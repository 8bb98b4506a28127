//! # Demo: ambient
//!
//! Self-registering handlers on the process-wide router.
//!
//! Shows how to:
//! - Attach handlers to the singleton bus via the [`Attach`] sugar.
//! - Mix a custom handler with the built-in [`LogWriter`].
//! - Publish from anywhere with [`router()`].
//!
//! ## Run
//! Requires the `logging` feature to export [`LogWriter`].
//! ```bash
//! cargo run --example ambient --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use herald::{Attach, Event, HandlerError, HandlerFn, HandlerRef, LogWriter, router};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let log: HandlerRef = Arc::new(LogWriter);
    let greeter: HandlerRef = HandlerFn::arc("greeter", |ev: Event| async move {
        if let Some(name) = ev.payload_as::<&str>() {
            println!("[greeter] welcome, {name}!");
        }
        Ok::<_, HandlerError>(())
    });

    // No bus reference in sight: handlers register themselves.
    log.attach("login");
    greeter.attach("login");

    router().publish("login", "alice").await;
    router().publish("login", "bob").await;

    greeter.detach("login");
    router().publish("login", "carol").await; // only the log writer now

    // The router dispatches on background tasks; give them a beat.
    tokio::time::sleep(Duration::from_millis(50)).await;
    Ok(())
}
