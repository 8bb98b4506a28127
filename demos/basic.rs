//! # Demo: basic
//!
//! Walks through the whole bus contract on one `Bus` instance.
//!
//! Shows how to:
//! - Build handlers with [`HandlerFn`] and subscribe them.
//! - Observe idempotent subscribe (same reference twice = one invocation).
//! - Unsubscribe a single handler, then drop a whole event with `off`.
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use std::sync::Arc;

use herald::{Bus, Config, DispatchPolicy, Event, HandlerError, HandlerFn, HandlerRef};

fn printer(label: &'static str) -> HandlerRef {
    HandlerFn::arc(label, move |ev: Event| async move {
        let clicks = ev.payload_as::<u32>().copied().unwrap_or(0);
        println!("[{label}] {} -> {clicks}", ev.name);
        Ok::<_, HandlerError>(())
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Inline dispatch so the output below is in publish order.
    let bus = Bus::with_config(Config {
        dispatch: DispatchPolicy::Inline,
    });

    let first = printer("first");
    let second = printer("second");

    bus.subscribe("click", Arc::clone(&first));
    bus.subscribe("click", Arc::clone(&second));
    bus.subscribe("click", Arc::clone(&first)); // same reference: no-op

    println!("-- publish with two handlers");
    bus.publish("click", 1u32).await;

    println!("-- unsubscribe 'second', publish again");
    bus.unsubscribe("click", &second);
    bus.publish("click", 2u32).await;

    println!("-- off('click'), publish is now a miss");
    bus.off("click");
    let delivered = bus.publish("click", 3u32).await;
    println!("delivered: {delivered}");

    println!("-- resubscribe, the event starts over");
    bus.subscribe("click", first);
    bus.publish("click", 4u32).await;

    Ok(())
}
