//! # Simple logging handler for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//!
//! ## Output format
//! ```text
//! [event] seq=12 name=click payload=yes
//! [event] seq=13 name=tick payload=no
//! ```
//!
//! ## Example
//! ```no_run
//! # use herald::{Bus, LogWriter};
//! # use std::sync::Arc;
//! let bus = Bus::new();
//! bus.subscribe("click", Arc::new(LogWriter));
//! // every "click" is now printed to stdout
//! ```

use async_trait::async_trait;

use crate::error::HandlerError;
use crate::events::Event;
use crate::handlers::Handle;

/// Simple stdout logging handler.
///
/// Enabled via the `logging` feature. Not intended for production use -
/// implement a custom [`Handle`] for structured logging or metrics.
pub struct LogWriter;

#[async_trait]
impl Handle for LogWriter {
    async fn on_event(&self, e: &Event) -> Result<(), HandlerError> {
        println!(
            "[event] seq={} name={} payload={}",
            e.seq,
            e.name,
            if e.has_payload() { "yes" } else { "no" }
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}
