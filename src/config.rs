//! # Bus configuration.
//!
//! Provides [`Config`], the settings applied at [`Bus`](crate::Bus)
//! construction.
//!
//! ## Example
//! ```rust
//! use herald::{Bus, Config, DispatchPolicy};
//!
//! let bus = Bus::with_config(Config {
//!     dispatch: DispatchPolicy::Inline,
//! });
//! # let _ = bus;
//! ```

use crate::policies::DispatchPolicy;

/// Configuration for a [`Bus`](crate::Bus).
///
/// All fields are public for flexibility.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// How `publish` hands events to handlers.
    ///
    /// See [`DispatchPolicy`] for the trade-offs. Can not be changed after
    /// the bus is constructed.
    pub dispatch: DispatchPolicy,
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `dispatch = DispatchPolicy::Deferred` (publisher never blocks on
    ///   handler execution)
    fn default() -> Self {
        Self {
            dispatch: DispatchPolicy::default(),
        }
    }
}
