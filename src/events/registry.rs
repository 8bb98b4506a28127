//! # Handler registry: identity-keyed storage, no dispatch logic.
//!
//! [`Registry`] maps event names to [`HandlerSet`]s. A handler set is an
//! ordered collection of handlers, unique by reference identity
//! (`Arc::ptr_eq`), insertion order preserved.
//!
//! The registry is a plain data structure owned exclusively by the
//! [`Bus`](crate::Bus), which guards it with a mutex. Nothing here locks,
//! spawns, or invokes handlers.
//!
//! ## Rules
//! - An entry is created on first `ensure` for a name.
//! - Removing the last handler from a set does **not** delete the entry;
//!   an empty set stays addressable for future subscriptions.
//! - Only `remove` (the `off` path) deletes an entry wholesale.

use std::collections::HashMap;
use std::sync::Arc;

use crate::handlers::HandlerRef;

/// Ordered collection of handlers, unique by reference identity.
///
/// Two `Arc`s wrapping structurally identical closures are distinct members;
/// the same `Arc` inserted twice is one member.
#[derive(Default)]
pub struct HandlerSet {
    handlers: Vec<HandlerRef>,
}

impl HandlerSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` unless an identical reference is already present.
    ///
    /// Returns `true` if the handler was inserted, `false` on the silent
    /// duplicate no-op.
    pub fn insert(&mut self, handler: HandlerRef) -> bool {
        if self.contains(&handler) {
            return false;
        }
        self.handlers.push(handler);
        true
    }

    /// Removes the matching reference, keeping the order of the rest.
    ///
    /// Returns `false` when the handler was not a member.
    pub fn remove(&mut self, handler: &HandlerRef) -> bool {
        match self.handlers.iter().position(|h| Arc::ptr_eq(h, handler)) {
            Some(i) => {
                self.handlers.remove(i);
                true
            }
            None => false,
        }
    }

    /// True if an identical reference is a member.
    pub fn contains(&self, handler: &HandlerRef) -> bool {
        self.handlers.iter().any(|h| Arc::ptr_eq(h, handler))
    }

    /// True if there are no members.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Clones the members in insertion order.
    ///
    /// Publish captures this before dispatching so that subscriptions and
    /// removals racing with an in-flight publish cannot affect it.
    pub fn snapshot(&self) -> Vec<HandlerRef> {
        self.handlers.clone()
    }
}

/// Mapping from event name to its handler set.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<String, HandlerSet>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set for `name`, creating an empty one if absent.
    pub fn ensure(&mut self, name: &str) -> &mut HandlerSet {
        self.entries.entry(name.to_owned()).or_insert_with(HandlerSet::new)
    }

    /// Read-only lookup; does not create.
    pub fn get(&self, name: &str) -> Option<&HandlerSet> {
        self.entries.get(name)
    }

    /// Mutable lookup; does not create.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut HandlerSet> {
        self.entries.get_mut(name)
    }

    /// Deletes the entry entirely, regardless of contents.
    ///
    /// Idempotent: returns `false` when the entry was absent.
    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Returns the sorted list of known event names.
    ///
    /// Includes names whose set became empty through unsubscription; only
    /// `remove` forgets a name.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}
