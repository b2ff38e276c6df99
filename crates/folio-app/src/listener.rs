// Rust guideline compliant 2026-10-17

//! Scoped event listener registrations.
//!
//! Subscribing hands back a guard; the registration is removed when the
//! guard drops, whichever way its owner is torn down.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A resource an overlay or view can hold while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Binding {
    /// Scroll events on the image strip.
    Scroll,
    /// Non-passive touch-move handling, needed to suppress browser navigation.
    TouchMove,
    /// Window resize events.
    Resize,
    /// A class set on the document body for as long as the guard lives.
    BodyClass(&'static str),
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    active: BTreeMap<u64, Binding>,
}

/// Tracks live bindings.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a binding and returns the guard that owns it.
    #[must_use = "dropping the guard removes the binding immediately"]
    pub fn acquire(&self, binding: Binding) -> ListenerGuard {
        let mut registry = self.lock();
        registry.next_id += 1;
        let id = registry.next_id;
        registry.active.insert(id, binding);
        ListenerGuard {
            id,
            binding,
            registry: Arc::clone(&self.inner),
        }
    }

    /// Returns how many registrations of `binding` are live.
    #[must_use]
    pub fn count(&self, binding: Binding) -> usize {
        self.lock().active.values().filter(|b| **b == binding).count()
    }

    /// Returns the total number of live registrations.
    #[must_use]
    pub fn active(&self) -> usize {
        self.lock().active.len()
    }
}

/// Owns one registration.
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    binding: Binding,
    registry: Arc<Mutex<Registry>>,
}

impl ListenerGuard {
    /// Returns the binding this guard holds.
    #[must_use]
    pub fn binding(&self) -> Binding {
        self.binding
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        registry.active.remove(&self.id);
    }
}
