//! Listener registry and scoped subscription handles.
//!
//! # Invariants
//! - Listeners are kept in registration order; removal never reorders the
//!   remaining entries.
//! - A `Subscription` removes exactly its own listener, at most once.
//! - Dropping a handle after its store is gone is a no-op.

use crate::store::snapshot::BoardSnapshot;
use log::debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Callback invoked with every post-mutation snapshot.
pub type Listener = Arc<dyn Fn(&BoardSnapshot) + Send + Sync>;

/// Listener key, unique inside one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListenerId(u64);

#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl ListenerRegistry {
    fn insert(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        before != self.entries.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Clones listener handles out so callers can invoke them unlocked.
    pub(crate) fn ordered(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }
}

/// Shared registry handle owned by the store.
pub(crate) type SharedRegistry = Arc<Mutex<ListenerRegistry>>;

// Listeners never run under this lock, so poisoning only means a panic
// happened between two plain Vec operations; the data is still consistent.
pub(crate) fn lock(registry: &Mutex<ListenerRegistry>) -> MutexGuard<'_, ListenerRegistry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn register(registry: &SharedRegistry, listener: Listener) -> Subscription {
    let id = lock(registry).insert(listener);
    debug!("event=listener_subscribe module=store status=ok listener_id={}", id.0);
    Subscription {
        id,
        registry: Arc::downgrade(registry),
        active: true,
    }
}

/// Registration handle returned by `BoardStore::subscribe`.
///
/// Dropping the handle unregisters the listener. Call [`Subscription::detach`]
/// to keep the listener for the rest of the store's lifetime instead.
#[must_use = "dropping a Subscription immediately unregisters its listener"]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<Mutex<ListenerRegistry>>,
    active: bool,
}

impl Subscription {
    /// Unregisters the listener now.
    pub fn unsubscribe(self) {}

    /// Leaves the listener registered until the store is dropped.
    pub fn detach(mut self) {
        self.active = false;
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if lock(&registry).remove(self.id) {
            debug!(
                "event=listener_unsubscribe module=store status=ok listener_id={}",
                self.id.0
            );
        }
    }
}
