//! Observable work item store.
//!
//! # Responsibility
//! - Hold the single authoritative, insertion-ordered item collection.
//! - Apply `create` / `change_status` mutations and notify listeners after
//!   every successful one.
//!
//! # Invariants
//! - Items are never reordered or removed.
//! - Every successful mutation notifies every registered listener exactly
//!   once, synchronously, in registration order, with one shared snapshot.
//! - Unknown ids and same-status moves are silent no-ops: no error, no
//!   notification.
//! - Mutations take `&mut self`; listeners cannot re-enter the store.

use crate::model::item::{ItemId, ItemStatus, WorkItem};
use crate::store::snapshot::BoardSnapshot;
use crate::store::subscription::{self, Listener, SharedRegistry, Subscription};
use crate::validation::ValidatedInput;
use log::{debug, trace};
use std::sync::{Arc, Mutex};

/// Store handle for hosts that mutate from more than one thread.
///
/// The single lock serializes mutate-then-notify rounds.
pub type SharedBoardStore = Arc<Mutex<BoardStore>>;

/// Outcome of [`BoardStore::change_status`].
///
/// Neither no-op variant is an error; they exist so callers can tell the
/// branches apart without counting notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// Status updated and listeners notified.
    Applied { previous: ItemStatus },
    /// No item with that id; nothing happened.
    UnknownItem,
    /// Item already had the requested status; nothing happened.
    Unchanged,
}

impl StatusChange {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Authoritative holder of all work items for one board.
#[derive(Default)]
pub struct BoardStore {
    items: Vec<WorkItem>,
    listeners: SharedRegistry,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the store for multi-threaded hosts.
    pub fn into_shared(self) -> SharedBoardStore {
        Arc::new(Mutex::new(self))
    }

    /// Appends a new active item and notifies listeners.
    ///
    /// Inputs are taken as pre-validated; see
    /// [`crate::validation::validate_item_input`].
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> ItemId {
        let item = WorkItem::new(title, description, people_count);
        let id = item.id;
        self.items.push(item);
        debug!(
            "event=item_create module=store status=ok item_id={} item_count={}",
            id,
            self.items.len()
        );
        self.notify();
        id
    }

    /// Same as [`BoardStore::create`] for input that went through validation.
    pub fn create_validated(&mut self, input: ValidatedInput) -> ItemId {
        self.create(input.title, input.description, input.people_count)
    }

    /// Moves one item to `new_status`.
    ///
    /// A stale id or an item that already has `new_status` leaves the store
    /// untouched and notifies nobody.
    pub fn change_status(&mut self, id: ItemId, new_status: ItemStatus) -> StatusChange {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("event=item_move module=store status=noop reason=unknown_item item_id={id}");
            return StatusChange::UnknownItem;
        };
        if item.status == new_status {
            debug!(
                "event=item_move module=store status=noop reason=unchanged item_id={id} status={new_status}"
            );
            return StatusChange::Unchanged;
        }

        let previous = item.status;
        item.status = new_status;
        debug!(
            "event=item_move module=store status=ok item_id={id} from={previous} to={new_status}"
        );
        self.notify();
        StatusChange::Applied { previous }
    }

    /// Registers `listener` for every future successful mutation.
    ///
    /// The listener is not called for the current state; use
    /// [`BoardStore::subscribe_with_replay`] for that.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&BoardSnapshot) + Send + Sync + 'static,
    {
        subscription::register(&self.listeners, Arc::new(listener))
    }

    /// Registers `listener` and immediately invokes it once with the current
    /// snapshot, so late-built views start in sync.
    pub fn subscribe_with_replay<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&BoardSnapshot) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let handle = subscription::register(&self.listeners, Arc::clone(&listener));
        listener(&self.snapshot());
        handle
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.items)
    }

    pub fn get(&self, id: ItemId) -> Option<&WorkItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        subscription::lock(&self.listeners).len()
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        // Why: listeners run unlocked so one may drop its own (or another)
        // subscription; a listener removed mid-round still sees this round.
        let listeners = subscription::lock(&self.listeners).ordered();
        trace!(
            "event=store_notify module=store status=ok listener_count={} item_count={}",
            listeners.len(),
            snapshot.len()
        );
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl std::fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardStore")
            .field("items", &self.items)
            .field("listener_count", &self.listener_count())
            .finish()
    }
}
