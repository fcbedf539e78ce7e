//! One board column: a store projection filtered to a single status.
//!
//! # Invariants
//! - The list only holds items whose status equals its own.
//! - Every store notification replaces the held items wholesale (no diffing).
//! - The list is in sync from construction on; it subscribes with replay.

use crate::board::item_card::ItemCard;
use crate::dnd::target::{DragOverResponse, DragTarget, DropOutcome, StatusDropTarget};
use crate::dnd::transfer::DataTransfer;
use crate::model::item::{ItemStatus, WorkItem};
use crate::store::board_store::BoardStore;
use crate::store::subscription::Subscription;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Default)]
struct ListState {
    items: Mutex<Vec<WorkItem>>,
    renders: AtomicUsize,
}

/// Projection of the store onto one status column.
///
/// Also acts as that column's drop target. Dropping the list unsubscribes it.
pub struct StatusList {
    status: ItemStatus,
    state: Arc<ListState>,
    target: StatusDropTarget,
    _subscription: Subscription,
}

impl StatusList {
    /// Builds the list and subscribes it to `store`.
    pub fn attach(store: &BoardStore, status: ItemStatus) -> Self {
        let state = Arc::new(ListState::default());
        let listener_state = Arc::clone(&state);
        let subscription = store.subscribe_with_replay(move |snapshot| {
            let assigned: Vec<WorkItem> = snapshot.with_status(status).cloned().collect();
            *listener_state
                .items
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = assigned;
            listener_state.renders.fetch_add(1, Ordering::SeqCst);
        });

        Self {
            status,
            state,
            target: StatusDropTarget::new(status),
            _subscription: subscription,
        }
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    /// Column heading, e.g. `"ACTIVE PROJECTS"`.
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_ascii_uppercase())
    }

    /// Host element id of the list body, e.g. `"active-projects-list"`.
    pub fn list_element_id(&self) -> String {
        format!("{}-projects-list", self.status.as_str())
    }

    /// Items currently shown, in store order.
    pub fn items(&self) -> Vec<WorkItem> {
        self.state
            .items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn cards(&self) -> Vec<ItemCard> {
        self.items().iter().map(ItemCard::from).collect()
    }

    /// Number of re-renders so far, counting the initial replay.
    pub fn render_count(&self) -> usize {
        self.state.renders.load(Ordering::SeqCst)
    }

    /// Whether the drop affordance is showing.
    pub fn is_highlighted(&self) -> bool {
        self.target.is_highlighted()
    }
}

impl DragTarget for StatusList {
    fn target_status(&self) -> ItemStatus {
        self.target.target_status()
    }

    fn handle_drag_over(&mut self, transfer: &DataTransfer) -> DragOverResponse {
        self.target.handle_drag_over(transfer)
    }

    fn handle_drag_leave(&mut self) {
        self.target.handle_drag_leave();
    }

    fn handle_drop(&mut self, store: &mut BoardStore, transfer: &DataTransfer) -> DropOutcome {
        self.target.handle_drop(store, transfer)
    }
}

impl std::fmt::Debug for StatusList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusList")
            .field("status", &self.status)
            .field("render_count", &self.render_count())
            .field("highlighted", &self.target.is_highlighted())
            .finish()
    }
}
