//! Drop target side of the move protocol.
//!
//! # Invariants
//! - A target never mutates the store before a drop.
//! - A drop calls `change_status` at most once, always with the target's own
//!   status. Same-list drops are absorbed by the store, not special-cased here.

use crate::dnd::payload::{DragPayload, PayloadError};
use crate::dnd::transfer::DataTransfer;
use crate::model::item::{ItemId, ItemStatus};
use crate::store::board_store::{BoardStore, StatusChange};
use log::debug;

/// Answer to a drag-over event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOverResponse {
    /// Suppress the host's default "no drop" and show the affordance.
    Accept,
    /// Leave the host default in place.
    Reject,
}

impl DragOverResponse {
    pub fn is_accept(self) -> bool {
        self == Self::Accept
    }
}

/// Result of handling one drop event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Payload decoded and forwarded to the store.
    Delivered {
        item_id: ItemId,
        target_status: ItemStatus,
        change: StatusChange,
    },
    /// Payload was not a work item move; store untouched.
    Ignored(PayloadError),
}

/// Contract for a region that accepts dragged items.
pub trait DragTarget {
    /// Status proposed for every item dropped here.
    fn target_status(&self) -> ItemStatus;
    fn handle_drag_over(&mut self, transfer: &DataTransfer) -> DragOverResponse;
    fn handle_drag_leave(&mut self);
    fn handle_drop(&mut self, store: &mut BoardStore, transfer: &DataTransfer) -> DropOutcome;
}

/// Drop zone bound to one board list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDropTarget {
    status: ItemStatus,
    highlighted: bool,
}

impl StatusDropTarget {
    pub fn new(status: ItemStatus) -> Self {
        Self {
            status,
            highlighted: false,
        }
    }

    /// Whether the "droppable" affordance is currently shown.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

impl DragTarget for StatusDropTarget {
    fn target_status(&self) -> ItemStatus {
        self.status
    }

    fn handle_drag_over(&mut self, transfer: &DataTransfer) -> DragOverResponse {
        if DragPayload::is_declared(transfer) {
            self.highlighted = true;
            DragOverResponse::Accept
        } else {
            DragOverResponse::Reject
        }
    }

    fn handle_drag_leave(&mut self) {
        self.highlighted = false;
    }

    fn handle_drop(&mut self, store: &mut BoardStore, transfer: &DataTransfer) -> DropOutcome {
        self.highlighted = false;
        let payload = match DragPayload::decode(transfer) {
            Ok(payload) => payload,
            Err(err) => {
                debug!(
                    "event=drop module=dnd status=noop target={} reason={}",
                    self.status,
                    err.code()
                );
                return DropOutcome::Ignored(err);
            }
        };

        let change = store.change_status(payload.item_id, self.status);
        debug!(
            "event=drop module=dnd status=ok kind={} target={} item_id={} applied={}",
            payload.kind.as_str(),
            self.status,
            payload.item_id,
            change.is_applied()
        );
        DropOutcome::Delivered {
            item_id: payload.item_id,
            target_status: self.status,
            change,
        }
    }
}
