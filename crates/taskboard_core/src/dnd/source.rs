//! Drag source side of the move protocol.

use crate::dnd::gesture::GestureState;
use crate::dnd::payload::DragPayload;
use crate::dnd::transfer::DataTransfer;
use crate::model::item::{ItemId, WorkItem};
use log::debug;

/// Contract for anything the user can pick up and drag.
pub trait Draggable {
    /// Id carried by the gesture started from this source.
    fn item_id(&self) -> ItemId;
    /// Attaches the payload to a fresh transfer.
    fn handle_drag_start(&self, transfer: &mut DataTransfer);
    /// Observes the final gesture state. Must not mutate the store.
    fn handle_drag_end(&self, state: &GestureState);
}

/// Drag source for one rendered work item card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDragSource {
    item_id: ItemId,
}

impl ItemDragSource {
    pub fn new(item_id: ItemId) -> Self {
        Self { item_id }
    }
}

impl From<&WorkItem> for ItemDragSource {
    fn from(item: &WorkItem) -> Self {
        Self::new(item.id)
    }
}

impl Draggable for ItemDragSource {
    fn item_id(&self) -> ItemId {
        self.item_id
    }

    fn handle_drag_start(&self, transfer: &mut DataTransfer) {
        DragPayload::work_item_move(self.item_id).encode(transfer);
        debug!("event=drag_start module=dnd status=ok item_id={}", self.item_id);
    }

    fn handle_drag_end(&self, state: &GestureState) {
        debug!(
            "event=drag_end module=dnd status=ok item_id={} outcome={}",
            self.item_id,
            state.name()
        );
    }
}
