//! Per-gesture drag state machine.
//!
//! # Responsibility
//! - Sequence drag-start, drag-over, drag-leave, drop and drag-end for one
//!   pointer gesture, driving the source and target contracts.
//!
//! # Invariants
//! - Each gesture owns its own `DataTransfer`; overlapping gestures share
//!   nothing.
//! - The store is only touched by a drop on a target whose last drag-over
//!   was accepted; the host never delivers a drop to a target that rejected
//!   the drag.
//! - `Dropped` and `Cancelled` are terminal; later events are ignored.

use crate::dnd::source::Draggable;
use crate::dnd::target::{DragOverResponse, DragTarget, DropOutcome};
use crate::dnd::transfer::DataTransfer;
use crate::model::item::{ItemId, ItemStatus};
use crate::store::board_store::{BoardStore, StatusChange};
use log::trace;

/// Observable state of one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging {
        source: ItemId,
    },
    Hovering {
        source: ItemId,
        target: ItemStatus,
        eligible: bool,
    },
    Dropped {
        source: ItemId,
        target: ItemStatus,
        change: StatusChange,
    },
    Cancelled {
        source: Option<ItemId>,
    },
}

impl GestureState {
    /// Short state name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging { .. } => "dragging",
            Self::Hovering { eligible: true, .. } => "hovering_eligible",
            Self::Hovering { eligible: false, .. } => "hovering_ineligible",
            Self::Dropped { .. } => "dropped",
            Self::Cancelled { .. } => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Dropped { .. } | Self::Cancelled { .. })
    }

    fn source(&self) -> Option<ItemId> {
        match self {
            Self::Idle => None,
            Self::Dragging { source }
            | Self::Hovering { source, .. }
            | Self::Dropped { source, .. } => Some(*source),
            Self::Cancelled { source } => *source,
        }
    }
}

/// One drag gesture from pick-up to release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragGesture {
    transfer: DataTransfer,
    state: GestureState,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self {
            transfer: DataTransfer::new(),
            state: GestureState::Idle,
        }
    }
}

impl DragGesture {
    /// Starts a gesture on `source`, which writes its payload.
    pub fn begin(source: &impl Draggable) -> Self {
        let mut gesture = Self::default();
        source.handle_drag_start(&mut gesture.transfer);
        gesture.state = GestureState::Dragging {
            source: source.item_id(),
        };
        gesture
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Payload carried by this gesture.
    pub fn transfer(&self) -> &DataTransfer {
        &self.transfer
    }

    /// Pointer moved over `target`.
    pub fn drag_over(&mut self, target: &mut impl DragTarget) -> DragOverResponse {
        let Some(source) = self.live_source("drag_over") else {
            return DragOverResponse::Reject;
        };
        let response = target.handle_drag_over(&self.transfer);
        self.state = GestureState::Hovering {
            source,
            target: target.target_status(),
            eligible: response.is_accept(),
        };
        response
    }

    /// Pointer left `target` without releasing.
    pub fn drag_leave(&mut self, target: &mut impl DragTarget) {
        let Some(source) = self.live_source("drag_leave") else {
            return;
        };
        target.handle_drag_leave();
        self.state = GestureState::Dragging { source };
    }

    /// Pointer released over `target`.
    ///
    /// Returns `None` when the host would not deliver a drop event here
    /// (target not hovered, or it rejected the drag); the gesture is then
    /// cancelled.
    pub fn drop_on(
        &mut self,
        target: &mut impl DragTarget,
        store: &mut BoardStore,
    ) -> Option<DropOutcome> {
        let source = self.live_source("drop")?;
        let accepted = matches!(
            self.state,
            GestureState::Hovering { target: hovered, eligible: true, .. }
                if hovered == target.target_status()
        );
        if !accepted {
            target.handle_drag_leave();
            self.state = GestureState::Cancelled {
                source: Some(source),
            };
            return None;
        }

        let outcome = target.handle_drop(store, &self.transfer);
        self.state = match &outcome {
            DropOutcome::Delivered {
                target_status,
                change,
                ..
            } => GestureState::Dropped {
                source,
                target: *target_status,
                change: *change,
            },
            DropOutcome::Ignored(_) => GestureState::Cancelled {
                source: Some(source),
            },
        };
        Some(outcome)
    }

    /// Gesture finished; reports the final state to `source`.
    ///
    /// Anything short of a delivered drop becomes `Cancelled`.
    pub fn end(&mut self, source: &impl Draggable) -> &GestureState {
        if !self.state.is_terminal() {
            self.state = GestureState::Cancelled {
                source: self.state.source(),
            };
        }
        source.handle_drag_end(&self.state);
        &self.state
    }

    fn live_source(&self, event: &str) -> Option<ItemId> {
        if self.state.is_terminal() {
            trace!(
                "event=gesture_ignored module=dnd status=noop trigger={event} state={}",
                self.state.name()
            );
            return None;
        }
        self.state.source()
    }
}
