//! Core state and interaction logic for the task board.
//! This crate is the single source of truth for item state and its
//! propagation to views.

pub mod board;
pub mod dnd;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;

pub use board::item_card::ItemCard;
pub use board::item_form::{InputError, ItemForm, INVALID_INPUT_PROMPT};
pub use board::status_list::StatusList;
pub use board::Board;
pub use dnd::gesture::{DragGesture, GestureState};
pub use dnd::payload::{DragPayload, PayloadError, PayloadKind};
pub use dnd::source::{Draggable, ItemDragSource};
pub use dnd::target::{DragOverResponse, DragTarget, DropOutcome, StatusDropTarget};
pub use dnd::transfer::{DataTransfer, DropEffect, MIME_TEXT_PLAIN};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::item::{ItemId, ItemStatus, UnknownStatus, WorkItem};
pub use store::board_store::{BoardStore, SharedBoardStore, StatusChange};
pub use store::snapshot::BoardSnapshot;
pub use store::subscription::{Listener, Subscription};
pub use validation::{
    validate_item_input, FieldValue, Validatable, ValidatedInput, ValidationBounds,
    ValidationError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
