//! Drag-and-drop status transition protocol.
//!
//! # Responsibility
//! - Turn one pointer drag gesture into at most one `change_status` call.
//! - Drive target affordance without touching the store before the drop.
//!
//! # See also
//! - `store::board_store` for the idempotence that absorbs same-list drops.

pub mod gesture;
pub mod payload;
pub mod source;
pub mod target;
pub mod transfer;
