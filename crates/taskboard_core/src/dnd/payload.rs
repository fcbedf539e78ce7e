//! Tagged drag payload and its `text/plain` wire encoding.
//!
//! # Invariants
//! - The wire form is exactly one `text/plain` entry whose value is the item
//!   id string.
//! - A transfer is eligible only when its first declared type is
//!   `text/plain`; foreign drags (files, links, selected text from elsewhere)
//!   that lead with another type are never accepted.
//! - Decoding validates at the boundary; nothing downstream re-inspects MIME
//!   types.

use crate::dnd::transfer::{DataTransfer, DropEffect, MIME_TEXT_PLAIN};
use crate::model::item::ItemId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Payload discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// Move one work item to the drop target's status.
    WorkItemMove,
}

impl PayloadKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WorkItemMove => "work-item-move",
        }
    }
}

/// Decoded drag payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub kind: PayloadKind,
    pub item_id: ItemId,
}

impl DragPayload {
    pub fn work_item_move(item_id: ItemId) -> Self {
        Self {
            kind: PayloadKind::WorkItemMove,
            item_id,
        }
    }

    /// Writes the payload into `transfer` and allows the move effect.
    pub fn encode(&self, transfer: &mut DataTransfer) {
        transfer.set_data(MIME_TEXT_PLAIN, self.item_id.to_string());
        transfer.set_effect_allowed(DropEffect::Move);
    }

    /// Returns whether `transfer` declares the payload type.
    ///
    /// This only inspects declared types, as hosts hide drag data until drop.
    pub fn is_declared(transfer: &DataTransfer) -> bool {
        transfer.types().next() == Some(MIME_TEXT_PLAIN)
    }

    /// Decodes the payload from a dropped transfer.
    ///
    /// # Errors
    /// - `UnsupportedType` when the transfer does not lead with `text/plain`.
    /// - `MissingData` when the entry is blank.
    /// - `MalformedItemId` when the value is not an item id.
    pub fn decode(transfer: &DataTransfer) -> Result<Self, PayloadError> {
        if !Self::is_declared(transfer) {
            let declared = transfer.types().next().unwrap_or("").to_string();
            return Err(PayloadError::UnsupportedType(declared));
        }
        let raw = transfer
            .get_data(MIME_TEXT_PLAIN)
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or(PayloadError::MissingData)?;
        let item_id =
            Uuid::parse_str(raw).map_err(|_| PayloadError::MalformedItemId(raw.to_string()))?;
        Ok(Self::work_item_move(item_id))
    }
}

/// Boundary decoding failures; the protocol maps all of them to "ignore".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    UnsupportedType(String),
    MissingData,
    MalformedItemId(String),
}

impl PayloadError {
    /// Stable short code for log lines; never includes payload text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedType(_) => "unsupported_type",
            Self::MissingData => "missing_data",
            Self::MalformedItemId(_) => "malformed_item_id",
        }
    }
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedType(mime) => {
                write!(f, "unsupported drag payload type `{mime}`; expected {MIME_TEXT_PLAIN}")
            }
            Self::MissingData => write!(f, "drag payload is empty"),
            Self::MalformedItemId(raw) => write!(f, "drag payload is not an item id: `{raw}`"),
        }
    }
}

impl Error for PayloadError {}
