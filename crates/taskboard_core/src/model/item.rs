//! Work item domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered by the active/finished lists.
//! - Define the closed status enumeration used by the store and drop targets.
//!
//! # Invariants
//! - `id` is generated once and never reused for another item.
//! - `status` is always one of `Active` / `Finished`; there is no transient
//!   or empty state.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for one work item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Board column an item currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Work still in flight. Every item starts here.
    Active,
    /// Work completed.
    Finished,
}

impl ItemStatus {
    /// All statuses in board display order.
    pub const ALL: [ItemStatus; 2] = [ItemStatus::Active, ItemStatus::Finished];

    /// Lowercase wire name, also used as the list type prefix in element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl Display for UnknownStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown item status `{}`; expected active|finished", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for ItemStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Canonical work item record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Stable id, also the drag payload value.
    pub id: ItemId,
    pub title: String,
    pub description: String,
    /// Number of people assigned.
    pub people_count: u32,
    pub status: ItemStatus,
}

impl WorkItem {
    /// Creates a new active item with a generated stable ID.
    ///
    /// Field values are taken as-is; bound checks belong to
    /// [`crate::validation`] and run before this is reached.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, people_count)
    }

    /// Creates a new active item with a caller-provided ID.
    ///
    /// Used by tests and hosts that restore identity from elsewhere.
    pub fn with_id(
        id: ItemId,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people_count,
            status: ItemStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemStatus, WorkItem};

    #[test]
    fn new_item_starts_active() {
        let item = WorkItem::new("Ship", "Release notes", 2);
        assert_eq!(item.status, ItemStatus::Active);
        assert!(!item.id.is_nil());
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(" Finished ".parse::<ItemStatus>(), Ok(ItemStatus::Finished));
        let err = "paused".parse::<ItemStatus>().unwrap_err();
        assert!(err.to_string().contains("paused"));
    }
}
