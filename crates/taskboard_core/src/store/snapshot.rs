//! Immutable collection snapshots handed to store listeners.

use crate::model::item::{ItemId, ItemStatus, WorkItem};
use serde::{Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;

/// Read-only copy of the store's item collection at one point in time.
///
/// One notification round shares a single allocation between all listeners;
/// there is no way to reach the store's live collection through it. Callers
/// that want to edit a copy use [`BoardSnapshot::to_vec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    items: Arc<[WorkItem]>,
}

impl BoardSnapshot {
    pub(crate) fn capture(items: &[WorkItem]) -> Self {
        Self {
            items: Arc::from(items),
        }
    }

    /// Items in store insertion order.
    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    /// Returns an owned, freely mutable copy of the items.
    pub fn to_vec(&self) -> Vec<WorkItem> {
        self.items.to_vec()
    }

    pub fn get(&self, id: ItemId) -> Option<&WorkItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items with `status`, preserving insertion order.
    pub fn with_status(&self, status: ItemStatus) -> impl Iterator<Item = &WorkItem> + '_ {
        self.items.iter().filter(move |item| item.status == status)
    }

    pub fn count_with_status(&self, status: ItemStatus) -> usize {
        self.with_status(status).count()
    }
}

impl Deref for BoardSnapshot {
    type Target = [WorkItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl Serialize for BoardSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}
