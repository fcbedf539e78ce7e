//! View-model side of the board.
//!
//! # Responsibility
//! - Project store snapshots into the two status columns.
//! - Turn raw form text into validated `create` calls.
//!
//! # Invariants
//! - Nothing here mutates items except through `BoardStore` operations.
//! - No host/DOM types appear in this module; hosts render from these models.

pub mod item_card;
pub mod item_form;
pub mod status_list;

use crate::model::item::ItemStatus;
use crate::store::board_store::BoardStore;
use status_list::StatusList;

/// Both status columns wired to one store.
#[derive(Debug)]
pub struct Board {
    pub active: StatusList,
    pub finished: StatusList,
}

impl Board {
    pub fn attach(store: &BoardStore) -> Self {
        Self {
            active: StatusList::attach(store, ItemStatus::Active),
            finished: StatusList::attach(store, ItemStatus::Finished),
        }
    }

    /// Column for `status`.
    pub fn list_mut(&mut self, status: ItemStatus) -> &mut StatusList {
        match status {
            ItemStatus::Active => &mut self.active,
            ItemStatus::Finished => &mut self.finished,
        }
    }
}
