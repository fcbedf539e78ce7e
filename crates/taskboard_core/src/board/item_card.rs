//! Render model for one item inside a status list.

use crate::dnd::source::ItemDragSource;
use crate::model::item::{ItemId, WorkItem};

/// Display fields of one rendered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub people_count: u32,
}

impl ItemCard {
    /// `"1 person"` or `"<n> persons"`.
    pub fn persons_label(&self) -> String {
        if self.people_count == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people_count)
        }
    }

    /// Subheading text, e.g. `"3 persons assigned"`.
    pub fn assigned_label(&self) -> String {
        format!("{} assigned", self.persons_label())
    }

    pub fn drag_source(&self) -> ItemDragSource {
        ItemDragSource::new(self.id)
    }
}

impl From<&WorkItem> for ItemCard {
    fn from(item: &WorkItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            people_count: item.people_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ItemCard;
    use crate::model::item::WorkItem;

    #[test]
    fn singular_and_plural_labels() {
        let mut card = ItemCard::from(&WorkItem::new("Solo", "One person job", 1));
        assert_eq!(card.assigned_label(), "1 person assigned");

        card.people_count = 4;
        assert_eq!(card.assigned_label(), "4 persons assigned");
    }
}
