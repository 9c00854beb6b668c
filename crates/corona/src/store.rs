//! In-memory item store.  The engine never sees these mutations; they
//! arrive as opaque handlers through the action catalog.

use derive_more::{AsRef, Deref, Display, From, Into};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ItemId(String);

tactile::impl_string_newtype!(ItemId);

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub summary: String,
    pub folder: String,
    pub archived: bool,
}

impl Item {
    fn new(id: &str, title: &str, summary: &str) -> Self {
        Self {
            id: ItemId::new(id),
            title: title.to_string(),
            summary: summary.to_string(),
            folder: "inbox".to_string(),
            archived: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            Item::new("note-1", "Weekly sync notes", "Decisions from Monday's sync"),
            Item::new("note-2", "Reading list", "Three papers queued for the weekend"),
            Item::new("note-3", "Trip checklist", "Packing and bookings for Lisbon"),
            Item::new("note-4", "Sketches", "Napkin drawings from the workshop"),
            Item::new("note-5", "Recipe: shakshuka", "From Dana, halve the chili"),
        ])
    }

    /// Items the list renders, archived ones hidden.
    pub fn visible_items(&self) -> Vec<Item> {
        self.items
            .read()
            .iter()
            .filter(|i| !i.archived)
            .cloned()
            .collect()
    }

    pub fn archive(&self, id: &ItemId) -> bool {
        self.with_item(id, |item| item.archived = true)
    }

    pub fn delete(&self, id: &ItemId) -> bool {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|i| &i.id != id);
        let removed = items.len() < before;
        if !removed {
            log::warn!("delete: no item '{}'", id);
        }
        removed
    }

    pub fn move_to(&self, id: &ItemId, folder: &str) -> bool {
        self.with_item(id, |item| item.folder = folder.to_string())
    }

    /// Re-fetch would go to the sync layer; here it only logs.
    pub fn refresh(&self, id: &ItemId) -> bool {
        self.with_item(id, |item| {
            log::info!("refreshing '{}'", item.id);
        })
    }

    fn with_item(&self, id: &ItemId, f: impl FnOnce(&mut Item)) -> bool {
        let mut items = self.items.write();
        match items.iter_mut().find(|i| &i.id == id) {
            Some(item) => {
                f(item);
                true
            }
            None => {
                log::warn!("no item '{}'", id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_hides_from_visible_list() {
        let store = ItemStore::seeded();
        let first = store.visible_items()[0].id.clone();
        assert!(store.archive(&first));
        assert!(store.visible_items().iter().all(|i| i.id != first));
    }

    #[test]
    fn delete_removes_and_reports_missing() {
        let store = ItemStore::seeded();
        let count = store.visible_items().len();
        let first = store.visible_items()[0].id.clone();
        assert!(store.delete(&first));
        assert_eq!(store.visible_items().len(), count - 1);
        assert!(!store.delete(&first));
    }

    #[test]
    fn move_changes_folder() {
        let store = ItemStore::seeded();
        let id = store.visible_items()[1].id.clone();
        assert!(store.move_to(&id, "later"));
        let moved = store
            .visible_items()
            .into_iter()
            .find(|i| i.id == id)
            .unwrap();
        assert_eq!(moved.folder, "later");
    }

    #[test]
    fn mutations_on_unknown_id_are_noops() {
        let store = ItemStore::seeded();
        let ghost = ItemId::new("nope");
        assert!(!store.archive(&ghost));
        assert!(!store.refresh(&ghost));
        assert!(!store.move_to(&ghost, "later"));
    }
}
