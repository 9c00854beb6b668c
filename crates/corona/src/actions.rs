//! Maps configured [`ActionKind`]s to the engine's action catalog.
//! Handlers close over the store and services; the engine treats them
//! as opaque `(item) -> ()` callbacks.

use crate::config::ActionKind;
use crate::services::Services;
use crate::store::{Item, ItemStore};
use anyhow::Context;
use palette::Srgba;
use std::rc::Rc;
use tactile::{ActionCatalog, ActionId, ActionSpec, IconName};

impl ActionKind {
    fn label(&self) -> &'static str {
        match self {
            Self::Archive => "Archive",
            Self::Delete => "Delete",
            Self::Move => "Move",
            Self::Refresh => "Refresh",
            Self::Share => "Share",
            Self::Chat => "Chat",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Archive => "mail-archive",
            Self::Delete => "edit-delete",
            Self::Move => "folder-move",
            Self::Refresh => "view-refresh",
            Self::Share => "emblem-shared",
            Self::Chat => "internet-chat",
        }
    }

    fn color(&self) -> Srgba<f64> {
        match self {
            Self::Archive => Srgba::new(0.95, 0.72, 0.25, 1.0),
            Self::Delete => Srgba::new(0.88, 0.30, 0.28, 1.0),
            Self::Move => Srgba::new(0.35, 0.55, 0.92, 1.0),
            Self::Refresh => Srgba::new(0.30, 0.75, 0.70, 1.0),
            Self::Share => Srgba::new(0.42, 0.78, 0.40, 1.0),
            Self::Chat => Srgba::new(0.66, 0.46, 0.90, 1.0),
        }
    }
}

pub fn build_catalog(
    kinds: &[ActionKind],
    store: &Rc<ItemStore>,
    services: &Rc<Services>,
) -> anyhow::Result<ActionCatalog<Item>> {
    let specs = kinds
        .iter()
        .map(|kind| spec_for(*kind, store.clone(), services.clone()))
        .collect();
    ActionCatalog::new(specs).context("invalid action ring configuration")
}

fn spec_for(kind: ActionKind, store: Rc<ItemStore>, services: Rc<Services>) -> ActionSpec<Item> {
    let handler: Rc<dyn Fn(&Item)> = match kind {
        ActionKind::Archive => Rc::new(move |item| {
            if store.archive(&item.id) {
                services.toast(format!("Archived {}", item.title));
            }
        }),
        ActionKind::Delete => Rc::new(move |item| {
            if store.delete(&item.id) {
                services.toast(format!("Deleted {}", item.title));
            }
        }),
        ActionKind::Move => Rc::new(move |item| {
            if store.move_to(&item.id, "later") {
                services.toast(format!("Moved {} to later", item.title));
            }
        }),
        ActionKind::Refresh => Rc::new(move |item| {
            if store.refresh(&item.id) {
                services.toast(format!("Refreshing {}", item.title));
            }
        }),
        ActionKind::Share => Rc::new(move |item| services.share(item)),
        ActionKind::Chat => Rc::new(move |item| services.open_chat(item)),
    };

    ActionSpec {
        id: ActionId::new(kind.to_string()),
        label: kind.label().to_string(),
        icon: IconName::new(kind.icon()),
        color: kind.color(),
        handler,
    }
}
