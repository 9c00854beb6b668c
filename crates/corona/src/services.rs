//! Terminal effects an executed action lands in: navigation, chat,
//! share and toasts.  Thin facades; all of them log and move on, an
//! action's own failure is never the gesture engine's problem.

use crate::store::Item;
use std::cell::RefCell;

#[derive(Debug, Default)]
pub struct Services {
    last_toast: RefCell<Option<String>>,
}

impl Services {
    pub fn toast(&self, message: impl Into<String>) {
        let message = message.into();
        log::info!("toast: {message}");
        *self.last_toast.borrow_mut() = Some(message);
    }

    pub fn last_toast(&self) -> Option<String> {
        self.last_toast.borrow().clone()
    }

    /// Plain-tap destination for a card.
    pub fn open_item(&self, item: &Item) {
        log::info!("opening '{}'", item.id);
        self.toast(format!("Opened {}", item.title));
    }

    pub fn open_chat(&self, item: &Item) {
        log::info!("opening chat for '{}'", item.id);
        self.toast(format!("Chat about {}", item.title));
    }

    pub fn share(&self, item: &Item) {
        log::info!("sharing '{}'", item.id);
        self.toast(format!("Shared {}", item.title));
    }
}
