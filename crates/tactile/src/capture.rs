//! Priority lock over an in-progress touch stream.
//!
//! A card claims the stream eagerly on touch-down and refuses every
//! ancestor request to reclaim it for as long as the gesture is live or
//! a menu opened during it is (or was) visible.  Without this a list's
//! scroll recognizer silently cancels the long-press mid-hold.

/// Exclusive input capture with a single release point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputCapture {
    claimed: bool,
    menu_seen: bool,
}

impl InputCapture {
    /// Claim the touch stream before any ancestor can.
    pub fn claim(&mut self) {
        self.claimed = true;
        self.menu_seen = false;
    }

    /// The single release point; clears the menu-was-visible latch.
    pub fn release(&mut self) {
        *self = Self::default();
    }

    /// Latch that a menu became visible under this claim.  The latch
    /// keeps the claim asserted through the menu's teardown window.
    pub fn note_menu_visible(&mut self) {
        if self.claimed {
            self.menu_seen = true;
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Whether an ancestor's request to take over the stream should be
    /// granted right now.
    pub fn yields_to_ancestor(&self, long_pressing: bool, menu_visible: bool) -> bool {
        !(self.claimed && (long_pressing || menu_visible || self.menu_seen))
    }
}
