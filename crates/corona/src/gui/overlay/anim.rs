//! One animation group for the whole overlay: card lift, scrim and
//! button travel all derive from a single progress value, so they
//! reach a consistent end state together instead of being coordinated
//! by matching magic durations.

use super::{CLOSE_DURATION, OPEN_DURATION, SPRING_OVERSHOOT};
use std::time::Instant;

#[derive(Debug, Default, Clone, Copy)]
pub struct OverlayAnim {
    progress: f64,
    opening: bool,
    last_tick: Option<Instant>,
}

impl OverlayAnim {
    /// Start (or resume) the opening spring from the current progress.
    pub fn open(&mut self) {
        self.opening = true;
        self.last_tick = None;
    }

    /// Reverse toward the settled-closed state over the teardown
    /// window.
    pub fn close(&mut self) {
        self.opening = false;
        self.last_tick = None;
    }

    /// Advance by wall-clock time; returns true while a redraw is
    /// still needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let dt = self
            .last_tick
            .map(|last| now.saturating_duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        if self.opening {
            self.progress = (self.progress + dt / OPEN_DURATION.as_secs_f64()).min(1.0);
        } else {
            self.progress = (self.progress - dt / CLOSE_DURATION.as_secs_f64()).max(0.0);
        }
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        if self.opening {
            self.progress < 1.0
        } else {
            self.progress > 0.0
        }
    }

    pub fn settled_closed(&self) -> bool {
        !self.opening && self.progress == 0.0
    }

    /// Raw progress, drives opacity.
    pub fn fade(&self) -> f64 {
        self.progress
    }

    /// Button travel from origin to ring position: springy overshoot
    /// outbound, straight retreat inbound.
    pub fn travel(&self) -> f64 {
        if self.opening {
            ease_out_back(self.progress)
        } else {
            self.progress
        }
    }
}

fn ease_out_back(t: f64) -> f64 {
    let c1 = SPRING_OVERSHOOT;
    let c3 = c1 + 1.0;
    1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
}
