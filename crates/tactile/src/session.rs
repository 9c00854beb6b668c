//! Per-card gesture state machine.
//!
//! One [`Session`] value owns one physical touch lifecycle:
//! start, hold timer, armed or cancelled, move tracking, release,
//! dispatch.  Every transition is a pure function of the current phase
//! and an incoming event, returning the next phase plus an ordered list
//! of [`Effect`]s for the driver to execute; the session itself never
//! paints, never owns timers and never touches the menu state directly.

use crate::geometry::Point;
use crate::haptics::Impulse;
use std::time::Duration;

/// Minimum continuous-touch duration before a press arms.
pub const HOLD_DURATION: Duration = Duration::from_millis(500);
/// Maximum finger displacement tolerated during the hold window before
/// the gesture is reclassified as a scroll and cancelled.
pub const JITTER_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    /// Touch down, hold timer running, tap still possible.
    Pressing { origin: Point },
    /// Hold threshold crossed, menu open, finger tracked for hover.
    Armed { origin: Point },
    /// Released after arming; new presses are deferred until the menu
    /// teardown window elapses.
    Settling,
}

/// Raw touch lifecycle events.  Timestamps are durations since the
/// touch-down so transitions stay pure and simulatable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down { pos: Point },
    Move { pos: Point, at: Duration },
    HoldElapsed,
    Up { at: Duration },
    /// The platform forcibly revoked the touch stream.
    Terminated,
    TeardownElapsed,
}

/// Side effects requested by a transition, to be executed by the
/// driver strictly in emission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    ClaimCapture,
    ReleaseCapture,
    StartHoldTimer,
    CancelHoldTimer,
    Haptic(Impulse),
    /// Scale/rotate the pressed card into its "lifted" look.
    LiftCard,
    /// Undo the lift feedback.
    ResetCard,
    /// Snapshot the pressed card and open the menu at `origin`.
    ShowMenu { origin: Point },
    UpdateHover(Point),
    /// Execute the hovered action (if any) and begin menu teardown.
    ExecuteAndClose,
    /// Begin menu teardown without executing anything.
    CloseMenu,
    /// Invoke the card's plain-tap handler.
    FireTap,
    StartTeardownTimer,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Session {
    phase: Phase,
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True from touch-down until the session fully settles; drives
    /// the capture predicate.
    pub fn holds_touch(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.phase, Phase::Armed { .. })
    }

    /// Feed one event; returns the effects the driver must run.
    pub fn on_event(&mut self, event: TouchEvent) -> Vec<Effect> {
        let (next, effects) = transition(self.phase, event);
        self.phase = next;
        effects
    }
}

/// The whole state machine.  Unknown phase/event pairs are no-ops.
pub fn transition(phase: Phase, event: TouchEvent) -> (Phase, Vec<Effect>) {
    match (phase, event) {
        (Phase::Idle, TouchEvent::Down { pos }) => (
            Phase::Pressing { origin: pos },
            vec![Effect::ClaimCapture, Effect::StartHoldTimer],
        ),

        (Phase::Pressing { origin }, TouchEvent::Move { pos, .. }) => {
            if pos.distance(origin) > JITTER_THRESHOLD {
                // A scroll, not a hold: hand the stream back.
                (
                    Phase::Idle,
                    vec![Effect::CancelHoldTimer, Effect::ReleaseCapture],
                )
            } else {
                (Phase::Pressing { origin }, vec![])
            }
        }

        (Phase::Pressing { origin }, TouchEvent::HoldElapsed) => (
            Phase::Armed { origin },
            // Ordering is contractual: haptic, then visual feedback,
            // then the controller mutation the overlay reacts to.
            vec![
                Effect::Haptic(Impulse::Medium),
                Effect::LiftCard,
                Effect::ShowMenu { origin },
            ],
        ),

        (Phase::Pressing { .. }, TouchEvent::Up { at }) => {
            if at < HOLD_DURATION {
                (
                    Phase::Idle,
                    vec![
                        Effect::CancelHoldTimer,
                        Effect::FireTap,
                        Effect::ReleaseCapture,
                    ],
                )
            } else {
                // The hold timer starved past the deadline; swallow the
                // release rather than risk double-firing with the
                // long-press path.
                (
                    Phase::Idle,
                    vec![Effect::CancelHoldTimer, Effect::ReleaseCapture],
                )
            }
        }

        (Phase::Pressing { .. }, TouchEvent::Terminated) => (
            Phase::Idle,
            vec![Effect::CancelHoldTimer, Effect::ReleaseCapture],
        ),

        (Phase::Armed { origin }, TouchEvent::Move { pos, .. }) => {
            (Phase::Armed { origin }, vec![Effect::UpdateHover(pos)])
        }

        (Phase::Armed { .. }, TouchEvent::Up { .. }) => (
            Phase::Settling,
            vec![
                Effect::ExecuteAndClose,
                Effect::ResetCard,
                Effect::StartTeardownTimer,
            ],
        ),

        (Phase::Armed { .. }, TouchEvent::Terminated) => (
            Phase::Settling,
            vec![
                Effect::CloseMenu,
                Effect::ResetCard,
                Effect::StartTeardownTimer,
            ],
        ),

        (Phase::Settling, TouchEvent::TeardownElapsed) => {
            (Phase::Idle, vec![Effect::ReleaseCapture])
        }

        // A press landing mid-teardown is deferred, not queued.
        (Phase::Settling, TouchEvent::Down { .. }) => (Phase::Settling, vec![]),

        (phase, event) => {
            log::debug!("ignoring {event:?} in {phase:?}");
            (phase, vec![])
        }
    }
}
