use strum::Display;

/// Discrete feedback strengths fired synchronously from gesture
/// callbacks: light on hover changes, medium on arming, success on a
/// dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Impulse {
    Light,
    Medium,
    Success,
}

/// Seam to the platform haptic service.  Implementations must not
/// block; the engine fires impulses from the event thread.
pub trait Haptics {
    fn impulse(&self, impulse: Impulse);
}

/// Discards every impulse.  Useful as a default and in tests that do
/// not assert on feedback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn impulse(&self, _impulse: Impulse) {}
}
