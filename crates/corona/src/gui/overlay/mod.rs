use std::f64::consts::PI;
use std::time::Duration;

pub mod anim;
pub mod view;

pub use anim::OverlayAnim;

pub const SCRIM_ALPHA: f64 = 0.45;
pub const LIFT_SCALE: f64 = 1.04;
pub const LIFT_ROTATION: f64 = -2.0 * PI / 180.0;
pub const HOVER_SCALE: f64 = 1.25;
pub const BUTTON_ICON_SIZE: i32 = 26;
pub const HOVER_RING_WIDTH: f64 = 2.5;

pub const OPEN_DURATION: Duration = Duration::from_millis(220);
/// The close fade is the controller's teardown window; one constant so
/// the overlay can never still be animating when the state clears.
pub const CLOSE_DURATION: Duration = tactile::TEARDOWN_DELAY;

/// Overshoot magnitude of the open spring (classic back-ease c1).
pub const SPRING_OVERSHOOT: f64 = 1.70158;
