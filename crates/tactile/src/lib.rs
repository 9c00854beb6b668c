//! Gesture arbitration and radial menu geometry.
//!
//! `tactile` is the engine behind a touch-driven radial action menu:
//! long-pressing a content card opens a ring of action buttons around
//! the touch point, the finger is tracked toward a button, and the
//! matching action fires on release.  The crate owns the tap/long-press
//! disambiguation, the input-capture protocol against an enclosing
//! scroll container, the arc layout and hit-testing of the buttons, and
//! the show/hover/execute/hide lifecycle.  Rendering, timers and the
//! actual action handlers belong to the embedding application.

pub mod action;
pub mod capture;
pub mod controller;
pub mod geometry;
pub mod haptics;
mod macros;
pub mod session;

pub use action::{ActionCatalog, ActionId, ActionSpec, CatalogError, IconName};
pub use capture::InputCapture;
pub use controller::{MenuController, MenuState, TEARDOWN_DELAY};
pub use geometry::{Point, Rect};
pub use haptics::{Haptics, Impulse};
pub use session::{Effect, Phase, Session, TouchEvent, HOLD_DURATION, JITTER_THRESHOLD};
