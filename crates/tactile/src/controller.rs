//! Menu controller: serialized owner of the process-wide menu state.
//!
//! All mutation of [`MenuState`] funnels through [`MenuController`],
//! which guarantees the single-open-menu invariant and owns both
//! derived-geometry call sites (paint-time and hover-time) so they can
//! never disagree.  The overlay renderer only reads.

use crate::action::{ActionCatalog, ActionId};
use crate::geometry::{self, Point, Rect};
use crate::haptics::{Haptics, Impulse};
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Delay between a hide request and the actual state clear, matching
/// the overlay's fade-out duration so it never unmounts mid-animation.
pub const TEARDOWN_DELAY: Duration = Duration::from_millis(250);

/// Snapshot the overlay renders from.  `touch_origin` and
/// `card_layout` are set together and cleared together.
#[derive(Debug)]
pub struct MenuState<T> {
    pub visible: bool,
    pub closing: bool,
    active_item: Weak<T>,
    pub touch_origin: Option<Point>,
    pub card_layout: Option<Rect>,
    pub hovered: Option<ActionId>,
}

impl<T> Default for MenuState<T> {
    fn default() -> Self {
        Self {
            visible: false,
            closing: false,
            active_item: Weak::new(),
            touch_origin: None,
            card_layout: None,
            hovered: None,
        }
    }
}

impl<T> MenuState<T> {
    pub fn active_item(&self) -> Option<Rc<T>> {
        self.active_item.upgrade()
    }
}

pub struct MenuController<T> {
    state: MenuState<T>,
    catalog: ActionCatalog<T>,
    haptics: Rc<dyn Haptics>,
    screen_width: f64,
}

impl<T> MenuController<T> {
    pub fn new(catalog: ActionCatalog<T>, haptics: Rc<dyn Haptics>, screen_width: f64) -> Self {
        Self {
            state: MenuState::default(),
            catalog,
            haptics,
            screen_width,
        }
    }

    pub fn state(&self) -> &MenuState<T> {
        &self.state
    }

    pub fn catalog(&self) -> &ActionCatalog<T> {
        &self.catalog
    }

    pub fn set_screen_width(&mut self, screen_width: f64) {
        self.screen_width = screen_width;
    }

    /// Swap the action catalog.  Refused while a menu is open so the
    /// hovered id always stays a member of the live catalog.
    pub fn set_catalog(&mut self, catalog: ActionCatalog<T>) {
        if self.state.visible {
            log::warn!("catalog swap while menu open; keeping current catalog");
            return;
        }
        self.catalog = catalog;
    }

    /// Open the menu for `item`.  A second show without an intervening
    /// hide is a no-op; with a single active touch session this should
    /// never fire, the guard makes the invariant explicit and testable.
    pub fn show_menu(&mut self, item: &Rc<T>, origin: Point, card_layout: Rect) {
        if self.state.visible {
            log::warn!("show_menu while a menu is already visible; ignoring");
            return;
        }
        self.state.visible = true;
        self.state.closing = false;
        self.state.active_item = Rc::downgrade(item);
        self.state.touch_origin = Some(origin);
        self.state.card_layout = Some(card_layout);
        self.state.hovered = None;
    }

    /// Re-runs the hit test for the live finger position and fires a
    /// light impulse on each transition into a (different) button,
    /// never on the way out and never while stationary over one.
    pub fn update_hover(&mut self, pos: Point) {
        if !self.state.visible || self.state.closing {
            return;
        }
        let Some(origin) = self.state.touch_origin else {
            return;
        };
        let hovered = geometry::hit_test(pos, origin, self.screen_width, self.catalog.len())
            .and_then(|i| self.catalog.get(i))
            .map(|spec| spec.id.clone());
        if hovered == self.state.hovered {
            return;
        }
        let entered = hovered.is_some();
        self.state.hovered = hovered;
        if entered {
            self.haptics.impulse(Impulse::Light);
        }
    }

    /// Fire the hovered action exactly once.  Releasing over nothing is
    /// an intentional "opened, decided against it" cancel; a vanished
    /// item (release racing teardown) degrades to the same no-op.
    pub fn execute_hovered(&mut self) {
        let Some(id) = self.state.hovered.clone() else {
            return;
        };
        let Some(spec) = self.catalog.find(&id) else {
            log::warn!("hovered action '{id}' missing from catalog");
            return;
        };
        let Some(item) = self.state.active_item.upgrade() else {
            log::warn!("active item gone before '{id}' could run");
            return;
        };
        self.haptics.impulse(Impulse::Success);
        log::info!("executing action '{id}'");
        (spec.handler)(&item);
    }

    /// Start fading out.  The driver schedules [`Self::finish_hide`]
    /// after [`TEARDOWN_DELAY`]; that timer is single-shot and never
    /// cancelled.
    pub fn hide_menu(&mut self) {
        if !self.state.visible {
            return;
        }
        self.state.closing = true;
    }

    /// Tear the state down once the fade-out window has elapsed.
    pub fn finish_hide(&mut self) {
        self.state = MenuState::default();
    }

    /// Button centers for the current origin, in catalog order.  Empty
    /// while no menu is open.  Derived on demand so paint and hit-test
    /// always share one geometry.
    pub fn button_positions(&self) -> Vec<Point> {
        match self.state.touch_origin {
            Some(origin) => geometry::button_positions(origin, self.screen_width, self.catalog.len()),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionSpec, IconName};
    use crate::session::{Effect, Session, TouchEvent};
    use palette::Srgba;
    use std::cell::RefCell;

    const SCREEN: f64 = 400.0;

    #[derive(Default)]
    struct Recorder {
        impulses: RefCell<Vec<Impulse>>,
    }

    impl Haptics for Recorder {
        fn impulse(&self, impulse: Impulse) {
            self.impulses.borrow_mut().push(impulse);
        }
    }

    struct Fixture {
        controller: MenuController<RefCell<Vec<String>>>,
        haptics: Rc<Recorder>,
        item: Rc<RefCell<Vec<String>>>,
    }

    fn fixture(ids: &[&str]) -> Fixture {
        let haptics = Rc::new(Recorder::default());
        let specs = ids
            .iter()
            .map(|id| {
                let id = id.to_string();
                ActionSpec {
                    id: ActionId::new(&id),
                    label: id.clone(),
                    icon: IconName::new(&id),
                    color: Srgba::new(0.5, 0.5, 0.5, 1.0),
                    handler: Rc::new(move |log: &RefCell<Vec<String>>| {
                        log.borrow_mut().push(id.clone());
                    }),
                }
            })
            .collect();
        let catalog = ActionCatalog::new(specs).unwrap();
        Fixture {
            controller: MenuController::new(catalog, haptics.clone(), SCREEN),
            haptics,
            item: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn origin() -> Point {
        Point::new(50.0, 300.0)
    }

    fn card() -> Rect {
        Rect::new(16.0, 260.0, 368.0, 96.0)
    }

    fn open(fx: &mut Fixture) {
        let item = fx.item.clone();
        fx.controller.show_menu(&item, origin(), card());
    }

    #[test]
    fn second_show_leaves_state_unchanged() {
        let mut fx = fixture(&["archive", "delete", "share"]);
        open(&mut fx);
        let other = Rc::new(RefCell::new(Vec::new()));
        fx.controller
            .show_menu(&other, Point::new(350.0, 100.0), Rect::default());
        assert_eq!(fx.controller.state().touch_origin, Some(origin()));
        assert!(Rc::ptr_eq(
            &fx.controller.state().active_item().unwrap(),
            &fx.item
        ));
    }

    #[test]
    fn origin_and_layout_live_and_die_together() {
        let mut fx = fixture(&["archive", "delete", "share"]);
        open(&mut fx);
        assert!(fx.controller.state().touch_origin.is_some());
        assert!(fx.controller.state().card_layout.is_some());
        fx.controller.hide_menu();
        fx.controller.finish_hide();
        assert!(fx.controller.state().touch_origin.is_none());
        assert!(fx.controller.state().card_layout.is_none());
        assert!(!fx.controller.state().visible);
    }

    #[test]
    fn hover_is_idempotent_and_haptic_fires_on_entry_only() {
        let mut fx = fixture(&["archive", "delete", "share"]);
        open(&mut fx);
        let target = fx.controller.button_positions()[1];

        fx.controller.update_hover(target);
        assert_eq!(
            fx.controller.state().hovered,
            Some(ActionId::new("delete"))
        );
        // Stationary repeats change nothing and stay silent.
        fx.controller.update_hover(target);
        fx.controller.update_hover(target);
        assert_eq!(*fx.haptics.impulses.borrow(), vec![Impulse::Light]);

        // Leaving is silent, re-entering clicks again.
        fx.controller.update_hover(origin());
        assert_eq!(fx.controller.state().hovered, None);
        fx.controller.update_hover(target);
        assert_eq!(
            *fx.haptics.impulses.borrow(),
            vec![Impulse::Light, Impulse::Light]
        );
    }

    #[test]
    fn hover_sliding_between_buttons_clicks_per_entry() {
        let mut fx = fixture(&["archive", "delete", "share"]);
        open(&mut fx);
        let positions = fx.controller.button_positions();
        fx.controller.update_hover(positions[0]);
        fx.controller.update_hover(positions[1]);
        assert_eq!(
            *fx.haptics.impulses.borrow(),
            vec![Impulse::Light, Impulse::Light]
        );
    }

    #[test]
    fn hover_ignored_when_no_menu() {
        let mut fx = fixture(&["archive", "delete", "share"]);
        fx.controller.update_hover(Point::new(100.0, 100.0));
        assert_eq!(fx.controller.state().hovered, None);
        assert!(fx.haptics.impulses.borrow().is_empty());
    }

    #[test]
    fn execute_without_hover_is_a_noop() {
        // Scenario D: armed, released with the finger still at the
        // origin.
        let mut fx = fixture(&["archive", "delete", "share"]);
        open(&mut fx);
        fx.controller.update_hover(origin());
        fx.controller.execute_hovered();
        assert!(fx.item.borrow().is_empty());
        fx.controller.hide_menu();
        assert!(fx.controller.state().closing);
        fx.controller.finish_hide();
        assert!(!fx.controller.state().visible);
    }

    #[test]
    fn execute_after_item_dropped_is_a_noop() {
        let mut fx = fixture(&["archive", "delete", "share"]);
        open(&mut fx);
        let target = fx.controller.button_positions()[0];
        fx.controller.update_hover(target);
        fx.item = Rc::new(RefCell::new(Vec::new()));
        // Original Rc dropped above; the weak reference is dead.
        fx.controller.execute_hovered();
        assert!(fx.item.borrow().is_empty());
        assert!(!fx.haptics.impulses.borrow().contains(&Impulse::Success));
    }

    #[test]
    fn catalog_swap_refused_while_open() {
        let mut fx = fixture(&["archive", "delete", "share"]);
        open(&mut fx);
        let replacement = fixture(&["chat"]).controller.catalog.clone();
        fx.controller.set_catalog(replacement);
        assert_eq!(fx.controller.catalog().len(), 3);
    }

    // Full press-drag-release flow, session effects executed by a
    // miniature driver against the controller.
    fn drive(fx: &mut Fixture, session: &mut Session, event: TouchEvent) {
        for effect in session.on_event(event) {
            match effect {
                Effect::ShowMenu { origin } => {
                    let item = fx.item.clone();
                    fx.controller.show_menu(&item, origin, card());
                }
                Effect::UpdateHover(pos) => fx.controller.update_hover(pos),
                Effect::ExecuteAndClose => {
                    fx.controller.execute_hovered();
                    fx.controller.hide_menu();
                }
                Effect::CloseMenu => fx.controller.hide_menu(),
                _ => {}
            }
        }
    }

    #[test]
    fn drag_to_button_executes_exactly_once() {
        // Scenario C: press, hold, drag to a computed button center,
        // release; the menu stays visible through the teardown delay.
        let mut fx = fixture(&["archive", "delete", "share"]);
        let mut session = Session::new();

        drive(&mut fx, &mut session, TouchEvent::Down { pos: origin() });
        drive(&mut fx, &mut session, TouchEvent::HoldElapsed);
        let target = fx.controller.button_positions()[2];
        drive(
            &mut fx,
            &mut session,
            TouchEvent::Move {
                pos: target,
                at: Duration::from_millis(620),
            },
        );
        drive(
            &mut fx,
            &mut session,
            TouchEvent::Up {
                at: Duration::from_millis(700),
            },
        );

        assert_eq!(*fx.item.borrow(), vec!["share".to_string()]);
        // Closing but not yet torn down.
        assert!(fx.controller.state().visible);
        assert!(fx.controller.state().closing);
        fx.controller.finish_hide();
        drive(&mut fx, &mut session, TouchEvent::TeardownElapsed);
        assert!(!fx.controller.state().visible);
        assert_eq!(
            *fx.haptics.impulses.borrow(),
            vec![Impulse::Light, Impulse::Success]
        );
    }

    #[test]
    fn termination_reaches_the_same_cleanup() {
        let mut fx = fixture(&["archive", "delete", "share"]);
        let mut session = Session::new();
        drive(&mut fx, &mut session, TouchEvent::Down { pos: origin() });
        drive(&mut fx, &mut session, TouchEvent::HoldElapsed);
        drive(&mut fx, &mut session, TouchEvent::Terminated);
        assert!(fx.controller.state().closing);
        assert!(fx.item.borrow().is_empty());
        fx.controller.finish_hide();
        assert!(!fx.controller.state().visible);
        assert_eq!(fx.controller.state().hovered, None);
    }
}
