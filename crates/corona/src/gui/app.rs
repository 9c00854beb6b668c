use crate::actions;
use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::cards::{self, CardRenderer};
use crate::gui::overlay::{self, OverlayAnim};
use crate::gui::theme::{self, ThemeColors};
use crate::haptics::FeedbackService;
use crate::services::Services;
use crate::store::{Item, ItemStore};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tactile::{
    Effect, Haptics, HOLD_DURATION, InputCapture, MenuController, Point, Session, TEARDOWN_DELAY,
    TouchEvent,
};

/// State the draw function reads; mutated only from `update`.
pub struct Shared {
    pub controller: MenuController<Item>,
    pub anim: OverlayAnim,
    pub items: Vec<Rc<Item>>,
    pub rects: Vec<tactile::Rect>,
}

pub struct AppModel {
    shared: Rc<RefCell<Shared>>,
    session: Session,
    capture: InputCapture,
    store: Rc<ItemStore>,
    services: Rc<Services>,
    haptics: Rc<FeedbackService>,
    pressed: Option<usize>,
    pressed_at: Option<Instant>,
    hold_timer: Option<glib::SourceId>,
    drag: gtk::GestureDrag,
    drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Press(Point),
    Motion(Point),
    Release(Point),
    GestureCancel,
    HoldElapsed,
    TeardownElapsed,
    ConfigReload,
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Corona"),
            set_default_size: (420, 760),
            add_css_class: "corona-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::GestureCancel);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::ScrolledWindow {
                set_hscrollbar_policy: gtk::PolicyType::Never,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "corona-cards",
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (app_config, rx) = init;

        theme::load_css();

        let store = Rc::new(ItemStore::seeded());
        let services = Rc::new(Services::default());
        let haptics = Rc::new(FeedbackService::new(app_config.haptics));
        let haptics_dyn: Rc<dyn Haptics> = haptics.clone();

        let catalog = actions::build_catalog(&app_config.actions, &store, &services)
            .unwrap_or_else(|e| {
                log::error!("{e:#}; falling back to the default ring");
                actions::build_catalog(&Config::default().actions, &store, &services)
                    .expect("default action ring is valid")
            });

        let shared = Rc::new(RefCell::new(Shared {
            controller: MenuController::new(catalog, haptics_dyn, root.default_width() as f64),
            anim: OverlayAnim::default(),
            items: Vec::new(),
            rects: Vec::new(),
        }));

        // The drag gesture is kept on the model so capture effects can
        // claim or deny its event sequence against the scrolled list.
        let drag = gtk::GestureDrag::new();
        {
            let sender = sender.clone();
            drag.connect_drag_begin(move |_, x, y| {
                sender.input(AppMsg::Press(Point::new(x, y)));
            });
        }
        {
            let sender = sender.clone();
            drag.connect_drag_update(move |g, dx, dy| {
                if let Some((sx, sy)) = g.start_point() {
                    sender.input(AppMsg::Motion(Point::new(sx + dx, sy + dy)));
                }
            });
        }
        {
            let sender = sender.clone();
            drag.connect_drag_end(move |g, dx, dy| {
                if let Some((sx, sy)) = g.start_point() {
                    sender.input(AppMsg::Release(Point::new(sx + dx, sy + dy)));
                }
            });
        }
        {
            let sender = sender.clone();
            drag.connect_cancel(move |_, _| {
                sender.input(AppMsg::GestureCancel);
            });
        }

        let model = AppModel {
            shared: shared.clone(),
            session: Session::new(),
            capture: InputCapture::default(),
            store,
            services,
            haptics,
            pressed: None,
            pressed_at: None,
            hold_timer: None,
            drag: drag.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        widgets.drawing_area.add_controller(drag);

        let shared_draw = shared.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                let shared = shared_draw.borrow();
                if let Err(e) = draw_scene(cr, &shared, &colors, width as f64, height as f64) {
                    log::error!("Drawing error: {}", e);
                }
            });

        // Frame-synchronized animation track; touch handling never
        // waits on it.
        let shared_tick = shared.clone();
        widgets.drawing_area.add_tick_callback(move |area, _clock| {
            if shared_tick.borrow_mut().anim.tick(Instant::now()) {
                area.queue_draw();
            }
            glib::ControlFlow::Continue
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                match event {
                    AppEvent::ConfigReload => sender_clone.input(AppMsg::ConfigReload),
                }
            }
        });

        model.reload_cards(root.default_width() as f64);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Press(pos) => {
                let width = self.drawing_area.width().max(1) as f64;
                self.reload_cards(width);
                self.shared.borrow_mut().controller.set_screen_width(width);
                let Some(idx) = cards::card_at(&self.shared.borrow().rects, pos) else {
                    return;
                };
                self.pressed = Some(idx);
                self.pressed_at = Some(Instant::now());
                let effects = self.session.on_event(TouchEvent::Down { pos });
                self.run_effects(effects, &sender);
            }
            AppMsg::Motion(pos) => {
                let at = self.elapsed();
                let effects = self.session.on_event(TouchEvent::Move { pos, at });
                self.run_effects(effects, &sender);
            }
            AppMsg::Release(pos) => {
                let at = self.elapsed();
                if self.session.is_armed() {
                    // Final hover update at the release coordinate.
                    let effects = self.session.on_event(TouchEvent::Move { pos, at });
                    self.run_effects(effects, &sender);
                }
                let effects = self.session.on_event(TouchEvent::Up { at });
                self.run_effects(effects, &sender);
                if !self.session.holds_touch() {
                    self.clear_press();
                }
            }
            AppMsg::GestureCancel => {
                let effects = self.session.on_event(TouchEvent::Terminated);
                self.run_effects(effects, &sender);
                if !self.session.holds_touch() {
                    self.clear_press();
                }
            }
            AppMsg::HoldElapsed => {
                self.hold_timer = None;
                let effects = self.session.on_event(TouchEvent::HoldElapsed);
                self.run_effects(effects, &sender);
            }
            AppMsg::TeardownElapsed => {
                self.shared.borrow_mut().controller.finish_hide();
                let effects = self.session.on_event(TouchEvent::TeardownElapsed);
                self.run_effects(effects, &sender);
                let width = self.drawing_area.width().max(1) as f64;
                self.reload_cards(width);
                self.clear_press();
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    match actions::build_catalog(&new_config.actions, &self.store, &self.services)
                    {
                        Ok(catalog) => {
                            self.shared.borrow_mut().controller.set_catalog(catalog);
                            log::info!("Configuration reloaded");
                        }
                        Err(e) => log::error!("Rejecting reloaded configuration: {e:#}"),
                    }
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
        self.drawing_area.queue_draw();
    }
}

impl AppModel {
    fn elapsed(&self) -> Duration {
        self.pressed_at.map(|t| t.elapsed()).unwrap_or_default()
    }

    fn clear_press(&mut self) {
        self.pressed = None;
        self.pressed_at = None;
    }

    fn reload_cards(&self, width: f64) {
        let mut shared = self.shared.borrow_mut();
        shared.items = self
            .store
            .visible_items()
            .into_iter()
            .map(Rc::new)
            .collect();
        shared.rects = cards::layout_cards(width, shared.items.len());
        self.drawing_area
            .set_content_height(cards::content_height(shared.items.len()) as i32);
    }

    /// Executes a session's effect list strictly in order.
    fn run_effects(&mut self, effects: Vec<Effect>, sender: &ComponentSender<Self>) {
        for effect in effects {
            match effect {
                Effect::ClaimCapture => {
                    self.capture.claim();
                    self.drag.set_state(gtk::EventSequenceState::Claimed);
                }
                Effect::ReleaseCapture => {
                    self.capture.release();
                    // Hand the sequence back; on a cancelled hold this
                    // lets the list resume scrolling.
                    self.drag.set_state(gtk::EventSequenceState::Denied);
                }
                Effect::StartHoldTimer => {
                    let sender = sender.clone();
                    self.hold_timer = Some(glib::timeout_add_local_once(HOLD_DURATION, move || {
                        sender.input(AppMsg::HoldElapsed);
                    }));
                }
                Effect::CancelHoldTimer => {
                    if let Some(id) = self.hold_timer.take() {
                        id.remove();
                    }
                }
                Effect::Haptic(impulse) => self.haptics.impulse(impulse),
                Effect::LiftCard => self.shared.borrow_mut().anim.open(),
                Effect::ResetCard => self.shared.borrow_mut().anim.close(),
                Effect::ShowMenu { origin } => {
                    let Some(idx) = self.pressed else {
                        log::warn!("armed without a pressed card");
                        continue;
                    };
                    let mut shared = self.shared.borrow_mut();
                    let (item, rect) = match shared.items.get(idx).cloned().zip(shared.rects.get(idx).copied()) {
                        Some(snapshot) => snapshot,
                        None => continue,
                    };
                    shared.controller.show_menu(&item, origin, rect);
                    self.capture.note_menu_visible();
                }
                Effect::UpdateHover(pos) => {
                    self.shared.borrow_mut().controller.update_hover(pos);
                }
                Effect::ExecuteAndClose => {
                    let mut shared = self.shared.borrow_mut();
                    shared.controller.execute_hovered();
                    shared.controller.hide_menu();
                }
                Effect::CloseMenu => self.shared.borrow_mut().controller.hide_menu(),
                Effect::FireTap => {
                    if let Some(idx) = self.pressed {
                        if let Some(item) = self.shared.borrow().items.get(idx) {
                            self.services.open_item(item);
                        }
                    }
                }
                Effect::StartTeardownTimer => {
                    // Single-shot and never cancelled; a new press is
                    // simply deferred behind it.
                    let sender = sender.clone();
                    glib::timeout_add_local_once(TEARDOWN_DELAY, move || {
                        sender.input(AppMsg::TeardownElapsed);
                    });
                }
            }
        }
    }
}

fn draw_scene(
    cr: &cairo::Context,
    shared: &Shared,
    colors: &ThemeColors,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    for (item, rect) in shared.items.iter().zip(&shared.rects) {
        CardRenderer {
            item,
            rect: *rect,
            disabled: false,
        }
        .draw(cr, colors)?;
    }
    overlay::view::draw(cr, &shared.controller, &shared.anim, colors, width, height)
}
