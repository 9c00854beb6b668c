//! Overlay painter.  Purely reactive: everything it needs (positions,
//! hover id, animation progress) is pre-computed elsewhere, and it
//! issues no mutations back.

use super::{
    BUTTON_ICON_SIZE, HOVER_RING_WIDTH, HOVER_SCALE, LIFT_ROTATION, LIFT_SCALE, OverlayAnim,
    SCRIM_ALPHA,
};
use crate::gui::cards::CardRenderer;
use crate::gui::icon;
use crate::gui::theme::ThemeColors;
use crate::store::Item;
use cairo::Context;
use gdk4::prelude::*;
use std::f64::consts::PI;
use tactile::geometry::BUTTON_RADIUS;
use tactile::{ActionSpec, MenuController, Point, Rect};

pub fn draw(
    cr: &Context,
    controller: &MenuController<Item>,
    anim: &OverlayAnim,
    colors: &ThemeColors,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let state = controller.state();
    if !state.visible && anim.settled_closed() {
        return Ok(());
    }

    draw_scrim(cr, colors, anim, width, height)?;

    if let (Some(layout), Some(item)) = (state.card_layout, state.active_item()) {
        draw_frozen_card(cr, &item, layout, anim, colors)?;
    }

    let Some(origin) = state.touch_origin else {
        return Ok(());
    };
    for (spec, target) in controller
        .catalog()
        .iter()
        .zip(controller.button_positions())
    {
        ButtonRenderer {
            spec,
            center: lerp_point(origin, target, anim.travel()),
            hovered: state.hovered.as_ref() == Some(&spec.id),
            alpha: anim.fade(),
        }
        .draw(cr, colors)?;
    }
    Ok(())
}

fn draw_scrim(
    cr: &Context,
    colors: &ThemeColors,
    anim: &OverlayAnim,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let (r, g, b, _) = colors.scrim.into_components();
    cr.set_source_rgba(r, g, b, SCRIM_ALPHA * anim.fade());
    cr.rectangle(0.0, 0.0, width, height);
    cr.fill()
}

/// Non-interactive duplicate of the pressed card, scaled and rotated
/// slightly to read as lifted off the list.
fn draw_frozen_card(
    cr: &Context,
    item: &Item,
    layout: Rect,
    anim: &OverlayAnim,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let p = anim.fade();
    let center = layout.center();

    cr.save()?;
    cr.translate(center.x, center.y);
    cr.rotate(LIFT_ROTATION * p);
    let scale = 1.0 + (LIFT_SCALE - 1.0) * p;
    cr.scale(scale, scale);
    cr.translate(-center.x, -center.y);
    CardRenderer {
        item,
        rect: layout,
        disabled: true,
    }
    .draw(cr, colors)?;
    cr.restore()
}

struct ButtonRenderer<'a> {
    spec: &'a ActionSpec<Item>,
    center: Point,
    hovered: bool,
    alpha: f64,
}

impl ButtonRenderer<'_> {
    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let radius = if self.hovered {
            BUTTON_RADIUS * HOVER_SCALE
        } else {
            BUTTON_RADIUS
        };

        let (r, g, b, a) = self.spec.color.into_components();
        cr.set_source_rgba(r, g, b, a * self.alpha);
        cr.arc(self.center.x, self.center.y, radius, 0.0, 2.0 * PI);
        cr.fill()?;

        if self.hovered {
            let (r, g, b, a) = colors.hover_ring.into_components();
            cr.set_source_rgba(r, g, b, a * self.alpha);
            cr.arc(
                self.center.x,
                self.center.y,
                radius + HOVER_RING_WIDTH,
                0.0,
                2.0 * PI,
            );
            cr.set_line_width(HOVER_RING_WIDTH);
            cr.stroke()?;
        }

        self.draw_glyph(cr, colors)
    }

    fn draw_glyph(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        if let Some(pixbuf) = icon::load_pixbuf(&self.spec.icon, BUTTON_ICON_SIZE) {
            let (iw, ih) = (pixbuf.width() as f64, pixbuf.height() as f64);
            cr.save()?;
            cr.push_group();
            cr.set_source_pixbuf(&pixbuf, self.center.x - iw / 2.0, self.center.y - ih / 2.0);
            cr.paint()?;
            cr.pop_group_to_source()?;
            cr.paint_with_alpha(self.alpha)?;
            cr.restore()
        } else {
            // No themed icon installed: fall back to the label initial.
            let initial = self
                .spec
                .label
                .chars()
                .next()
                .unwrap_or('?')
                .to_uppercase()
                .to_string();
            let (r, g, b, a) = colors.button_label.into_components();
            cr.set_source_rgba(r, g, b, a * self.alpha);
            cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
            cr.set_font_size(16.0);
            if let Ok(ext) = cr.text_extents(&initial) {
                cr.move_to(
                    self.center.x - ext.width() / 2.0,
                    self.center.y + ext.height() / 2.0,
                );
                cr.show_text(&initial)?;
            }
            Ok(())
        }
    }
}

fn lerp_point(from: Point, to: Point, t: f64) -> Point {
    Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
}
