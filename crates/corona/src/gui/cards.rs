//! Card renderer: lays out the scrollable list and paints one card
//! from `(item, disabled)`.  The overlay reuses the same painter for
//! the frozen floating duplicate.

use crate::gui::theme::ThemeColors;
use crate::store::Item;
use cairo::Context;
use std::f64::consts::PI;
use tactile::{Point, Rect};

pub const CARD_MARGIN: f64 = 16.0;
pub const CARD_HEIGHT: f64 = 96.0;
pub const CARD_GAP: f64 = 12.0;
pub const CARD_CORNER: f64 = 12.0;
pub const DISABLED_ALPHA: f64 = 0.8;

pub fn layout_cards(screen_width: f64, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            Rect::new(
                CARD_MARGIN,
                CARD_MARGIN + i as f64 * (CARD_HEIGHT + CARD_GAP),
                (screen_width - 2.0 * CARD_MARGIN).max(0.0),
                CARD_HEIGHT,
            )
        })
        .collect()
}

pub fn content_height(count: usize) -> f64 {
    CARD_MARGIN * 2.0 + count as f64 * CARD_HEIGHT + count.saturating_sub(1) as f64 * CARD_GAP
}

pub fn card_at(rects: &[Rect], p: Point) -> Option<usize> {
    rects.iter().position(|r| r.contains(p))
}

pub struct CardRenderer<'a> {
    pub item: &'a Item,
    pub rect: Rect,
    pub disabled: bool,
}

impl CardRenderer<'_> {
    pub fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_body(cr, colors)?;
        self.draw_text(cr, colors)
    }

    fn draw_body(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let (r, g, b, a) = colors.card.into_components();
        let alpha = if self.disabled { a * DISABLED_ALPHA } else { a };
        cr.set_source_rgba(r, g, b, alpha);
        rounded_rect(cr, self.rect, CARD_CORNER);
        cr.fill()
    }

    fn draw_text(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let (r, g, b, a) = colors.card_text.into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(15.0);
        cr.move_to(self.rect.x + 16.0, self.rect.y + 34.0);
        cr.show_text(&self.item.title)?;

        let (r, g, b, a) = colors.card_subtext.into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(12.0);
        cr.move_to(self.rect.x + 16.0, self.rect.y + 58.0);
        cr.show_text(&self.item.summary)?;
        Ok(())
    }
}

fn rounded_rect(cr: &Context, rect: Rect, radius: f64) {
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
    cr.new_sub_path();
    cr.arc(x + w - radius, y + radius, radius, -PI / 2.0, 0.0);
    cr.arc(x + w - radius, y + h - radius, radius, 0.0, PI / 2.0);
    cr.arc(x + radius, y + h - radius, radius, PI / 2.0, PI);
    cr.arc(x + radius, y + radius, radius, PI, 3.0 * PI / 2.0);
    cr.close_path();
}
