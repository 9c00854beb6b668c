use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

/// Paint colors, re-resolved from the style context on every frame so
/// a runtime theme switch shows up on the next paint.
pub struct ThemeColors {
    pub card: Srgba<f64>,
    pub card_text: Srgba<f64>,
    pub card_subtext: Srgba<f64>,
    pub scrim: Srgba<f64>,
    pub hover_ring: Srgba<f64>,
    pub button_label: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        let card = named(context, "theme_bg_color", None)
            .unwrap_or(Srgba::new(0.16, 0.16, 0.20, 1.0));
        let text = named(context, "theme_fg_color", None)
            .unwrap_or(Srgba::new(0.93, 0.93, 0.95, 1.0));
        Self {
            card,
            card_text: text,
            card_subtext: with_alpha(text, 0.6),
            scrim: Srgba::new(0.0, 0.0, 0.0, 1.0),
            hover_ring: named(context, "theme_selected_bg_color", Some(1.0))
                .unwrap_or(Srgba::new(0.95, 0.95, 0.98, 1.0)),
            button_label: Srgba::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

fn named(context: &gtk::StyleContext, name: &str, alpha: Option<f64>) -> Option<Srgba<f64>> {
    let c = context.lookup_color(name)?;
    Some(Srgba::new(
        c.red() as f64,
        c.green() as f64,
        c.blue() as f64,
        alpha.unwrap_or(c.alpha() as f64),
    ))
}

fn with_alpha(mut color: Srgba<f64>, alpha: f64) -> Srgba<f64> {
    color.alpha = alpha;
    color
}

pub fn load_css() {
    let Some(display) = gdk::Display::default() else {
        log::warn!("no default display, skipping css setup");
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(
        ".corona-window { background-color: #101016; }
         .corona-cards { background: none; background-color: transparent; }",
    );
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
