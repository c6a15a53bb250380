use eframe::egui::{Color32, Context, Style, Theme, Visuals};

/// Dark color scheme of the calculator window.
///
/// Kept separate from the stock `egui` dark visuals so the window, button and
/// result colors can be tuned in one place.
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Color32,
    pub button: Color32,
    pub button_hovered: Color32,
    pub text: Color32,
}

impl Palette {
    pub const DARK: Self = Self {
        background: Color32::from_rgb(0x2b, 0x2b, 0x2b),
        button: Color32::from_rgb(0x40, 0x40, 0x40),
        button_hovered: Color32::from_rgb(0x50, 0x50, 0x50),
        text: Color32::WHITE,
    };

    pub fn apply(&self, visuals: &mut Visuals) {
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.override_text_color = Some(self.text);

        visuals.widgets.inactive.weak_bg_fill = self.button;
        visuals.widgets.inactive.bg_fill = self.button;
        for widget in [&mut visuals.widgets.hovered, &mut visuals.widgets.active] {
            widget.weak_bg_fill = self.button_hovered;
            widget.bg_fill = self.button_hovered;
        }
    }
}

/// Installs the dark palette and, on first start, selects the dark theme.
///
/// A theme preference restored from storage is left untouched.
pub fn install(ctx: &Context, first_start: bool) {
    ctx.style_mut_of(Theme::Dark, |style: &mut Style| {
        Palette::DARK.apply(&mut style.visuals);
    });
    if first_start {
        ctx.set_theme(Theme::Dark);
    }
}
