//! Theme management for the egui-based page.

use eframe::egui;

/// Presentation modes offered by the nav bar toggle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light egui visuals (default on every start).
    #[default]
    Light,
    /// Dark egui visuals.
    Dark,
}

impl ThemeMode {
    fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Theme state handed to whoever owns the root rendering scope.
///
/// `toggle` is the only mutator; nothing else writes the mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeContext {
    mode: ThemeMode,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Flip between light and dark.
    pub fn toggle(&mut self) {
        self.mode = self.mode.flipped();
        log::debug!("theme switched to {:?}", self.mode);
    }

    /// Glyph for the toggle button: the sun offers light, the moon offers dark.
    pub fn toggle_icon(&self) -> &'static str {
        if self.is_dark() { "☀" } else { "🌙" }
    }

    /// Apply the selected theme to the egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let visuals = match self.mode {
            ThemeMode::Light => egui::Visuals::light(),
            ThemeMode::Dark => egui::Visuals::dark(),
        };
        ctx.set_visuals(visuals);
    }
}
