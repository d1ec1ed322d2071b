//! Theme module
//!
//! Wraps the core color tables in a gpui global so views can look them up.

pub use image_compare_core::theme::{ThemeColors, ThemeMode};

use gpui::*;

/// Global theme state
pub struct AppTheme {
    pub mode: ThemeMode,
    pub colors: ThemeColors,
    system_is_dark: bool,
}

impl AppTheme {
    pub fn new(mode: ThemeMode, system_is_dark: bool) -> Self {
        Self {
            mode,
            colors: mode.colors(system_is_dark),
            system_is_dark,
        }
    }

    pub fn set_system_appearance(&mut self, is_dark: bool) {
        self.system_is_dark = is_dark;
        if self.mode == ThemeMode::Auto {
            self.update_colors();
        }
    }

    fn update_colors(&mut self) {
        self.colors = self.mode.colors(self.system_is_dark);
    }
}

/// Wrapper for global theme entity
pub struct GlobalTheme(pub Entity<AppTheme>);

impl Global for GlobalTheme {}

/// Get the current theme colors from the global theme entity
pub fn theme(cx: &App) -> ThemeColors {
    cx.global::<GlobalTheme>().0.read(cx).colors
}

/// Get the theme entity for observation
pub fn theme_entity(cx: &App) -> Entity<AppTheme> {
    cx.global::<GlobalTheme>().0.clone()
}

/// Whether a window appearance counts as dark
pub fn is_dark_appearance(appearance: WindowAppearance) -> bool {
    matches!(
        appearance,
        WindowAppearance::Dark | WindowAppearance::VibrantDark
    )
}
