//! Theme colors shared by the comparison views.

use serde::{Deserialize, Serialize};

/// Theme mode preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the window appearance
    #[default]
    Auto,
}

/// All UI colors in one struct. `rgb` values unless the field says `rgba`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeColors {
    pub bg_page: u32,
    pub bg_placeholder: u32,
    pub text_primary: u32,
    pub text_muted: u32,

    // Divider
    pub handle: u32,
    pub knob: u32,
    pub knob_icon: u32,

    // Corner labels (rgba)
    pub label_bg: u32,
    pub label_text: u32,
}

pub const DARK_THEME: ThemeColors = ThemeColors {
    bg_page: 0x18181b,
    bg_placeholder: 0x27272a,
    text_primary: 0xe4e4e7,
    text_muted: 0xa1a1aa,
    handle: 0xffffff,
    knob: 0xffffff,
    knob_icon: 0x4b5563,
    label_bg: 0x00000080,
    label_text: 0xffffff,
};

pub const LIGHT_THEME: ThemeColors = ThemeColors {
    bg_page: 0xffffff,
    bg_placeholder: 0xe5e7eb,
    text_primary: 0x171717,
    text_muted: 0x6b7280,
    handle: 0xffffff,
    knob: 0xffffff,
    knob_icon: 0x4b5563,
    label_bg: 0x00000080,
    label_text: 0xffffff,
};

impl ThemeMode {
    /// Resolve to concrete colors given the current system appearance.
    pub fn colors(self, system_is_dark: bool) -> ThemeColors {
        match self {
            ThemeMode::Light => LIGHT_THEME,
            ThemeMode::Dark => DARK_THEME,
            ThemeMode::Auto => {
                if system_is_dark {
                    DARK_THEME
                } else {
                    LIGHT_THEME
                }
            }
        }
    }
}
