//! Colors and sizes for the calculator window.

use crate::calculator::ButtonKind;
use gpui::{Hsla, Pixels, hsla, px};
use lazy_static::lazy_static;

/// Visual settings for the calculator.
#[derive(Clone, Debug)]
pub struct CalculatorTheme {
    pub window_background: Hsla,
    pub window_padding: Pixels,

    pub title_color: Hsla,
    pub title_size: Pixels,

    pub panel_background: Hsla,
    pub panel_border: Hsla,
    pub panel_padding: Pixels,
    pub panel_radius: Pixels,

    pub display_background: Hsla,
    pub display_color: Hsla,
    pub display_text_size: Pixels,
    pub display_padding: Pixels,

    pub key_height: Pixels,
    pub key_gap: Pixels,
    pub key_radius: Pixels,
    pub key_text_size: Pixels,
    pub key_text_color: Hsla,

    pub digit_key: KeyColors,
    pub function_key: KeyColors,
    pub operator_key: KeyColors,
}

/// Background colors of one key variant.
#[derive(Clone, Copy, Debug)]
pub struct KeyColors {
    pub background: Hsla,
    pub hover: Hsla,
}

impl CalculatorTheme {
    /// Colors for a key of the given kind.
    pub fn key_colors(&self, kind: ButtonKind) -> KeyColors {
        match kind {
            ButtonKind::Digit => self.digit_key,
            ButtonKind::Function => self.function_key,
            ButtonKind::Operator => self.operator_key,
        }
    }
}

impl Default for CalculatorTheme {
    fn default() -> Self {
        Self {
            // Deep slate with a purple cast
            window_background: hsla(260.0 / 360.0, 0.35, 0.12, 1.0),
            window_padding: px(16.0),

            title_color: hsla(0.0, 0.0, 1.0, 1.0),
            title_size: px(32.0),

            panel_background: hsla(0.0, 0.0, 0.0, 0.2),
            panel_border: hsla(0.0, 0.0, 1.0, 0.1),
            panel_padding: px(24.0),
            panel_radius: px(12.0),

            display_background: hsla(0.0, 0.0, 0.0, 0.3),
            display_color: hsla(0.0, 0.0, 1.0, 1.0),
            display_text_size: px(36.0),
            display_padding: px(16.0),

            key_height: px(64.0),
            key_gap: px(12.0),
            key_radius: px(8.0),
            key_text_size: px(20.0),
            key_text_color: hsla(0.0, 0.0, 1.0, 1.0),

            digit_key: KeyColors {
                background: hsla(220.0 / 360.0, 0.09, 0.28, 0.5),
                hover: hsla(220.0 / 360.0, 0.09, 0.38, 0.5),
            },
            function_key: KeyColors {
                background: hsla(220.0 / 360.0, 0.09, 0.38, 1.0),
                hover: hsla(220.0 / 360.0, 0.09, 0.46, 1.0),
            },
            operator_key: KeyColors {
                background: hsla(25.0 / 360.0, 0.95, 0.53, 1.0),
                hover: hsla(27.0 / 360.0, 0.96, 0.61, 1.0),
            },
        }
    }
}

lazy_static! {
    static ref THEME: CalculatorTheme = CalculatorTheme::default();
}

/// The active theme.
pub fn theme() -> &'static CalculatorTheme {
    &THEME
}
