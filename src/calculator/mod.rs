//! Calculator core: the input state machine behind the keypad.
//!
//! This module provides:
//! - Keypad buttons and their labels
//! - Operators and their evaluation
//! - The state machine that turns button presses into display text
//! - Formatting of display text for the screen

mod button;
mod format;
mod operator;
mod state;

pub use button::{
    Button, ButtonKind, ButtonParseError, Digit, KEYPAD_COLUMNS, KEYPAD_LAYOUT, KeypadKey,
};
pub use format::{
    DEFAULT_EXPONENT_PRECISION, DEFAULT_MAX_DISPLAY_LEN, DisplayOptions, format_number,
    parse_number, render_display,
};
pub use operator::Operator;
pub use state::{CalculatorState, Pending, press_labels};
