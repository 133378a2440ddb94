//! Keypad buttons and their labels.

use super::operator::Operator;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, returning `None` for values above 9.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Self(value)) } else { None }
    }

    pub const fn label(self) -> &'static str {
        DIGIT_LABELS[self.0 as usize]
    }
}

/// A button on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Digit(Digit),
    DecimalPoint,
    Clear,
    ToggleSign,
    Percentage,
    Operator(Operator),
    Equals,
}

/// Visual grouping of buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits and the decimal point.
    Digit,
    /// `AC`, `±` and `%`.
    Function,
    /// The four operators and `=`.
    Operator,
}

/// Error returned when a label does not name a keypad button.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown button label: {0:?}")]
pub struct ButtonParseError(pub String);

impl Button {
    /// The label printed on the button.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Digit(digit) => digit.label(),
            Self::DecimalPoint => ".",
            Self::Clear => "AC",
            Self::ToggleSign => "±",
            Self::Percentage => "%",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
        }
    }

    /// Look up a button by its label.
    pub fn from_label(label: &str) -> Result<Self, ButtonParseError> {
        let button = match label {
            "." => Self::DecimalPoint,
            "AC" => Self::Clear,
            "±" => Self::ToggleSign,
            "%" => Self::Percentage,
            "=" => Self::Equals,
            _ => {
                if let Some(index) = DIGIT_LABELS.iter().position(|&d| d == label) {
                    Self::Digit(Digit(index as u8))
                } else {
                    match Operator::from_symbol(label) {
                        Some(op) if op != Operator::Equals => Self::Operator(op),
                        _ => return Err(ButtonParseError(label.to_string())),
                    }
                }
            }
        };
        Ok(button)
    }

    pub const fn kind(self) -> ButtonKind {
        match self {
            Self::Digit(_) | Self::DecimalPoint => ButtonKind::Digit,
            Self::Clear | Self::ToggleSign | Self::Percentage => ButtonKind::Function,
            Self::Operator(_) | Self::Equals => ButtonKind::Operator,
        }
    }
}

impl FromStr for Button {
    type Err = ButtonParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A button placed on the keypad grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeypadKey {
    pub button: Button,
    /// Number of grid columns the key spans.
    pub columns: u8,
}

/// Number of columns in the keypad grid.
pub const KEYPAD_COLUMNS: usize = 4;

const fn key(button: Button) -> KeypadKey {
    KeypadKey { button, columns: 1 }
}

const fn digit(value: u8) -> KeypadKey {
    key(Button::Digit(Digit(value)))
}

const fn operator(op: Operator) -> KeypadKey {
    key(Button::Operator(op))
}

/// Rows of the keypad, top to bottom.
pub const KEYPAD_LAYOUT: [&[KeypadKey]; 5] = [
    &[
        key(Button::Clear),
        key(Button::ToggleSign),
        key(Button::Percentage),
        operator(Operator::Divide),
    ],
    &[digit(7), digit(8), digit(9), operator(Operator::Multiply)],
    &[digit(4), digit(5), digit(6), operator(Operator::Subtract)],
    &[digit(1), digit(2), digit(3), operator(Operator::Add)],
    &[
        KeypadKey {
            button: Button::Digit(Digit(0)),
            columns: 2,
        },
        key(Button::DecimalPoint),
        key(Button::Equals),
    ],
];
