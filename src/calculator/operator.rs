//! Binary operators and their evaluation.

use std::fmt;

/// An arithmetic operator that can be pending between two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Resolves to the right-hand operand. Never produced by a keypad press.
    Equals,
}

impl Operator {
    /// The symbol shown on the keypad.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Equals => "=",
        }
    }

    /// Look up an operator by symbol.
    ///
    /// ASCII spellings (`-`, `*`, `x`, `/`) are accepted next to the keypad
    /// symbols so operators can be typed from a plain shell.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "−" | "-" => Some(Self::Subtract),
            "×" | "*" | "x" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            "=" => Some(Self::Equals),
            _ => None,
        }
    }

    /// Evaluate `lhs <op> rhs`.
    ///
    /// Division follows IEEE-754: dividing by zero yields an infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Equals => rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
