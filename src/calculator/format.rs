//! Conversions between display text and numbers.
//!
//! The calculator keeps its display as text so partial input like `3.`
//! survives between presses. Results are written back with [`format_number`]
//! and shown on screen through [`render_display`].

use serde::Deserialize;

/// Display text longer than this switches to exponent notation.
pub const DEFAULT_MAX_DISPLAY_LEN: usize = 12;

/// Fractional digits shown in exponent notation.
pub const DEFAULT_EXPONENT_PRECISION: usize = 6;

/// Numbers with more integer digits than this are written in exponent form
/// (magnitudes from `1e21`).
const MAX_PLAIN_INTEGER_DIGITS: i32 = 21;

/// Numbers whose first significant digit sits further right than this are
/// written in exponent form (magnitudes below `1e-6`).
const MIN_PLAIN_DECIMAL_POINT: i32 = -5;

/// Fractional digits that hold any `f64` exactly in exponent notation.
const EXACT_PRECISION: usize = 800;

/// Options controlling how the display text is rendered on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Longest display text that is rendered verbatim.
    pub max_len: usize,
    /// Fractional digits used once the display switches to exponent form.
    pub exponent_precision: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_DISPLAY_LEN,
            exponent_precision: DEFAULT_EXPONENT_PRECISION,
        }
    }
}

/// Format a number as display text.
///
/// Produces the shortest text that parses back to the same value. Whole
/// numbers carry no fractional part, negative zero is written as `0`, and
/// very large or very small magnitudes use a signed exponent (`1e+21`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    let (digits, exponent) = scientific_digits(&format!("{magnitude:e}"));
    let digits = closest_shortest_digits(magnitude, digits, exponent);
    let text = plain_or_exponent(&digits, exponent);

    if value < 0.0 { format!("-{text}") } else { text }
}

/// Parse display text into a number.
///
/// Reads the longest numeric prefix, so partial input such as `3.` parses
/// as `3`. Text with no numeric prefix yields NaN.
pub fn parse_number(text: &str) -> f64 {
    match text {
        "Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    (1..=text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Render display text for the screen.
///
/// Text within `options.max_len` characters is shown as is. Longer text is
/// shown in exponent notation with `options.exponent_precision` fractional
/// digits. The stored display text is never changed by rendering.
pub fn render_display(display: &str, options: &DisplayOptions) -> String {
    if display.chars().count() <= options.max_len {
        return display.to_string();
    }

    let value = parse_number(display);
    if !value.is_finite() {
        return format_number(value);
    }

    to_exponential(value, options.exponent_precision)
}

/// Exponent notation with `precision` fractional digits, rounding exact
/// halves away from zero (`1234568.5` at precision 6 is `1.234569e+6`).
fn to_exponential(value: f64, precision: usize) -> String {
    let (exact, exponent) = scientific_digits(&format!("{:.*e}", EXACT_PRECISION, value.abs()));
    let (digits, carried) = round_digits(&exact, precision + 1, Tie::Up);
    let exponent = if carried { exponent + 1 } else { exponent };

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}{}", mantissa(&digits), signed_exponent(exponent))
}

/// How to round a value that sits exactly between two candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tie {
    Up,
    Even,
}

/// Split `d.ddde±x` text into its digit values and decimal exponent.
fn scientific_digits(text: &str) -> (Vec<u8>, i32) {
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    (digits, exponent.parse().unwrap_or(0))
}

/// Round `digits` to `len` significant digits.
///
/// Returns the rounded digits and whether rounding carried into a new
/// leading digit, which shifts the exponent up by one.
fn round_digits(digits: &[u8], len: usize, tie: Tie) -> (Vec<u8>, bool) {
    let mut kept: Vec<u8> = digits.iter().copied().take(len).collect();
    kept.resize(len, 0);
    let rest = digits.get(len..).unwrap_or(&[]);

    let round_up = match rest.split_first() {
        Some((&first, tail)) if first == 5 => {
            let exact_half = tail.iter().all(|&d| d == 0);
            !exact_half || tie == Tie::Up || kept.last().is_some_and(|d| d % 2 == 1)
        }
        Some((&first, _)) => first > 5,
        None => false,
    };
    if !round_up {
        return (kept, false);
    }

    for digit in kept.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return (kept, false);
        }
    }
    kept.insert(0, 1);
    kept.pop();
    (kept, true)
}

/// Among the shortest digit strings that parse back to `magnitude`, pick
/// the one closest to its exact value.
///
/// `{:e}` already yields a shortest string, but when two of that length
/// round-trip it does not always choose the nearer one.
fn closest_shortest_digits(magnitude: f64, shortest: Vec<u8>, exponent: i32) -> Vec<u8> {
    let (exact, exact_exponent) =
        scientific_digits(&format!("{:.*e}", EXACT_PRECISION, magnitude));
    if exact_exponent != exponent {
        return shortest;
    }

    let (closest, carried) = round_digits(&exact, shortest.len(), Tie::Even);
    if carried || closest == shortest {
        return shortest;
    }

    let shift = exponent - (closest.len() as i32 - 1);
    let candidate = format!("{}e{shift}", digit_text(&closest));
    if candidate.parse::<f64>().ok() == Some(magnitude) {
        closest
    } else {
        shortest
    }
}

/// Lay out significant digits as a plain decimal, or in exponent form when
/// the decimal point falls outside the plain range.
fn plain_or_exponent(digits: &[u8], exponent: i32) -> String {
    let text = digit_text(digits);
    let len = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    if len <= point && point <= MAX_PLAIN_INTEGER_DIGITS {
        format!("{text}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= MAX_PLAIN_INTEGER_DIGITS {
        let (integer, fraction) = text.split_at(point as usize);
        format!("{integer}.{fraction}")
    } else if MIN_PLAIN_DECIMAL_POINT <= point && point <= 0 {
        format!("0.{}{text}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        format!("{}{}", mantissa(digits), signed_exponent(exponent))
    }
}

/// `d.ddd`, or just `d` for a single digit.
fn mantissa(digits: &[u8]) -> String {
    let text = digit_text(digits);
    match text.split_at_checked(1) {
        Some((first, rest)) if !rest.is_empty() => format!("{first}.{rest}"),
        _ => text,
    }
}

fn signed_exponent(exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("e{sign}{}", exponent.unsigned_abs())
}

fn digit_text(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}
