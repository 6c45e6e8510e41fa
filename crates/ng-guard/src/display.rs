//! Element strings for a caller-side tensor renderer.

use ng_tensor::{ComputeBackend, DType, Tensor};
use terminal_size::{terminal_size_of, Width};

use crate::config::DisplayConfig;
use crate::error::Result;
use crate::guard::Guard;

impl<B: ComputeBackend> Guard<B> {
    /// Format every element of `x` in row-major order.
    ///
    /// Returns the strings and the widest string's length, for column
    /// alignment.
    pub fn prepare_to_string(&self, x: &Tensor) -> Result<(Vec<String>, usize)> {
        let values = self.to_flat_list(x)?;
        let items: Vec<String> = values
            .into_iter()
            .map(|v| format_element(v, x.dtype(), &self.display))
            .collect();
        let width = items.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        Ok((items, width))
    }
}

/// Fixed-point rendering with trailing zeros trimmed.
///
/// Integer formats also lose a trailing point ("3"); other formats keep one
/// fractional digit ("3.0"). Exponential output is left as is.
pub fn format_element(value: f64, dtype: DType, config: &DisplayConfig) -> String {
    let mut s = to_fixed(value, config.precision);
    if !s.contains('e') && s.contains('.') {
        trim_trailing(&mut s, '0');
    }
    if dtype.is_integer() {
        trim_trailing(&mut s, '.');
    } else if s.ends_with('.') {
        s.push('0');
    }
    s
}

/// Every finite `f64` has a terminating decimal expansion within this many
/// fractional digits.
const EXACT_DIGITS: usize = 1074;

/// Fixed-point text with `precision` fractional digits. Rounding works on the
/// exact decimal value, and exact halves go away from zero. Magnitudes from
/// 1e21 up switch to exponential notation with a signed exponent ("1e+21").
fn to_fixed(value: f64, precision: usize) -> String {
    // Normalize -0.0 so it prints as "0".
    let value = if value == 0.0 { 0.0 } else { value };
    if value.abs() >= 1e21 {
        return format!("{:e}", value).replacen('e', "e+", 1);
    }

    let precision = precision.min(EXACT_DIGITS);
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (whole, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(frac.bytes().take(precision))
        .collect();
    if frac.as_bytes().get(precision).is_some_and(|&d| d >= b'5') {
        round_up(&mut digits);
    }

    let int_len = digits.len() - precision;
    let mut s = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        s.push('-');
    }
    for (i, &d) in digits.iter().enumerate() {
        if i == int_len {
            s.push('.');
        }
        s.push(char::from(d));
    }
    s
}

/// Add one unit in the last place of a decimal digit string.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn trim_trailing(s: &mut String, c: char) {
    while s.ends_with(c) {
        s.pop();
    }
}

/// Character width of the terminal on stdout, or 0 when stdout is not a
/// terminal. Other streams are never consulted.
pub fn columns() -> usize {
    width_of(std::io::stdout())
}

#[cfg(unix)]
fn width_of<S: std::os::fd::AsFd>(stream: S) -> usize {
    match terminal_size_of(stream) {
        Some((Width(w), _)) => w as usize,
        None => 0,
    }
}

#[cfg(windows)]
fn width_of<S: std::os::windows::io::AsHandle>(stream: S) -> usize {
    match terminal_size_of(stream) {
        Some((Width(w), _)) => w as usize,
        None => 0,
    }
}
