//! Parsing CSS color notation.
//!
//! [CSS Color Level 4 § 4.1 The `<color>` syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
//!
//! Accepts `transparent`, keyword names, hex notation, and the `rgb()`,
//! `rgba()`, `hsl()` and `hsla()` functions in both the legacy comma form
//! (`rgb(255, 0, 0)`) and the space form with a slash before alpha
//! (`rgb(255 0 0 / 50%)`). Function arguments are turned into
//! [`ColorArg`]s and built through the explicit-kind protocol, so range
//! checking is the same as for programmatic construction.

use std::str::FromStr;

use tincture_common::warning::warn_once;

use crate::arg::ColorArg;
use crate::color::{Color, ColorKind};
use crate::error::{ColorError, Result};
use crate::hex::is_hex;
use crate::keyword::lookup;

const EXPECTED_COLOR: &str = "a CSS color";
const EXPECTED_NUMBER: &str = "a number or percentage";

impl FromStr for Color {
    type Err = ColorError;

    /// ```
    /// use tincture_color::Color;
    ///
    /// let color: Color = "hsla(120, 100%, 25%, 0.5)".parse().unwrap();
    /// assert_eq!(color.bytes(), [0, 128, 0]);
    /// assert_eq!(color.alpha(), 0.5);
    /// ```
    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }

        let Some((name, rest)) = text.split_once('(') else {
            return parse_single(text);
        };
        let body = rest
            .trim_end()
            .strip_suffix(')')
            .ok_or_else(|| unrecognized(text))?;

        let kind = match name.trim().to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => ColorKind::Rgb,
            "hsl" | "hsla" => ColorKind::Hsl,
            _ => return Err(unrecognized(text)),
        };
        parse_function(kind, body, text)
    }
}

/// A bare keyword or hex value.
fn parse_single(text: &str) -> Result<Color> {
    if is_hex(text) {
        Color::hex(text)
    } else if lookup(text).is_some() {
        Color::keyword(text)
    } else {
        Err(unrecognized(text))
    }
}

fn parse_function(kind: ColorKind, body: &str, text: &str) -> Result<Color> {
    let (channels, slash_alpha) = match body.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (body, None),
    };
    let tokens: Vec<&str> = channels
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    let [first, second, third, surplus @ ..] = tokens.as_slice() else {
        return Err(unrecognized(text));
    };
    let (alpha, ignored) = match (slash_alpha, surplus) {
        (Some(alpha), _) => (Some(alpha), surplus),
        (None, [alpha, ignored @ ..]) => (Some(*alpha), ignored),
        (None, []) => (None, surplus),
    };
    if !ignored.is_empty() {
        let _ = warn_once(
            "parse",
            &format!("ignoring extra arguments {ignored:?} in {text:?}"),
        );
    }

    let args = match kind {
        ColorKind::Hsl => vec![
            hue_arg(first)?,
            percentage_arg(second)?,
            percentage_arg(third)?,
        ],
        _ => vec![byte_arg(first)?, byte_arg(second)?, byte_arg(third)?],
    };

    let mut builder = Color::builder(args).kind(kind);
    if let Some(alpha) = alpha {
        builder = builder.alpha(alpha_arg(alpha)?);
    }
    builder.build()
}

/// RGB channels: percentages stay text, numbers round to bytes.
fn byte_arg(token: &str) -> Result<ColorArg> {
    if token.ends_with('%') {
        return Ok(ColorArg::from(token));
    }
    Ok(ColorArg::Int(number(token)?.round() as i64))
}

/// Bare hue numbers are degrees.
fn hue_arg(token: &str) -> Result<ColorArg> {
    if token.ends_with('%') || token.ends_with("deg") {
        return Ok(ColorArg::from(token));
    }
    let _ = number(token)?;
    Ok(ColorArg::Text(format!("{token}deg")))
}

/// Bare saturation and lightness numbers are percentages.
fn percentage_arg(token: &str) -> Result<ColorArg> {
    if token.ends_with('%') {
        return Ok(ColorArg::from(token));
    }
    let _ = number(token)?;
    Ok(ColorArg::Text(format!("{token}%")))
}

/// Numeric alpha is a ratio, `%` alpha a percentage.
fn alpha_arg(token: &str) -> Result<ColorArg> {
    if token.ends_with('%') {
        return Ok(ColorArg::from(token));
    }
    Ok(ColorArg::Float(number(token)?))
}

fn number(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ColorError::Unrecognized {
            input: token.to_string(),
            expected: EXPECTED_NUMBER,
        })
}

fn unrecognized(text: &str) -> ColorError {
    ColorError::Unrecognized {
        input: text.to_string(),
        expected: EXPECTED_COLOR,
    }
}
