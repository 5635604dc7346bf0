//! Numeric normalizers.
//!
//! Pure functions that turn heterogeneous input (byte integers, ratio
//! floats, percentage strings, degree strings) into the canonical internal
//! units: bytes `0..=255` and ratios `0.0..=1.0`.
//!
//! Normalizers never clamp. A value outside its domain is a range error.
//! Functions returning `Result<Option<f64>>` use `Ok(None)` for "this value
//! is not of my shape", which lets the autodetection pipeline try another
//! interpretation.

use crate::arg::ColorArg;
use crate::error::{ColorError, Result};

/// Suffixes that mark a string as a degree value, longest first.
pub const DEGREE_SUFFIXES: [&str; 2] = ["degrees", "deg"];

/// Check a byte and convert it to a ratio.
///
/// # Errors
///
/// Returns [`ColorError::ByteRange`] if `value` is outside `0..=255`.
pub fn normalize_byte(value: i64) -> Result<f64> {
    if !(0..=255).contains(&value) {
        return Err(ColorError::ByteRange {
            value,
            channel: None,
        });
    }
    Ok(value as f64 / 255.0)
}

/// Check a percentage and return it on the `0..=100` scale.
///
/// Accepts integers, floats and strings shaped like `"33.5%"`.
///
/// # Errors
///
/// Returns [`ColorError::PercentageRange`] if the number is outside
/// `0..=100`, or [`ColorError::Unrecognized`] for text that is not a
/// percentage.
pub fn normalize_percentage(value: &ColorArg) -> Result<f64> {
    let number = match value {
        ColorArg::Int(n) => *n as f64,
        ColorArg::Float(n) => *n,
        ColorArg::Text(text) => parse_percentage(text)?.ok_or_else(|| ColorError::Unrecognized {
            input: text.clone(),
            expected: "a percentage",
        })?,
        ColorArg::Symbol(name) => {
            return Err(ColorError::Unrecognized {
                input: name.clone(),
                expected: "a percentage",
            });
        }
    };
    check_percentage(number)
}

/// Convert a percentage to a byte: `round(p * 2.55)`.
///
/// # Errors
///
/// Same as [`normalize_percentage`].
pub fn percentage_to_byte(value: &ColorArg) -> Result<u8> {
    Ok((normalize_percentage(value)? * 2.55).round() as u8)
}

/// Convert a byte to a whole percentage: `round(b / 2.55)`.
///
/// # Errors
///
/// Returns [`ColorError::ByteRange`] if `value` is outside `0..=255`.
pub fn byte_to_percentage(value: i64) -> Result<u8> {
    let _ = normalize_byte(value)?;
    Ok((value as f64 / 2.55).round() as u8)
}

/// Check a ratio, returning it unchanged.
///
/// # Errors
///
/// Returns [`ColorError::RatioRange`] if `value` is outside `0.0..=1.0`.
pub fn normalize_ratio(value: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorError::RatioRange {
            value,
            channel: None,
        });
    }
    Ok(value)
}

/// Convert a ratio to a byte: `round(v * 255)`.
///
/// # Errors
///
/// Returns [`ColorError::RatioRange`] if `value` is outside `0.0..=1.0`.
pub fn ratio_to_byte(value: f64) -> Result<u8> {
    Ok((normalize_ratio(value)? * 255.0).round() as u8)
}

/// Interpret a value as a hue and return it as a fraction of the circle.
///
/// - integers are raw degrees, wrapped into `[0, 360)` (`-127` is `233`)
/// - floats in `0.0..=1.0` are already fractions of the circle; other
///   floats are raw degrees
/// - `"42deg"` / `"42degrees"` are degrees
/// - `"25%"` is a quarter turn
///
/// Bare numeric strings such as `"42"` are not degrees and yield `None`, as
/// do degree strings whose number is not finite (`"infdeg"`).
///
/// # Errors
///
/// Returns [`ColorError::PercentageRange`] for an out of range percentage
/// string, or [`ColorError::Unrecognized`] for a float that is infinite or
/// NaN.
pub fn normalize_degrees(value: &ColorArg) -> Result<Option<f64>> {
    match value {
        ColorArg::Int(n) => Ok(Some(wrap_degrees(*n as f64))),
        ColorArg::Float(n) if !n.is_finite() => Err(ColorError::Unrecognized {
            input: n.to_string(),
            expected: "a finite hue",
        }),
        ColorArg::Float(n) if (0.0..=1.0).contains(n) => Ok(Some(wrap_turn(*n))),
        ColorArg::Float(n) => Ok(Some(wrap_degrees(*n))),
        ColorArg::Text(text) => {
            if let Some(degrees) = parse_degrees(text) {
                return Ok(degrees.map(wrap_degrees));
            }
            Ok(parse_percentage(text)?.map(|p| wrap_turn(p / 100.0)))
        }
        ColorArg::Symbol(_) => Ok(None),
    }
}

/// Normalize an RGB channel to a ratio.
///
/// Tried in order: percentage string, degree string (never an RGB channel),
/// float as ratio, integer (or integer string) as byte.
///
/// # Errors
///
/// Range errors from the matching interpretation.
pub fn normalize_for_rgb(value: &ColorArg) -> Result<Option<f64>> {
    match value {
        ColorArg::Text(text) => {
            if let Some(percentage) = parse_percentage(text)? {
                return Ok(Some(percentage / 100.0));
            }
            if parse_degrees(text).is_some() {
                return Ok(None);
            }
            text.trim()
                .parse::<i64>()
                .ok()
                .map(normalize_byte)
                .transpose()
        }
        ColorArg::Float(n) => normalize_ratio(*n).map(Some),
        ColorArg::Int(n) => normalize_byte(*n).map(Some),
        ColorArg::Symbol(_) => Ok(None),
    }
}

/// Normalize a saturation or lightness value to a ratio.
///
/// Same order as [`normalize_for_rgb`], except that degree strings are
/// accepted and read as a fraction of the circle.
///
/// # Errors
///
/// Range errors from the matching interpretation.
pub fn normalize_for_hsl(value: &ColorArg) -> Result<Option<f64>> {
    match value {
        ColorArg::Text(text) if parse_degrees(text).is_some() => normalize_degrees(value),
        _ => normalize_for_rgb(value),
    }
}

/// Normalize an alpha value to a ratio.
///
/// Integers and strings are percentages, floats are ratios.
///
/// # Errors
///
/// Returns [`ColorError::AlphaRange`] when the value falls outside
/// `0.0..=1.0`, or [`ColorError::Unrecognized`] for unusable text.
pub fn normalize_alpha(value: &ColorArg) -> Result<f64> {
    let alpha = match value {
        ColorArg::Float(n) => normalize_ratio(*n),
        _ => normalize_percentage(value).map(|p| p / 100.0),
    };
    alpha.map_err(|err| match err {
        ColorError::PercentageRange { value, .. } => ColorError::AlphaRange {
            value: value / 100.0,
        },
        ColorError::RatioRange { value, .. } => ColorError::AlphaRange { value },
        other => other,
    })
}

/// Normalize the amount for a lighten/darken/saturate/desaturate shift.
///
/// Integers and strings are percentages, floats are ratios. The result is
/// a ratio.
///
/// # Errors
///
/// Range errors, or [`ColorError::Unrecognized`] for unusable text.
pub fn normalize_amount(value: &ColorArg) -> Result<f64> {
    match value {
        ColorArg::Float(n) => normalize_ratio(*n),
        _ => normalize_percentage(value).map(|p| p / 100.0),
    }
}

/// Wrap a fraction of the circle into `[0, 1)`.
#[must_use]
pub fn wrap_turn(turn: f64) -> f64 {
    let wrapped = turn.rem_euclid(1.0);
    // rem_euclid rounds tiny negative inputs up to exactly 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Convert raw degrees to a fraction of the circle in `[0, 1)`.
#[must_use]
pub fn wrap_degrees(degrees: f64) -> f64 {
    wrap_turn(degrees / 360.0)
}

/// Parse `"<number>%"` into its number.
///
/// `Ok(None)` if the text is not percentage-shaped; an error if it is, but
/// the number is out of range or malformed. A sign makes the text a
/// percentage, so `"-5%"` is a range error.
fn parse_percentage(text: &str) -> Result<Option<f64>> {
    let Some(body) = text.trim().strip_suffix('%') else {
        return Ok(None);
    };
    let unsigned = body.strip_prefix(['-', '+']).unwrap_or(body);
    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Ok(None);
    }
    let number = body.parse::<f64>().map_err(|_| ColorError::Unrecognized {
        input: text.to_string(),
        expected: "a percentage",
    })?;
    check_percentage(number).map(Some)
}

/// Parse `"<number>deg"` or `"<number>degrees"`.
///
/// The outer `Option` says whether the text carries a degree marker; the
/// inner one whether the number in front of it parsed.
fn parse_degrees(text: &str) -> Option<Option<f64>> {
    let text = text.trim();
    let body = DEGREE_SUFFIXES
        .iter()
        .find_map(|suffix| text.strip_suffix(suffix))?;
    Some(body.trim().parse::<f64>().ok().filter(|n| n.is_finite()))
}

fn check_percentage(number: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&number) {
        return Err(ColorError::PercentageRange {
            value: number,
            channel: None,
        });
    }
    Ok(number)
}
