//! HSL <-> RGB conversion.
//!
//! [CSS Color Level 4 § 7 HSL Colors](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
//!
//! All components are ratios: hue is a fraction of the full circle in
//! `[0, 1)`, saturation and lightness are in `0.0..=1.0`.

use serde::Serialize;

use crate::arg::ColorArg;
use crate::error::Result;
use crate::normalize::{
    normalize_degrees, normalize_percentage, normalize_ratio, wrap_degrees, wrap_turn,
};

/// A color in HSL form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    /// Hue as a fraction of the circle, `[0, 1)`.
    pub h: f64,
    /// Saturation, `0.0..=1.0`.
    pub s: f64,
    /// Lightness, `0.0..=1.0`.
    pub l: f64,
}

impl Hsl {
    /// Create an HSL triple from ratios.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Hue in degrees, `[0, 360)`.
    #[must_use]
    pub fn hue_degrees(self) -> f64 {
        self.h * 360.0
    }
}

/// [§ 7.1 Converting HSL Colors to sRGB](https://www.w3.org/TR/css-color-4/#hsl-to-rgb)
///
/// ```text
/// m2 = l <= 0.5 ? l * (1 + s) : l + s - l * s
/// m1 = 2 * l - m2
/// r, g, b = component(h + 1/3), component(h), component(h - 1/3)
/// ```
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> [f64; 3] {
    let Hsl { h, s, l } = hsl;
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    [
        hue_component(m1, m2, h + 1.0 / 3.0),
        hue_component(m1, m2, h),
        hue_component(m1, m2, h - 1.0 / 3.0),
    ]
}

fn hue_component(m1: f64, m2: f64, t: f64) -> f64 {
    // h is already in [0, 1); only the ±1/3 shift can leave the range
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    let value = if t * 6.0 < 1.0 {
        m1 + (m2 - m1) * t * 6.0
    } else if t * 2.0 < 1.0 {
        m2
    } else if t * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - t) * 6.0
    } else {
        m1
    };
    value.clamp(0.0, 1.0)
}

/// Extract HSL from RGB ratios.
///
/// Lightness is the midpoint of the extreme channels. Saturation divides the
/// chroma by `2 - max - min` above the lightness midpoint and by
/// `max + min` below it. Hue comes from whichever channel is largest.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl([r, g, b]: [f64; 3]) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta <= f64::EPSILON {
        // Achromatic
        return Hsl::new(0.0, 0.0, l);
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    Hsl::new(wrap_turn(h / 6.0), s.clamp(0.0, 1.0), l)
}

/// Interpret a value as a hue (or hue shift), as a fraction of the circle.
///
/// - `"120deg"` / `"120degrees"`: degrees
/// - `"50%"`: percent of the full circle
/// - floats: ratios, domain-checked to `0.0..=1.0`
/// - integers: raw degrees, wrapped (`-20` is `340`)
///
/// Anything else yields `None`.
///
/// # Errors
///
/// Range errors for out of range percentages and ratios.
pub fn normalize_hue(value: &ColorArg) -> Result<Option<f64>> {
    match value {
        ColorArg::Text(text) if text.trim().ends_with('%') => {
            Ok(Some(wrap_turn(normalize_percentage(value)? / 100.0)))
        }
        ColorArg::Text(_) => normalize_degrees(value),
        ColorArg::Float(n) => Ok(Some(wrap_turn(normalize_ratio(*n)?))),
        ColorArg::Int(n) => Ok(Some(wrap_degrees(*n as f64))),
        ColorArg::Symbol(_) => Ok(None),
    }
}
