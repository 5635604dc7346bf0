//! The color value type.
//!
//! A [`Color`] holds canonical RGB ratios and alpha, tagged with the
//! [`ColorKind`] it was built from. The kind only selects the default
//! rendering; every other representation (hex digits, keyword name, HSL)
//! is derived from the channels on demand.

pub mod algebra;
pub mod build;
pub mod render;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{ColorError, Result};
use crate::hex::format_hex;
use crate::hsl::{Hsl, rgb_to_hsl};
use crate::keyword::keyword_for;

/// Two channels closer than this are considered the same.
///
/// Colors built through different notations round-trip through byte
/// quantization and must still compare equal.
pub const COMPARE_TOLERANCE: f64 = 0.001;

/// The notation a color was built from, and renders as by default.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    /// The `transparent` keyword: fully clear black.
    Transparent,
    /// A named color such as `linen`.
    Keyword,
    /// Hexadecimal notation, `#rrggbb`.
    Hex,
    /// `rgb()` notation.
    Rgb,
    /// `hsl()` notation.
    Hsl,
}

/// An sRGB color with alpha.
///
/// Channels and alpha are ratios in `0.0..=1.0`.
///
/// Equality (`==`) is tolerant: channels must agree within
/// [`COMPARE_TOLERANCE`] and alpha must be identical. Use
/// [`Color::matches`] to ignore alpha. Neither looks at the kind or the
/// background.
#[derive(Debug, Clone, Serialize)]
pub struct Color {
    pub(crate) r: f64,
    pub(crate) g: f64,
    pub(crate) b: f64,
    pub(crate) alpha: f64,
    pub(crate) kind: ColorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) background: Option<Box<Color>>,
}

impl Color {
    /// Fully clear black, the `transparent` keyword.
    pub const TRANSPARENT: Self = Self::from_parts([0.0, 0.0, 0.0], 0.0, ColorKind::Transparent);

    /// Opaque white, also the default background.
    pub const WHITE: Self = Self::from_parts([1.0, 1.0, 1.0], 1.0, ColorKind::Keyword);

    /// Opaque black.
    pub const BLACK: Self = Self::from_parts([0.0, 0.0, 0.0], 1.0, ColorKind::Keyword);

    pub(crate) const fn from_parts([r, g, b]: [f64; 3], alpha: f64, kind: ColorKind) -> Self {
        Self {
            r,
            g,
            b,
            alpha,
            kind,
            background: None,
        }
    }

    /// Channels computed by the algebra can drift past the unit range by
    /// rounding noise; pull them back in.
    pub(crate) fn from_computed(rgb: [f64; 3], alpha: f64, kind: ColorKind) -> Self {
        Self::from_parts(rgb.map(|c| c.clamp(0.0, 1.0)), alpha.clamp(0.0, 1.0), kind)
    }

    pub(crate) fn from_bytes_as(bytes: [u8; 3], kind: ColorKind) -> Self {
        Self::from_parts(bytes.map(|c| f64::from(c) / 255.0), 1.0, kind)
    }

    /// Build an opaque RGB color from byte channels.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_bytes_as(bytes, ColorKind::Rgb)
    }

    /// Red channel ratio.
    #[must_use]
    pub const fn r(&self) -> f64 {
        self.r
    }

    /// Green channel ratio.
    #[must_use]
    pub const fn g(&self) -> f64 {
        self.g
    }

    /// Blue channel ratio.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Alpha ratio; `1.0` is fully opaque.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The notation this color renders as by default.
    #[must_use]
    pub const fn kind(&self) -> ColorKind {
        self.kind
    }

    /// Channel ratios as an array.
    #[must_use]
    pub const fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels as bytes, rounded to nearest.
    #[must_use]
    pub fn bytes(&self) -> [u8; 3] {
        self.channels().map(|c| (c * 255.0).round() as u8)
    }

    /// The color in HSL form.
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.channels())
    }

    /// Lowercase six-digit hex notation, ignoring alpha.
    #[must_use]
    pub fn hex_string(&self) -> String {
        format_hex(self.bytes())
    }

    /// The first keyword whose bytes match this color exactly.
    #[must_use]
    pub fn keyword_name(&self) -> Option<&'static str> {
        keyword_for(self.bytes())
    }

    /// Whether this is the `transparent` keyword.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.kind == ColorKind::Transparent
    }

    /// Whether alpha is below `1.0`.
    #[must_use]
    pub fn is_translucent(&self) -> bool {
        self.alpha < 1.0
    }

    /// Whether the channels match within [`COMPARE_TOLERANCE`], ignoring
    /// alpha, kind and background.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.channels()
            .iter()
            .zip(other.channels())
            .all(|(a, b)| (a - b).abs() < COMPARE_TOLERANCE)
    }

    /// Overwrite this color's channels, alpha and kind with `other`'s.
    ///
    /// The background is kept. This is the in-place counterpart of the
    /// value-returning operations:
    ///
    /// ```
    /// use tincture_color::Color;
    ///
    /// let mut accent = Color::keyword("red").unwrap();
    /// accent.assign(&accent.lighten(20).unwrap());
    /// assert!(accent.to_hsl().l > 0.5);
    /// ```
    pub fn assign(&mut self, other: &Self) {
        self.r = other.r;
        self.g = other.g;
        self.b = other.b;
        self.alpha = other.alpha;
        self.kind = other.kind;
    }

    /// Whether this color can be written in `kind` without loss.
    #[must_use]
    pub fn expressible_as(&self, kind: ColorKind) -> bool {
        match kind {
            ColorKind::Transparent => {
                self.alpha == 0.0 && self.channels().iter().all(|c| *c == 0.0)
            }
            ColorKind::Keyword => self.keyword_name().is_some(),
            ColorKind::Hex | ColorKind::Rgb | ColorKind::Hsl => true,
        }
    }

    /// Re-tag this color as `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Keyword`] when no keyword matches the channels,
    /// or [`ColorError::Conversion`] when asked for `transparent` and the
    /// color is not fully clear black.
    pub fn to_kind(&self, kind: ColorKind) -> Result<Self> {
        if !self.expressible_as(kind) {
            return Err(match kind {
                ColorKind::Keyword => ColorError::Keyword {
                    name: self.hex_string(),
                },
                _ => ColorError::Conversion { kind },
            });
        }
        let mut color = self.clone();
        color.kind = kind;
        if kind == ColorKind::Transparent {
            color.background = None;
        }
        Ok(color)
    }

    /// Tag with `preferred` if the channels allow it, else with `Hex`.
    pub(crate) fn preferring(mut self, preferred: ColorKind) -> Self {
        self.kind = if self.expressible_as(preferred) {
            preferred
        } else {
            ColorKind::Hex
        };
        self
    }
}

impl PartialEq for Color {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.matches(other) && self.alpha == other.alpha
    }
}

/// Full equality, for collaborators that only hold a comparison capability.
#[must_use]
pub fn compare(a: &Color, b: &Color) -> bool {
    a == b
}
