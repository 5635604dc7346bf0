//! Color algebra.
//!
//! Every operation returns a new [`Color`]; operands are never modified.
//! Use [`Color::assign`] to write a result back in place.
//!
//! Channel math works on the unnormalized ratios, with no intermediate
//! rounding. HSL operations (shifts and hue rotations) return `Hsl`-kind
//! colors; blending operations keep the first operand's kind when the
//! result can still be written that way.

use crate::arg::ColorArg;
use crate::color::{Color, ColorKind};
use crate::error::{ColorError, Result};
use crate::hsl::{Hsl, hsl_to_rgb, normalize_hue};
use crate::normalize::{normalize_amount, normalize_ratio, wrap_turn};

/// Ratio used by [`Color::average`].
pub const DEFAULT_MIX_RATIO: f64 = 0.5;

/// Default length of a [`Color::step`] gradient.
pub const DEFAULT_STEPS: usize = 10;

/// Default lighten/darken/saturate/desaturate amount, in percent.
pub const DEFAULT_SHIFT_PERCENT: i64 = 10;

/// Default rotate/warmer/cooler amount, in degrees.
pub const DEFAULT_ROTATION_DEGREES: i64 = 10;

/// Red, as a fraction of the hue circle.
pub const WARMEST_HUE: f64 = 0.0;

/// Blue (240°), as a fraction of the hue circle.
pub const COLDEST_HUE: f64 = 240.0 / 360.0;

// Hues closer than this to a reference hue count as sitting on it
const HUE_TOLERANCE: f64 = 1e-9;

impl Color {
    /// Blend toward `other`: `self * (1 - ratio) + other * ratio`, on each
    /// channel and on alpha.
    ///
    /// ```
    /// use tincture_color::Color;
    ///
    /// let gray = Color::BLACK.mix(&Color::WHITE, 0.5).unwrap();
    /// assert!((gray.r() - 0.5).abs() < 1e-9);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::RatioRange`]
    /// when `ratio` is outside `0.0..=1.0`.
    pub fn mix(&self, other: &Self, ratio: f64) -> Result<Self> {
        Ok(self.lerp_with(other, normalize_ratio(ratio)?))
    }

    /// Even blend of two colors.
    #[must_use]
    pub fn average(&self, other: &Self) -> Self {
        self.lerp_with(other, DEFAULT_MIX_RATIO)
    }

    fn lerp_with(&self, other: &Self, ratio: f64) -> Self {
        let lerp = |a: f64, b: f64| a * (1.0 - ratio) + b * ratio;
        let rgb = [
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        ];
        self.derive(rgb, lerp(self.alpha, other.alpha))
    }

    /// Composite `top` over this color.
    ///
    /// Channels are weighted by the top color's alpha. The resulting alpha
    /// is `base + (1 - base) * blender`, where `base` is the larger of the
    /// two alphas and `blender` the smaller; it is exactly `1.0` when either
    /// layer is opaque.
    #[must_use]
    pub fn layer(&self, top: &Self) -> Self {
        let over = |under: f64, above: f64| above * top.alpha + under * (1.0 - top.alpha);
        let rgb = [
            over(self.r, top.r),
            over(self.g, top.g),
            over(self.b, top.b),
        ];

        let base = self.alpha.max(top.alpha);
        let blender = self.alpha.min(top.alpha);
        let alpha = if base >= 1.0 {
            1.0
        } else {
            base + (1.0 - base) * blender
        };
        self.derive(rgb, alpha)
    }

    /// A gradient of `count` colors from this color to `end`, inclusive.
    ///
    /// `count == 0` gives an empty gradient and `count == 1` just this
    /// color.
    #[must_use]
    pub fn step(&self, end: &Self, count: usize) -> Vec<Self> {
        match count {
            0 => Vec::new(),
            1 => vec![self.clone()],
            _ => {
                let last = (count - 1) as f64;
                (0..count)
                    .map(|i| self.lerp_with(end, i as f64 / last))
                    .collect()
            }
        }
    }

    /// Raise HSL lightness by `amount`, clamped at full lightness.
    ///
    /// Integers and strings are percentages, floats are ratios: `20`,
    /// `"20%"` and `0.2` all lighten by a fifth.
    ///
    /// # Errors
    ///
    /// Range errors for an out of range amount.
    pub fn lighten(&self, amount: impl Into<ColorArg>) -> Result<Self> {
        let amount = normalize_amount(&amount.into())?;
        Ok(self.with_hsl(|hsl| hsl.l = (hsl.l + amount).min(1.0)))
    }

    /// Lower HSL lightness by `amount`, clamped at black.
    ///
    /// # Errors
    ///
    /// Range errors for an out of range amount.
    pub fn darken(&self, amount: impl Into<ColorArg>) -> Result<Self> {
        let amount = normalize_amount(&amount.into())?;
        Ok(self.with_hsl(|hsl| hsl.l = (hsl.l - amount).max(0.0)))
    }

    /// Raise HSL saturation by `amount`, clamped at full saturation.
    ///
    /// # Errors
    ///
    /// Range errors for an out of range amount.
    pub fn saturate(&self, amount: impl Into<ColorArg>) -> Result<Self> {
        let amount = normalize_amount(&amount.into())?;
        Ok(self.with_hsl(|hsl| hsl.s = (hsl.s + amount).min(1.0)))
    }

    /// Lower HSL saturation by `amount`, clamped at gray.
    ///
    /// # Errors
    ///
    /// Range errors for an out of range amount.
    pub fn desaturate(&self, amount: impl Into<ColorArg>) -> Result<Self> {
        let amount = normalize_amount(&amount.into())?;
        Ok(self.with_hsl(|hsl| hsl.s = (hsl.s - amount).max(0.0)))
    }

    /// Alias of [`Color::saturate`].
    ///
    /// # Errors
    ///
    /// Range errors for an out of range amount.
    pub fn brighten(&self, amount: impl Into<ColorArg>) -> Result<Self> {
        self.saturate(amount)
    }

    /// Alias of [`Color::desaturate`].
    ///
    /// # Errors
    ///
    /// Range errors for an out of range amount.
    pub fn dull(&self, amount: impl Into<ColorArg>) -> Result<Self> {
        self.desaturate(amount)
    }

    /// Rotate the hue. Integers and `"deg"` strings are degrees, `"%"`
    /// strings are percent of the circle and floats are fractions of it.
    ///
    /// ```
    /// use tincture_color::Color;
    ///
    /// let red = Color::keyword("red").unwrap();
    /// let green = red.rotate(120).unwrap();
    /// assert_eq!(green.bytes(), [0, 255, 0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Range errors for an out of range amount, or
    /// [`ColorError::Unrecognized`] when
    /// the amount is not a hue.
    pub fn rotate(&self, amount: impl Into<ColorArg>) -> Result<Self> {
        Ok(self.rotate_turns(hue_amount(&amount.into())?))
    }

    /// Rotate the hue by a fraction of the circle. Negative turns rotate
    /// backwards.
    #[must_use]
    pub fn rotate_turns(&self, turns: f64) -> Self {
        self.with_hsl(|hsl| hsl.h = wrap_turn(hsl.h + turns))
    }

    /// The opposite hue.
    #[must_use]
    pub fn compliment(&self) -> Self {
        self.rotate_turns(0.5)
    }

    /// `count` colors spread evenly around the hue circle, the first rotated
    /// by `offset`.
    ///
    /// # Errors
    ///
    /// Range errors for an out of range offset.
    pub fn dial(&self, count: usize, offset: impl Into<ColorArg>) -> Result<Vec<Self>> {
        let offset = hue_amount(&offset.into())?;
        Ok((0..count)
            .map(|i| self.rotate_turns((offset + i as f64 / count as f64) % 1.0))
            .collect())
    }

    /// Three colors a third of the circle apart.
    ///
    /// # Errors
    ///
    /// Range errors for an out of range offset.
    pub fn triangulate(&self, offset: impl Into<ColorArg>) -> Result<Vec<Self>> {
        self.dial(3, offset)
    }

    /// Move the hue toward red.
    ///
    /// Hues between red and blue move down, never past red; hues beyond
    /// blue move up toward 360°. Red and blue themselves are unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`Color::rotate`].
    pub fn warmer(&self, amount: impl Into<ColorArg>) -> Result<Self> {
        let amount = hue_amount(&amount.into())?;
        let h = self.to_hsl().h;
        if near(h, WARMEST_HUE) || near(h, COLDEST_HUE) {
            return Ok(self.clone());
        }
        let target = if h < COLDEST_HUE {
            (h - amount).max(WARMEST_HUE)
        } else {
            (h + amount).min(1.0)
        };
        Ok(self.with_hsl(|hsl| hsl.h = wrap_turn(target)))
    }

    /// Move the hue toward blue, from either side, never past it. Red and
    /// blue are left alone.
    ///
    /// # Errors
    ///
    /// Same as [`Color::rotate`].
    pub fn cooler(&self, amount: impl Into<ColorArg>) -> Result<Self> {
        let amount = hue_amount(&amount.into())?;
        let h = self.to_hsl().h;
        if near(h, WARMEST_HUE) || near(h, COLDEST_HUE) {
            return Ok(self.clone());
        }
        let target = if h < COLDEST_HUE {
            (h + amount).min(COLDEST_HUE)
        } else {
            (h - amount).max(COLDEST_HUE)
        };
        Ok(self.with_hsl(|hsl| hsl.h = target))
    }

    /// The average hue, saturation, lightness and alpha of `colors`.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn consensus(colors: &[Self]) -> Option<Self> {
        let first = colors.first()?;
        let count = colors.len() as f64;
        let (mut h, mut s, mut l, mut alpha) = (0.0, 0.0, 0.0, 0.0);
        for color in colors {
            let hsl = color.to_hsl();
            h += hsl.h;
            s += hsl.s;
            l += hsl.l;
            alpha += color.alpha;
        }
        let average = Hsl::new(h / count, s / count, l / count);

        let mut color = Self::from_computed(hsl_to_rgb(average), alpha / count, ColorKind::Hsl);
        color.background.clone_from(&first.background);
        Some(color)
    }

    /// Black or white, whichever reads better on top of this color.
    #[must_use]
    pub fn contrast(&self) -> Self {
        let channel = if self.to_hsl().l < 0.5 { 1.0 } else { 0.0 };
        Self::from_parts([channel; 3], 1.0, ColorKind::Hex)
    }

    /// Edit this color's HSL form, producing an `Hsl`-kind color with the
    /// same alpha and background.
    fn with_hsl(&self, edit: impl FnOnce(&mut Hsl)) -> Self {
        let mut hsl = self.to_hsl();
        edit(&mut hsl);
        let mut color = Self::from_computed(hsl_to_rgb(hsl), self.alpha, ColorKind::Hsl);
        color.background.clone_from(&self.background);
        color
    }

    /// A blend result: keeps this color's kind where possible and its
    /// background.
    fn derive(&self, rgb: [f64; 3], alpha: f64) -> Self {
        let mut color = Self::from_computed(rgb, alpha, self.kind).preferring(self.kind);
        color.background.clone_from(&self.background);
        color
    }
}

fn hue_amount(amount: &ColorArg) -> Result<f64> {
    normalize_hue(amount)?.ok_or_else(|| ColorError::Unrecognized {
        input: amount.to_string(),
        expected: "a hue",
    })
}

fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < HUE_TOLERANCE
}
