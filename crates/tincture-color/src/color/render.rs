//! CSS text output.
//!
//! [CSS Color Level 4 § 5 sRGB Colors](https://www.w3.org/TR/css-color-4/#numeric-srgb)
//!
//! Opaque colors render in the requested notation, or in their own kind's
//! notation when no mode is given. Translucent colors always carry their
//! alpha: as `hsla()` when HSL was asked for (or is the color's kind), as
//! `rgba()` otherwise. `flat` mode is the exception: it composites the
//! color onto its background and writes opaque hex, for consumers that do
//! not understand alpha.

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};
use tincture_common::warning::warn_once;

use crate::color::{Color, ColorKind};

/// Output notation for [`Color::render`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// `#rrggbb`
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)`, even when opaque.
    Rgba,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsla(h, s%, l%, a)`, even when opaque.
    Hsla,
    /// The color's keyword name, if it has one.
    Keyword,
    /// Opaque hex after compositing onto the background. Also parsed from
    /// `ie`.
    #[strum(to_string = "flat", serialize = "ie")]
    Flat,
}

impl Color {
    /// Render as CSS text.
    ///
    /// ```
    /// use tincture_color::{Color, RenderMode};
    ///
    /// let red = Color::keyword("red").unwrap();
    /// assert_eq!(red.render(None), "red");
    /// assert_eq!(red.render(Some(RenderMode::Rgb)), "rgb(255, 0, 0)");
    /// assert_eq!(red.render(Some(RenderMode::Hsla)), "hsla(0, 100%, 50%, 1)");
    /// ```
    #[must_use]
    pub fn render(&self, mode: Option<RenderMode>) -> String {
        if mode == Some(RenderMode::Flat) {
            return self.flatten().hex_string();
        }
        if self.is_transparent() && matches!(mode, None | Some(RenderMode::Keyword)) {
            return "transparent".to_string();
        }

        let wants_hsl = match mode {
            Some(mode) => matches!(mode, RenderMode::Hsl | RenderMode::Hsla),
            None => self.kind == ColorKind::Hsl,
        };
        if self.is_translucent() || matches!(mode, Some(RenderMode::Rgba | RenderMode::Hsla)) {
            return if wants_hsl {
                self.hsla_string()
            } else {
                self.rgba_string()
            };
        }

        match mode {
            Some(RenderMode::Hex) => self.hex_string(),
            Some(RenderMode::Rgb) => self.rgb_string(),
            Some(RenderMode::Hsl) => self.hsl_string(),
            Some(RenderMode::Keyword) => self.keyword_or_hex(),
            // handled above
            Some(RenderMode::Rgba | RenderMode::Hsla | RenderMode::Flat) => self.rgba_string(),
            None => match self.kind {
                ColorKind::Transparent | ColorKind::Keyword => self.keyword_or_hex(),
                ColorKind::Hex => self.hex_string(),
                ColorKind::Rgb => self.rgb_string(),
                ColorKind::Hsl => self.hsl_string(),
            },
        }
    }

    fn keyword_or_hex(&self) -> String {
        if let Some(name) = self.keyword_name() {
            return name.to_string();
        }
        let hex = self.hex_string();
        let _ = warn_once(
            "render",
            &format!("no keyword matches {hex}, rendering as hex"),
        );
        hex
    }

    fn rgb_string(&self) -> String {
        let [r, g, b] = self.bytes();
        format!("rgb({r}, {g}, {b})")
    }

    fn rgba_string(&self) -> String {
        let [r, g, b] = self.bytes();
        format!("rgba({r}, {g}, {b}, {})", format_alpha(self.alpha))
    }

    fn hsl_parts(&self) -> (i64, i64, i64) {
        let hsl = self.to_hsl();
        let degrees = hsl.hue_degrees().round() as i64 % 360;
        (
            degrees,
            (hsl.s * 100.0).round() as i64,
            (hsl.l * 100.0).round() as i64,
        )
    }

    fn hsl_string(&self) -> String {
        let (h, s, l) = self.hsl_parts();
        format!("hsl({h}, {s}%, {l}%)")
    }

    fn hsla_string(&self) -> String {
        let (h, s, l) = self.hsl_parts();
        format!("hsla({h}, {s}%, {l}%, {})", format_alpha(self.alpha))
    }
}

/// Alpha with at most three decimals and no trailing zeros: `0.5`, `0.333`,
/// `1`.
#[must_use]
pub fn format_alpha(alpha: f64) -> String {
    let text = format!("{alpha:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
