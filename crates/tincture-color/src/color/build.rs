//! Color construction.
//!
//! Two protocols:
//!
//! - **Explicit kind**: the caller names the [`ColorKind`] and the arguments
//!   go straight to that kind's builder.
//! - **Autodetection**: the arguments are offered to an ordered list of
//!   probes; the first probe that recognizes their shape builds the color.
//!   A probe answers `None` for "not my shape" and `Some(Err(..))` for "my
//!   shape, but invalid", so a recognized but broken argument reports its
//!   own error instead of falling through to the next notation.

use crate::arg::{ColorArg, describe};
use crate::color::{Color, ColorKind};
use crate::error::{Channel, ColorError, Result};
use crate::hex::{is_hex, parse_hex};
use crate::hsl::{Hsl, hsl_to_rgb, normalize_hue};
use crate::keyword::{lookup, parse_keyword};
use crate::normalize::{
    normalize_alpha, normalize_degrees, normalize_for_hsl, normalize_for_rgb, wrap_degrees,
};

/// The largest RGB byte. A bare first number above it can only be a hue.
const MAX_BYTE: f64 = 255.0;

/// A background given either as a finished color or as construction
/// arguments.
#[derive(Debug, Clone)]
pub enum Background {
    /// An existing color.
    Color(Box<Color>),
    /// Arguments for the construction protocol.
    Args(Vec<ColorArg>),
}

impl Background {
    fn resolve(self) -> Result<Color> {
        match self {
            Self::Color(color) => Ok(*color),
            Self::Args(args) => Color::new(args),
        }
    }
}

impl From<Color> for Background {
    fn from(color: Color) -> Self {
        Self::Color(Box::new(color))
    }
}

impl From<Vec<ColorArg>> for Background {
    fn from(args: Vec<ColorArg>) -> Self {
        Self::Args(args)
    }
}

impl From<&str> for Background {
    fn from(text: &str) -> Self {
        Self::Args(vec![ColorArg::from(text)])
    }
}

/// Collects construction arguments and options.
///
/// ```
/// use tincture_color::{color_args, Color, ColorKind};
///
/// let shadow = Color::builder(color_args![0, 0, 0])
///     .kind(ColorKind::Rgb)
///     .alpha(0.25)
///     .background("#ffeedd")
///     .build()
///     .unwrap();
/// assert_eq!(shadow.alpha(), 0.25);
/// assert!(shadow.has_background());
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct ColorBuilder {
    args: Vec<ColorArg>,
    kind: Option<ColorKind>,
    alpha: Option<ColorArg>,
    background: Option<Background>,
}

impl ColorBuilder {
    /// Build as `kind` instead of autodetecting.
    pub fn kind(mut self, kind: ColorKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Alpha: integers and strings are percentages, floats are ratios.
    pub fn alpha(mut self, alpha: impl Into<ColorArg>) -> Self {
        self.alpha = Some(alpha.into());
        self
    }

    /// Background used when flattening. Always made opaque.
    pub fn background(mut self, background: impl Into<Background>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Build the color.
    ///
    /// Transparent colors ignore alpha and background.
    ///
    /// # Errors
    ///
    /// Any normalization error, [`ColorError::Autodetection`] when no
    /// notation matches, or [`ColorError::Unbuildable`] when an explicit
    /// kind cannot use the arguments.
    pub fn build(self) -> Result<Color> {
        let mut color = match self.kind {
            Some(kind) => build_kind(kind, &self.args)?,
            None => autodetect(&self.args)?,
        };
        if color.is_transparent() {
            return Ok(color);
        }

        if let Some(alpha) = &self.alpha {
            color.alpha = normalize_alpha(alpha)?;
        }
        if let Some(background) = self.background {
            color = color.with_background(background.resolve()?);
        }
        Ok(color)
    }
}

impl Color {
    /// Start building a color from positional arguments.
    pub fn builder<I, A>(args: I) -> ColorBuilder
    where
        I: IntoIterator<Item = A>,
        A: Into<ColorArg>,
    {
        ColorBuilder {
            args: args.into_iter().map(Into::into).collect(),
            kind: None,
            alpha: None,
            background: None,
        }
    }

    /// Autodetect a color from positional arguments.
    ///
    /// # Errors
    ///
    /// See [`ColorBuilder::build`].
    pub fn new<I, A>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<ColorArg>,
    {
        Self::builder(args).build()
    }

    /// The `transparent` keyword.
    #[must_use]
    pub const fn transparent() -> Self {
        Self::TRANSPARENT
    }

    /// A named color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Keyword`] for an unknown name.
    pub fn keyword(name: &str) -> Result<Self> {
        Self::builder([ColorArg::symbol(name)])
            .kind(ColorKind::Keyword)
            .build()
    }

    /// A color in hex notation, e.g. `#fff` or `ff8000`.
    ///
    /// The whole text must be the notation; surrounding whitespace is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::HexFormat`] for malformed notation.
    pub fn hex(text: &str) -> Result<Self> {
        Self::builder([text]).kind(ColorKind::Hex).build()
    }

    /// An RGB color. Channels may be bytes, ratios or percentage strings.
    ///
    /// # Errors
    ///
    /// Range errors naming the failing channel.
    pub fn rgb(
        r: impl Into<ColorArg>,
        g: impl Into<ColorArg>,
        b: impl Into<ColorArg>,
    ) -> Result<Self> {
        Self::builder([r.into(), g.into(), b.into()])
            .kind(ColorKind::Rgb)
            .build()
    }

    /// An HSL color. See [`normalize_hue`] for the accepted hue shapes;
    /// saturation and lightness go through [`normalize_for_hsl`].
    ///
    /// # Errors
    ///
    /// Range errors naming the failing channel.
    pub fn hsl(
        h: impl Into<ColorArg>,
        s: impl Into<ColorArg>,
        l: impl Into<ColorArg>,
    ) -> Result<Self> {
        Self::builder([h.into(), s.into(), l.into()])
            .kind(ColorKind::Hsl)
            .build()
    }
}

/// Explicit-kind construction.
fn build_kind(kind: ColorKind, args: &[ColorArg]) -> Result<Color> {
    let unbuildable = || ColorError::Unbuildable {
        kind,
        args: describe(args),
    };

    match (kind, args) {
        (ColorKind::Transparent, []) => Ok(Color::TRANSPARENT),
        (ColorKind::Transparent, _) => detect_transparent(args).ok_or_else(unbuildable)?,
        (ColorKind::Keyword, [arg]) => keyword_color(arg.as_str().ok_or_else(unbuildable)?),
        (ColorKind::Hex, [arg]) => hex_color(arg.as_str().ok_or_else(unbuildable)?),
        (ColorKind::Rgb, [r, g, b]) => rgb_color([r, g, b], args),
        (ColorKind::Hsl, [h, s, l]) => {
            let hue = normalize_hue(h)
                .map_err(|err| err.with_channel(Channel::Hue))?
                .ok_or_else(unbuildable)?;
            hsl_color(hue, [s, l], args)
        }
        _ => Err(unbuildable()),
    }
}

/// Probes in priority order.
const PROBES: [fn(&[ColorArg]) -> Option<Result<Color>>; 5] = [
    detect_transparent,
    detect_keyword,
    detect_hex,
    detect_rgb,
    detect_hsl,
];

/// Autodetection construction: the first probe that recognizes the
/// arguments wins.
fn autodetect(args: &[ColorArg]) -> Result<Color> {
    PROBES
        .iter()
        .find_map(|probe| probe(args))
        .unwrap_or_else(|| {
            Err(ColorError::Autodetection {
                args: describe(args),
            })
        })
}

fn detect_transparent(args: &[ColorArg]) -> Option<Result<Color>> {
    args.first()?
        .as_str()
        .filter(|text| text.trim().eq_ignore_ascii_case("transparent"))
        .map(|_| Ok(Color::TRANSPARENT))
}

/// A symbol is always a keyword; a plain string only when the table knows it.
fn detect_keyword(args: &[ColorArg]) -> Option<Result<Color>> {
    match args {
        [ColorArg::Symbol(name)] => Some(keyword_color(name)),
        [ColorArg::Text(name)] if lookup(name).is_some() => Some(keyword_color(name)),
        _ => None,
    }
}

fn detect_hex(args: &[ColorArg]) -> Option<Result<Color>> {
    match args {
        [ColorArg::Text(text)] if is_hex(text) => Some(hex_color(text)),
        _ => None,
    }
}

fn detect_rgb(args: &[ColorArg]) -> Option<Result<Color>> {
    let [r, g, b] = args else {
        return None;
    };
    matches!(normalize_for_rgb(r), Ok(Some(_))).then(|| rgb_color([r, g, b], args))
}

/// Degree strings, or bare numbers too large to be a byte.
fn detect_hsl(args: &[ColorArg]) -> Option<Result<Color>> {
    let [h, s, l] = args else {
        return None;
    };
    let hue = match h {
        ColorArg::Int(n) if *n as f64 > MAX_BYTE => wrap_degrees(*n as f64),
        ColorArg::Float(n) if n.is_finite() && *n > MAX_BYTE => wrap_degrees(*n),
        ColorArg::Text(_) => match normalize_degrees(h) {
            Ok(Some(hue)) if !h.as_str()?.trim().ends_with('%') => hue,
            _ => return None,
        },
        _ => return None,
    };
    Some(hsl_color(hue, [s, l], args))
}

fn keyword_color(name: &str) -> Result<Color> {
    Ok(Color::from_bytes_as(parse_keyword(name)?, ColorKind::Keyword))
}

fn hex_color(text: &str) -> Result<Color> {
    Ok(Color::from_bytes_as(parse_hex(text)?, ColorKind::Hex))
}

fn rgb_color(channels: [&ColorArg; 3], args: &[ColorArg]) -> Result<Color> {
    let mut rgb = [0.0; 3];
    for ((slot, arg), channel) in rgb
        .iter_mut()
        .zip(channels)
        .zip([Channel::Red, Channel::Green, Channel::Blue])
    {
        *slot = normalize_for_rgb(arg)
            .map_err(|err| err.with_channel(channel))?
            .ok_or_else(|| ColorError::Unbuildable {
                kind: ColorKind::Rgb,
                args: describe(args),
            })?;
    }
    Ok(Color::from_parts(rgb, 1.0, ColorKind::Rgb))
}

fn hsl_color(hue: f64, [s, l]: [&ColorArg; 2], args: &[ColorArg]) -> Result<Color> {
    let component = |arg: &ColorArg, channel: Channel| -> Result<f64> {
        normalize_for_hsl(arg)
            .map_err(|err| err.with_channel(channel))?
            .ok_or_else(|| ColorError::Unbuildable {
                kind: ColorKind::Hsl,
                args: describe(args),
            })
    };
    let hsl = Hsl::new(
        hue,
        component(s, Channel::Saturation)?,
        component(l, Channel::Lightness)?,
    );
    Ok(Color::from_parts(hsl_to_rgb(hsl), 1.0, ColorKind::Hsl))
}
