//! Color values, codecs and color algebra for stylesheet generation.
//!
//! # Scope
//!
//! This crate implements:
//! - **Normalizers** for loosely typed channel input: bytes, ratios,
//!   percentage strings and degree strings
//!
//! - **Color construction** ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/))
//!   - Named colors ([§ 6.1](https://www.w3.org/TR/css-color-4/#named-colors)), all 147
//!   - Hex notation ([§ 5.2](https://www.w3.org/TR/css-color-4/#hex-notation))
//!   - `rgb()` and `hsl()` channels ([§ 7](https://www.w3.org/TR/css-color-4/#the-hsl-notation))
//!   - Notation autodetection from positional arguments
//!   - The `transparent` keyword, alpha and backgrounds
//!
//! - **Color algebra**
//!   - Mixing, layering (alpha compositing) and gradients
//!   - Lightness and saturation shifts
//!   - Hue rotation, complements, color wheels, warmer and cooler hues
//!
//! - **Rendering** to CSS text, including an opaque flattened fallback
//!
//! - **Parsing** CSS color notation via [`FromStr`](std::str::FromStr)
//!
//! # Example
//!
//! ```
//! use tincture_color::{color_args, Color, RenderMode};
//!
//! let brand = Color::new(color_args!["#336699"]).unwrap();
//! let hover = brand.lighten(15).unwrap();
//! assert_eq!(hover.render(Some(RenderMode::Hex)), "#538cc6");
//! assert_eq!(brand.compliment().render(Some(RenderMode::Hex)), "#996633");
//! ```

/// Heterogeneous construction arguments.
pub mod arg;
/// The color value type, construction, algebra and rendering.
pub mod color;
/// Error types.
pub mod error;
/// Hex notation codec per [§ 5.2](https://www.w3.org/TR/css-color-4/#hex-notation).
pub mod hex;
/// HSL codec per [§ 7](https://www.w3.org/TR/css-color-4/#the-hsl-notation).
pub mod hsl;
/// Named color table per [§ 6.1](https://www.w3.org/TR/css-color-4/#named-colors).
pub mod keyword;
/// Numeric normalizers.
pub mod normalize;

mod background;
mod parse;

// Re-exports for convenience
pub use arg::ColorArg;
pub use color::algebra::{
    COLDEST_HUE, DEFAULT_MIX_RATIO, DEFAULT_ROTATION_DEGREES, DEFAULT_SHIFT_PERCENT,
    DEFAULT_STEPS, WARMEST_HUE,
};
pub use color::build::{Background, ColorBuilder};
pub use color::render::RenderMode;
pub use color::{COMPARE_TOLERANCE, Color, ColorKind, compare};
pub use error::{Channel, ColorError, Result};
pub use hsl::Hsl;
