//! Heterogeneous construction arguments.
//!
//! Colors are built from loosely typed values: byte integers, ratio floats,
//! percentage strings (`"50%"`), degree strings (`"120deg"`) and keyword
//! symbols. [`ColorArg`] carries one such value until a normalizer decides
//! what it means.

use std::fmt;

use serde::Serialize;

/// A single construction argument, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ColorArg {
    /// A bare integer: a byte for RGB channels, degrees for hues,
    /// a percentage for alpha and shift amounts.
    Int(i64),
    /// A bare float: a ratio in `0.0..=1.0`.
    Float(f64),
    /// A string: hex notation, a percentage, a degree value or a keyword name.
    Text(String),
    /// A keyword-shaped identifier, always looked up in the keyword table.
    Symbol(String),
}

impl ColorArg {
    /// Create a keyword symbol argument.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// The string payload of a `Text` or `Symbol` argument.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Symbol(text) => Some(text),
            Self::Int(_) | Self::Float(_) => None,
        }
    }
}

impl fmt::Display for ColorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Symbol(name) => write!(f, ":{name}"),
        }
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ColorArg {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for ColorArg {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for ColorArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ColorArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ColorArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ColorArg {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

/// Render an argument list for error messages, e.g. `[255, "50%", 0.5]`.
pub(crate) fn describe(args: &[ColorArg]) -> String {
    let parts: Vec<String> = args.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Build a `Vec<ColorArg>` from mixed literals.
///
/// ```
/// use tincture_color::{color_args, ColorArg};
///
/// let args = color_args![255, "50%", 0.5];
/// assert_eq!(args[0], ColorArg::Int(255));
/// assert_eq!(args[1], ColorArg::Text("50%".to_string()));
/// assert_eq!(args[2], ColorArg::Float(0.5));
/// ```
#[macro_export]
macro_rules! color_args {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::ColorArg::from($arg)),*]
    };
}
