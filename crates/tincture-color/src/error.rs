//! Error types for color construction and conversion.
//!
//! Every variant is an input-validation failure. Nothing is retried or
//! recovered internally: a failing normalizer aborts the whole construction
//! and no partially built [`Color`](crate::Color) is ever returned.

use strum_macros::Display;
use thiserror::Error;

use crate::color::ColorKind;

/// Result type alias using [`ColorError`].
pub type Result<T> = std::result::Result<T, ColorError>;

/// The channel a failing value was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    /// Red RGB channel.
    Red,
    /// Green RGB channel.
    Green,
    /// Blue RGB channel.
    Blue,
    /// HSL hue.
    Hue,
    /// HSL saturation.
    Saturation,
    /// HSL lightness.
    Lightness,
}

/// Errors raised while normalizing input or building colors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// An integer channel outside `0..=255`.
    #[error("Bytes must be between 0 and 255, got {value}{}", on_channel(.channel))]
    ByteRange {
        /// The offending value.
        value: i64,
        /// Channel the value was given for, when known.
        channel: Option<Channel>,
    },

    /// A percentage outside `0..=100`.
    #[error("Percentages must be between 0 and 100, got {value}{}", on_channel(.channel))]
    PercentageRange {
        /// The offending value.
        value: f64,
        /// Channel the value was given for, when known.
        channel: Option<Channel>,
    },

    /// A ratio outside `0.0..=1.0`.
    #[error("Ratios must be a decimal value between 0 and 1, got {value}{}", on_channel(.channel))]
    RatioRange {
        /// The offending value.
        value: f64,
        /// Channel the value was given for, when known.
        channel: Option<Channel>,
    },

    /// Text that is not a 3 or 6 digit hexadecimal color.
    #[error("Hexadecimal colors should be 3 or 6 digits and can be preceded by a # sign, got {input:?}")]
    HexFormat {
        /// The rejected text.
        input: String,
    },

    /// A keyword missing from the named color table.
    #[error("Color {name:?} not found as a keyword")]
    Keyword {
        /// The unrecognized name.
        name: String,
    },

    /// No autodetection rule matched the arguments.
    #[error("Unable to determine color type from {args}")]
    Autodetection {
        /// The arguments, as given.
        args: String,
    },

    /// Alpha outside `0.0..=1.0` after normalization.
    #[error("Alpha must be between 0.0 and 1.0, got {value}")]
    AlphaRange {
        /// The normalized alpha.
        value: f64,
    },

    /// An explicit color kind that cannot be built from the arguments.
    #[error("Unable to build a {kind} color with arguments {args}")]
    Unbuildable {
        /// The requested kind.
        kind: ColorKind,
        /// The arguments, as given.
        args: String,
    },

    /// Text that does not have the expected notation.
    #[error("Cannot interpret {input:?} as {expected}")]
    Unrecognized {
        /// The rejected text.
        input: String,
        /// What the text was expected to be.
        expected: &'static str,
    },

    /// A color that cannot be expressed as the requested kind.
    #[error("Color cannot be expressed as {kind}")]
    Conversion {
        /// The requested kind.
        kind: ColorKind,
    },
}

impl ColorError {
    /// Attach the channel a range error was raised for.
    ///
    /// Errors that do not carry a channel are returned unchanged.
    #[must_use]
    pub fn with_channel(self, channel: Channel) -> Self {
        match self {
            Self::ByteRange { value, .. } => Self::ByteRange {
                value,
                channel: Some(channel),
            },
            Self::PercentageRange { value, .. } => Self::PercentageRange {
                value,
                channel: Some(channel),
            },
            Self::RatioRange { value, .. } => Self::RatioRange {
                value,
                channel: Some(channel),
            },
            other => other,
        }
    }

    /// The channel this error was raised for, if any.
    #[must_use]
    pub const fn channel(&self) -> Option<Channel> {
        match self {
            Self::ByteRange { channel, .. }
            | Self::PercentageRange { channel, .. }
            | Self::RatioRange { channel, .. } => *channel,
            _ => None,
        }
    }
}

#[allow(clippy::ref_option)]
fn on_channel(channel: &Option<Channel>) -> String {
    channel.map_or_else(String::new, |c| format!(" for the {c} channel"))
}
