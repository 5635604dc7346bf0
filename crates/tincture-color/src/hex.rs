//! Hexadecimal color notation.
//!
//! [CSS Color Level 4 § 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)

use crate::error::{ColorError, Result};

/// Whether `text` is 3 or 6 hex digits with an optional leading `#`.
#[must_use]
pub fn is_hex(text: &str) -> bool {
    let digits = text.strip_prefix('#').unwrap_or(text);
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse hex notation into its 24-bit value.
///
/// [§ 5.2](https://www.w3.org/TR/css-color-4/#hex-notation)
///
/// "The three-digit RGB notation (#RGB) is converted into six-digit form
/// (#RRGGBB) by replicating digits, not by adding zeros."
///
/// # Errors
///
/// Returns [`ColorError::HexFormat`] unless the text is 3 or 6 hex digits,
/// optionally preceded by `#`.
pub fn parse_hex_value(text: &str) -> Result<u32> {
    if !is_hex(text) {
        return Err(ColorError::HexFormat {
            input: text.to_string(),
        });
    }
    let digits = text.strip_prefix('#').unwrap_or(text);
    let expanded = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    u32::from_str_radix(&expanded, 16).map_err(|_| ColorError::HexFormat {
        input: text.to_string(),
    })
}

/// Parse hex notation into byte channels.
///
/// # Errors
///
/// Same as [`parse_hex_value`].
pub fn parse_hex(text: &str) -> Result<[u8; 3]> {
    let value = parse_hex_value(text)?;
    Ok([
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ])
}

/// Format byte channels as lowercase six-digit hex, e.g. `#ff8000`.
#[must_use]
pub fn format_hex([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}
