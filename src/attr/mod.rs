//! Decoding of attribute values found in style descriptions.
//!
//! Parsers that feed a [`StyleBuilder`](crate::StyleBuilder) use these to turn
//! textual colors, cap names and dependency lists into the crate's types.

mod error;
mod grammar;

pub use error::AttrError;

use winnow::Parser;

use crate::CapStyle;

/// Parse a `#RRGGBB` or `#AARRGGBB` color into packed ARGB.
///
/// # Errors
///
/// Returns [`AttrError::Color`] if the input is not a hex color of either form.
pub fn parse_color(input: &str) -> Result<u32, AttrError> {
    grammar::color
        .parse(input.trim())
        .map_err(|e| AttrError::Color {
            input: input.to_owned(),
            message: e.inner().to_string(),
        })
}

/// Parse a cap style name, ignoring case.
///
/// # Errors
///
/// Returns [`AttrError::Cap`] for anything other than `butt`, `round` or
/// `square`.
pub fn parse_cap(input: &str) -> Result<CapStyle, AttrError> {
    grammar::cap
        .parse(input.trim())
        .map_err(|_| AttrError::Cap(input.to_owned()))
}

/// Split a comma-separated list of base style names.
#[must_use]
pub fn parse_depends(input: &str) -> Vec<String> {
    grammar::depends.parse(input).unwrap_or_default()
}
