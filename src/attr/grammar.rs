use winnow::ascii::Caseless;
use winnow::combinator::{alt, preceded, separated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::CapStyle;

// -- Colors -----------------------------------------------------------------

fn hex_digits<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_hexdigit()).parse_next(input)
}

/// `#RRGGBB` or `#AARRGGBB`. Six-digit colors are made fully opaque.
pub(super) fn color(input: &mut &str) -> ModalResult<u32> {
    preceded(
        '#',
        hex_digits
            .verify(|digits: &str| digits.len() == 6 || digits.len() == 8)
            .context(StrContext::Expected(StrContextValue::Description(
                "6 or 8 hex digits",
            ))),
    )
    .try_map(|digits: &str| {
        u32::from_str_radix(digits, 16).map(|rgb| {
            if digits.len() == 6 {
                0xFF00_0000 | rgb
            } else {
                rgb
            }
        })
    })
    .parse_next(input)
}

// -- Caps -------------------------------------------------------------------

pub(super) fn cap(input: &mut &str) -> ModalResult<CapStyle> {
    alt((
        Caseless("butt").value(CapStyle::Butt),
        Caseless("round").value(CapStyle::Round),
        Caseless("square").value(CapStyle::Square),
    ))
    .parse_next(input)
}

// -- Dependency lists -------------------------------------------------------

/// Comma-separated style names. Items are trimmed; empty items are dropped.
pub(super) fn depends(input: &mut &str) -> ModalResult<Vec<String>> {
    let items: Vec<&str> =
        separated(0.., take_while(0.., |c: char| c != ','), ',').parse_next(input)?;
    Ok(items
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect())
}
