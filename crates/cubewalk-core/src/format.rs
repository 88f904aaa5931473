//! Packed-token rendering and the matching decoder.

use crate::errors::{ErrorInfo, WalkError};
use crate::table::VertexId;
use crate::walk::Walk;

/// Formats a walk as a packed `0xIJKL` token.
///
/// Each letter is the decimal digit character of the vertex id concatenated
/// directly after the `0x` prefix. This is digit concatenation into a
/// pseudo-hex literal, not a hexadecimal encoding of a numeric value.
pub fn walk_token(walk: &Walk) -> String {
    let [a, b, c, d] = walk.vertices();
    format!("0x{}{}{}{}", a.as_raw(), b.as_raw(), c.as_raw(), d.as_raw())
}

/// Renders the walks as a single line of tokens joined by `", "`.
pub fn render_line(walks: &[Walk]) -> String {
    walks
        .iter()
        .map(walk_token)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decodes a `0xIJKL` token back into the walk it renders.
pub fn parse_token(token: &str) -> Result<Walk, WalkError> {
    let digits = token.strip_prefix("0x").ok_or_else(|| {
        WalkError::Token(
            ErrorInfo::new("missing-prefix", "walk tokens start with 0x")
                .with_context("token", token),
        )
    })?;
    if digits.chars().count() != 4 {
        return Err(WalkError::Token(
            ErrorInfo::new("token-length", "walk tokens carry exactly four digits")
                .with_context("token", token),
        ));
    }
    let mut vertices = [VertexId::from_raw(0); 4];
    for (slot, ch) in vertices.iter_mut().zip(digits.chars()) {
        let digit = ch.to_digit(10).filter(|digit| *digit < 8).ok_or_else(|| {
            WalkError::Token(
                ErrorInfo::new("digit-out-of-range", "walk digits name vertices 0 through 7")
                    .with_context("token", token)
                    .with_context("digit", ch.to_string()),
            )
        })?;
        *slot = VertexId::from_raw(digit as u8);
    }
    Ok(Walk::from_vertices(vertices))
}
