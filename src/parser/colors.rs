//! Color list parsing for the command line colors argument.
//!
//! The argument is a single string of tokens separated by single spaces.
//! Tokens may omit the leading `#`. Repeated spaces are not collapsed, so
//! they produce empty tokens, which fail to parse like any other bad token.

use anyhow::{Context, Result};
use std::borrow::Cow;
use tracing::debug;

use crate::models::RgbColor;

/// Separator between color tokens.
pub const TOKEN_SEPARATOR: char = ' ';

/// Prepends `#` to a token that does not already start with one.
///
/// # Examples
///
/// ```
/// use swatches::parser::normalize_token;
///
/// assert_eq!(normalize_token("ff00ff"), "#ff00ff");
/// assert_eq!(normalize_token("#ff00ff"), "#ff00ff");
/// ```
#[must_use]
pub fn normalize_token(token: &str) -> Cow<'_, str> {
    if token.starts_with('#') {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(format!("#{token}"))
    }
}

/// Parses every token of a colors argument, in order.
///
/// Stops at the first token that is not a valid `#RRGGBB` color; no partial
/// list is returned.
///
/// # Errors
///
/// Returns an error naming the first token that fails to parse.
pub fn parse_color_list(colors: &str) -> Result<Vec<RgbColor>> {
    colors
        .split(TOKEN_SEPARATOR)
        .enumerate()
        .map(|(index, token)| -> Result<RgbColor> {
            let normalized = normalize_token(token);
            let color = RgbColor::from_hex(&normalized)
                .with_context(|| format!("Invalid color '{token}' at position {}", index + 1))?;
            debug!("Parsed color {} from token '{}'", color, token);
            Ok(color)
        })
        .collect()
}
