//! Colored highlights: `={color}text=`
//!
//! The color name is lowercased. How it reaches the page depends on the
//! [`HighlightMode`]:
//!
//! - `DataAttribute`: `<span data-highlight-color="yellow">text</span>`; the
//!   client stylesheet decides the actual color
//! - `InlineStyle`: `<span style="background-color: #f5f55e;">text</span>`;
//!   known names map to the palette below, other names are used as the CSS
//!   value verbatim
//!
//! # Examples
//!
//! ```rust
//! use garden_core::render::{transform_highlights, HighlightMode};
//!
//! assert_eq!(
//!     transform_highlights("a ={Yellow}b= c", HighlightMode::DataAttribute),
//!     r#"a <span data-highlight-color="yellow">b</span> c"#
//! );
//! ```

use super::syntax::{tokenize, Segment};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub(crate) const CLOSE_TAG: &str = "</span>";

const PALETTE: &[(&str, &str)] = &[
    ("yellow", "#f5f55e"),
    ("red", "#ffcccc"),
    ("green", "#ccffcc"),
    ("blue", "#ccccff"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightMode {
    DataAttribute,
    InlineStyle,
}

impl FromStr for HighlightMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attribute" | "data-attribute" => Ok(HighlightMode::DataAttribute),
            "style" | "inline-style" => Ok(HighlightMode::InlineStyle),
            other => Err(format!(
                "unknown highlight mode '{}' (expected 'attribute' or 'style')",
                other
            )),
        }
    }
}

/// CSS background for a lowercased color name
pub fn css_color(name: &str) -> &str {
    PALETTE
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, hex)| *hex)
        .unwrap_or(name)
}

/// Opening `<span>` for a highlight
pub(crate) fn open_tag(color: &str, mode: HighlightMode) -> String {
    let color = color.to_lowercase();
    match mode {
        HighlightMode::DataAttribute => format!(r#"<span data-highlight-color="{}">"#, color),
        HighlightMode::InlineStyle => {
            format!(r#"<span style="background-color: {};">"#, css_color(&color))
        }
    }
}

/// Rewrite every `={color}text=` in `text`; everything else is untouched,
/// including link and embed syntax.
pub fn transform_highlights(text: &str, mode: HighlightMode) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in tokenize(text) {
        match segment {
            Segment::Highlight { color, payload, .. } => {
                out.push_str(&open_tag(color, mode));
                out.push_str(payload);
                out.push_str(CLOSE_TAG);
            }
            other => out.push_str(other.raw()),
        }
    }
    out
}
