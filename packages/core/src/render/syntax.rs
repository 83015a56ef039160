//! Inline syntax scanner
//!
//! Splits note text into plain runs and the three custom constructs, in one
//! left-to-right pass:
//!
//! | Syntax            | Segment                  |
//! |-------------------|--------------------------|
//! | `![[target]]`     | [`Segment::Embed`]       |
//! | `[[target]]`      | [`Segment::Link`]        |
//! | `={color}text=`   | [`Segment::Highlight`]   |
//!
//! The leftmost construct wins. When several start at the same position the
//! order above decides, so `![[x]]` is never read as `!` followed by a link.
//! Targets are non-empty, stay on one line and end at the first `]]`.
//! Highlight payloads stay on one line and end at the first `=`.
//!
//! Anything that does not match (unclosed brackets, `[[]]`, a color with
//! digits) is plain text.

use regex::Regex;
use std::sync::LazyLock;

/// Combined pattern; alternative order is the precedence order
static INLINE_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"!\[\[(?P<embed>[^\n]+?)\]\]|\[\[(?P<link>[^\n]+?)\]\]|=\{(?P<color>[A-Za-z]+)\}(?P<payload>[^=\n]*)=",
    )
    .unwrap()
});

/// One piece of scanned text. `raw` is the exact source slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    Text(&'t str),
    Embed {
        target: &'t str,
        raw: &'t str,
    },
    Link {
        target: &'t str,
        raw: &'t str,
    },
    Highlight {
        color: &'t str,
        payload: &'t str,
        raw: &'t str,
    },
}

impl<'t> Segment<'t> {
    /// Source text this segment was scanned from
    pub fn raw(&self) -> &'t str {
        match self {
            Segment::Text(raw)
            | Segment::Embed { raw, .. }
            | Segment::Link { raw, .. }
            | Segment::Highlight { raw, .. } => raw,
        }
    }
}

/// Scan `text` into segments. Concatenating every `raw()` gives back `text`.
pub fn tokenize(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for caps in INLINE_SYNTAX.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        if whole.start() > last_end {
            segments.push(Segment::Text(&text[last_end..whole.start()]));
        }

        let raw = whole.as_str();
        let segment = if let Some(target) = caps.name("embed") {
            Segment::Embed {
                target: target.as_str(),
                raw,
            }
        } else if let Some(target) = caps.name("link") {
            Segment::Link {
                target: target.as_str(),
                raw,
            }
        } else {
            Segment::Highlight {
                color: caps.name("color").map_or("", |m| m.as_str()),
                payload: caps.name("payload").map_or("", |m| m.as_str()),
                raw,
            }
        };
        segments.push(segment);
        last_end = whole.end();
    }

    if last_end < text.len() {
        segments.push(Segment::Text(&text[last_end..]));
    }
    segments
}

/// Split a link target into `(lookup_key, display_text)` at the first `|`
pub fn split_target(target: &str) -> (&str, &str) {
    target.split_once('|').unwrap_or((target, target))
}
