//! Path expressions — `a.b[2].c` style addresses into a JSON document.
//!
//! # Grammar
//!
//! ```text
//! path         := segment ('.' segment)*
//! segment      := identifier bracket_index?
//! bracket_index := '[' digits ']'
//! ```
//!
//! An identifier is any non-empty run of characters other than `.`, `[` and
//! `]`. A bare numeric segment such as the `0` in `a.0` is a property *name*;
//! element access on an array property needs the bracket suffix (`a[0]`).
//! At most one bracket group is allowed per segment: `grid[0][1]` is rejected
//! instead of being read as multi-dimensional indexing.

use crate::error::{PatchError, Result};
use std::fmt;
use std::str::FromStr;

/// One path component: a property name plus an optional array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub name: String,
    pub index: Option<usize>,
}

impl Segment {
    /// A plain property segment (`name`).
    pub fn key(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
        }
    }

    /// An indexed segment (`name[index]`).
    pub fn indexed(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index: Some(index),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{}]", self.name, index),
            None => f.write_str(&self.name),
        }
    }
}

/// A parsed, non-empty path.
///
/// Keeps the source text so errors can quote the path exactly as the caller
/// wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
    text: String,
    segments: Vec<Segment>,
}

impl PathExpr {
    /// Parse a path string. See the module docs for the grammar.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(invalid(text, None, "path must not be empty"));
        }

        let segments = text
            .split('.')
            .enumerate()
            .map(|(position, raw)| parse_segment(text, position, raw))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            text: text.to_string(),
            segments,
        })
    }

    /// The path text as supplied by the caller.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; parsing rejects empty paths.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment applied at mutation time.
    pub fn last(&self) -> &Segment {
        // Non-empty by construction.
        &self.segments[self.segments.len() - 1]
    }

    /// Position of the final segment.
    pub fn last_position(&self) -> usize {
        self.segments.len() - 1
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for PathExpr {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parse a path string into a [`PathExpr`].
///
/// # Examples
///
/// ```
/// use confpatch_core::{parse_path, Segment};
///
/// let path = parse_path("servers[1].port").unwrap();
/// assert_eq!(path.segments(), &[Segment::indexed("servers", 1), Segment::key("port")]);
/// ```
pub fn parse_path(path: &str) -> Result<PathExpr> {
    PathExpr::parse(path)
}

/// Parse one dot-separated piece: `name` or `name[digits]`.
fn parse_segment(path: &str, position: usize, raw: &str) -> Result<Segment> {
    let (name, bracket) = match raw.find('[') {
        Some(open) => (&raw[..open], Some(&raw[open + 1..])),
        None => (raw, None),
    };

    if name.is_empty() {
        return Err(invalid(path, Some(position), "empty segment name"));
    }
    if name.contains(']') {
        return Err(invalid(path, Some(position), "unbalanced ']'"));
    }

    let Some(bracket) = bracket else {
        return Ok(Segment::key(name));
    };

    let Some(close) = bracket.find(']') else {
        return Err(invalid(path, Some(position), "missing closing ']'"));
    };
    let digits = &bracket[..close];
    let rest = &bracket[close + 1..];

    if rest.starts_with('[') {
        return Err(invalid(
            path,
            Some(position),
            "multiple bracket groups in one segment are not supported",
        ));
    }
    if !rest.is_empty() {
        return Err(invalid(
            path,
            Some(position),
            format!("unexpected '{rest}' after ']'"),
        ));
    }
    if digits.is_empty() {
        return Err(invalid(path, Some(position), "empty array index"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(
            path,
            Some(position),
            format!("array index '{digits}' is not a non-negative integer"),
        ));
    }
    let index = digits.parse::<usize>().map_err(|_| {
        invalid(
            path,
            Some(position),
            format!("array index '{digits}' is too large"),
        )
    })?;

    Ok(Segment::indexed(name, index))
}

fn invalid(path: &str, segment: Option<usize>, reason: impl Into<String>) -> PatchError {
    PatchError::InvalidPath {
        path: path.to_string(),
        segment,
        reason: reason.into(),
    }
}

