//! Hierarchical node identifiers
//!
//! A [`NodeId`] encodes the root-to-node path of a document-model element as
//! integer segments, e.g. `"0.1.0"`. Renderers are not required to agree on
//! a separator, so both `.` and `-` are accepted on read; `.` is written.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when formatting identifiers and paths
pub const CANONICAL_SEPARATOR: char = '.';

/// Separators accepted when parsing
pub const ACCEPTED_SEPARATORS: [char; 2] = ['.', '-'];

/// A document-model path: the child index at each level, root first.
pub type Path = Vec<usize>;

/// Path-encoded identifier stamped on element nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build an identifier from path segments using the given separator
    pub fn from_segments(segments: &[usize], separator: char) -> Self {
        Self(format_path(segments, separator))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Integer segments, or `None` if any segment is not a non-negative integer
    pub fn segments(&self) -> Option<Vec<usize>> {
        parse_path(&self.0)
    }

    pub fn last_segment(&self) -> Option<usize> {
        last_segment(&self.0)
    }

    /// True when `other` names the same position, whatever separator it uses
    pub fn matches(&self, other: &str) -> bool {
        if self.0 == other {
            return true;
        }
        match (self.segments(), parse_path(other)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Join path segments with `separator`
pub fn format_path(segments: &[usize], separator: char) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(&segment.to_string());
    }
    out
}

/// Parse `"0.1.0"`, `"0-1-0"` or any mix of the two into segments.
///
/// Empty input and empty segments (`"0..1"`) are rejected.
pub fn parse_path(raw: &str) -> Option<Path> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.split(|c| ACCEPTED_SEPARATORS.contains(&c))
        .map(|segment| segment.parse::<usize>().ok())
        .collect()
}

/// Trailing integer segment of a raw identifier
pub fn last_segment(raw: &str) -> Option<usize> {
    raw.trim()
        .rsplit(|c| ACCEPTED_SEPARATORS.contains(&c))
        .next()
        .and_then(|segment| segment.parse().ok())
}
