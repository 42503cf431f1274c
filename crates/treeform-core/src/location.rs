//! Locations addressing a node relative to a tree root.

use std::fmt;

use compact_str::CompactString;

use crate::error::TreeError;
use crate::node::{NodeKind, SEPARATOR, validate_name};

/// A validated, root-relative location.
///
/// Built either from a slash separated string (`"a/b/"`) or from a sequence
/// of segments (`["a", "b/"]`). The trailing separator of the last segment
/// selects the target kind: [`NodeKind::Directory`] when present,
/// [`NodeKind::File`] otherwise. An empty location addresses the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    segments: Vec<CompactString>,
    kind: NodeKind,
}

impl Location {
    /// The location of the root itself.
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
            kind: NodeKind::Directory,
        }
    }

    /// Parse a slash separated location.
    ///
    /// Leading separators are ignored, so `"/a/b"` and `"a/b"` are the same
    /// location. Empty inner segments (`"a//b"`) are rejected.
    pub fn parse(location: &str) -> Result<Self, TreeError> {
        let body = location.trim_start_matches(SEPARATOR);
        if body.trim_end_matches(SEPARATOR).is_empty() {
            return Ok(Self::root());
        }

        let kind = if body.ends_with(SEPARATOR) {
            NodeKind::Directory
        } else {
            NodeKind::File
        };

        let segments = body
            .trim_end_matches(SEPARATOR)
            .split(SEPARATOR)
            .map(|segment| {
                validate_name(segment).map_err(|_| {
                    TreeError::invalid_name(location, format!("bad segment {segment:?}"))
                })?;
                Ok(CompactString::new(segment))
            })
            .collect::<Result<Vec<_>, TreeError>>()?;

        Ok(Self { segments, kind })
    }

    /// Build a location from individual segments.
    ///
    /// Every segment has its trailing separators stripped; only the last one
    /// decides the target kind.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kind = NodeKind::Directory;
        let mut names = Vec::new();

        for segment in segments {
            let segment = segment.as_ref();
            let stripped = segment.trim_end_matches(SEPARATOR);
            validate_name(stripped)?;
            kind = if stripped.len() == segment.len() {
                NodeKind::File
            } else {
                NodeKind::Directory
            };
            names.push(CompactString::new(stripped));
        }

        if names.is_empty() {
            return Ok(Self::root());
        }
        Ok(Self {
            segments: names,
            kind,
        })
    }

    /// Segment names, trailing separators stripped.
    pub fn segments(&self) -> &[CompactString] {
        &self.segments
    }

    /// Kind requested for the last segment.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Whether this location addresses the root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "{SEPARATOR}");
        }
        let joined = self
            .segments
            .iter()
            .map(CompactString::as_str)
            .collect::<Vec<_>>()
            .join("/");
        write!(f, "{joined}{}", self.kind.suffix())
    }
}

impl TryFrom<&str> for Location {
    type Error = TreeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&String> for Location {
    type Error = TreeError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Location {
    type Error = TreeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&[&str]> for Location {
    type Error = TreeError;

    fn try_from(value: &[&str]) -> Result<Self, Self::Error> {
        Self::from_segments(value)
    }
}

impl TryFrom<&[String]> for Location {
    type Error = TreeError;

    fn try_from(value: &[String]) -> Result<Self, Self::Error> {
        Self::from_segments(value)
    }
}

impl TryFrom<Vec<&str>> for Location {
    type Error = TreeError;

    fn try_from(value: Vec<&str>) -> Result<Self, Self::Error> {
        Self::from_segments(value)
    }
}

impl TryFrom<Vec<String>> for Location {
    type Error = TreeError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_segments(value)
    }
}

impl<const N: usize> TryFrom<[&str; N]> for Location {
    type Error = TreeError;

    fn try_from(value: [&str; N]) -> Result<Self, Self::Error> {
        Self::from_segments(value)
    }
}

impl TryFrom<&Location> for Location {
    type Error = TreeError;

    fn try_from(value: &Location) -> Result<Self, Self::Error> {
        Ok(value.clone())
    }
}
