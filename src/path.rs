//! Value path representation for locating values in nested documents.
//!
//! This module provides [`ValuePath`] and [`PathSegment`] types for building
//! and representing paths to values in nested JSON-like documents.

use std::fmt::{self, Display};
use std::sync::Arc;

/// A segment of a value path.
///
/// Paths are built from segments that represent either key access or list indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A dictionary key access (e.g., `['id']`, `['email']`)
    Key(String),
    /// A list index access (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new key segment.
    pub fn key(name: impl Into<String>) -> Self {
        PathSegment::Key(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct Node {
    segment: PathSegment,
    prev: Option<Arc<Node>>,
}

/// A path from the root of a document to a nested value.
///
/// `ValuePath` represents locations like `_['users'][0]['email']` and provides
/// methods for building paths incrementally. The root document is rendered
/// as `_`.
///
/// Appending a segment shares the existing prefix instead of copying it, so
/// sibling paths built from one parent stay independent while reusing its
/// storage.
///
/// # Example
///
/// ```rust
/// use verdict::ValuePath;
///
/// let path = ValuePath::root()
///     .with_key("users")
///     .with_index(0)
///     .with_key("email");
///
/// assert_eq!(path.to_string(), "_['users'][0]['email']");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct ValuePath {
    len: usize,
    last: Option<Arc<Node>>,
}

impl ValuePath {
    /// Creates an empty path representing the whole document.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single key segment.
    pub fn from_key(name: impl Into<String>) -> Self {
        Self::root().with_key(name)
    }

    /// Creates a path from a single index segment.
    pub fn from_index(idx: usize) -> Self {
        Self::root().with_index(idx)
    }

    /// Returns a new path with a key segment appended.
    ///
    /// This method does not modify the original path; it returns a new one
    /// sharing the original as its prefix.
    pub fn with_key(&self, name: impl Into<String>) -> Self {
        self.append(PathSegment::Key(name.into()))
    }

    /// Returns a new path with an index segment appended.
    ///
    /// This method does not modify the original path; it returns a new one
    /// sharing the original as its prefix.
    pub fn with_index(&self, index: usize) -> Self {
        self.append(PathSegment::Index(index))
    }

    fn append(&self, segment: PathSegment) -> Self {
        Self {
            len: self.len + 1,
            last: Some(Arc::new(Node {
                segment,
                prev: self.last.clone(),
            })),
        }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.last.is_none()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Returns an iterator over the path segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        let mut segments = Vec::with_capacity(self.len);
        let mut cursor = self.last.as_deref();
        while let Some(node) = cursor {
            segments.push(&node.segment);
            cursor = node.prev.as_deref();
        }
        segments.reverse();
        segments.into_iter()
    }

    /// Returns the parent path (all segments except the last), or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        self.last.as_deref().map(|node| Self {
            len: self.len - 1,
            last: node.prev.clone(),
        })
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.last.as_deref().map(|node| &node.segment)
    }
}

impl Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_")?;
        for segment in self.segments() {
            match segment {
                PathSegment::Key(name) => write!(f, "['{}']", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValuePath({})", self)
    }
}
