//! Key paths addressing nested fields of a state value.

use std::fmt;

/// Ordered sequence of field names locating a value inside a state.
///
/// A single name addresses a top-level field; longer paths walk nested
/// structures one segment at a time.
///
/// # Example
///
/// ```rust
/// use slicekit::core::KeyPath;
///
/// let top = KeyPath::from("visible");
/// assert_eq!(top.len(), 1);
///
/// let nested = KeyPath::from(["panel", "visible"]);
/// assert_eq!(nested.to_string(), "panel.visible");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Create a path from its segments.
    pub fn new<I, K>(segments: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Return a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl From<&str> for KeyPath {
    fn from(name: &str) -> Self {
        Self::new([name])
    }
}

impl From<String> for KeyPath {
    fn from(name: String) -> Self {
        Self::new([name])
    }
}

impl From<&String> for KeyPath {
    fn from(name: &String) -> Self {
        Self::new([name.as_str()])
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(names: [&str; N]) -> Self {
        Self::new(names)
    }
}

impl From<&[&str]> for KeyPath {
    fn from(names: &[&str]) -> Self {
        Self::new(names.iter().copied())
    }
}

impl From<Vec<&str>> for KeyPath {
    fn from(names: Vec<&str>) -> Self {
        Self::new(names)
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}
