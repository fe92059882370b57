//! Field paths locating a node inside a compose document

use std::fmt;

/// One step of a [`FieldPath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Mapping key
    Key(String),
    /// Sequence index
    Index(usize),
}

/// Dotted/indexed locator such as `services.web.local_configs[1].target`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Path rooted at `services.<name>`
    #[must_use]
    #[inline]
    pub fn service(name: &str) -> Self {
        Self::default().key("services").key(name)
    }

    /// Extend the path with a mapping key
    #[must_use]
    #[inline]
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.to_owned()));
        Self { segments }
    }

    /// Extend the path with a sequence index
    #[must_use]
    #[inline]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    #[must_use]
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Last mapping key of the path, if any
    #[must_use]
    #[inline]
    pub fn field(&self) -> Option<&str> {
        self.segments.iter().rev().find_map(|segment| match *segment {
            Segment::Key(ref key) => Some(key.as_str()),
            Segment::Index(_) => None,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            match *segment {
                Segment::Key(ref key) if position == 0 => write!(f, "{key}")?,
                Segment::Key(ref key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
