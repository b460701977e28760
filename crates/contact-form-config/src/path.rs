// crates/contact-form-config/src/path.rs
// ============================================================================
// Module: Field Paths
// Description: Locators for fields inside a config.json document.
// Purpose: Tell callers exactly where a validation finding applies.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`FieldPath`] is built top-down while the validator descends into the
//! document and renders as `questions[2].options[0].value`. The document root
//! renders as `$`.

use std::fmt;

use serde::Serialize;
use serde::Serializer;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object key.
    Key(String),
    /// Array index.
    Index(usize),
}

/// Dotted/bracketed locator of a field within a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    /// Segments from the document root downwards.
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Returns the path of the document root.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns a child path addressing `name` inside this object.
    #[must_use]
    pub fn key(&self, name: &str) -> Self {
        self.child(PathSegment::Key(name.to_string()))
    }

    /// Returns a child path addressing element `index` inside this array.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    /// Returns the segments from the root downwards.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns true when this path addresses the document root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Appends one segment to a copy of this path.
    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        Self {
            segments,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("$");
        }
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(name) if position == 0 => f.write_str(name)?,
                PathSegment::Key(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
