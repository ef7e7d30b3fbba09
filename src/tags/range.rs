//! Tag ranges and the annotations built from them

use super::marker::Marker;
use super::style::Style;

/// A discovered tag occurrence within a text snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRange {
    /// Byte offset of the trigger character (inclusive)
    pub start: usize,
    /// Byte offset where the tag ends (exclusive)
    pub end: usize,
    /// Tag family
    pub marker: Marker,
}

impl TagRange {
    /// Create a new range
    pub fn new(start: usize, end: usize, marker: Marker) -> Self {
        Self { start, end, marker }
    }

    /// Check if this range contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this range in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if range is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Tag text including the trigger character
    ///
    /// `text` must be the snapshot this range was scanned from.
    pub fn tag<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Tag text with the trigger character stripped
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start + self.marker.trigger().len_utf8()..self.end]
    }

    /// Tag text with or without the trigger character
    pub fn text<'a>(&self, text: &'a str, include_marker: bool) -> &'a str {
        if include_marker {
            self.tag(text)
        } else {
            self.body(text)
        }
    }
}

/// A request to the annotation sink to paint a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    pub range: TagRange,
    pub style: Style,
    /// Whether activations of this range should be reported back
    pub clickable: bool,
}
