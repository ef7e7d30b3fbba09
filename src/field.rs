//! Single-line text field used by the demo
//!
//! Plays the part of the text widget: it owns the text and cursor, and
//! stores whatever annotations the tag annotator asks it to paint.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use anytag::{Annotation, AnnotationSink, TextSource};

/// Editable line of text with tag annotations
#[derive(Debug, Default)]
pub struct TagField {
    /// The text content
    text: String,
    /// Cursor byte offset (always on a char boundary)
    cursor: usize,
    /// Annotations applied by the annotator, in range order
    annotations: Vec<Annotation>,
}

impl TagField {
    /// Create a field with the cursor at the end
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            annotations: Vec::new(),
        }
    }

    /// Get the text content
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Cursor byte offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Applied annotations
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Annotation covering a byte offset
    pub fn annotation_at(&self, offset: usize) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.range.contains(offset))
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn delete_backward(&mut self) -> Option<char> {
        let ch = self.text[..self.cursor].chars().next_back()?;
        self.cursor -= ch.len_utf8();
        self.text.remove(self.cursor);
        Some(ch)
    }

    /// Delete the character under the cursor
    pub fn delete_forward(&mut self) -> Option<char> {
        if self.cursor < self.text.len() {
            Some(self.text.remove(self.cursor))
        } else {
            None
        }
    }

    /// Move cursor one character left
    pub fn move_left(&mut self) {
        if let Some(ch) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= ch.len_utf8();
        }
    }

    /// Move cursor one character right
    pub fn move_right(&mut self) {
        if let Some(ch) = self.text[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Move cursor to the start
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end
    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Display column of the cursor
    pub fn cursor_col(&self) -> usize {
        self.text[..self.cursor].width()
    }

    /// Byte offset of the character drawn at a display column
    /// Returns None if column is beyond the text
    pub fn col_to_byte(&self, col: usize) -> Option<usize> {
        let mut current_col = 0;
        for (byte_idx, ch) in self.text.char_indices() {
            current_col += ch.width().unwrap_or(1);
            if col < current_col {
                return Some(byte_idx);
            }
        }
        None
    }
}

impl AnnotationSink for TagField {
    fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    fn apply_annotation(&mut self, annotation: &Annotation) {
        self.annotations.push(*annotation);
    }
}

impl TextSource for TagField {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }
}
