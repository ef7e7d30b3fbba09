//! Display rendering for the demo

use anytag::{Annotation, Result};

use crate::field::TagField;
use crate::terminal::Terminal;

/// Screen row the text field is drawn on
pub const FIELD_ROW: u16 = 2;

const HELP: &str =
    "Enter/click: open tag  C-t: #tags  C-a: @tags  C-l: toggle clicks  Esc: quit";

/// Display state
pub struct Display {
    /// Whether a full redraw is needed
    needs_redraw: bool,
    /// Message to show on the bottom line
    message: Option<String>,
}

impl Display {
    pub fn new() -> Self {
        Self {
            needs_redraw: true,
            message: None,
        }
    }

    /// Mark that a full redraw is needed
    pub fn force_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Set a message to display
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Render the whole screen
    pub fn render(&mut self, terminal: &mut Terminal, field: &TagField, clickable: bool) -> Result<()> {
        let cols = terminal.cols() as usize;
        let rows = terminal.rows();

        if self.needs_redraw {
            terminal.clear_screen()?;
        }

        let title = format!(
            " anytag {} - tags are {}",
            env!("CARGO_PKG_VERSION"),
            if clickable { "clickable" } else { "not clickable" }
        );
        terminal.move_cursor(0, 0)?;
        terminal.set_reverse(true)?;
        terminal.write_str(&pad_to_width(&title, cols))?;
        terminal.set_reverse(false)?;

        terminal.move_cursor(FIELD_ROW, 0)?;
        render_field(terminal, field.as_str(), field.annotations(), cols)?;
        terminal.clear_to_eol()?;

        if rows > FIELD_ROW + 3 {
            terminal.move_cursor(rows - 2, 0)?;
            terminal.set_dim(true)?;
            terminal.write_str(&truncate_to_width(HELP, cols))?;
            terminal.set_dim(false)?;
            terminal.clear_to_eol()?;
        }

        terminal.move_cursor(rows.saturating_sub(1), 0)?;
        if let Some(ref msg) = self.message {
            terminal.write_str(&truncate_to_width(msg, cols))?;
        }
        terminal.clear_to_eol()?;

        let cursor_col = field.cursor_col().min(cols.saturating_sub(1)) as u16;
        terminal.move_cursor(FIELD_ROW, cursor_col)?;
        terminal.flush()?;

        self.needs_redraw = false;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

/// Render text, painting annotated ranges with their style
///
/// Clickable ranges are underlined.
fn render_field(
    terminal: &mut Terminal,
    text: &str,
    annotations: &[Annotation],
    max_cols: usize,
) -> Result<()> {
    let mut remaining = max_cols;
    for (segment, annotation) in segments(text, annotations) {
        if remaining == 0 {
            break;
        }
        let shown = truncate_to_width(segment, remaining);
        remaining -= unicode_width::UnicodeWidthStr::width(shown.as_str());

        match annotation {
            Some(annotation) => {
                let mut style = annotation.style;
                style.underline |= annotation.clickable;
                terminal.apply_style(&style)?;
                terminal.write_str(&shown)?;
                terminal.reset_attributes()?;
            }
            None => terminal.write_str(&shown)?,
        }
    }
    Ok(())
}

/// Split text into plain and annotated segments, in order
fn segments<'a>(text: &'a str, annotations: &'a [Annotation]) -> Vec<(&'a str, Option<&'a Annotation>)> {
    let mut result = Vec::new();
    let mut pos = 0;

    for annotation in annotations {
        let range = annotation.range;
        if range.start < pos || range.end > text.len() {
            continue;
        }
        if range.start > pos {
            result.push((&text[pos..range.start], None));
        }
        result.push((&text[range.start..range.end], Some(annotation)));
        pos = range.end;
    }

    if pos < text.len() {
        result.push((&text[pos..], None));
    }
    result
}

/// Truncate a string to fit within a display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}

/// Truncate or pad with spaces to exactly `width` columns
fn pad_to_width(s: &str, width: usize) -> String {
    let mut result = truncate_to_width(s, width);
    let used = unicode_width::UnicodeWidthStr::width(result.as_str());
    result.push_str(&" ".repeat(width - used));
    result
}
