//! Terminal abstraction using crossterm

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute, queue,
    style::{
        Attribute, Color as TermColor, Print, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{self, ClearType},
};

use anytag::{Color, Result, Style};

/// Terminal wrapper for cross-platform terminal I/O
pub struct Terminal {
    /// Terminal width in columns
    cols: u16,
    /// Terminal height in rows
    rows: u16,
}

impl Terminal {
    /// Create a new terminal instance: raw mode, alternate screen, mouse capture
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let (cols, rows) = terminal::size()?;

        execute!(io::stdout(), terminal::EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self { cols, rows })
    }

    /// Get terminal width
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Get terminal height
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Clear the entire screen
    pub fn clear_screen(&mut self) -> Result<()> {
        queue!(io::stdout(), terminal::Clear(ClearType::All))?;
        Ok(())
    }

    /// Clear from cursor to end of line
    pub fn clear_to_eol(&mut self) -> Result<()> {
        queue!(io::stdout(), terminal::Clear(ClearType::UntilNewLine))?;
        Ok(())
    }

    /// Move cursor to position (0-indexed)
    pub fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        queue!(io::stdout(), cursor::MoveTo(col, row))?;
        Ok(())
    }

    /// Write a string at current cursor position
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        queue!(io::stdout(), Print(s))?;
        Ok(())
    }

    /// Flush output buffer to terminal
    pub fn flush(&mut self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    /// Read the next event, tracking resizes
    pub fn read_event(&mut self) -> Result<Event> {
        let event = event::read()?;
        if let Event::Resize(cols, rows) = event {
            self.cols = cols;
            self.rows = rows;
        }
        Ok(event)
    }

    /// Apply a tag style to subsequent output
    pub fn apply_style(&mut self, style: &Style) -> Result<()> {
        let mut out = io::stdout();
        if style.fg != Color::Default {
            queue!(out, SetForegroundColor(term_color(style.fg)))?;
        }
        if style.bg != Color::Default {
            queue!(out, SetBackgroundColor(term_color(style.bg)))?;
        }
        if style.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if style.underline {
            queue!(out, SetAttribute(Attribute::Underlined))?;
        }
        Ok(())
    }

    /// Set dim/faint mode (for help text)
    pub fn set_dim(&mut self, enabled: bool) -> Result<()> {
        if enabled {
            queue!(io::stdout(), SetAttribute(Attribute::Dim))?;
        } else {
            queue!(io::stdout(), SetAttribute(Attribute::NormalIntensity))?;
        }
        Ok(())
    }

    /// Set reverse video mode
    pub fn set_reverse(&mut self, enabled: bool) -> Result<()> {
        if enabled {
            queue!(io::stdout(), SetAttribute(Attribute::Reverse))?;
        } else {
            queue!(io::stdout(), SetAttribute(Attribute::NoReverse))?;
        }
        Ok(())
    }

    /// Reset all attributes
    pub fn reset_attributes(&mut self) -> Result<()> {
        queue!(io::stdout(), SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Map a tag color onto the terminal palette
fn term_color(color: Color) -> TermColor {
    match color {
        Color::Default => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::White => TermColor::Grey,
        Color::BrightBlack => TermColor::DarkGrey,
        Color::BrightRed => TermColor::Red,
        Color::BrightGreen => TermColor::Green,
        Color::BrightYellow => TermColor::Yellow,
        Color::BrightBlue => TermColor::Blue,
        Color::BrightMagenta => TermColor::Magenta,
        Color::BrightCyan => TermColor::Cyan,
        Color::BrightWhite => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
    }
}
