//! Tag configuration
//!
//! Holds the marker set (trigger character → style) and the extra
//! characters that are valid inside a tag body. A config is immutable
//! once handed to a `TagAnnotator`.
//!
//! Can be loaded from ~/.anytag.toml (or %USERPROFILE%\.anytag.toml on Windows)
//!
//! Example:
//! ```text
//! # anytag configuration
//! hash-color = "blue"
//! at-color = "bright-green"
//! additional-chars = "_$"
//!
//! [markers]
//! "+" = "yellow"
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::error::{Result, TagError};
use crate::tags::{Color, Marker, Style};

/// Scanner and annotation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagConfig {
    /// Markers in registration order, each with its annotation style
    markers: Vec<(Marker, Style)>,
    /// Characters valid in a tag body besides letters and digits
    additional_chars: BTreeSet<char>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self::new(Style::fg(Color::Blue), Style::fg(Color::Green))
    }
}

impl TagConfig {
    /// Create a config with hash and at markers and letter/digit bodies only
    pub fn new(hash_style: Style, at_style: Style) -> Self {
        Self {
            markers: vec![(Marker::HASH, hash_style), (Marker::AT, at_style)],
            additional_chars: BTreeSet::new(),
        }
    }

    /// Builder: allow extra characters inside tag bodies
    ///
    /// With `['_', '$', '-']`, `#this_is-a$tag` is one tag.
    pub fn with_additional_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.additional_chars.extend(chars);
        self
    }

    /// Builder: add a marker, or restyle an existing one
    ///
    /// The trigger is not validated; see `Marker::new` for how letter and
    /// digit triggers scan.
    pub fn with_marker(mut self, marker: Marker, style: Style) -> Self {
        self.set_marker(marker, style);
        self
    }

    fn set_marker(&mut self, marker: Marker, style: Style) {
        match self.markers.iter_mut().find(|(m, _)| *m == marker) {
            Some(entry) => entry.1 = style,
            None => self.markers.push((marker, style)),
        }
    }

    /// Configured markers and their styles
    pub fn markers(&self) -> &[(Marker, Style)] {
        &self.markers
    }

    /// Extra body characters
    pub fn additional_chars(&self) -> &BTreeSet<char> {
        &self.additional_chars
    }

    /// Marker triggered by `c`, if any
    pub fn marker_for(&self, c: char) -> Option<Marker> {
        self.markers
            .iter()
            .map(|(m, _)| *m)
            .find(|m| m.trigger() == c)
    }

    /// Annotation style for a marker
    pub fn style_for(&self, marker: Marker) -> Option<Style> {
        self.markers
            .iter()
            .find(|(m, _)| *m == marker)
            .map(|(_, style)| *style)
    }

    /// Whether `c` may continue a tag body
    pub fn is_tag_char(&self, c: char) -> bool {
        c.is_alphanumeric() || self.additional_chars.contains(&c)
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".anytag.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".anytag.toml"))
        }
    }

    /// Load configuration from the default path
    ///
    /// A missing file yields the default config; a malformed one is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    ///
    /// Unknown keys are ignored.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Self::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> Result<()> {
        if let Some(value) = table.get("hash-color") {
            let color = Color::from_name(expect_str("hash-color", value)?)?;
            self.set_marker(Marker::HASH, Style::fg(color));
        }

        if let Some(value) = table.get("at-color") {
            let color = Color::from_name(expect_str("at-color", value)?)?;
            self.set_marker(Marker::AT, Style::fg(color));
        }

        if let Some(value) = table.get("additional-chars") {
            let chars = parse_chars(value)?;
            self.additional_chars.extend(chars);
        }

        if let Some(value) = table.get("markers") {
            let markers = value
                .as_table()
                .ok_or_else(|| TagError::Message("markers must be a table".to_string()))?;
            for (key, value) in markers {
                let marker = Marker::from_key(key)?;
                let color = Color::from_name(expect_str(key, value)?)?;
                self.set_marker(marker, Style::fg(color));
            }
        }

        Ok(())
    }
}

fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| TagError::Message(format!("{} must be a string", key)))
}

/// Accepts either `"_$"` or `["_", "$"]`
fn parse_chars(value: &Value) -> Result<Vec<char>> {
    match value {
        Value::String(s) => Ok(s.chars().collect()),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                let s = expect_str("additional-chars", item)?;
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(TagError::Message(format!(
                        "additional-chars entries must be single characters, got {:?}",
                        s
                    ))),
                }
            })
            .collect(),
        _ => Err(TagError::Message(
            "additional-chars must be a string or an array".to_string(),
        )),
    }
}
