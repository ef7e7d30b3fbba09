//! Tag markers
//!
//! A marker is the trigger character that opens a tag family. `#` and
//! `@` are predefined; any other character can be used through
//! `Marker::new` without touching the scanner.

use std::fmt;

use crate::error::{Result, TagError};

/// Trigger character identifying a tag family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Marker(char);

impl Marker {
    /// Hash tags (`#topic`)
    pub const HASH: Marker = Marker('#');
    /// At tags (`@someone`)
    pub const AT: Marker = Marker('@');

    /// Create a marker for a custom trigger character
    ///
    /// Unlike `from_key`, any character is accepted. A letter or digit
    /// trigger is also a body character, so it only opens a tag where it
    /// is not already continuing one: with trigger `x`, `#axb` is a single
    /// hash tag while `axb` holds the tag `xb`.
    pub const fn new(trigger: char) -> Self {
        Marker(trigger)
    }

    /// Parse a marker from a config key, which must be a single character
    /// that could never be part of a tag body
    pub fn from_key(key: &str) -> Result<Self> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_alphanumeric() && !c.is_whitespace() => Ok(Marker(c)),
            _ => Err(TagError::InvalidMarker(key.to_string())),
        }
    }

    /// The trigger character
    pub fn trigger(&self) -> char {
        self.0
    }

    /// Human-readable name for this marker
    pub fn name(&self) -> &'static str {
        match self.0 {
            '#' => "hash",
            '@' => "at",
            _ => "custom",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_markers() {
        assert_eq!(Marker::HASH.trigger(), '#');
        assert_eq!(Marker::AT.trigger(), '@');
        assert_eq!(Marker::HASH.name(), "hash");
        assert_eq!(Marker::new('$').name(), "custom");
        assert_eq!(Marker::new('#'), Marker::HASH);
    }

    #[test]
    fn test_alphanumeric_trigger_is_also_body() {
        use crate::config::TagConfig;
        use crate::tags::{scan, Style};

        let config = TagConfig::default().with_marker(Marker::new('x'), Style::default());
        let text = "#axb axb";
        let ranges = scan(text, &config);
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].tag(text), "#axb");
        assert_eq!(ranges[0].marker, Marker::HASH);
        assert_eq!(ranges[1].tag(text), "xb");
        assert_eq!(ranges[1].marker, Marker::new('x'));
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Marker::from_key("$").unwrap(), Marker::new('$'));
        assert!(Marker::from_key("").is_err());
        assert!(Marker::from_key("ab").is_err());
        assert!(Marker::from_key("a").is_err());
        assert!(Marker::from_key(" ").is_err());
    }
}
