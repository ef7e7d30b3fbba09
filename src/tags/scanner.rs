//! Tag scanner
//!
//! Single left-to-right pass over a text snapshot. A tag starts at any
//! configured trigger character and extends through the longest run of
//! body characters (letters, digits, configured extras). Scanning resumes
//! exactly where the previous tag ended, so the character that closed a
//! tag is itself re-examined as a possible trigger:
//!
//! ```text
//! #foo@bar   -> [#foo] [@bar]
//! #a#b       -> [#a] [#b]
//! #          -> [#]
//! ```

use super::marker::Marker;
use super::range::TagRange;
use crate::config::TagConfig;

/// Find every tag in `text`
///
/// Ranges are byte offsets, sorted and non-overlapping. Never fails:
/// text without triggers simply yields nothing.
pub fn scan(text: &str, config: &TagConfig) -> Vec<TagRange> {
    let mut ranges = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let Some(ch) = rest.chars().next() else {
            break;
        };

        match config.marker_for(ch) {
            Some(marker) => {
                let end = body_end(text, pos + ch.len_utf8(), config);
                ranges.push(TagRange::new(pos, end, marker));
                pos = end;
            }
            None => pos += ch.len_utf8(),
        }
    }

    ranges
}

/// Find tags of a single family
pub fn scan_marker(text: &str, config: &TagConfig, marker: Marker) -> Vec<TagRange> {
    scan(text, config)
        .into_iter()
        .filter(|range| range.marker == marker)
        .collect()
}

/// Byte offset of the first non-body character at or after `from`,
/// or the text length if the body runs to the end
fn body_end(text: &str, from: usize, config: &TagConfig) -> usize {
    text[from..]
        .char_indices()
        .find(|&(_, c)| !config.is_tag_char(c))
        .map_or(text.len(), |(offset, _)| from + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str, config: &TagConfig) -> Vec<(usize, usize, &'static str)> {
        scan(text, config)
            .iter()
            .map(|r| (r.start, r.end, r.marker.name()))
            .collect()
    }

    #[test]
    fn test_empty_text() {
        assert!(scan("", &TagConfig::default()).is_empty());
    }

    #[test]
    fn test_no_tags() {
        assert!(scan("plain text, no tags here", &TagConfig::default()).is_empty());
    }

    #[test]
    fn test_simple_hash_tag() {
        let config = TagConfig::default();
        assert_eq!(spans("see #topic now", &config), vec![(4, 10, "hash")]);
    }

    #[test]
    fn test_tag_at_end_of_text() {
        let config = TagConfig::default();
        assert_eq!(spans("hello @world", &config), vec![(6, 12, "at")]);
    }

    #[test]
    fn test_single_char_tag() {
        let config = TagConfig::default();
        assert_eq!(spans("#", &config), vec![(0, 1, "hash")]);
        assert_eq!(spans("a # b", &config), vec![(2, 3, "hash")]);
    }

    #[test]
    fn test_adjacent_markers_split() {
        let config = TagConfig::default();
        assert_eq!(spans("#a@b", &config), vec![(0, 2, "hash"), (2, 4, "at")]);
        assert_eq!(spans("#a#b", &config), vec![(0, 2, "hash"), (2, 4, "hash")]);
        assert_eq!(
            spans("#ThisIsFirst#ThisIsSecondHashTag", &config),
            vec![(0, 12, "hash"), (12, 32, "hash")]
        );
    }

    #[test]
    fn test_double_trigger() {
        let config = TagConfig::default();
        assert_eq!(spans("##a", &config), vec![(0, 1, "hash"), (1, 3, "hash")]);
    }

    #[test]
    fn test_underscore_stops_without_additional_chars() {
        let config = TagConfig::default();
        let text = "#hashtag_tail";
        let ranges = scan(text, &config);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].tag(text), "#hashtag");
    }

    #[test]
    fn test_additional_chars_extend_body() {
        let config = TagConfig::default().with_additional_chars(['_', '$', '-']);
        let text = "#this_is_hashtag-with$dollar-sign, done";
        let ranges = scan(text, &config);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].body(text), "this_is_hashtag-with$dollar-sign");
    }

    #[test]
    fn test_trigger_as_additional_char_is_absorbed() {
        let config = TagConfig::default().with_additional_chars(['#']);
        assert_eq!(spans("#a#b", &config), vec![(0, 4, "hash")]);
    }

    #[test]
    fn test_custom_marker() {
        let config = TagConfig::default().with_marker(Marker::new('$'), Default::default());
        assert_eq!(spans("pay $usd #now", &config), vec![(4, 8, "custom"), (9, 13, "hash")]);
    }

    #[test]
    fn test_unicode_bodies() {
        let config = TagConfig::default();
        let text = "über #café und @naïve!";
        let ranges = scan(text, &config);
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].body(text), "café");
        assert_eq!(ranges[1].body(text), "naïve");
    }

    #[test]
    fn test_scan_marker_filters() {
        let config = TagConfig::default();
        let text = "#one @two #three";
        let hashes: Vec<_> = scan_marker(text, &config, Marker::HASH)
            .iter()
            .map(|r| r.body(text))
            .collect();
        assert_eq!(hashes, vec!["one", "three"]);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let config = TagConfig::default();
        let text = "#a @b #c@d e#f";
        assert_eq!(scan(text, &config), scan(text, &config));
    }
}
