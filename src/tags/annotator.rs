//! Tag annotator
//!
//! Owns the tag ranges for exactly one text source. Every mutation
//! triggers a full rescan: old annotations are cleared, the new text is
//! scanned, and one annotation per range is pushed to the source's sink.
//! Ranges are bound to offsets in the current snapshot only.

use std::borrow::Cow;
use std::collections::HashSet;

use tracing::{debug, trace};

use super::listener::TagClickListener;
use super::marker::Marker;
use super::range::{Annotation, TagRange};
use super::scanner::scan;
use crate::config::TagConfig;
use crate::error::{Result, TagError};

/// Receiver of annotation requests (the renderer side of a text widget)
pub trait AnnotationSink {
    /// Remove every annotation previously applied
    fn clear_annotations(&mut self);

    /// Paint `annotation.range` with `annotation.style`. Clickable
    /// annotations should report activations back through
    /// `TagAnnotator::activate`.
    fn apply_annotation(&mut self, annotation: &Annotation);
}

/// A text widget an annotator can be attached to
pub trait TextSource: AnnotationSink {
    /// Full current content
    fn text(&self) -> Cow<'_, str>;
}

/// A text snapshot and the tag ranges found in it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedText {
    text: String,
    ranges: Vec<TagRange>,
}

impl AnnotatedText {
    /// Scan `text` and capture the result
    pub fn scan(text: &str, config: &TagConfig) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            text: text.to_string(),
            ranges: scan(text, config),
        }
    }

    /// The snapshot
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Ranges in left-to-right order
    pub fn ranges(&self) -> &[TagRange] {
        &self.ranges
    }

    /// Range containing a byte offset
    pub fn range_at(&self, offset: usize) -> Option<&TagRange> {
        // Ranges are sorted and disjoint
        let idx = self.ranges.partition_point(|r| r.end <= offset);
        self.ranges.get(idx).filter(|r| r.contains(offset))
    }

    /// Distinct tag strings of one family, in first-occurrence order
    pub fn distinct_tags(&self, marker: Marker, include_marker: bool) -> Vec<String> {
        let mut seen = HashSet::new();
        self.ranges
            .iter()
            .filter(|r| r.marker == marker)
            .map(|r| r.text(&self.text, include_marker))
            .filter(|tag| seen.insert(*tag))
            .map(str::to_string)
            .collect()
    }
}

/// Keeps one text source's tags scanned, annotated and clickable
pub struct TagAnnotator<S> {
    config: TagConfig,
    source: Option<S>,
    current: AnnotatedText,
    listener: Option<TagClickListener>,
}

impl<S: TextSource> TagAnnotator<S> {
    /// Create an unattached annotator
    pub fn new(config: TagConfig) -> Self {
        Self {
            config,
            source: None,
            current: AnnotatedText::default(),
            listener: None,
        }
    }

    /// Bind to a text source and annotate its current content
    ///
    /// An annotator serves a single source for its whole lifetime;
    /// a second call fails with `TagError::AlreadyAttached`.
    pub fn attach(&mut self, source: S) -> Result<()> {
        if self.source.is_some() {
            return Err(TagError::AlreadyAttached);
        }

        let text = source.text().into_owned();
        self.source = Some(source);
        debug!(len = text.len(), "attached text source");
        self.on_text_mutated(&text);
        Ok(())
    }

    /// Replace the annotated state after the source text changed
    ///
    /// Old annotations are always cleared; empty text is not scanned.
    pub fn on_text_mutated(&mut self, new_text: &str) {
        if let Some(source) = self.source.as_mut() {
            source.clear_annotations();
        }

        self.current = AnnotatedText::scan(new_text, &self.config);
        trace!(
            len = new_text.len(),
            ranges = self.current.ranges.len(),
            "rescanned text"
        );

        let Some(source) = self.source.as_mut() else {
            return;
        };
        let clickable = self.listener.is_some();
        for range in &self.current.ranges {
            let style = self.config.style_for(range.marker).unwrap_or_default();
            source.apply_annotation(&Annotation {
                range: *range,
                style,
                clickable,
            });
        }
    }

    /// Mutate the attached source, then rescan it
    ///
    /// Returns `None` without calling `f` when nothing is attached.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        let source = self.source.as_mut()?;
        let result = f(source);
        let text = source.text().into_owned();
        self.on_text_mutated(&text);
        Some(result)
    }

    /// Re-annotate the current text, e.g. after the listener changed
    pub fn rescan(&mut self) {
        let text = std::mem::take(&mut self.current.text);
        self.on_text_mutated(&text);
    }

    /// Report that the range containing `offset` was activated
    ///
    /// Returns true if a callback ran. Offsets outside every range and
    /// a missing listener are silently ignored.
    pub fn activate(&mut self, offset: usize) -> bool {
        let Some(range) = self.current.range_at(offset).copied() else {
            debug!(offset, "activation outside any tag");
            return false;
        };
        let Some(listener) = self.listener.as_mut() else {
            debug!(offset, "activation with no listener");
            return false;
        };

        let tag = range.body(&self.current.text);
        debug!(marker = %range.marker, tag, "tag activated");
        listener.dispatch(range.marker, tag)
    }

    /// Distinct tags of one family, with or without the trigger character
    pub fn query_tags(&self, marker: Marker, include_marker: bool) -> Vec<String> {
        self.current.distinct_tags(marker, include_marker)
    }

    /// Distinct `#` tags
    pub fn all_hash_tags(&self, include_marker: bool) -> Vec<String> {
        self.query_tags(Marker::HASH, include_marker)
    }

    /// Distinct `@` tags
    pub fn all_at_tags(&self, include_marker: bool) -> Vec<String> {
        self.query_tags(Marker::AT, include_marker)
    }

    /// Distinct `#` tags without the `#`
    pub fn hash_tags(&self) -> Vec<String> {
        self.all_hash_tags(false)
    }

    /// Distinct `@` tags without the `@`
    pub fn at_tags(&self) -> Vec<String> {
        self.all_at_tags(false)
    }

    /// Replace the click listener
    ///
    /// Clickability of annotations already applied is unchanged until
    /// the next rescan.
    pub fn set_click_listener(&mut self, listener: TagClickListener) {
        self.listener = Some(listener);
    }

    /// Remove the click listener
    pub fn clear_click_listener(&mut self) -> Option<TagClickListener> {
        self.listener.take()
    }

    /// Check if a click listener is registered
    pub fn has_click_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Current text snapshot
    pub fn text(&self) -> &str {
        self.current.text()
    }

    /// Current ranges
    pub fn ranges(&self) -> &[TagRange] {
        self.current.ranges()
    }

    /// Range containing a byte offset
    pub fn range_at(&self, offset: usize) -> Option<&TagRange> {
        self.current.range_at(offset)
    }

    /// The attached source
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Mutable access to the attached source without rescanning
    ///
    /// For state that is not text, such as a cursor. Text changes made
    /// here stay unannotated until `on_text_mutated` or `rescan`.
    pub fn source_mut(&mut self) -> Option<&mut S> {
        self.source.as_mut()
    }

    /// Check if a source is attached
    pub fn is_attached(&self) -> bool {
        self.source.is_some()
    }

    /// Scanner configuration
    pub fn config(&self) -> &TagConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{Color, Style};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingSource {
        text: String,
        applied: Vec<Annotation>,
        clears: usize,
    }

    impl RecordingSource {
        fn with_text(text: &str) -> Self {
            Self {
                text: text.to_string(),
                ..Default::default()
            }
        }
    }

    impl AnnotationSink for RecordingSource {
        fn clear_annotations(&mut self) {
            self.applied.clear();
            self.clears += 1;
        }

        fn apply_annotation(&mut self, annotation: &Annotation) {
            self.applied.push(*annotation);
        }
    }

    impl TextSource for RecordingSource {
        fn text(&self) -> Cow<'_, str> {
            Cow::Borrowed(&self.text)
        }
    }

    fn attached(text: &str) -> TagAnnotator<RecordingSource> {
        let mut annotator = TagAnnotator::new(TagConfig::default());
        annotator.attach(RecordingSource::with_text(text)).unwrap();
        annotator
    }

    #[test]
    fn test_attach_scans_initial_text() {
        let annotator = attached("see #topic now");
        let source = annotator.source().unwrap();
        assert_eq!(source.applied.len(), 1);
        assert_eq!(source.applied[0].range, TagRange::new(4, 10, Marker::HASH));
        assert_eq!(source.applied[0].style, Style::fg(Color::Blue));
        assert!(!source.applied[0].clickable);
    }

    #[test]
    fn test_double_attach_fails() {
        let mut annotator = attached("#a");
        let result = annotator.attach(RecordingSource::with_text("#b"));
        assert!(matches!(result, Err(TagError::AlreadyAttached)));
        assert_eq!(annotator.hash_tags(), vec!["a"]);
    }

    #[test]
    fn test_rescan_clears_stale_ranges() {
        let mut annotator = attached("");
        annotator.on_text_mutated("#a");
        assert_eq!(annotator.hash_tags(), vec!["a"]);

        annotator.on_text_mutated("b");
        assert!(annotator.hash_tags().is_empty());
        assert!(annotator.source().unwrap().applied.is_empty());
    }

    #[test]
    fn test_empty_text_still_clears() {
        let mut annotator = attached("#a @b");
        let clears = annotator.source().unwrap().clears;

        annotator.on_text_mutated("");
        let source = annotator.source().unwrap();
        assert_eq!(source.clears, clears + 1);
        assert!(source.applied.is_empty());
        assert!(annotator.ranges().is_empty());
    }

    #[test]
    fn test_edit_rescans_source() {
        let mut annotator = attached("hello");
        let len = annotator.edit(|source| {
            source.text.push_str(" #world");
            source.text.len()
        });
        assert_eq!(len, Some(12));
        assert_eq!(annotator.hash_tags(), vec!["world"]);
        assert_eq!(annotator.text(), "hello #world");
    }

    #[test]
    fn test_source_mut_does_not_rescan() {
        let mut annotator = attached("#a");
        let clears = annotator.source().unwrap().clears;

        annotator.source_mut().unwrap().text.push_str(" #b");
        let source = annotator.source().unwrap();
        assert_eq!(source.clears, clears);
        assert_eq!(source.applied.len(), 1);
        assert_eq!(annotator.hash_tags(), vec!["a"]);
    }

    #[test]
    fn test_edit_unattached_is_noop() {
        let mut annotator: TagAnnotator<RecordingSource> = TagAnnotator::new(TagConfig::default());
        assert_eq!(annotator.edit(|_| 1), None);
        assert!(!annotator.is_attached());
    }

    #[test]
    fn test_activate_dispatches_body() {
        let clicked = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&clicked);

        let mut annotator = attached("see #topic now");
        annotator.set_click_listener(
            TagClickListener::new().on_hash_tag_activated(move |tag| sink.borrow_mut().push(tag.to_string())),
        );

        assert!(annotator.activate(6));
        assert!(!annotator.activate(2));
        assert!(!annotator.activate(10));
        assert_eq!(*clicked.borrow(), vec!["topic"]);
    }

    #[test]
    fn test_activate_without_listener() {
        let mut annotator = attached("#topic");
        assert!(!annotator.activate(0));
    }

    #[test]
    fn test_listener_affects_next_rescan_only() {
        let mut annotator = attached("#a");
        annotator.set_click_listener(TagClickListener::new());
        assert!(!annotator.source().unwrap().applied[0].clickable);

        annotator.rescan();
        assert!(annotator.source().unwrap().applied[0].clickable);

        annotator.clear_click_listener();
        annotator.rescan();
        assert!(!annotator.source().unwrap().applied[0].clickable);
    }

    #[test]
    fn test_range_at() {
        let text = AnnotatedText::scan("#ab cd @ef", &TagConfig::default());
        assert_eq!(text.range_at(0).map(|r| r.marker), Some(Marker::HASH));
        assert_eq!(text.range_at(2).map(|r| r.marker), Some(Marker::HASH));
        assert!(text.range_at(3).is_none());
        assert!(text.range_at(5).is_none());
        assert_eq!(text.range_at(9).map(|r| r.marker), Some(Marker::AT));
        assert!(text.range_at(10).is_none());
    }

    #[test]
    fn test_distinct_tags() {
        let text = AnnotatedText::scan("#x #y #x @x", &TagConfig::default());
        assert_eq!(text.distinct_tags(Marker::HASH, false), vec!["x", "y"]);
        assert_eq!(text.distinct_tags(Marker::HASH, true), vec!["#x", "#y"]);
        assert_eq!(text.distinct_tags(Marker::AT, false), vec!["x"]);
    }
}
