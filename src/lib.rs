//! anytag - hash tag and at tag highlighting for text buffers
//!
//! Scans text for tags such as `#topic` or `@someone`, keeps them
//! annotated on a text widget as the text changes, and routes clicks on
//! them to per-marker callbacks.
//!
//! ```
//! use std::borrow::Cow;
//! use anytag::{Annotation, AnnotationSink, TagAnnotator, TagConfig, TextSource};
//!
//! struct Field(String);
//!
//! impl AnnotationSink for Field {
//!     fn clear_annotations(&mut self) {}
//!     fn apply_annotation(&mut self, _annotation: &Annotation) {}
//! }
//!
//! impl TextSource for Field {
//!     fn text(&self) -> Cow<'_, str> {
//!         Cow::Borrowed(&self.0)
//!     }
//! }
//!
//! let mut annotator = TagAnnotator::new(TagConfig::default().with_additional_chars(['_']));
//! annotator.attach(Field("#rust_lang and #rust_lang @ferris".into())).unwrap();
//! assert_eq!(annotator.hash_tags(), vec!["rust_lang"]);
//! assert_eq!(annotator.all_at_tags(true), vec!["@ferris"]);
//! ```

pub mod config;
pub mod error;
pub mod tags;

pub use config::TagConfig;
pub use error::{Result, TagError};
pub use tags::{
    scan, scan_marker, AnnotatedText, Annotation, AnnotationSink, Color, Marker, Style,
    TagAnnotator, TagClickListener, TagRange, TextSource,
};
