//! Tag scanning and annotation
//!
//! This module provides:
//! - Scanning text snapshots for `#tag`/`@tag` style ranges
//! - Keeping those ranges annotated on an attached text source
//! - Routing activations (clicks) back to per-marker callbacks

mod style;
mod marker;
mod range;
mod scanner;
mod listener;
mod annotator;

pub use style::{Color, Style};
pub use marker::Marker;
pub use range::{Annotation, TagRange};
pub use scanner::{scan, scan_marker};
pub use listener::TagClickListener;
pub use annotator::{AnnotatedText, AnnotationSink, TagAnnotator, TextSource};
