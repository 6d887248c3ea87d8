//! Building blocks shared by `quill`: line endings, grapheme measuring,
//! formatting conventions and positional templates.

use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod format;
pub mod grapheme;
pub mod line_ending;
pub mod template;

pub use format::FormatContext;
pub use line_ending::{
  LineEnding,
  NATIVE_LINE_ENDING,
};

/// Small-string optimized owned text.
pub type Tendril = SmartString<LazyCompact>;
