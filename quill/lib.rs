//! Deferred, composable text.
//!
//! A [`Text`] describes output without producing it. Appending is O(1) and
//! never copies what came before; the chain is replayed into a sink only
//! when rendered.
//!
//! ```
//! use quill::{
//!   FormatContext,
//!   LineEnding,
//!   Text,
//! };
//!
//! let fields = ["id: u64", "name: String"];
//! let body = Text::lines_with(fields, |field, _| Text::of(field) + ',');
//! let item = Text::of("struct User ") + body.indent_scope();
//!
//! let format = FormatContext::default().with_line_ending(LineEnding::LF);
//! assert_eq!(
//!   item.render_with_context(&format).unwrap(),
//!   "struct User {\n  id: u64,\n  name: String,\n}"
//! );
//! ```

pub mod config;
pub mod error;
pub mod many;
pub mod render;
pub mod shape;
pub mod source;
pub mod step;
pub mod writer;

mod conditional;
mod convert;
mod count;
mod text;

pub use error::{
  RenderError,
  Result,
};
pub use many::{
  Entry,
  Items,
  ToText,
};
pub use quill_core::{
  FormatContext,
  LineEnding,
  NATIVE_LINE_ENDING,
  Tendril,
  template::TemplateError,
};
pub use render::Render;
pub use shape::{
  CompactOptions,
  Fields,
  IndentOptions,
  ScopeOptions,
  SplitOptions,
};
pub use source::{
  IterLines,
  LineSource,
};
pub use step::{
  FormatArgs,
  Step,
};
pub use text::Text;
pub use writer::Writer;
