//! Shaping algorithms built on rendering and re-composition.
//!
//! Each operation returns a new [`Text`] whose step renders the input with
//! the writer's context and writes the reshaped result. The input itself is
//! never touched.

mod compact;
mod indent;
mod split;
mod surround;

pub use compact::{
  CompactOptions,
  ELLIPSIS,
};
pub use indent::{
  FOUR_SPACE_INDENT,
  IndentOptions,
  ScopeOptions,
  TAB_INDENT,
  TWO_SPACE_INDENT,
};
pub use split::{
  Fields,
  SplitOptions,
};

use crate::{
  Text,
  error::Result,
  writer::Writer,
};

/// Renders `text` with the same conventions as the surrounding render.
fn render_nested(text: &Text, writer: &Writer<'_>) -> Result<String> {
  text.render_with_context(writer.format())
}
